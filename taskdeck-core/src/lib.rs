//! TASKDECK Core - Task Domain Model
//!
//! Domain types and the in-memory task store. The HTTP layer lives in
//! `taskdeck-api`; this crate knows nothing about transport concerns.

pub mod error;
pub mod store;
pub mod task;

pub use error::{FieldViolation, StoreError, StoreResult, ValidationError};
pub use store::TaskStore;
pub use task::{NewTask, Task, TaskPatch};

// ============================================================================
// IDENTITY TYPES
// ============================================================================

/// Task identifier: a positive integer allocated from a monotonic counter
/// starting at 1. Ids are never reused, even after deletion.
pub type TaskId = u64;

/// Timestamp type using UTC timezone.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

// ============================================================================
// VALIDATION BOUNDS
// ============================================================================

/// Maximum title length in characters
pub const TITLE_MAX_LEN: usize = 200;

/// Maximum description length in characters
pub const DESCRIPTION_MAX_LEN: usize = 1000;
