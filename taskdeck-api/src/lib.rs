//! TASKDECK API - REST API Layer
//!
//! This crate provides the HTTP surface for the Taskdeck task service.
//! It exposes REST endpoints (Axum) over the in-memory task store from
//! `taskdeck-core`, translating store outcomes into HTTP status codes and
//! JSON bodies at the boundary.

pub mod config;
pub mod error;
pub mod extractors;
pub mod openapi;
pub mod routes;
pub mod state;
pub mod telemetry;
pub mod types;

// Re-export commonly used types
pub use config::ApiConfig;
pub use error::{ApiError, ApiResult, ErrorBody, ErrorCode, ErrorDetail};
pub use openapi::ApiDoc;
pub use routes::create_api_router;
pub use state::{shared_store, SharedTaskStore};
pub use telemetry::{init_telemetry, TelemetryConfig};
pub use types::{CreateTaskRequest, TaskResponse, UpdateTaskRequest};
