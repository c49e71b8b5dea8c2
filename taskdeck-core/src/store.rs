//! In-memory task store
//!
//! Owns the mapping from id to task plus the id counter, and exposes the
//! five operations of the system. The store is a plain owned value with no
//! interior locking; callers that share it across threads wrap it in their
//! own mutual-exclusion discipline.

use std::collections::BTreeMap;

use chrono::Utc;

use crate::error::{StoreError, StoreResult};
use crate::task::{NewTask, Task, TaskPatch};
use crate::TaskId;

/// The in-memory task collection and its id-assignment counter.
///
/// Ids are allocated post-increment starting at 1 and never rewound, so a
/// deleted id stays permanently retired.
#[derive(Debug, Clone)]
pub struct TaskStore {
    tasks: BTreeMap<TaskId, Task>,
    next_id: TaskId,
}

impl TaskStore {
    /// Create an empty store with the counter at 1.
    pub fn new() -> Self {
        Self {
            tasks: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// All tasks currently stored, in ascending-id order. Infallible.
    pub fn list(&self) -> Vec<Task> {
        self.tasks.values().cloned().collect()
    }

    /// Validate the draft, allocate the next id, stamp `created_at` with
    /// the current UTC time, and store the new task.
    pub fn create(&mut self, new_task: NewTask) -> StoreResult<Task> {
        new_task.validate()?;

        let id = self.allocate_id();
        let task = new_task.into_task(id, Utc::now());
        self.tasks.insert(id, task.clone());
        Ok(task)
    }

    /// Fetch the task with the given id.
    pub fn get(&self, id: TaskId) -> StoreResult<Task> {
        self.tasks
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound { id })
    }

    /// Merge supplied patch fields onto the stored task and re-validate the
    /// full merged result under the same rules as creation.
    ///
    /// All-or-nothing: a validation failure leaves the stored task
    /// untouched. `id` and `created_at` are never altered.
    pub fn update(&mut self, id: TaskId, patch: TaskPatch) -> StoreResult<Task> {
        let existing = self.tasks.get(&id).ok_or(StoreError::NotFound { id })?;

        let merged = existing.merged_with(&patch);
        merged.validate()?;

        let updated = merged.into_task(id, existing.created_at);
        self.tasks.insert(id, updated.clone());
        Ok(updated)
    }

    /// Remove the task with the given id. The counter never rewinds, so the
    /// id is not reassigned.
    pub fn delete(&mut self, id: TaskId) -> StoreResult<()> {
        self.tasks
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound { id })
    }

    /// Number of tasks currently stored.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the store holds no tasks.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    fn allocate_id(&mut self) -> TaskId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// TESTS
// =============================================================================
