//! Shared application state for Axum routers.
//!
//! The task store is an explicitly owned value injected into route state,
//! never a module-level singleton, so tests construct an isolated store per
//! case and a future multi-instance deployment can own several.

use std::sync::{Arc, RwLock};

use taskdeck_core::TaskStore;

/// The store behind the mutual-exclusion discipline required by the
/// concurrency model: one lock guards each of the five operations, so no
/// request observes a partially applied mutation.
pub type SharedTaskStore = Arc<RwLock<TaskStore>>;

/// Create a fresh, empty shared store (collection empty, counter at 1).
pub fn shared_store() -> SharedTaskStore {
    Arc::new(RwLock::new(TaskStore::new()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_store_starts_empty() {
        let store = shared_store();
        let guard = store.read().expect("fresh lock cannot be poisoned");
        assert!(guard.is_empty());
    }

    #[test]
    fn test_shared_stores_are_independent() {
        let a = shared_store();
        let b = shared_store();

        a.write()
            .expect("fresh lock cannot be poisoned")
            .create(taskdeck_core::NewTask {
                title: "only in a".to_string(),
                description: None,
                completed: false,
            })
            .expect("valid draft");

        assert!(b.read().expect("fresh lock cannot be poisoned").is_empty());
    }
}
