//! Property-Based Tests for the Task Store
//!
//! **Property 1: Id monotonicity**
//! For any sequence of creates and deletes, ids returned by create are
//! strictly increasing integers starting at 1, with no repeats even across
//! deletes.
//!
//! **Property 2: Round-trip**
//! A task returned by create is retrievable unchanged via get on its id.
//!
//! **Property 3: Partial-update preservation**
//! Updating a subset of fields leaves the untouched fields exactly as
//! before, and never alters id or created_at.

use proptest::prelude::*;
use taskdeck_core::{NewTask, StoreError, TaskPatch, TaskStore, DESCRIPTION_MAX_LEN, TITLE_MAX_LEN};

// ============================================================================
// PROPERTY TEST STRATEGIES
// ============================================================================

/// Strategy for generating valid task titles.
fn title_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        // Simple titles
        "Task [0-9]{1,5}",
        // Descriptive titles
        "[A-Z][a-z]{3,15} errand",
        // Edge case: single character
        Just("T".to_string()),
        // Edge case: maximum length
        Just("t".repeat(TITLE_MAX_LEN)),
    ]
}

/// Strategy for generating optional descriptions.
fn description_strategy() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        "[a-z ]{0,60}".prop_map(Some),
        // Edge case: empty string is distinct from absent
        Just(Some(String::new())),
        // Edge case: maximum length
        Just(Some("d".repeat(DESCRIPTION_MAX_LEN))),
    ]
}

fn new_task_strategy() -> impl Strategy<Value = NewTask> {
    (title_strategy(), description_strategy(), any::<bool>()).prop_map(
        |(title, description, completed)| NewTask {
            title,
            description,
            completed,
        },
    )
}

/// Strategy for generating patches where each field is independently
/// absent or present.
fn patch_strategy() -> impl Strategy<Value = TaskPatch> {
    (
        proptest::option::of(title_strategy()),
        proptest::option::of("[a-z ]{0,60}".prop_map(|s| s)),
        proptest::option::of(any::<bool>()),
    )
        .prop_map(|(title, description, completed)| TaskPatch {
            title,
            description,
            completed,
        })
}

// ============================================================================
// PROPERTIES
// ============================================================================

proptest! {
    #[test]
    fn prop_ids_strictly_increase_across_deletes(
        drafts in prop::collection::vec(new_task_strategy(), 1..20),
        delete_mask in prop::collection::vec(any::<bool>(), 1..20),
    ) {
        let mut store = TaskStore::new();
        let mut seen_ids = Vec::new();

        for (i, draft) in drafts.into_iter().enumerate() {
            let task = store.create(draft).map_err(|e| {
                TestCaseError::fail(format!("create failed: {}", e))
            })?;
            seen_ids.push(task.id);

            // Interleave deletes; deleted ids must still never come back.
            if delete_mask.get(i).copied().unwrap_or(false) {
                store.delete(task.id).map_err(|e| {
                    TestCaseError::fail(format!("delete failed: {}", e))
                })?;
            }
        }

        prop_assert_eq!(seen_ids[0], 1);
        for window in seen_ids.windows(2) {
            prop_assert!(window[1] == window[0] + 1);
        }
    }

    #[test]
    fn prop_create_get_round_trip(draft in new_task_strategy()) {
        let mut store = TaskStore::new();
        let created = store.create(draft).map_err(|e| {
            TestCaseError::fail(format!("create failed: {}", e))
        })?;
        let fetched = store.get(created.id).map_err(|e| {
            TestCaseError::fail(format!("get failed: {}", e))
        })?;
        prop_assert_eq!(fetched, created);
    }

    #[test]
    fn prop_partial_update_preserves_untouched_fields(
        draft in new_task_strategy(),
        patch in patch_strategy(),
    ) {
        let mut store = TaskStore::new();
        let created = store.create(draft).map_err(|e| {
            TestCaseError::fail(format!("create failed: {}", e))
        })?;

        let updated = store.update(created.id, patch.clone()).map_err(|e| {
            TestCaseError::fail(format!("update failed: {}", e))
        })?;

        prop_assert_eq!(updated.id, created.id);
        prop_assert_eq!(updated.created_at, created.created_at);

        match &patch.title {
            Some(title) => prop_assert_eq!(&updated.title, title),
            None => prop_assert_eq!(&updated.title, &created.title),
        }
        match &patch.description {
            Some(description) => prop_assert_eq!(&updated.description, &Some(description.clone())),
            None => prop_assert_eq!(&updated.description, &created.description),
        }
        match patch.completed {
            Some(completed) => prop_assert_eq!(updated.completed, completed),
            None => prop_assert_eq!(updated.completed, created.completed),
        }
    }

    #[test]
    fn prop_failed_update_leaves_store_unchanged(draft in new_task_strategy()) {
        let mut store = TaskStore::new();
        let created = store.create(draft).map_err(|e| {
            TestCaseError::fail(format!("create failed: {}", e))
        })?;

        let result = store.update(created.id, TaskPatch {
            title: Some(String::new()),
            description: None,
            completed: Some(!created.completed),
        });
        prop_assert!(matches!(result, Err(StoreError::Validation(_))));

        let stored = store.get(created.id).map_err(|e| {
            TestCaseError::fail(format!("get failed: {}", e))
        })?;
        prop_assert_eq!(stored, created);
    }

    #[test]
    fn prop_deleted_ids_stay_retired(
        drafts in prop::collection::vec(new_task_strategy(), 2..10),
    ) {
        let mut store = TaskStore::new();
        let mut ids = Vec::new();
        for draft in drafts {
            let task = store.create(draft).map_err(|e| {
                TestCaseError::fail(format!("create failed: {}", e))
            })?;
            ids.push(task.id);
        }

        for id in &ids {
            store.delete(*id).map_err(|e| {
                TestCaseError::fail(format!("delete failed: {}", e))
            })?;
        }
        prop_assert!(store.is_empty());

        // Fresh creates continue past every retired id.
        let next = store.create(NewTask {
            title: "after the purge".to_string(),
            description: None,
            completed: false,
        }).map_err(|e| TestCaseError::fail(format!("create failed: {}", e)))?;
        prop_assert!(ids.iter().all(|id| *id < next.id));
    }
}
