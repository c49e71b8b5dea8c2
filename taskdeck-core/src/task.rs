//! Task entity and its write-side values

use crate::error::{FieldViolation, ValidationError};
use crate::{TaskId, Timestamp, DESCRIPTION_MAX_LEN, TITLE_MAX_LEN};
use serde::{Deserialize, Serialize};

/// Task - the sole entity of the system.
///
/// `id` and `created_at` are server-managed: assigned once by the store at
/// creation and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Task {
    #[cfg_attr(feature = "openapi", schema(value_type = u64, minimum = 1))]
    pub id: TaskId,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = "date-time"))]
    pub created_at: Timestamp,
}

impl Task {
    /// Merge supplied patch fields onto this task, producing the creation
    /// draft that update re-validates. Fields absent from the patch keep
    /// their current value; `id` and `created_at` are not part of the draft
    /// and can never change.
    pub fn merged_with(&self, patch: &TaskPatch) -> NewTask {
        NewTask {
            title: patch.title.clone().unwrap_or_else(|| self.title.clone()),
            description: patch
                .description
                .clone()
                .or_else(|| self.description.clone()),
            completed: patch.completed.unwrap_or(self.completed),
        }
    }
}

/// Draft for creating a new task.
///
/// `completed` defaults to `false`: new tasks start incomplete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct NewTask {
    pub title: String,
    pub description: Option<String>,
    #[serde(default)]
    pub completed: bool,
}

impl NewTask {
    /// Validate the draft against the field constraints, reporting every
    /// violated field at once.
    ///
    /// Lengths are counted in characters, not bytes.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut violations = Vec::new();

        if self.title.is_empty() {
            violations.push(FieldViolation::new("title", "must not be empty"));
        } else if self.title.chars().count() > TITLE_MAX_LEN {
            violations.push(FieldViolation::new(
                "title",
                format!("must be at most {} characters", TITLE_MAX_LEN),
            ));
        }

        if let Some(description) = &self.description {
            if description.chars().count() > DESCRIPTION_MAX_LEN {
                violations.push(FieldViolation::new(
                    "description",
                    format!("must be at most {} characters", DESCRIPTION_MAX_LEN),
                ));
            }
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::new(violations))
        }
    }

    /// Promote a validated draft into a stored task.
    pub(crate) fn into_task(self, id: TaskId, created_at: Timestamp) -> Task {
        Task {
            id,
            title: self.title,
            description: self.description,
            completed: self.completed,
            created_at,
        }
    }
}

/// Partial update for an existing task.
///
/// Each field is tri-state in intent: absent means "leave unchanged",
/// present means "replace". JSON `null` deserializes to `None` and is
/// therefore treated the same as absent, so a description can be
/// overwritten but never reset to null through an update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct TaskPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl TaskPatch {
    /// Check whether any field is supplied. An empty patch is a valid no-op.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.completed.is_none()
    }
}

// =============================================================================
// TESTS
// =============================================================================
