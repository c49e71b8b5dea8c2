//! API Request and Response Types
//!
//! This module defines the request and response types for the Taskdeck
//! API, kept separate from the domain types in `taskdeck-core` so wire
//! concerns (serde defaults, schema annotations) stay at the boundary.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use taskdeck_core::{NewTask, Task, TaskId, TaskPatch, Timestamp};

// ============================================================================
// TASK TYPES
// ============================================================================

/// Request to create a new task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreateTaskRequest {
    /// Title of the task (1-200 characters)
    pub title: String,
    /// Optional description (up to 1000 characters)
    pub description: Option<String>,
    /// Completion flag; new tasks default to incomplete
    #[serde(default)]
    pub completed: bool,
}

impl From<CreateTaskRequest> for NewTask {
    fn from(req: CreateTaskRequest) -> Self {
        NewTask {
            title: req.title,
            description: req.description,
            completed: req.completed,
        }
    }
}

/// Request to update an existing task.
///
/// Only fields supplied by the client are changed; `null` counts as not
/// supplied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UpdateTaskRequest {
    /// New title (if changing)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// New description (if changing)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New completion flag (if changing)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl From<UpdateTaskRequest> for TaskPatch {
    fn from(req: UpdateTaskRequest) -> Self {
        TaskPatch {
            title: req.title,
            description: req.description,
            completed: req.completed,
        }
    }
}

/// Task response with server-managed fields included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TaskResponse {
    #[schema(value_type = u64, minimum = 1)]
    pub id: TaskId,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
    #[schema(value_type = String, format = "date-time")]
    pub created_at: Timestamp,
}

impl From<Task> for TaskResponse {
    fn from(task: Task) -> Self {
        Self {
            id: task.id,
            title: task.title,
            description: task.description,
            completed: task.completed,
            created_at: task.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_completed_defaults_to_false() -> Result<(), serde_json::Error> {
        let req: CreateTaskRequest =
            serde_json::from_str(r#"{"title": "Walk dog", "description": "Evening walk"}"#)?;
        assert!(!req.completed);
        assert_eq!(req.description.as_deref(), Some("Evening walk"));
        Ok(())
    }

    #[test]
    fn test_update_request_fields_all_optional() -> Result<(), serde_json::Error> {
        let req: UpdateTaskRequest = serde_json::from_str(r#"{"completed": true}"#)?;
        assert!(req.title.is_none());
        assert!(req.description.is_none());
        assert_eq!(req.completed, Some(true));

        let patch: TaskPatch = req.into();
        assert_eq!(patch.completed, Some(true));
        Ok(())
    }

    #[test]
    fn test_task_response_preserves_all_fields() {
        let task = Task {
            id: 3,
            title: "Buy milk".to_string(),
            description: Some("2 litres".to_string()),
            completed: false,
            created_at: chrono::Utc::now(),
        };
        let response = TaskResponse::from(task.clone());
        assert_eq!(response.id, task.id);
        assert_eq!(response.title, task.title);
        assert_eq!(response.description, task.description);
        assert_eq!(response.completed, task.completed);
        assert_eq!(response.created_at, task.created_at);
    }

    #[test]
    fn test_task_response_null_description_serializes() -> Result<(), serde_json::Error> {
        let response = TaskResponse {
            id: 1,
            title: "t".to_string(),
            description: None,
            completed: false,
            created_at: chrono::Utc::now(),
        };
        let json = serde_json::to_string(&response)?;
        assert!(json.contains(r#""description":null"#));
        Ok(())
    }
}
