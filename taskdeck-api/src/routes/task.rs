//! Task REST API Routes
//!
//! This module implements Axum route handlers for the five task store
//! operations. Handlers take the shared store through injected state and
//! hold its lock for exactly one operation, so every request sees either
//! none or all of another request's mutation.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use std::sync::{Arc, RwLockReadGuard, RwLockWriteGuard};

use taskdeck_core::{TaskId, TaskStore};

use crate::{
    error::{ApiError, ApiResult, ErrorBody},
    extractors::Json,
    state::SharedTaskStore,
    types::{CreateTaskRequest, TaskResponse, UpdateTaskRequest},
};

// ============================================================================
// SHARED STATE
// ============================================================================

/// Shared application state for task routes.
#[derive(Clone)]
pub struct TaskState {
    pub store: SharedTaskStore,
}

impl TaskState {
    pub fn new(store: SharedTaskStore) -> Self {
        Self { store }
    }

    fn read(&self) -> ApiResult<RwLockReadGuard<'_, TaskStore>> {
        self.store
            .read()
            .map_err(|_| ApiError::internal_error("task store lock poisoned"))
    }

    fn write(&self) -> ApiResult<RwLockWriteGuard<'_, TaskStore>> {
        self.store
            .write()
            .map_err(|_| ApiError::internal_error("task store lock poisoned"))
    }
}

// ============================================================================
// ROUTE HANDLERS
// ============================================================================

/// GET /tasks - List all tasks
#[utoipa::path(
    get,
    path = "/tasks",
    tag = "Tasks",
    responses(
        (status = 200, description = "All stored tasks", body = Vec<TaskResponse>),
    )
)]
pub async fn list_tasks(State(state): State<Arc<TaskState>>) -> ApiResult<impl IntoResponse> {
    let store = state.read()?;
    let tasks: Vec<TaskResponse> = store.list().into_iter().map(TaskResponse::from).collect();
    Ok(Json(tasks))
}

/// POST /tasks - Create a new task
#[utoipa::path(
    post,
    path = "/tasks",
    tag = "Tasks",
    request_body = CreateTaskRequest,
    responses(
        (status = 201, description = "Task created successfully", body = TaskResponse),
        (status = 422, description = "Validation failed", body = ErrorBody),
    )
)]
pub async fn create_task(
    State(state): State<Arc<TaskState>>,
    Json(req): Json<CreateTaskRequest>,
) -> ApiResult<impl IntoResponse> {
    let mut store = state.write()?;
    let task = store.create(req.into())?;

    tracing::debug!(task_id = task.id, "Task created");
    Ok((StatusCode::CREATED, Json(TaskResponse::from(task))))
}

/// GET /tasks/{id} - Get a specific task
#[utoipa::path(
    get,
    path = "/tasks/{id}",
    tag = "Tasks",
    params(
        ("id" = u64, Path, description = "Task ID")
    ),
    responses(
        (status = 200, description = "Task details", body = TaskResponse),
        (status = 404, description = "Task not found", body = ErrorBody),
    )
)]
pub async fn get_task(
    State(state): State<Arc<TaskState>>,
    Path(id): Path<TaskId>,
) -> ApiResult<impl IntoResponse> {
    let store = state.read()?;
    let task = store.get(id)?;
    Ok(Json(TaskResponse::from(task)))
}

/// PUT /tasks/{id} - Update a task
///
/// Partial update: only fields supplied in the request are changed, and the
/// full merged result is re-validated before anything is applied.
#[utoipa::path(
    put,
    path = "/tasks/{id}",
    tag = "Tasks",
    params(
        ("id" = u64, Path, description = "Task ID")
    ),
    request_body = UpdateTaskRequest,
    responses(
        (status = 200, description = "Task updated successfully", body = TaskResponse),
        (status = 404, description = "Task not found", body = ErrorBody),
        (status = 422, description = "Validation failed", body = ErrorBody),
    )
)]
pub async fn update_task(
    State(state): State<Arc<TaskState>>,
    Path(id): Path<TaskId>,
    Json(req): Json<UpdateTaskRequest>,
) -> ApiResult<impl IntoResponse> {
    let mut store = state.write()?;
    let task = store.update(id, req.into())?;

    tracing::debug!(task_id = task.id, "Task updated");
    Ok(Json(TaskResponse::from(task)))
}

/// DELETE /tasks/{id} - Delete a task
#[utoipa::path(
    delete,
    path = "/tasks/{id}",
    tag = "Tasks",
    params(
        ("id" = u64, Path, description = "Task ID")
    ),
    responses(
        (status = 204, description = "Task deleted successfully"),
        (status = 404, description = "Task not found", body = ErrorBody),
    )
)]
pub async fn delete_task(
    State(state): State<Arc<TaskState>>,
    Path(id): Path<TaskId>,
) -> ApiResult<StatusCode> {
    let mut store = state.write()?;
    store.delete(id)?;

    tracing::debug!(task_id = id, "Task deleted");
    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// ROUTER SETUP
// ============================================================================

/// Create the task routes router.
pub fn create_router(store: SharedTaskStore) -> axum::Router {
    let state = Arc::new(TaskState::new(store));

    axum::Router::new()
        .route("/", axum::routing::get(list_tasks))
        .route("/", axum::routing::post(create_task))
        .route("/:id", axum::routing::get(get_task))
        .route("/:id", axum::routing::put(update_task))
        .route("/:id", axum::routing::delete(delete_task))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::shared_store;

    #[test]
    fn test_task_state_guards_are_independent_per_store() -> ApiResult<()> {
        let state = TaskState::new(shared_store());
        assert!(state.read()?.is_empty());

        state.write()?.create(taskdeck_core::NewTask {
            title: "locked in".to_string(),
            description: None,
            completed: false,
        })?;
        assert_eq!(state.read()?.len(), 1);

        let other = TaskState::new(shared_store());
        assert!(other.read()?.is_empty());
        Ok(())
    }

    #[test]
    fn test_create_router_builds() {
        let _router = create_router(shared_store());
    }
}
