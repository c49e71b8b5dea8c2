//! OpenAPI Specification for Taskdeck API
//!
//! This module defines the OpenAPI document for the Taskdeck REST API.
//! It uses utoipa to generate the specification from Rust types and
//! route annotations.

use utoipa::OpenApi;

use crate::error::{ErrorBody, ErrorCode, ErrorDetail};
use crate::routes::{health, task};
use crate::types::{CreateTaskRequest, TaskResponse, UpdateTaskRequest};

use taskdeck_core::FieldViolation;

/// OpenAPI document for the Taskdeck API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Taskdeck API",
        version = "0.1.0",
        description = "A small task management API over an in-memory store",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:8000", description = "Local Development")
    ),
    tags(
        (name = "Tasks", description = "Task CRUD operations"),
        (name = "Health", description = "Liveness endpoints")
    ),
    paths(
        // === Task Routes ===
        task::list_tasks,
        task::create_task,
        task::get_task,
        task::update_task,
        task::delete_task,

        // === Health Routes ===
        health::ping,
        health::liveness,
    ),
    components(
        schemas(
            // === Error Types ===
            ErrorBody, ErrorDetail, ErrorCode, FieldViolation,

            // === Task Types ===
            CreateTaskRequest, UpdateTaskRequest, TaskResponse,

            // === Health Types ===
            health::HealthResponse, health::HealthStatus,
        )
    )
)]
pub struct ApiDoc;

impl ApiDoc {
    /// Generate OpenAPI spec as JSON string.
    pub fn to_json() -> Result<String, serde_json::Error> {
        let openapi = Self::openapi();
        serde_json::to_string_pretty(&openapi)
    }

    /// Generate OpenAPI spec as YAML string.
    pub fn to_yaml() -> Result<String, String> {
        let openapi = Self::openapi();
        serde_yaml::to_string(&openapi).map_err(|e| e.to_string())
    }
}
