//! Error Types for Taskdeck API
//!
//! This module defines error handling for the API layer, including:
//! - ApiError struct for structured error responses
//! - ErrorCode enum for categorizing errors
//! - IntoResponse implementation for Axum HTTP responses
//!
//! All errors are serialized as a JSON `{"detail": ...}` body with the
//! appropriate HTTP status code. The 404 detail text is part of the
//! observable contract; the 422 detail lists the offending fields.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::fmt;

use taskdeck_core::{FieldViolation, StoreError, TaskId};

// ============================================================================
// ERROR CODE ENUM
// ============================================================================

/// Error codes for API responses.
///
/// Each error code maps to a specific HTTP status code and represents
/// a category of error that can occur during API operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(utoipa::ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Request input failed field constraints (422)
    ValidationFailed,

    /// Requested task does not exist (404)
    TaskNotFound,

    /// Internal server error (500)
    InternalError,
}

impl ErrorCode {
    /// Get the HTTP status code for this error code.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ErrorCode::ValidationFailed => StatusCode::UNPROCESSABLE_ENTITY,
            ErrorCode::TaskNotFound => StatusCode::NOT_FOUND,
            ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

// ============================================================================
// ERROR BODY
// ============================================================================

/// Wire shape of every error response: `{"detail": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[derive(utoipa::ToSchema)]
pub struct ErrorBody {
    pub detail: ErrorDetail,
}

/// The `detail` payload: a human-readable message for not-found errors, or
/// a machine-readable list of field violations for validation errors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[derive(utoipa::ToSchema)]
#[serde(untagged)]
pub enum ErrorDetail {
    Message(String),
    Violations(Vec<FieldViolation>),
}

// ============================================================================
// API ERROR STRUCT
// ============================================================================

/// Structured error for API operations.
///
/// Returned by route handlers; translated into an HTTP status plus a
/// `{"detail": ...}` JSON body by the IntoResponse implementation.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    /// Error code categorizing the error
    pub code: ErrorCode,

    /// Detail payload surfaced to the client
    pub detail: ErrorDetail,
}

impl ApiError {
    /// Create a new API error with the given code and message detail.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            detail: ErrorDetail::Message(message.into()),
        }
    }

    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        self.code.status_code()
    }

    // ========================================================================
    // Convenience constructors
    // ========================================================================

    /// Create a TaskNotFound error. The message text matches the store's
    /// NotFound display and is matched on by clients.
    pub fn task_not_found(id: TaskId) -> Self {
        Self::new(
            ErrorCode::TaskNotFound,
            format!("Task with id {} not found", id),
        )
    }

    /// Create a ValidationFailed error carrying per-field detail.
    pub fn validation_failed(violations: Vec<FieldViolation>) -> Self {
        Self {
            code: ErrorCode::ValidationFailed,
            detail: ErrorDetail::Violations(violations),
        }
    }

    /// Create an InternalError.
    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.detail {
            ErrorDetail::Message(message) => write!(f, "{}: {}", self.code, message),
            ErrorDetail::Violations(violations) => {
                let joined = violations
                    .iter()
                    .map(|v| v.to_string())
                    .collect::<Vec<_>>()
                    .join("; ");
                write!(f, "{}: {}", self.code, joined)
            }
        }
    }
}

impl std::error::Error for ApiError {}

// ============================================================================
// AXUM INTEGRATION
// ============================================================================

/// Implement IntoResponse for ApiError to enable automatic error handling
/// in Axum:
/// ```ignore
/// async fn handler() -> Result<Json<TaskResponse>, ApiError> {
///     Err(ApiError::task_not_found(999))
/// }
/// ```
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorBody {
            detail: self.detail,
        });
        (status, body).into_response()
    }
}

// ============================================================================
// CONVERSIONS FROM STORE ERRORS
// ============================================================================

/// Translate store outcomes into HTTP-shaped errors. This is the sole place
/// store errors become status codes.
impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { id } => ApiError::task_not_found(id),
            StoreError::Validation(validation) => {
                ApiError::validation_failed(validation.violations)
            }
        }
    }
}

// ============================================================================
// RESULT TYPE ALIAS
// ============================================================================

/// Result type alias for API operations.
pub type ApiResult<T> = Result<T, ApiError>;
