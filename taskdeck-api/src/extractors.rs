//! Custom request extractors.
//!
//! Provides a `Json<T>` wrapper whose rejection is translated into the same
//! `{"detail": ...}` error body as every other failure, instead of Axum's
//! plain-text default. Malformed or mistyped request bodies therefore
//! surface as a structured 422.

use axum::extract::rejection::JsonRejection;
use axum::extract::FromRequest;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::error::ApiError;
use taskdeck_core::FieldViolation;

/// JSON body extractor with structured rejections.
///
/// # Example
///
/// ```rust,ignore
/// async fn create_task(
///     Json(req): Json<CreateTaskRequest>,
/// ) -> ApiResult<impl IntoResponse> {
///     // a bad body never reaches here; it already became a 422
/// }
/// ```
#[derive(Debug, Clone, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct Json<T>(pub T);

impl<T: Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> Response {
        axum::Json(self.0).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::validation_failed(vec![FieldViolation::new("body", rejection.body_text())])
    }
}
