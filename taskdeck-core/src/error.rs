//! Error types for task store operations

use crate::TaskId;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A single violated field constraint.
///
/// Serializable so the HTTP layer can emit the violations verbatim as the
/// machine-readable detail of a 422 response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct FieldViolation {
    /// Name of the offending field
    pub field: String,
    /// What the field failed to satisfy
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Input failed one or more field constraints.
///
/// Always carries at least one violation. Update validation runs over the
/// fully merged task, so all offending fields are reported together.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("validation failed: {}", summarize(.violations))]
pub struct ValidationError {
    pub violations: Vec<FieldViolation>,
}

impl ValidationError {
    pub fn new(violations: Vec<FieldViolation>) -> Self {
        Self { violations }
    }
}

fn summarize(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Errors produced by the five task store operations.
///
/// Both variants are expected, client-facing outcomes. Nothing in the store
/// is treated as fatal to the process.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    /// No task with the given id exists in the collection.
    ///
    /// The display text doubles as the HTTP 404 detail message, so it is
    /// part of the observable contract.
    #[error("Task with id {id} not found")]
    NotFound { id: TaskId },

    /// Input failed field constraints; no changes were applied.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Result type alias for task store operations.
pub type StoreResult<T> = Result<T, StoreError>;

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display_names_the_id() {
        let err = StoreError::NotFound { id: 42 };
        assert_eq!(format!("{}", err), "Task with id 42 not found");
    }

    #[test]
    fn test_validation_error_display_joins_violations() {
        let err = ValidationError::new(vec![
            FieldViolation::new("title", "must not be empty"),
            FieldViolation::new("description", "too long"),
        ]);
        let msg = format!("{}", err);
        assert!(msg.contains("validation failed"));
        assert!(msg.contains("title: must not be empty"));
        assert!(msg.contains("description: too long"));
    }

    #[test]
    fn test_store_error_from_validation() {
        let validation = ValidationError::new(vec![FieldViolation::new("title", "too long")]);
        let err = StoreError::from(validation.clone());
        assert!(matches!(err, StoreError::Validation(v) if v == validation));
    }

    #[test]
    fn test_field_violation_serialization() -> Result<(), serde_json::Error> {
        let violation = FieldViolation::new("title", "must not be empty");
        let json = serde_json::to_string(&violation)?;
        assert!(json.contains("\"field\":\"title\""));
        assert!(json.contains("\"message\":\"must not be empty\""));

        let roundtrip: FieldViolation = serde_json::from_str(&json)?;
        assert_eq!(roundtrip, violation);
        Ok(())
    }
}
