//! # Error Types
//!
//! Structured error types for beam_core. Each variant carries enough context
//! for a caller to present a validation message or act on the failure
//! programmatically.
//!
//! ## Example
//!
//! ```rust
//! use beam_core::errors::{CalcError, CalcResult};
//!
//! fn validate_span(span_m: f64) -> CalcResult<()> {
//!     if span_m <= 0.0 {
//!         return Err(CalcError::InvalidInput {
//!             field: "primary_span".to_string(),
//!             value: span_m.to_string(),
//!             reason: "Span must be positive".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for beam_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for analysis operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// The requested support condition has no registered analyzer
    #[error("Invalid condition '{condition}': expected one of {expected}")]
    InvalidCondition { condition: String, expected: String },

    /// An input value is invalid (out of range, not finite, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A required field is missing
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an InvalidCondition error listing every registered key
    pub fn invalid_condition(condition: impl Into<String>) -> Self {
        let expected = crate::calculations::SupportCondition::ALL
            .iter()
            .map(|c| format!("'{}'", c.key()))
            .collect::<Vec<_>>()
            .join(", ");
        CalcError::InvalidCondition {
            condition: condition.into(),
            expected,
        }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        CalcError::MissingField {
            field: field.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(
        operation: impl Into<String>,
        path: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Check if this error is a user-facing validation problem
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            CalcError::InvalidCondition { .. }
                | CalcError::InvalidInput { .. }
                | CalcError::MissingField { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidCondition { .. } => "INVALID_CONDITION",
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::MissingField { .. } => "MISSING_FIELD",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::SerializationError {
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_input("primary_span", "-5.0", "Span must be positive");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"InvalidInput\""));
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_invalid_condition_lists_registered_keys() {
        let error = CalcError::invalid_condition("three-span");
        let message = error.to_string();
        assert!(message.contains("three-span"));
        assert!(message.contains("'simply-supported'"));
        assert!(message.contains("'two-span-unequal'"));
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::missing_field("EI").error_code(), "MISSING_FIELD");
        assert_eq!(CalcError::invalid_condition("").error_code(), "INVALID_CONDITION");
        assert!(CalcError::invalid_condition("").is_validation_error());
        assert!(!CalcError::file_error("read", "a.json", "missing").is_validation_error());
    }
}
