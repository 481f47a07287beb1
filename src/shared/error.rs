//! Shared Error Types
//!
//! Error envelopes exchanged between the server and its clients. Every failed
//! request carries exactly one of two bodies:
//!
//! - `{"error": "<message>"}` for single errors (auth, not found, server faults)
//! - `{"errors": [{"field": "...", "message": "..."}]}` for field validation
//!
//! # Usage
//!
//! ```rust
//! use quillpost::shared::error::FieldError;
//!
//! let error = FieldError::new("title", "Title is required");
//! assert_eq!(error.field, "title");
//! ```
use serde::{Deserialize, Serialize};
use validator::ValidationErrors;

/// A single failed field check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Name of the offending field
    pub field: String,
    /// Human-readable error message
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// `{"error": "..."}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// `{"errors": [...]}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrorBody {
    pub errors: Vec<FieldError>,
}

/// `{"message": "..."}`, returned by operations with nothing else to report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageBody {
    pub message: String,
}

/// Flatten `validator` output into a list of field errors.
///
/// The list is sorted by field name so responses are stable regardless of
/// the hash map order `validator` hands back. Errors without a message fall
/// back to their code.
pub fn collect_field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut collected: Vec<FieldError> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, field_errors)| {
            let field = field.to_string();
            field_errors.iter().map(move |error| {
                let message = error
                    .message
                    .as_ref()
                    .map(|message| message.to_string())
                    .unwrap_or_else(|| error.code.to_string());
                FieldError::new(field.clone(), message)
            })
        })
        .collect();

    collected.sort_by(|a, b| a.field.cmp(&b.field));
    collected
}
