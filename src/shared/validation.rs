//! Field checks used by the `validator` derives on request types.
//!
//! `validator` has no "non-blank" rule and its `length` rule accepts
//! whitespace, so required text fields go through [`required`]. Each public
//! function carries its own message because the message is part of the API
//! contract.

use std::borrow::Cow;
use uuid::Uuid;
use validator::ValidationError;

fn failure(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

/// Fails when `value` is empty after trimming.
pub fn required(value: &str, message: &'static str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(failure("required", message));
    }
    Ok(())
}

pub fn title_required(value: &str) -> Result<(), ValidationError> {
    required(value, "Title is required")
}

pub fn content_required(value: &str) -> Result<(), ValidationError> {
    required(value, "Content is required")
}

pub fn name_required(value: &str) -> Result<(), ValidationError> {
    required(value, "Name is required")
}

pub fn password_required(value: &str) -> Result<(), ValidationError> {
    required(value, "Password is required")
}

/// The category reference must be a well-formed id.
pub fn valid_category(value: &str) -> Result<(), ValidationError> {
    Uuid::parse_str(value.trim())
        .map(|_| ())
        .map_err(|_| failure("invalid_id", "Valid category is required"))
}
