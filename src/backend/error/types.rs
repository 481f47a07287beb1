/**
 * Backend Error Types
 *
 * This module defines the error type returned by every HTTP handler and
 * middleware in the backend.
 *
 * # Error Categories
 *
 * ## Validation Errors
 *
 * One or more request fields failed their checks. These are the only
 * errors rendered as `{"errors": [...]}`.
 *
 * ## Handler Errors
 *
 * Request-level failures with an explicit status:
 * - 400 for malformed bodies and missing uploads
 * - 401 for missing or invalid tokens
 * - 404 for absent posts
 * - 409 for duplicate accounts
 *
 * ## Internal Errors
 *
 * Database, filesystem, token signing and password hashing failures. These
 * are logged in full and answered with a generic 500.
 */

use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use thiserror::Error;

use crate::shared::FieldError;

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use quillpost::backend::error::BackendError;
/// use axum::http::StatusCode;
///
/// let err = BackendError::not_found("Post not found");
/// assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Field validation failure
    #[error("Validation failed for {} field(s)", .0.len())]
    Validation(Vec<FieldError>),

    /// Handler error with an explicit status code
    #[error("Handler error: {message}")]
    HandlerError {
        /// HTTP status code for this error
        status: StatusCode,
        /// Human-readable error message
        message: String,
    },

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Filesystem error (uploads)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed or oversized multipart body
    #[error("Multipart error: {0}")]
    Multipart(#[from] MultipartError),

    /// Token signing failure
    #[error("Token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    /// Password hashing failure
    #[error("Password hash error: {0}")]
    PasswordHash(#[from] bcrypt::BcryptError),
}

impl BackendError {
    /// Create a new handler error with a status code
    pub fn handler(status: StatusCode, message: impl Into<String>) -> Self {
        Self::HandlerError {
            status,
            message: message.into(),
        }
    }

    /// 400 with a single `{"error"}` message
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::handler(StatusCode::BAD_REQUEST, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::handler(StatusCode::UNAUTHORIZED, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::handler(StatusCode::NOT_FOUND, message)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::handler(StatusCode::CONFLICT, message)
    }

    /// Validation failure on a single field
    pub fn invalid_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation(vec![FieldError::new(field, message)])
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `Validation` - 400 Bad Request
    /// - `HandlerError` - Uses the status code from the error
    /// - `Multipart` - The status reported by the multipart parser
    /// - everything else - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::HandlerError { status, .. } => *status,
            Self::Multipart(err) => err.status(),
            Self::Database(_) | Self::Io(_) | Self::Token(_) | Self::PasswordHash(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Message exposed to the client.
    ///
    /// Internal errors are reduced to "Server error" so that driver and
    /// filesystem details never leave the process.
    pub fn message(&self) -> String {
        match self {
            Self::Validation(errors) => errors
                .first()
                .map(|e| e.message.clone())
                .unwrap_or_else(|| "Validation failed".to_string()),
            Self::HandlerError { message, .. } => message.clone(),
            Self::Multipart(err) => err.body_text(),
            Self::Database(_) | Self::Io(_) | Self::Token(_) | Self::PasswordHash(_) => {
                "Server error".to_string()
            }
        }
    }
}
