//! Backend Error Module
//!
//! This module defines the error type used by handlers and middleware and its
//! conversion into HTTP responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - IntoResponse implementation
//! ```
//!
//! # Error Types
//!
//! - `Validation` - Field-level failures, rendered as `{"errors": [...]}`
//! - `HandlerError` - Request failures with an explicit status
//! - `Database`, `Io`, `Multipart`, `Token`, `PasswordHash` - Wrapped
//!   library errors
//!
//! # Example
//!
//! ```rust,no_run
//! use quillpost::backend::error::BackendError;
//! use axum::Json;
//!
//! async fn handler() -> Result<Json<()>, BackendError> {
//!     Err(BackendError::not_found("Post not found"))
//! }
//! ```

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

pub use types::BackendError;
