//! Shared Module
//!
//! This module contains the request and response types exchanged between the
//! backend and the client. Both sides validate requests with the same
//! `validator` derives, so client-side form checks report exactly what the
//! server would.
//!
//! # Overview
//!
//! The shared module is platform-agnostic and compiled in every feature
//! configuration. All types serialize to camelCase JSON.

/// Post, comment and listing types
pub mod post;

/// Category types
pub mod category;

/// Account and token types
pub mod user;

/// Error envelopes
pub mod error;

/// Custom field checks for the `validator` derives
pub mod validation;

/// Re-export commonly used types for convenience
pub use post::{Comment, ImageUpload, NewComment, NewPost, PopulatedPost, Post, PostPage, PostUpdate, StoredPost};
pub use category::{Category, CategorySummary, NewCategory};
pub use user::{AuthResponse, AuthorSummary, LoginRequest, RegisterRequest, UserProfile};
pub use error::{ErrorBody, FieldError, MessageBody, ValidationErrorBody};
