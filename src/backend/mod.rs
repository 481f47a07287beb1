//! Backend Module
//!
//! This module contains all server-side code for Quillpost: an Axum HTTP
//! server exposing the blog REST API over a SQLite database.
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── server/      - Configuration, state, initialization
//! ├── routes/      - Router assembly
//! ├── middleware/  - Bearer token authentication
//! ├── error/       - BackendError and its HTTP conversion
//! ├── extract.rs   - ValidatedJson and id parsing
//! ├── auth/        - Accounts and tokens
//! ├── posts/       - Posts, comments, uploads
//! └── categories/  - Categories
//! ```
//!
//! # Request Flow
//!
//! route → (auth middleware) → extractor validation → handler → sqlx →
//! JSON response, with every failure rendered by `BackendError`.

/// Server configuration and initialization
pub mod server;

/// HTTP routes
pub mod routes;

/// HTTP middleware
pub mod middleware;

/// Error types
pub mod error;

/// Request extractors
pub mod extract;

/// Authentication and accounts
pub mod auth;

/// Posts, comments and uploads
pub mod posts;

/// Categories
pub mod categories;
