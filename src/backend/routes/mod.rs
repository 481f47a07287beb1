//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation, static files, layers
//! └── api_routes.rs   - Public and protected API endpoints
//! ```
//!
//! # Route Types
//!
//! ## Public
//!
//! - `GET /api/posts` - Paginated, searchable post listing
//! - `GET /api/posts/{id}` - Single populated post
//! - `GET /api/categories` - All categories, sorted by name
//! - `POST /api/categories` - Create a category
//! - `POST /api/auth/register` - Create an account
//! - `POST /api/auth/login` - Exchange credentials for a token
//!
//! ## Protected (bearer token)
//!
//! - `POST /api/posts` - Create a post
//! - `PUT /api/posts/{id}` - Partial update
//! - `DELETE /api/posts/{id}` - Delete a post and its comments
//! - `POST /api/posts/{id}/comments` - Append a comment
//! - `POST /api/posts/upload-image` - Multipart image upload
//! - `GET /api/auth/me` - Current account
//!
//! ## Static
//!
//! - `GET /uploads/{name}` - Uploaded images

/// Main router creation
pub mod router;

/// API endpoint configuration
pub mod api_routes;

pub use router::create_router;
