//! Authentication Module
//!
//! This module handles account registration, login and token management.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - User model and database operations
//! ├── sessions.rs     - Token signing and verification
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs      - Handler exports
//!     ├── register.rs - Account creation
//!     ├── login.rs    - Credential exchange
//!     └── me.rs       - Current account
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: name, email and password → user created → token returned
//! 2. **Login**: email and password → credentials verified → token returned
//! 3. **Protected requests**: `Authorization: Bearer <token>` → verified by
//!    `middleware::auth_middleware`
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt before storage
//! - Tokens are HS256-signed and expire after the configured TTL
//! - Invalid credentials return 401 without saying which part was wrong

/// User model and database operations
pub mod users;

/// Token management
pub mod sessions;

/// HTTP handlers
pub mod handlers;

pub use handlers::{get_me, login, register};
