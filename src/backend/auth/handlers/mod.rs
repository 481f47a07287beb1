//! Authentication Handlers
//!
//! HTTP handlers for the account endpoints.
//!
//! - **`register`** - POST /api/auth/register
//! - **`login`** - POST /api/auth/login
//! - **`me`** - GET /api/auth/me

pub mod register;
pub mod login;
pub mod me;

pub use register::register;
pub use login::login;
pub use me::get_me;
