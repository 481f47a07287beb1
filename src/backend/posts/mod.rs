//! Posts
//!
//! Posts, their append-only comments and featured image uploads.
//!
//! - **`db`** - SQLite queries (listing, search, CRUD, comment append)
//! - **`handlers`** - JSON endpoints
//! - **`uploads`** - Multipart image upload

pub mod db;
pub mod handlers;
pub mod uploads;

pub use handlers::{add_comment, create_post, delete_post, get_post, list_posts, update_post};
pub use uploads::upload_image;
