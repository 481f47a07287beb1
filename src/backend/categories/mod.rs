//! Categories
//!
//! Categories are created through the API and referenced by posts. There is
//! no update or delete route.

pub mod db;
pub mod handlers;

pub use handlers::{create_category, list_categories};
