//! Client Module
//!
//! Everything a front end needs to talk to the blog API, independent of
//! any UI toolkit:
//!
//! - **`config`** - Server URL and bearer token
//! - **`session`** - Token persistence between runs
//! - **`api`** - Typed async HTTP client
//! - **`store`** - Posts list with optimistic add and delete
//! - **`listing`** - Page number, page count and search text
//! - **`forms`** - Input buffers validated before submit
//! - **`workflow`** - Operations combining the pieces above

pub mod api;
pub mod config;
pub mod forms;
pub mod listing;
pub mod session;
pub mod store;
pub mod workflow;

pub use api::{ApiClient, ClientError, PostQuery};
pub use config::Config;
pub use listing::ListingState;
pub use session::{Session, SessionStore};
pub use store::{EntryKey, EntryState, PostEntry, PostsStore, Removal, TempId};
