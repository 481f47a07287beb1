//! Quillpost - Main Library
//!
//! Quillpost is a small blogging application: a REST API that stores posts,
//! categories, comments and users, and a native client that lists, searches,
//! creates and deletes posts with optimistic updates.
//!
//! # Module Structure
//!
//! The library is organized into four modules:
//!
//! - **`shared`** - Wire types used by both server and client
//!   - Posts, categories, comments, accounts
//!   - Request validation rules
//!   - Error envelopes
//!
//! - **`backend`** - Server-side code (only compiled with the `server` feature)
//!   - Axum HTTP server and routes
//!   - SQLite persistence through sqlx
//!   - Bearer token authentication
//!   - Image uploads
//!
//! - **`client`** - HTTP client and client state
//!   - Typed API client
//!   - Posts store with optimistic create and delete
//!   - Listing pagination and search state
//!   - Session token persistence
//!
//! - **`desktop`** - Native desktop app (egui/eframe, `desktop` feature)
//!
//! # Feature Flags
//!
//! - **`server`** (default) - Enables the backend module and the
//!   `quillpost-server` binary
//! - **`desktop`** - Enables the egui views and the `quillpost-desktop` binary
//!
//! # Usage
//!
//! ## Server-Side
//!
//! ```rust,no_run
//! use quillpost::backend::server::{config::ServerConfig, init::create_app};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let app = create_app(ServerConfig::from_env()?).await?;
//! // Serve `app` with axum::serve
//! # Ok(())
//! # }
//! ```
//!
//! ## Client
//!
//! ```rust,no_run
//! use quillpost::client::{api::ApiClient, config::Config, listing::ListingState, store::PostsStore};
//!
//! # async fn example() -> Result<(), quillpost::client::api::ClientError> {
//! let api = ApiClient::new(Config::new());
//! let mut store = PostsStore::new();
//! let mut listing = ListingState::new();
//! quillpost::client::workflow::refresh(&api, &mut store, &mut listing).await?;
//! # Ok(())
//! # }
//! ```

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
#[cfg(feature = "server")]
pub mod backend;

/// HTTP client and client-side state
pub mod client;

/// egui native desktop app
#[cfg(feature = "desktop")]
pub mod desktop;
