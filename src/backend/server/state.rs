/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the necessary `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * The `AppState` struct holds:
 * - The SQLite connection pool
 * - The loaded server configuration
 *
 * Both are cheap to clone (`SqlitePool` is reference counted internally,
 * the config sits behind an `Arc`), so the state is cloned into every
 * handler without locking.
 */

use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::backend::server::config::ServerConfig;

/// Application state shared by every handler
///
/// # Usage
///
/// ```rust,no_run
/// use quillpost::backend::server::state::AppState;
/// use axum::extract::State;
/// use sqlx::SqlitePool;
///
/// async fn handler(State(pool): State<SqlitePool>) {
///     // Use the pool directly
/// }
/// ```
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub pool: SqlitePool,

    /// Server configuration (secrets, upload directory, limits)
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(pool: SqlitePool, config: ServerConfig) -> Self {
        Self {
            pool,
            config: Arc::new(config),
        }
    }
}

impl FromRef<AppState> for SqlitePool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.pool.clone()
    }
}

impl FromRef<AppState> for Arc<ServerConfig> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.config.clone()
    }
}
