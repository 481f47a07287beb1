/**
 * Server Initialization
 *
 * This module wires configuration, storage and routes into a ready-to-serve
 * Axum router.
 *
 * # Initialization Process
 *
 * 1. Open the database and apply migrations
 * 2. Make sure the upload directory exists
 * 3. Build the shared state
 * 4. Create the router
 */

use axum::Router;

use crate::backend::error::BackendError;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::{load_database, ServerConfig};
use crate::backend::server::state::AppState;

/// Create and configure the Axum application
///
/// # Arguments
///
/// * `config` - Loaded server configuration
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
///
/// # Errors
///
/// Unlike optional services, the database is required: a connection or
/// migration failure aborts startup.
pub async fn create_app(config: ServerConfig) -> Result<Router<()>, BackendError> {
    tracing::info!("Initializing Quillpost backend server");

    let pool = load_database(&config.database_url).await?;

    tokio::fs::create_dir_all(&config.upload_dir).await?;
    tracing::info!("Serving uploads from {}", config.upload_dir.display());

    let app_state = AppState::new(pool, config);
    let app = create_router(app_state);

    tracing::info!("Router configured");

    Ok(app)
}
