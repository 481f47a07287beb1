/**
 * Server Configuration
 *
 * This module loads server settings from environment variables and opens
 * the SQLite connection pool.
 *
 * # Configuration Sources
 *
 * | Variable           | Default                          |
 * |--------------------|----------------------------------|
 * | `DATABASE_URL`     | `sqlite://quillpost.db?mode=rwc` |
 * | `JWT_SECRET`       | development secret (warns)       |
 * | `TOKEN_TTL_HOURS`  | 720                              |
 * | `SERVER_PORT`      | 3000                             |
 * | `UPLOAD_DIR`       | `uploads`                        |
 * | `MAX_UPLOAD_BYTES` | 10 MiB                           |
 * | `BCRYPT_COST`      | bcrypt default cost              |
 *
 * # Error Handling
 *
 * Present but unparsable values are rejected with a `ConfigError` instead of
 * silently falling back to defaults.
 */

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use thiserror::Error;

const DEFAULT_DATABASE_URL: &str = "sqlite://quillpost.db?mode=rwc";
const DEV_JWT_SECRET: &str = "quillpost-dev-secret-change-me";

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

/// Settings for one server process
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub database_url: String,
    pub jwt_secret: String,
    pub token_ttl: Duration,
    pub port: u16,
    pub upload_dir: PathBuf,
    pub max_upload_bytes: usize,
    pub bcrypt_cost: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            jwt_secret: DEV_JWT_SECRET.to_string(),
            token_ttl: Duration::from_secs(720 * 60 * 60),
            port: 3000,
            upload_dir: PathBuf::from("uploads"),
            max_upload_bytes: 10 * 1024 * 1024,
            bcrypt_cost: bcrypt::DEFAULT_COST,
        }
    }
}

impl ServerConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    ///
    /// # Arguments
    ///
    /// * `lookup` - Returns the raw value for a variable name, or `None` if unset
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a numeric variable does not parse.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let jwt_secret = match lookup("JWT_SECRET").filter(|s| !s.is_empty()) {
            Some(secret) => secret,
            None => {
                tracing::warn!("JWT_SECRET not set, using the development secret");
                defaults.jwt_secret
            }
        };

        let token_ttl = parse_var(&lookup, "TOKEN_TTL_HOURS")?
            .map(|hours: u64| Duration::from_secs(hours * 60 * 60))
            .unwrap_or(defaults.token_ttl);

        Ok(Self {
            database_url: lookup("DATABASE_URL").unwrap_or(defaults.database_url),
            jwt_secret,
            token_ttl,
            port: parse_var(&lookup, "SERVER_PORT")?.unwrap_or(defaults.port),
            upload_dir: lookup("UPLOAD_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.upload_dir),
            max_upload_bytes: parse_var(&lookup, "MAX_UPLOAD_BYTES")?
                .unwrap_or(defaults.max_upload_bytes),
            bcrypt_cost: parse_var(&lookup, "BCRYPT_COST")?.unwrap_or(defaults.bcrypt_cost),
        })
    }
}

fn parse_var<F, T>(lookup: &F, key: &'static str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue { key, value }),
    }
}

/// Open the connection pool and run migrations
///
/// An in-memory database only lives as long as its connection, so for
/// `sqlite::memory:` the pool is pinned to a single connection that is
/// never recycled.
///
/// # Errors
///
/// Returns the sqlx error if the URL is invalid, the database cannot be
/// opened, or a migration fails.
pub async fn load_database(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    tracing::info!("Connecting to database...");

    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = if database_url.contains(":memory:") {
        SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?
    } else {
        SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?
    };

    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(&pool).await?;
    tracing::info!("Database migrations completed successfully");

    Ok(pool)
}
