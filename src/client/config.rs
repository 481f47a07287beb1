use thiserror::Error;

/// Default server URL
const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:3000";

/// Environment variable overriding the server URL
pub const SERVER_URL_VAR: &str = "CLIENT_API_URL";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Server URL must start with http:// or https://, got {0:?}")]
    InvalidServerUrl(String),
}

/// Client configuration: where the API lives and the current bearer token.
#[derive(Debug, Clone)]
pub struct Config {
    server_url: String,
    token: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            token: None,
        }
    }
}

fn normalize_url(url: &str) -> Result<String, ConfigError> {
    let trimmed = url.trim().trim_end_matches('/');
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        Ok(trimmed.to_string())
    } else {
        Err(ConfigError::InvalidServerUrl(url.to_string()))
    }
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the server URL from `CLIENT_API_URL`, falling back to the
    /// default when it is unset. A set but malformed value is an error.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var(SERVER_URL_VAR) {
            Ok(url) => Self::with_server_url(&url),
            Err(_) => Ok(Self::default()),
        }
    }

    /// Configuration pointing at an explicit server, e.g. a test server
    pub fn with_server_url(url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            server_url: normalize_url(url)?,
            token: None,
        })
    }

    /// Set the bearer token
    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    /// Get the bearer token
    pub fn get_token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Clear the token (logout)
    pub fn clear_token(&mut self) {
        self.token = None;
    }

    /// Get the full URL for an API endpoint
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.server_url, path)
    }

    /// Resolve an image reference returned by the server. Relative paths
    /// such as `/uploads/x.png` are served by the API host.
    pub fn asset_url(&self, reference: &str) -> String {
        if reference.starts_with("http://") || reference.starts_with("https://") {
            reference.to_string()
        } else if reference.starts_with('/') {
            self.api_url(reference)
        } else {
            format!("{}/{}", self.server_url, reference)
        }
    }

    pub fn server_url(&self) -> &str {
        &self.server_url
    }
}
