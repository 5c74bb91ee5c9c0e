//! Client configuration

use std::path::PathBuf;
use std::time::Duration;

use crate::{ClientError, ClientResult, NetworkHttpClient};

/// Backend base URL used when none is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/chooseMVP/api";

/// Client configuration for connecting to the storefront backend
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API base URL including the `/api` prefix
    pub base_url: String,

    /// Request timeout. `None` waits indefinitely.
    pub timeout: Option<Duration>,

    /// Where the bearer token is persisted. `None` keeps it in memory only.
    pub token_path: Option<PathBuf>,

    /// Custom `User-Agent` header
    pub user_agent: Option<String>,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: None,
            token_path: None,
            user_agent: None,
        }
    }

    /// Load configuration from the environment
    ///
    /// - `API_BASE_URL` (default [`DEFAULT_BASE_URL`])
    /// - `API_TIMEOUT_SECS`
    /// - `API_TOKEN_PATH`
    pub fn from_env() -> ClientResult<Self> {
        let base_url =
            std::env::var("API_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let mut config = Self::new(base_url);

        if let Ok(secs) = std::env::var("API_TIMEOUT_SECS") {
            let secs = secs
                .trim()
                .parse::<u64>()
                .map_err(|e| ClientError::Config(format!("API_TIMEOUT_SECS: {e}")))?;
            config = config.with_timeout(secs);
        }
        if let Ok(path) = std::env::var("API_TOKEN_PATH") {
            config = config.with_token_path(path);
        }

        Ok(config)
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = Some(Duration::from_secs(seconds));
        self
    }

    /// Persist the bearer token to a JSON file at `path`
    pub fn with_token_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.token_path = Some(path.into());
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Create an HTTP client from this configuration
    pub fn build_http_client(&self) -> ClientResult<NetworkHttpClient> {
        NetworkHttpClient::from_config(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
