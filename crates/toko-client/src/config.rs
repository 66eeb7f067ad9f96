//! Client configuration module.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults.

use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::ClientError;

/// API client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the storefront REST API, without a trailing slash.
    pub api_base_url: String,

    /// Per-request timeout in seconds.
    pub timeout_secs: u64,

    /// Where the session file backend persists the session.
    /// `None` selects the in-memory backend.
    pub session_file: Option<PathBuf>,
}

impl ClientConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ClientError> {
        let config = ClientConfig {
            api_base_url: env::var("TOKO_API_URL")
                .unwrap_or_else(|_| "http://localhost:8080/api".to_string()),

            timeout_secs: env::var("TOKO_API_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .map_err(|_| {
                    ClientError::InvalidConfig("TOKO_API_TIMEOUT_SECS must be an integer".to_string())
                })?,

            session_file: env::var("TOKO_SESSION_FILE").ok().map(PathBuf::from),
        };

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ClientError> {
        if !self.api_base_url.starts_with("http://") && !self.api_base_url.starts_with("https://") {
            return Err(ClientError::InvalidConfig(format!(
                "TOKO_API_URL must be an http(s) URL, got '{}'",
                self.api_base_url
            )));
        }

        if self.timeout_secs == 0 {
            return Err(ClientError::InvalidConfig(
                "TOKO_API_TIMEOUT_SECS must be positive".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            api_base_url: "http://localhost:8080/api".to_string(),
            timeout_secs: 30,
            session_file: None,
        }
    }
}
