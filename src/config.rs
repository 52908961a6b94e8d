//! Server configuration sourced from the process environment.
//!
//! Two variables control the adapter: `LOGSEQ_API_TOKEN` (required) and
//! `LOGSEQ_API_URL` (optional, defaults to the local Logseq HTTP server).
//! There are no CLI flags; configuration is captured once at startup and
//! passed by reference into the server handler.

use crate::client::{ClientError, ClientResult};

/// Default base URL of the Logseq HTTP API server.
pub const DEFAULT_BASE_URL: &str = "http://localhost:12315";

/// Environment variable holding the Logseq API bearer token.
pub const TOKEN_ENV_VAR: &str = "LOGSEQ_API_TOKEN";

/// Environment variable overriding the Logseq API base URL.
pub const URL_ENV_VAR: &str = "LOGSEQ_API_URL";

/// Immutable startup configuration for the Logseq API client.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bearer token sent on every outbound request.
    pub api_token: String,
    /// Base URL of the Logseq graph, without the `/api` suffix.
    pub base_url: String,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// Fails with a configuration error when `LOGSEQ_API_TOKEN` is absent.
    pub fn from_env() -> ClientResult<Self> {
        let api_token = std::env::var(TOKEN_ENV_VAR).map_err(|_| {
            ClientError::config_error(format!(
                "{TOKEN_ENV_VAR} environment variable is required"
            ))
        })?;

        let base_url = std::env::var(URL_ENV_VAR)
            .ok()
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(Self::new(api_token, base_url))
    }

    /// Build a configuration from explicit values, normalizing the base URL.
    pub fn new(api_token: impl Into<String>, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            api_token: api_token.into(),
            base_url,
        }
    }
}
