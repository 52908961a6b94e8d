//! Logseq HTTP API client and unified client error handling.
//!
//! One authenticated JSON-RPC-style POST per invocation: the Logseq HTTP
//! server accepts `{"method": <name>, "args": [...]}` on `/api` with a
//! bearer token and answers with a JSON object. No retries, no idempotency
//! tracking; the remote graph is the sole source of consistency.

use std::time::Duration;

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::config::ServerConfig;

/// Request timeout for Logseq API calls.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Client operation result type
pub type ClientResult<T> = Result<T, ClientError>;

/// Error types for Logseq API client operations
#[derive(Debug, Error)]
pub enum ClientError {
    /// The remote rejected the bearer token (HTTP 401).
    #[error("Invalid API token")]
    Auth,

    /// Any other non-2xx HTTP response, carrying status and body text.
    #[error("API request failed: {status} - {message}")]
    Api { status: u16, message: String },

    /// Transport-level failure: DNS, connection refused, timeout.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The remote answered 2xx but the body was not valid JSON.
    #[error("Invalid JSON response: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Startup configuration problem (missing token, malformed URL).
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ClientError {
    /// Create an API error from an HTTP response
    pub fn api_error(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

/// Wire payload for the Logseq HTTP API.
#[derive(Debug, Serialize)]
struct ApiRequest<'a> {
    method: &'a str,
    args: &'a [Value],
}

/// Authenticated client for the Logseq HTTP API.
#[derive(Debug, Clone)]
pub struct LogseqClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

impl LogseqClient {
    /// Build a client from startup configuration.
    pub fn new(config: &ServerConfig) -> ClientResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            token: config.api_token.clone(),
        })
    }

    /// Invoke a Logseq API method with positional arguments.
    ///
    /// Issues exactly one POST to `{base_url}/api` and returns the decoded
    /// JSON body. Maps HTTP 401 to [`ClientError::Auth`], any other error
    /// status to [`ClientError::Api`], and transport failures to
    /// [`ClientError::Network`].
    pub async fn call(&self, method: &str, args: &[Value]) -> ClientResult<Value> {
        let payload = ApiRequest { method, args };

        tracing::debug!(method, "calling Logseq API");

        let response = self
            .http
            .post(format!("{}/api", self.base_url))
            .bearer_auth(&self.token)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(ClientError::Auth);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(method, status = status.as_u16(), "Logseq API error");
            return Err(ClientError::api_error(status.as_u16(), body));
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
