//! Provider call failure taxonomy.

use reqwest::StatusCode;
use reqwest::header::InvalidHeaderValue;
use thiserror::Error;

/// Maximum response-body length kept in an error message.
const BODY_SNIPPET: usize = 200;

/// A classified failure from a single provider call.
///
/// Every variant maps to `success = false` in the run output; the
/// classification survives in the display string.
#[derive(Debug, Error)]
pub enum CallError {
    /// The provider is enabled but misconfigured.
    #[error("configuration error: {0}")]
    Config(String),

    /// The provider rejected the credentials.
    #[error("authentication failed: {0}")]
    Auth(String),

    /// The provider throttled the request.
    #[error("rate limited: {0}")]
    RateLimit(String),

    /// Transport failure or unexpected HTTP status.
    #[error("network error: {0}")]
    Network(String),

    /// The provider replied with a payload we could not decode.
    #[error("malformed response: {0}")]
    Malformed(String),
}

impl CallError {
    /// Classify a non-success HTTP status, keeping a snippet of the body.
    pub fn from_status(status: StatusCode, body: &str) -> Self {
        let snippet: String = body.chars().take(BODY_SNIPPET).collect();
        let message = format!("{status}: {snippet}");
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Self::Auth(message),
            StatusCode::TOO_MANY_REQUESTS => Self::RateLimit(message),
            _ => Self::Network(message),
        }
    }
}

impl From<reqwest::Error> for CallError {
    fn from(e: reqwest::Error) -> Self {
        Self::Network(e.to_string())
    }
}

impl From<InvalidHeaderValue> for CallError {
    fn from(e: InvalidHeaderValue) -> Self {
        Self::Config(format!("invalid header value: {e}"))
    }
}
