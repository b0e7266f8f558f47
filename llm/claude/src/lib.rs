//! Anthropic Messages API adapter.
//!
//! The Messages API differs from the OpenAI format: authentication uses
//! an `x-api-key` header plus a pinned `anthropic-version`, `max_tokens`
//! is required, and the reply arrives as a list of content blocks.

use llm::reqwest::Client;
pub use request::{Request, Response};

mod provider;
mod request;

/// Default model when the config does not name one.
pub const DEFAULT_MODEL: &str = "claude-3-5-sonnet-20241022";

/// Pinned API version header value.
pub const API_VERSION: &str = "2023-06-01";

/// Anthropic endpoint URLs.
pub mod endpoint {
    /// Anthropic Messages API.
    pub const CLAUDE: &str = "https://api.anthropic.com/v1/messages";
}

/// An Anthropic Messages API adapter.
#[derive(Clone)]
pub struct Claude {
    /// The HTTP client.
    pub client: Client,
    /// Messages endpoint URL.
    endpoint: String,
}

impl Claude {
    /// Create an adapter targeting the Anthropic API.
    pub fn api(client: Client) -> Self {
        Self::custom(client, endpoint::CLAUDE)
    }

    /// Create an adapter targeting a custom Messages-compatible endpoint.
    pub fn custom(client: Client, endpoint: &str) -> Self {
        Self {
            client,
            endpoint: endpoint.to_owned(),
        }
    }

    /// The endpoint this adapter targets.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}
