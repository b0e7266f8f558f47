//! OpenAI provider adapter.
//!
//! Covers OpenAI and any other service exposing the OpenAI chat
//! completions API.

use llm::reqwest::Client;
pub use request::{Request, Response};

mod provider;
mod request;

/// Default model when the config does not name one.
pub const DEFAULT_MODEL: &str = "gpt-5.2";

/// OpenAI-compatible endpoint URLs.
pub mod endpoint {
    /// OpenAI chat completions.
    pub const OPENAI: &str = "https://api.openai.com/v1/chat/completions";
}

/// An OpenAI-compatible provider adapter.
#[derive(Clone)]
pub struct OpenAI {
    /// The HTTP client.
    pub client: Client,
    /// Chat completions endpoint URL.
    endpoint: String,
}

impl OpenAI {
    /// Create an adapter targeting the OpenAI API.
    pub fn api(client: Client) -> Self {
        Self::custom(client, endpoint::OPENAI)
    }

    /// Create an adapter targeting a custom OpenAI-compatible endpoint.
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
