//! Google Gemini provider adapter.
//!
//! Talks to the `generateContent` endpoint. The model is part of the URL
//! rather than the body, authentication uses an `x-goog-api-key` header,
//! and the request shape is Gemini's own `contents`/`parts` format.

use llm::reqwest::Client;
pub use request::{Request, Response};

mod provider;
mod request;

/// Default model when the config does not name one.
pub const DEFAULT_MODEL: &str = "gemini-pro";

/// Gemini endpoint URLs.
pub mod endpoint {
    /// Base URL for the generative language API.
    pub const GEMINI_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
}

/// A Google Gemini provider adapter.
#[derive(Clone)]
pub struct Gemini {
    /// The HTTP client.
    pub client: Client,
    /// API base URL; the per-model path is appended per call.
    base_url: String,
}

impl Gemini {
    /// Create an adapter targeting the Google API.
    pub fn api(client: Client) -> Self {
        Self::custom(client, endpoint::GEMINI_BASE)
    }

    /// Create an adapter targeting a custom Gemini-compatible base URL.
    pub fn custom(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.to_owned(),
        }
    }

    /// The base URL this adapter targets.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The full `generateContent` URL for a model.
    pub fn generate_url(&self, model: &str) -> String {
        format!("{}/models/{model}:generateContent", self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::{Gemini, endpoint};

    #[test]
    fn custom_constructor_sets_base_url() {
        let client = llm::Client::new();
        let provider = Gemini::custom(client, "http://localhost:9999/v1beta");
        assert_eq!(provider.base_url(), "http://localhost:9999/v1beta");
    }

    #[test]
    fn generate_url_embeds_the_model() {
        let client = llm::Client::new();
        let provider = Gemini::api(client);
        assert_eq!(
            provider.generate_url("gemini-pro"),
            format!("{}/models/gemini-pro:generateContent", endpoint::GEMINI_BASE)
        );
    }
}
