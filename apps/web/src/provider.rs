//! Provider enum for registry dispatch across concrete adapters.
//!
//! Each variant wraps a concrete adapter; `impl Adapter` delegates to the
//! inner one. Registering a new backend means adding a variant here and
//! one line in [`standard_registry`]; the dispatch engine is untouched.

use claude::Claude;
use engine::Registry;
use gemini::Gemini;
use llm::{Adapter, CallError, Client, Completion, ProviderConfig};
use openai::OpenAI;

/// Unified provider adapter enum.
#[derive(Clone)]
pub enum Provider {
    /// OpenAI chat completions API.
    OpenAI(OpenAI),
    /// Anthropic Messages API.
    Claude(Claude),
    /// Google Gemini generateContent API.
    Gemini(Gemini),
}

impl Adapter for Provider {
    async fn call(
        &self,
        prompt: &str,
        config: &ProviderConfig,
    ) -> Result<Completion, CallError> {
        match self {
            Self::OpenAI(p) => p.call(prompt, config).await,
            Self::Claude(p) => p.call(prompt, config).await,
            Self::Gemini(p) => p.call(prompt, config).await,
        }
    }
}

/// Build the standard registry: `openai`, `anthropic`, and `google`.
pub fn standard_registry(client: Client) -> Registry<Provider> {
    let mut registry = Registry::new();
    registry.register("openai", Provider::OpenAI(OpenAI::api(client.clone())));
    registry.register("anthropic", Provider::Claude(Claude::api(client.clone())));
    registry.register("google", Provider::Gemini(Gemini::api(client)));
    registry
}
