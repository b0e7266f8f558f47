//! Request and response bodies for the OpenAI chat completions API.

use compact_str::CompactString;
use llm::{DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE, Message, ProviderConfig, Usage};
use serde::{Deserialize, Serialize};

/// The request body for the chat completions endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct Request {
    /// The messages to send.
    pub messages: Vec<Message>,
    /// The model identifier.
    pub model: CompactString,
    /// Sampling temperature.
    pub temperature: f32,
    /// Completion token budget.
    pub max_completion_tokens: u32,
}

impl Request {
    /// Build a single-turn request from a resolved prompt and config.
    pub fn prompt(prompt: &str, config: &ProviderConfig) -> Self {
        Self {
            messages: vec![Message::user(prompt)],
            model: config
                .model
                .clone()
                .unwrap_or_else(|| crate::DEFAULT_MODEL.into()),
            temperature: config.temperature.unwrap_or(DEFAULT_TEMPERATURE),
            max_completion_tokens: config.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS),
        }
    }
}

/// The response body from the chat completions endpoint.
#[derive(Debug, Deserialize)]
pub struct Response {
    /// The model that served the request.
    #[serde(default)]
    pub model: CompactString,
    /// The completion choices.
    #[serde(default)]
    pub choices: Vec<Choice>,
    /// Token usage statistics.
    pub usage: Option<Usage>,
}

impl Response {
    /// The first choice's content.
    pub fn content(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|choice| choice.message.content.as_deref())
    }
}

/// A completion choice.
#[derive(Debug, Deserialize)]
pub struct Choice {
    /// The generated message.
    pub message: ChoiceMessage,
}

/// Message content within a choice.
#[derive(Debug, Deserialize)]
pub struct ChoiceMessage {
    /// The content of the message.
    pub content: Option<String>,
}
