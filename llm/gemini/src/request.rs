//! Request and response bodies for the Gemini `generateContent` API.

use llm::{DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE, ProviderConfig, Usage};
use serde::{Deserialize, Serialize};

/// The request body for the `generateContent` endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    /// The conversation turns.
    pub contents: Vec<Content>,
    /// Generation parameters.
    pub generation_config: GenerationConfig,
}

impl Request {
    /// Build a single-turn request from a resolved prompt and config.
    pub fn prompt(prompt: &str, config: &ProviderConfig) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_owned(),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: config.temperature.unwrap_or(DEFAULT_TEMPERATURE),
                max_output_tokens: config.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS),
            },
        }
    }
}

/// A conversation turn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    /// The parts of the turn.
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// A text part within a turn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    /// The text of the part.
    #[serde(default)]
    pub text: String,
}

/// Generation parameters.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    /// Sampling temperature.
    pub temperature: f32,
    /// Completion token budget.
    pub max_output_tokens: u32,
}

/// The response body from the `generateContent` endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    /// The generated candidates.
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    /// Native token usage.
    pub usage_metadata: Option<UsageMetadata>,
}

impl Response {
    /// The first candidate's first text part.
    pub fn text(&self) -> Option<&str> {
        self.candidates
            .first()
            .and_then(|candidate| candidate.content.as_ref())
            .and_then(|content| content.parts.first())
            .map(|part| part.text.as_str())
    }
}

/// A generated candidate.
#[derive(Debug, Deserialize)]
pub struct Candidate {
    /// The candidate's content.
    pub content: Option<Content>,
}

/// Gemini-native usage counters.
#[derive(Debug, Clone, Copy, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct UsageMetadata {
    /// Tokens consumed by the prompt.
    pub prompt_token_count: u32,
    /// Tokens generated across candidates.
    pub candidates_token_count: u32,
    /// Total tokens billed for the call.
    pub total_token_count: u32,
}

impl From<UsageMetadata> for Usage {
    fn from(usage: UsageMetadata) -> Self {
        Self {
            prompt_tokens: usage.prompt_token_count,
            completion_tokens: usage.candidates_token_count,
            total_tokens: usage.total_token_count,
        }
    }
}
