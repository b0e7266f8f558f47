//! Request and response bodies for the Anthropic Messages API.

use compact_str::CompactString;
use llm::{DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE, Message, ProviderConfig, Usage};
use serde::{Deserialize, Serialize};

/// The request body for the Messages endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct Request {
    /// The model identifier.
    pub model: CompactString,
    /// Completion token budget. Required by the API.
    pub max_tokens: u32,
    /// The messages to send.
    pub messages: Vec<Message>,
    /// Sampling temperature.
    pub temperature: f32,
}

impl Request {
    /// Build a single-turn request from a resolved prompt and config.
    pub fn prompt(prompt: &str, config: &ProviderConfig) -> Self {
        Self {
            model: config
                .model
                .clone()
                .unwrap_or_else(|| crate::DEFAULT_MODEL.into()),
            max_tokens: config.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS),
            messages: vec![Message::user(prompt)],
            temperature: config.temperature.unwrap_or(DEFAULT_TEMPERATURE),
        }
    }
}

/// The response body from the Messages endpoint.
#[derive(Debug, Deserialize)]
pub struct Response {
    /// The model that served the request.
    #[serde(default)]
    pub model: CompactString,
    /// The reply content blocks.
    #[serde(default)]
    pub content: Vec<ContentBlock>,
    /// Native token usage.
    pub usage: Option<WireUsage>,
}

impl Response {
    /// The first text block of the reply.
    pub fn text(&self) -> Option<&str> {
        self.content.iter().find_map(|block| match block {
            ContentBlock::Text { text } => Some(text.as_str()),
            ContentBlock::Unknown => None,
        })
    }
}

/// A content block in the reply.
#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
pub enum ContentBlock {
    /// Generated text.
    #[serde(rename = "text")]
    Text { text: String },
    /// Catch-all for unknown block types.
    #[serde(other)]
    Unknown,
}

/// Anthropic-native usage counters.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct WireUsage {
    /// Tokens consumed by the prompt.
    pub input_tokens: u32,
    /// Tokens generated for the reply.
    pub output_tokens: u32,
}

impl From<WireUsage> for Usage {
    fn from(usage: WireUsage) -> Self {
        Self {
            prompt_tokens: usage.input_tokens,
            completion_tokens: usage.output_tokens,
            total_tokens: usage.input_tokens + usage.output_tokens,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Request, Response};
    use llm::{ProviderConfig, Usage};

    #[test]
    fn prompt_uses_default_model_and_budget() {
        let req = Request::prompt("Say hi", &ProviderConfig::default());
        assert_eq!(req.model, crate::DEFAULT_MODEL);
        assert_eq!(req.max_tokens, 1024);
        assert_eq!(req.messages[0].content, "Say hi");
    }

    #[test]
    fn response_text_skips_unknown_blocks() {
        let json = r#"{
            "model": "claude-3-5-sonnet-20241022",
            "content": [
                {"type": "thinking", "thinking": "..."},
                {"type": "text", "text": "hello"}
            ],
            "usage": {"input_tokens": 5, "output_tokens": 2}
        }"#;
        let response: Response = serde_json::from_str(json).unwrap();
        assert_eq!(response.text(), Some("hello"));
    }

    #[test]
    fn wire_usage_normalizes_totals() {
        let json = r#"{"content": [], "usage": {"input_tokens": 7, "output_tokens": 3}}"#;
        let response: Response = serde_json::from_str(json).unwrap();
        let usage = Usage::from(response.usage.unwrap());
        assert_eq!(usage.prompt_tokens, 7);
        assert_eq!(usage.completion_tokens, 3);
        assert_eq!(usage.total_tokens, 10);
    }
}
