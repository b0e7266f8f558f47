//! Normalized completion shapes.

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

/// A successful completion, normalized across providers.
#[derive(Debug, Clone)]
pub struct Completion {
    /// The generated text.
    pub text: String,

    /// The model that served the request, as reported by the provider.
    pub model: CompactString,

    /// Token usage, when the provider reports it.
    pub usage: Option<Usage>,
}

/// Token usage statistics, normalized across providers.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Usage {
    /// Tokens consumed by the prompt.
    pub prompt_tokens: u32,

    /// Tokens generated for the completion.
    pub completion_tokens: u32,

    /// Total tokens billed for the call.
    pub total_tokens: u32,
}
