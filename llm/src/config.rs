//! Per-provider configuration.

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

/// Default sampling temperature when the config omits one.
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Default completion token budget when the config omits one.
pub const DEFAULT_MAX_TOKENS: u32 = 1024;

/// Configuration for a single provider, one `[providers.<id>]` table.
///
/// `model`, `temperature`, and `max_tokens` fall back to per-adapter
/// defaults when omitted. An adapter is only invoked when `enabled` is
/// true and `api_key` is non-empty; the dispatch engine surfaces a
/// missing key as a per-provider configuration error.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// Whether the provider participates in runs.
    pub enabled: bool,

    /// API key. Supports `${ENV_VAR}` expansion at load time.
    pub api_key: String,

    /// Model identifier override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<CompactString>,

    /// Sampling temperature override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,

    /// Completion token budget override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            api_key: String::new(),
            model: None,
            temperature: None,
            max_tokens: None,
        }
    }
}
