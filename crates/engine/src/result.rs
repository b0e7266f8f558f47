//! Run result shapes.
//!
//! These types are the terminal artifact of one dispatch call. The JSON
//! layout is load-bearing: the run log appends it as one line and the
//! front ends render it as-is.

use crate::Variant;
use chrono::{DateTime, Utc};
use compact_str::CompactString;
use llm::{CallError, Completion, ProviderConfig, Usage};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;

/// The outcome of one (provider, variant) call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderResult {
    /// Provider identifier.
    pub provider: CompactString,

    /// Which prompt variant this result answers.
    pub variant: Variant,

    /// Whether the call produced a completion.
    pub success: bool,

    /// The generated text, on success.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,

    /// The classified failure message, on failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// The model that served the request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<CompactString>,

    /// Normalized token usage, when the provider reports it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<Usage>,

    /// Wall-clock seconds spent in the call, rounded to centiseconds.
    pub elapsed_seconds: f64,
}

impl ProviderResult {
    /// Build a success result from a completion.
    pub fn ok(
        provider: CompactString,
        variant: Variant,
        completion: Completion,
        elapsed: Duration,
    ) -> Self {
        Self {
            provider,
            variant,
            success: true,
            response: Some(completion.text),
            error: None,
            model: (!completion.model.is_empty()).then_some(completion.model),
            usage: completion.usage,
            elapsed_seconds: round_secs(elapsed),
        }
    }

    /// Build a failure result from a classified error.
    pub fn err(
        provider: CompactString,
        variant: Variant,
        error: &CallError,
        elapsed: Duration,
    ) -> Self {
        Self {
            provider,
            variant,
            success: false,
            response: None,
            error: Some(error.to_string()),
            model: None,
            usage: None,
            elapsed_seconds: round_secs(elapsed),
        }
    }
}

fn round_secs(elapsed: Duration) -> f64 {
    (elapsed.as_secs_f64() * 100.0).round() / 100.0
}

/// The user-entered inputs of one run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunInputs {
    /// Variant A prompt.
    pub prompt_a: String,

    /// Variant B prompt.
    pub prompt_b: String,

    /// Shared input appended to both variants.
    #[serde(default)]
    pub shared_input: String,
}

/// Per-variant result maps, keyed by provider identifier.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunOutputs {
    /// Variant A results.
    pub results_a: BTreeMap<CompactString, ProviderResult>,

    /// Variant B results.
    pub results_b: BTreeMap<CompactString, ProviderResult>,
}

/// The aggregated artifact of one dispatch call.
///
/// Immutable after construction and owned by the caller; the engine does
/// not persist it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunResult {
    /// When the run was dispatched (UTC).
    pub timestamp: DateTime<Utc>,

    /// The user-entered inputs.
    pub inputs: RunInputs,

    /// Config snapshot with api keys redacted.
    pub config: BTreeMap<CompactString, ProviderConfig>,

    /// Per-variant results.
    pub outputs: RunOutputs,
}
