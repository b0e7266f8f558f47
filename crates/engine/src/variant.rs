//! Prompt variants and text resolution.

use serde::{Deserialize, Serialize};

/// Separator inserted between a prompt and the shared input.
pub const SEPARATOR: &str = "\n\n---\n\n";

/// One of the two prompt variants in a comparison run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Variant {
    /// Variant A.
    #[serde(rename = "a")]
    A,
    /// Variant B.
    #[serde(rename = "b")]
    B,
}

/// Resolve the full text for one variant.
///
/// An empty prompt resolves to the empty string even when a shared input
/// is present; an empty shared input leaves the prompt unchanged. The
/// result is computed once per run and never mutated.
pub fn resolve_text(prompt: &str, shared_input: &str) -> String {
    if prompt.is_empty() {
        return String::new();
    }
    if shared_input.is_empty() {
        return prompt.to_owned();
    }
    format!("{prompt}{SEPARATOR}{shared_input}")
}
