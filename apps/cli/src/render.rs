//! Human-readable rendering of run results.

use compact_str::CompactString;
use engine::{ProviderResult, RunResult};
use std::collections::BTreeMap;

/// Longest prompt preview shown in the header.
const PREVIEW_LIMIT: usize = 500;

/// Render a run result as a human-readable comparison.
pub fn text(run: &RunResult) -> String {
    let mut lines: Vec<String> = Vec::new();
    lines.push("=".repeat(80));
    lines.push("PROMPT A/B TEST RESULTS".to_owned());
    lines.push("=".repeat(80));
    lines.push(String::new());

    push_input(&mut lines, "PROMPT A", &run.inputs.prompt_a);
    push_input(&mut lines, "PROMPT B", &run.inputs.prompt_b);
    push_input(&mut lines, "SHARED INPUT", &run.inputs.shared_input);

    push_variant(&mut lines, "VARIANT A", &run.outputs.results_a);
    push_variant(&mut lines, "VARIANT B", &run.outputs.results_b);

    lines.join("\n")
}

/// Append a labeled input section, skipping empty inputs.
fn push_input(lines: &mut Vec<String>, title: &str, content: &str) {
    if content.is_empty() {
        return;
    }
    lines.push(format!("{title}:"));
    lines.push("-".repeat(40));
    lines.push(preview(content));
    lines.push(String::new());
}

/// Append one variant's per-provider sections.
fn push_variant(
    lines: &mut Vec<String>,
    title: &str,
    results: &BTreeMap<CompactString, ProviderResult>,
) {
    if results.is_empty() {
        return;
    }
    lines.push("=".repeat(80));
    lines.push(title.to_owned());

    for (provider, result) in results {
        lines.push("=".repeat(80));
        lines.push(format!("PROVIDER: {}", provider.to_uppercase()));
        lines.push("-".repeat(40));

        if result.success {
            if let Some(model) = &result.model {
                lines.push(format!("Model: {model}"));
            }
            lines.push(format!("Time: {}s", result.elapsed_seconds));
            if let Some(usage) = &result.usage {
                lines.push(format!(
                    "Usage: prompt_tokens: {}, completion_tokens: {}, total_tokens: {}",
                    usage.prompt_tokens, usage.completion_tokens, usage.total_tokens
                ));
            }
            lines.push(String::new());
            lines.push("RESPONSE:".to_owned());
            lines.push(result.response.clone().unwrap_or_default());
        } else {
            lines.push(format!(
                "ERROR: {}",
                result.error.as_deref().unwrap_or("Unknown error")
            ));
        }

        lines.push(String::new());
    }
}

/// Truncate long inputs at a char boundary.
fn preview(content: &str) -> String {
    if content.len() <= PREVIEW_LIMIT {
        return content.to_owned();
    }
    let mut cut = PREVIEW_LIMIT;
    while !content.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}...", &content[..cut])
}
