//! The dispatch engine.

use crate::{ProviderResult, Registry, RunInputs, RunResult, Variant, assemble, resolve_text};
use chrono::Utc;
use compact_str::CompactString;
use futures_util::future::join_all;
use llm::{Adapter, CallError, ProviderConfig};
use std::collections::BTreeMap;
use std::time::Instant;

/// Run both prompt variants against every enabled provider concurrently.
///
/// Each (provider, variant) pair is dispatched as its own task; a failure
/// in one never cancels or affects a sibling, and the engine waits for
/// every task before aggregating. The run always completes and always
/// returns a [`RunResult`]; provider failures surface as data inside it.
/// Zero enabled providers yield empty result maps, not an error.
pub async fn run<A: Adapter>(
    registry: &Registry<A>,
    inputs: RunInputs,
    providers: &BTreeMap<CompactString, ProviderConfig>,
) -> RunResult {
    let text_a = resolve_text(&inputs.prompt_a, &inputs.shared_input);
    let text_b = resolve_text(&inputs.prompt_b, &inputs.shared_input);

    let mut tasks = Vec::new();
    for (id, config) in providers.iter().filter(|(_, config)| config.enabled) {
        for (variant, text) in [(Variant::A, &text_a), (Variant::B, &text_b)] {
            if text.is_empty() {
                continue;
            }
            tasks.push(call_one(registry, id, variant, text, config));
        }
    }

    tracing::debug!("dispatching {} provider calls", tasks.len());
    let mut results_a = Vec::new();
    let mut results_b = Vec::new();
    for result in join_all(tasks).await {
        match result.variant {
            Variant::A => results_a.push(result),
            Variant::B => results_b.push(result),
        }
    }

    assemble(Utc::now(), inputs, providers, results_a, results_b)
}

/// Execute a single (provider, variant) call, containing every failure.
async fn call_one<A: Adapter>(
    registry: &Registry<A>,
    id: &CompactString,
    variant: Variant,
    text: &str,
    config: &ProviderConfig,
) -> ProviderResult {
    let start = Instant::now();

    let Some(adapter) = registry.resolve(id) else {
        let error = CallError::Config(format!("unknown provider: {id}"));
        return ProviderResult::err(id.clone(), variant, &error, start.elapsed());
    };
    if config.api_key.is_empty() {
        let error = CallError::Config("API key not configured".into());
        return ProviderResult::err(id.clone(), variant, &error, start.elapsed());
    }

    match adapter.call(text, config).await {
        Ok(completion) => ProviderResult::ok(id.clone(), variant, completion, start.elapsed()),
        Err(error) => {
            tracing::warn!("provider {id} ({variant:?}) failed: {error}");
            ProviderResult::err(id.clone(), variant, &error, start.elapsed())
        }
    }
}
