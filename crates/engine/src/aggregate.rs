//! Pure aggregation of per-call results into the final run object.

use crate::{ProviderResult, RunInputs, RunOutputs, RunResult};
use chrono::{DateTime, Utc};
use compact_str::CompactString;
use llm::ProviderConfig;
use std::collections::BTreeMap;

/// Placeholder substituted for api keys in the config snapshot.
pub const REDACTED: &str = "[REDACTED]";

/// Assemble the immutable run result.
///
/// Groups results by provider identifier per variant; arrival order never
/// affects the output. No network or storage side effects.
pub fn assemble(
    timestamp: DateTime<Utc>,
    inputs: RunInputs,
    providers: &BTreeMap<CompactString, ProviderConfig>,
    results_a: Vec<ProviderResult>,
    results_b: Vec<ProviderResult>,
) -> RunResult {
    RunResult {
        timestamp,
        inputs,
        config: redact(providers),
        outputs: RunOutputs {
            results_a: group(results_a),
            results_b: group(results_b),
        },
    }
}

/// Key results by provider identifier.
fn group(results: Vec<ProviderResult>) -> BTreeMap<CompactString, ProviderResult> {
    results
        .into_iter()
        .map(|result| (result.provider.clone(), result))
        .collect()
}

/// Snapshot the provider configs with api keys replaced.
fn redact(
    providers: &BTreeMap<CompactString, ProviderConfig>,
) -> BTreeMap<CompactString, ProviderConfig> {
    providers
        .iter()
        .map(|(id, config)| {
            let mut snapshot = config.clone();
            snapshot.api_key = REDACTED.to_owned();
            (id.clone(), snapshot)
        })
        .collect()
}
