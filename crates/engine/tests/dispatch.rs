//! Tests for the dispatch engine.

use compact_str::CompactString;
use llm::{ProviderConfig, StaticAdapter};
use promptduel_engine::{Registry, RunInputs, SEPARATOR};
use std::collections::BTreeMap;

fn config(api_key: &str) -> ProviderConfig {
    ProviderConfig {
        api_key: api_key.to_owned(),
        ..ProviderConfig::default()
    }
}

fn inputs(prompt_a: &str, prompt_b: &str, shared_input: &str) -> RunInputs {
    RunInputs {
        prompt_a: prompt_a.to_owned(),
        prompt_b: prompt_b.to_owned(),
        shared_input: shared_input.to_owned(),
    }
}

#[tokio::test]
async fn result_keys_equal_enabled_provider_set() {
    let mut registry = Registry::new();
    registry.register("p1", StaticAdapter::Echo);
    registry.register("p2", StaticAdapter::Echo);
    registry.register("p3", StaticAdapter::Echo);

    let mut providers = BTreeMap::new();
    providers.insert(CompactString::new("p1"), config("key-1"));
    providers.insert(CompactString::new("p2"), config("key-2"));
    providers.insert(
        CompactString::new("p3"),
        ProviderConfig {
            enabled: false,
            ..config("key-3")
        },
    );

    let result =
        promptduel_engine::run(&registry, inputs("Say hi", "Say bye", ""), &providers).await;

    let keys_a: Vec<&str> = result.outputs.results_a.keys().map(|k| k.as_str()).collect();
    let keys_b: Vec<&str> = result.outputs.results_b.keys().map(|k| k.as_str()).collect();
    assert_eq!(keys_a, vec!["p1", "p2"]);
    assert_eq!(keys_b, vec!["p1", "p2"]);
}

#[tokio::test]
async fn one_failing_provider_does_not_affect_the_other() {
    let mut registry = Registry::new();
    registry.register("p1", StaticAdapter::Reply("ok".into()));
    registry.register("p2", StaticAdapter::Fail("connection reset".into()));

    let mut providers = BTreeMap::new();
    providers.insert(CompactString::new("p1"), config("key-1"));
    providers.insert(CompactString::new("p2"), config("key-2"));

    let result =
        promptduel_engine::run(&registry, inputs("Say hi", "Say bye", ""), &providers).await;

    let p1 = &result.outputs.results_a["p1"];
    assert!(p1.success);
    assert_eq!(p1.response.as_deref(), Some("ok"));
    assert!(p1.error.is_none());

    let p2 = &result.outputs.results_a["p2"];
    assert!(!p2.success);
    assert!(p2.response.is_none());
    assert!(p2.error.as_deref().unwrap().contains("connection reset"));

    // Both variants carry exactly the enabled provider set.
    assert_eq!(result.outputs.results_b.len(), 2);
    assert!(result.outputs.results_b["p1"].success);
    assert!(!result.outputs.results_b["p2"].success);
}

#[tokio::test]
async fn zero_enabled_providers_yield_empty_maps() {
    let mut registry = Registry::new();
    registry.register("p1", StaticAdapter::Echo);

    let mut providers = BTreeMap::new();
    providers.insert(
        CompactString::new("p1"),
        ProviderConfig {
            enabled: false,
            ..config("key-1")
        },
    );

    let result =
        promptduel_engine::run(&registry, inputs("Say hi", "Say bye", ""), &providers).await;
    assert!(result.outputs.results_a.is_empty());
    assert!(result.outputs.results_b.is_empty());
}

#[tokio::test]
async fn unregistered_provider_surfaces_config_error() {
    let registry: Registry<StaticAdapter> = Registry::new();

    let mut providers = BTreeMap::new();
    providers.insert(CompactString::new("mystery"), config("key"));

    let result = promptduel_engine::run(&registry, inputs("Say hi", "", ""), &providers).await;
    let entry = &result.outputs.results_a["mystery"];
    assert!(!entry.success);
    let message = entry.error.as_deref().unwrap();
    assert!(message.contains("configuration error"));
    assert!(message.contains("unknown provider"));
}

#[tokio::test]
async fn missing_api_key_surfaces_config_error() {
    let mut registry = Registry::new();
    registry.register("p1", StaticAdapter::Echo);

    let mut providers = BTreeMap::new();
    providers.insert(CompactString::new("p1"), config(""));

    let result = promptduel_engine::run(&registry, inputs("Say hi", "", ""), &providers).await;
    let entry = &result.outputs.results_a["p1"];
    assert!(!entry.success);
    assert!(
        entry
            .error
            .as_deref()
            .unwrap()
            .contains("API key not configured")
    );
}

#[tokio::test]
async fn adapters_receive_resolved_variant_text() {
    let mut registry = Registry::new();
    registry.register("p1", StaticAdapter::Echo);

    let mut providers = BTreeMap::new();
    providers.insert(CompactString::new("p1"), config("key-1"));

    let result = promptduel_engine::run(
        &registry,
        inputs("Summarize:", "Translate:", "the shared text"),
        &providers,
    )
    .await;

    assert_eq!(
        result.outputs.results_a["p1"].response.as_deref(),
        Some(format!("Summarize:{SEPARATOR}the shared text").as_str())
    );
    assert_eq!(
        result.outputs.results_b["p1"].response.as_deref(),
        Some(format!("Translate:{SEPARATOR}the shared text").as_str())
    );
}

#[tokio::test]
async fn empty_prompt_skips_that_variant() {
    let mut registry = Registry::new();
    registry.register("p1", StaticAdapter::Echo);

    let mut providers = BTreeMap::new();
    providers.insert(CompactString::new("p1"), config("key-1"));

    let result =
        promptduel_engine::run(&registry, inputs("Say hi", "", "shared"), &providers).await;
    assert_eq!(result.outputs.results_a.len(), 1);
    assert!(result.outputs.results_b.is_empty());
}

#[tokio::test]
async fn inputs_and_redacted_config_are_carried_through() {
    let mut registry = Registry::new();
    registry.register("p1", StaticAdapter::Echo);

    let mut providers = BTreeMap::new();
    providers.insert(CompactString::new("p1"), config("sk-secret"));

    let result =
        promptduel_engine::run(&registry, inputs("Say hi", "Say bye", "ctx"), &providers).await;
    assert_eq!(result.inputs.prompt_a, "Say hi");
    assert_eq!(result.inputs.shared_input, "ctx");
    assert_eq!(result.config["p1"].api_key, promptduel_engine::REDACTED);
}
