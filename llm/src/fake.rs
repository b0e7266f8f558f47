//! Canned provider adapter for testing.
//!
//! Implements [`Adapter`] without touching the network. Intended for
//! unit tests that exercise registry and dispatch logic without real
//! provider calls.

use crate::{Adapter, CallError, Completion, ProviderConfig};

/// A canned adapter that resolves immediately.
#[derive(Clone)]
pub enum StaticAdapter {
    /// Reply with the prompt itself.
    Echo,
    /// Always succeed with the given text.
    Reply(String),
    /// Always fail with a network-classified error.
    Fail(String),
}

impl Adapter for StaticAdapter {
    async fn call(
        &self,
        prompt: &str,
        _config: &ProviderConfig,
    ) -> Result<Completion, CallError> {
        match self {
            Self::Echo => Ok(completion(prompt.to_owned())),
            Self::Reply(text) => Ok(completion(text.clone())),
            Self::Fail(message) => Err(CallError::Network(message.clone())),
        }
    }
}

fn completion(text: String) -> Completion {
    Completion {
        text,
        model: "static".into(),
        usage: None,
    }
}
