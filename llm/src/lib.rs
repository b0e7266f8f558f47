//! Unified provider interface types and traits.
//!
//! This crate provides the shared types used by every provider adapter:
//! [`ProviderConfig`], the normalized [`Completion`] and [`Usage`] shapes,
//! the [`CallError`] taxonomy, and the [`Adapter`] trait. Also re-exports
//! `reqwest` and a [`client`] constructor so the adapter crates share one
//! HTTP stack.

pub use adapter::Adapter;
pub use config::{DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE, ProviderConfig};
pub use error::CallError;
pub use fake::StaticAdapter;
pub use message::{Message, Role};
pub use response::{Completion, Usage};
pub use reqwest::{self, Client};

mod adapter;
mod config;
mod error;
mod fake;
mod message;
mod response;

use std::time::Duration;

/// Default per-request timeout for provider calls.
///
/// One hanging provider must not stall a whole run, so every request
/// carries a bound even though dispatch itself never cancels tasks.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

/// Build the shared HTTP client used by all provider adapters.
pub fn client() -> Client {
    Client::builder()
        .timeout(DEFAULT_TIMEOUT)
        .build()
        .expect("default reqwest client")
}
