//! Shared application state for the web service.

use crate::Provider;
use engine::Registry;
use std::path::PathBuf;
use std::sync::Arc;
use store::{PromptStore, RunLog};

/// Default saved-prompt directory.
pub const PROMPTS_DIR: &str = "prompts";

/// Default run-log directory.
pub const LOGS_DIR: &str = "logs";

/// Shared state available to all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Provider registry (immutable after init).
    pub registry: Arc<Registry<Provider>>,
    /// Path to the TOML configuration file.
    pub config_path: PathBuf,
    /// Saved prompt store.
    pub prompts: Arc<PromptStore>,
    /// Daily JSON Lines run log.
    pub log: Arc<RunLog>,
}

impl AppState {
    /// Build state with working-directory defaults for prompts and logs.
    pub fn new(config_path: impl Into<PathBuf>) -> Self {
        Self {
            registry: Arc::new(crate::standard_registry(llm::client())),
            config_path: config_path.into(),
            prompts: Arc::new(PromptStore::new(PROMPTS_DIR)),
            log: Arc::new(RunLog::new(LOGS_DIR)),
        }
    }
}
