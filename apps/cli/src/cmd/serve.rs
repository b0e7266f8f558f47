//! Web API server command.

use anyhow::Result;
use clap::Args;
use std::path::Path;
use web::AppState;

/// Start the web API server.
#[derive(Args, Debug)]
pub struct Serve {
    /// Bind address (host:port).
    #[arg(long, default_value = "127.0.0.1:5000")]
    pub bind: String,
}

impl Serve {
    /// Build state and serve until ctrl-c.
    pub async fn run(self, config_path: &Path) -> Result<()> {
        let state = AppState::new(config_path);
        web::serve(state, &self.bind).await
    }
}
