//! CLI argument parsing and command dispatch.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod prompts;
pub mod run;
pub mod serve;

/// A/B test prompts across AI providers.
#[derive(Parser, Debug)]
#[command(name = "promptduel", about = "A/B test prompts across AI providers")]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,

    /// Path to the configuration file.
    #[arg(long, short = 'c', global = true, default_value = "config.toml")]
    pub config: PathBuf,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run an A/B comparison across the enabled providers.
    Run(run::Run),
    /// Start the web API server.
    Serve(serve::Serve),
    /// Manage saved prompts.
    Prompts {
        /// Prompts subcommand.
        #[command(subcommand)]
        action: prompts::PromptsCommand,
    },
}

impl Cli {
    /// Execute the parsed command.
    pub async fn run(self) -> Result<()> {
        match self.command {
            Command::Run(cmd) => cmd.run(&self.config).await,
            Command::Serve(cmd) => cmd.run(&self.config).await,
            Command::Prompts { action } => action.run(),
        }
    }
}
