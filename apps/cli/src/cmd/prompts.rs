//! Saved prompt management commands.

use anyhow::{Context, Result, bail};
use clap::Subcommand;
use std::path::PathBuf;
use store::PromptStore;

/// Prompt store location.
const PROMPTS_DIR: &str = "prompts";

/// Saved prompt subcommands.
#[derive(Subcommand, Debug)]
pub enum PromptsCommand {
    /// List saved prompts.
    List,
    /// Print a saved prompt.
    Show {
        /// Prompt name.
        name: String,
    },
    /// Save a prompt from a file.
    Save {
        /// Prompt name.
        name: String,
        /// File containing the prompt text.
        file: PathBuf,
    },
}

impl PromptsCommand {
    /// Execute the subcommand against the prompt store.
    pub fn run(self) -> Result<()> {
        let prompts = PromptStore::new(PROMPTS_DIR);
        match self {
            Self::List => {
                for name in prompts.list()? {
                    println!("{name}");
                }
            }
            Self::Show { name } => match prompts.load(&name)? {
                Some(content) => println!("{content}"),
                None => bail!("prompt not found: {name}"),
            },
            Self::Save { name, file } => {
                let content = std::fs::read_to_string(&file)
                    .with_context(|| format!("failed to read {}", file.display()))?;
                prompts.save(&name, &content)?;
                println!("saved prompt '{name}'");
            }
        }
        Ok(())
    }
}
