//! A/B comparison run command.

use crate::render;
use anyhow::{Context, Result, bail};
use clap::{Args, ValueEnum};
use engine::RunInputs;
use std::path::{Path, PathBuf};
use store::AppConfig;

/// Output format for run results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Output {
    /// Human-readable comparison.
    Text,
    /// The raw run result as JSON.
    Json,
}

/// Run an A/B comparison across the enabled providers.
#[derive(Args, Debug)]
pub struct Run {
    /// Variant A prompt text.
    #[arg(long, short = 'a', conflicts_with = "file_a")]
    pub prompt_a: Option<String>,

    /// Variant B prompt text.
    #[arg(long, short = 'b', conflicts_with = "file_b")]
    pub prompt_b: Option<String>,

    /// Read the variant A prompt from a file.
    #[arg(long)]
    pub file_a: Option<PathBuf>,

    /// Read the variant B prompt from a file.
    #[arg(long)]
    pub file_b: Option<PathBuf>,

    /// Shared input appended to both variants.
    #[arg(long, short = 'i', default_value = "")]
    pub input: String,

    /// Output format.
    #[arg(long, short = 'o', value_enum, default_value_t = Output::Text)]
    pub output: Output,
}

impl Run {
    /// Resolve prompts, dispatch, and print the result.
    pub async fn run(self, config_path: &Path) -> Result<()> {
        let prompt_a = resolve_prompt(self.prompt_a, self.file_a)?;
        let prompt_b = resolve_prompt(self.prompt_b, self.file_b)?;
        if prompt_a.is_empty() && prompt_b.is_empty() {
            bail!("at least one prompt is required (see --prompt-a/--file-a)");
        }

        let config = AppConfig::load(config_path)?;
        let registry = web::standard_registry(llm::client());

        let inputs = RunInputs {
            prompt_a,
            prompt_b,
            shared_input: self.input,
        };
        let result = engine::run(&registry, inputs, &config.providers).await;

        match self.output {
            Output::Json => println!("{}", serde_json::to_string_pretty(&result)?),
            Output::Text => println!("{}", render::text(&result)),
        }
        Ok(())
    }
}

/// Inline text wins; otherwise read the file; otherwise empty.
fn resolve_prompt(text: Option<String>, file: Option<PathBuf>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }
    if let Some(path) = file {
        return std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read prompt file {}", path.display()));
    }
    Ok(String::new())
}
