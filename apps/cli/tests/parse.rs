//! Tests for CLI argument parsing.

use clap::Parser;
use promptduel_cli::{Cli, Command};
use promptduel_cli::cmd::run::Output;

#[test]
fn cli_parse_run_with_inline_prompts() {
    let cli = Cli::parse_from(["promptduel", "run", "-a", "Say hi", "-b", "Say bye"]);
    match cli.command {
        Command::Run(run) => {
            assert_eq!(run.prompt_a.as_deref(), Some("Say hi"));
            assert_eq!(run.prompt_b.as_deref(), Some("Say bye"));
            assert_eq!(run.output, Output::Text);
        }
        _ => panic!("expected Run command"),
    }
}

#[test]
fn cli_parse_run_with_files_and_input() {
    let cli = Cli::parse_from([
        "promptduel",
        "run",
        "--file-a",
        "a.txt",
        "--file-b",
        "b.txt",
        "-i",
        "shared context",
    ]);
    match cli.command {
        Command::Run(run) => {
            assert!(run.prompt_a.is_none());
            assert_eq!(run.file_a.unwrap().to_str(), Some("a.txt"));
            assert_eq!(run.input, "shared context");
        }
        _ => panic!("expected Run command"),
    }
}

#[test]
fn cli_parse_run_json_output() {
    let cli = Cli::parse_from(["promptduel", "run", "-a", "hi", "-o", "json"]);
    match cli.command {
        Command::Run(run) => assert_eq!(run.output, Output::Json),
        _ => panic!("expected Run command"),
    }
}

#[test]
fn cli_parse_inline_prompt_conflicts_with_file() {
    let result =
        Cli::try_parse_from(["promptduel", "run", "-a", "hi", "--file-a", "a.txt"]);
    assert!(result.is_err());
}

#[test]
fn cli_parse_config_flag() {
    let cli = Cli::parse_from(["promptduel", "--config", "custom.toml", "run", "-a", "hi"]);
    assert_eq!(cli.config.to_str(), Some("custom.toml"));
}

#[test]
fn cli_parse_config_defaults() {
    let cli = Cli::parse_from(["promptduel", "run", "-a", "hi"]);
    assert_eq!(cli.config.to_str(), Some("config.toml"));
}

#[test]
fn cli_parse_serve_default_bind() {
    let cli = Cli::parse_from(["promptduel", "serve"]);
    match cli.command {
        Command::Serve(serve) => assert_eq!(serve.bind, "127.0.0.1:5000"),
        _ => panic!("expected Serve command"),
    }
}

#[test]
fn cli_parse_serve_custom_bind() {
    let cli = Cli::parse_from(["promptduel", "serve", "--bind", "0.0.0.0:8080"]);
    match cli.command {
        Command::Serve(serve) => assert_eq!(serve.bind, "0.0.0.0:8080"),
        _ => panic!("expected Serve command"),
    }
}

#[test]
fn cli_parse_prompts_list() {
    let cli = Cli::parse_from(["promptduel", "prompts", "list"]);
    assert!(matches!(cli.command, Command::Prompts { .. }));
}

#[test]
fn cli_parse_prompts_save() {
    let cli = Cli::parse_from(["promptduel", "prompts", "save", "greeting", "g.txt"]);
    assert!(matches!(cli.command, Command::Prompts { .. }));
}
