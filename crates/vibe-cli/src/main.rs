//! Vibe CLI — entry point.
//!
//! # Commands
//!
//! - `vibe summarize <input>` — summarize a file, saved as `last_summary`
//! - `vibe todo <input>` — todo list from a file, saved as `last_todo`
//! - `vibe orchestrate <input>` — summarize, then build todos from the summary
//! - `vibe tools` — list registered tools
//! - `vibe status` — show configuration and state file

mod commands;
mod helpers;
mod status;

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use vibe_core::config::{get_config_path, load_config};

use crate::commands::App;

// ─────────────────────────────────────────────
// CLI definition
// ─────────────────────────────────────────────

/// Vibe — a small agent that summarizes text and extracts todos
#[derive(Parser)]
#[command(name = "vibe", version, about, long_about = None)]
struct Cli {
    /// Path to the config file (default: ~/.vibe/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true, default_value_t = false)]
    logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize a text file
    Summarize {
        /// Path to input file
        input: PathBuf,
    },

    /// Generate a todo list from a text file
    Todo {
        /// Path to input file
        input: PathBuf,
    },

    /// Run summarize, then todo on the summary
    Orchestrate {
        /// Path to input file
        input: PathBuf,
    },

    /// List registered tools
    Tools,

    /// Show configuration and state status
    Status,
}

// ─────────────────────────────────────────────
// Entrypoint
// ─────────────────────────────────────────────

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.logs);

    let config_path = cli.config.unwrap_or_else(get_config_path);
    let app = App::from_config(load_config(Some(config_path.as_path())));

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if let Err(e) = dispatch(&app, cli.command, &config_path, &mut out).await {
        tracing::debug!(error = ?e, "command failed");
        writeln!(out, "Error running command: {e:#}")?;
    }

    Ok(())
}

async fn dispatch(
    app: &App,
    command: Commands,
    config_path: &std::path::Path,
    out: &mut dyn Write,
) -> Result<()> {
    match command {
        Commands::Summarize { input } => commands::summarize(app, &input, out).await,
        Commands::Todo { input } => commands::todo(app, &input, out).await,
        Commands::Orchestrate { input } => commands::orchestrate(app, &input, out).await,
        Commands::Tools => commands::tools(app, out),
        Commands::Status => status::run(app, config_path, out),
    }
}

/// Initialize tracing/logging. Logs go to stderr; `RUST_LOG` wins if set.
fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("vibe=debug,info")
        } else {
            EnvFilter::new("warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_orchestrate_with_global_flags() {
        let cli = Cli::try_parse_from(["vibe", "orchestrate", "notes.txt", "--logs"]).unwrap();
        assert!(cli.logs);
        match cli.command {
            Commands::Orchestrate { input } => assert_eq!(input, PathBuf::from("notes.txt")),
            _ => panic!("expected orchestrate"),
        }
    }

    #[test]
    fn input_argument_is_required() {
        assert!(Cli::try_parse_from(["vibe", "todo"]).is_err());
    }
}
