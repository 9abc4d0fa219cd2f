//! `vibe status` — show configuration, state file, and provider status.

use std::io::Write;
use std::path::Path;

use anyhow::Result;
use colored::Colorize;

use crate::commands::App;

fn presence(exists: bool) -> String {
    if exists {
        "✓".green().to_string()
    } else {
        "(not found)".red().to_string()
    }
}

/// Run the status command.
pub fn run(app: &App, config_path: &Path, out: &mut dyn Write) -> Result<()> {
    let provider = &app.config.provider;

    writeln!(out)?;
    writeln!(out, "{}", "Vibe Status".cyan().bold())?;
    writeln!(out)?;

    writeln!(
        out,
        "  {:<14} {} {}",
        "Config:".bold(),
        config_path.display(),
        presence(config_path.exists())
    )?;

    let state_path = app.store.path();
    let state_note = if state_path.exists() {
        format!("{} ({} keys)", presence(true), app.store.load().len())
    } else {
        presence(false)
    };
    writeln!(
        out,
        "  {:<14} {} {}",
        "State file:".bold(),
        state_path.display(),
        state_note
    )?;

    writeln!(out, "  {:<14} {}", "Model:".bold(), provider.model)?;
    writeln!(out, "  {:<14} {}", "API base:".bold(), provider.api_base_or_default())?;

    let credential = if provider.is_configured() {
        format!("{} (key set)", "✓".green())
    } else {
        format!("{}", "· not configured, summaries use the offline fallback".dimmed())
    };
    writeln!(out, "  {:<14} {}", "Credential:".bold(), credential)?;

    writeln!(out, "  {:<14} {}", "Tools:".bold(), app.registry.tool_names().join(", "))?;
    writeln!(out)?;

    Ok(())
}
