//! `vibe summarize | todo | orchestrate | tools` — command handlers.
//!
//! Each handler gets the shared [`App`] (config, tool registry, state store)
//! and writes its human-readable output to `out`.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;
use serde_json::Value;
use tracing::debug;

use vibe_agent::{builtin_registry, Orchestrator, Summarizer, ToolOutput, ToolRegistry};
use vibe_core::config::Config;
use vibe_core::state::StateStore;
use vibe_core::utils::expand_home;

use crate::helpers;

/// Key written by `vibe summarize`.
pub const LAST_SUMMARY_KEY: &str = "last_summary";
/// Key written by `vibe todo`.
pub const LAST_TODO_KEY: &str = "last_todo";

// ─────────────────────────────────────────────
// App context
// ─────────────────────────────────────────────

/// Everything a command needs, built once at startup.
pub struct App {
    pub config: Config,
    pub registry: ToolRegistry,
    pub store: StateStore,
}

impl App {
    /// Build the registry and state store from config.
    pub fn from_config(config: Config) -> Self {
        let registry = builtin_registry(Summarizer::from_config(&config.provider));
        let store = StateStore::new(expand_home(&config.state.path));
        debug!(tools = ?registry.tool_names(), state = %store.path().display(), "registered tools");
        Self::new(config, registry, store)
    }

    pub fn new(config: Config, registry: ToolRegistry, store: StateStore) -> Self {
        Self {
            config,
            registry,
            store,
        }
    }

    /// Look up `name` and run it on `text`.
    async fn run_tool(&self, name: &str, text: &str) -> Result<ToolOutput> {
        let tool = self
            .registry
            .get(name)
            .with_context(|| format!("tool '{name}' is not registered"))?;
        tool.execute(text)
            .await
            .with_context(|| format!("tool '{name}' failed"))
    }
}

// ─────────────────────────────────────────────
// Handlers
// ─────────────────────────────────────────────

/// Summarize the input file and store it under `last_summary`.
pub async fn summarize(app: &App, input: &Path, out: &mut dyn Write) -> Result<()> {
    let Some(content) = helpers::read_input(input, out)? else {
        return Ok(());
    };

    let summary = app.run_tool("summarize", &content).await?;
    writeln!(out, "{}", summary.as_text())?;

    let outcome = app.store.set(LAST_SUMMARY_KEY, Value::from(summary));
    if !outcome.persisted {
        helpers::print_not_saved(out, app.store.path())?;
    }
    Ok(())
}

/// Build a todo list from the input file and store it under `last_todo`.
pub async fn todo(app: &App, input: &Path, out: &mut dyn Write) -> Result<()> {
    let Some(content) = helpers::read_input(input, out)? else {
        return Ok(());
    };

    let todos = app.run_tool("todo", &content).await?;
    writeln!(out, "{}", "Generated TODOs:".bold())?;
    writeln!(out, "{}", todos.as_text())?;

    let outcome = app.store.set(LAST_TODO_KEY, Value::from(todos));
    if !outcome.persisted {
        helpers::print_not_saved(out, app.store.path())?;
    }
    Ok(())
}

/// Run the summarize → todo pipeline on the input file.
pub async fn orchestrate(app: &App, input: &Path, out: &mut dyn Write) -> Result<()> {
    writeln!(out, "{}", "=== Orchestrator Starting ===".cyan().bold())?;

    let Some(content) = helpers::read_input(input, out)? else {
        return Ok(());
    };

    let report = Orchestrator::new(&app.registry, &app.store)
        .run(&content)
        .await;

    for name in &report.skipped {
        writeln!(out, "{}", format!("Tool not found or failed: {name}").yellow())?;
    }

    helpers::print_heading(out, "Summary:")?;
    writeln!(out, "{}", report.summary())?;

    helpers::print_heading(out, "Todos:")?;
    helpers::print_lines(out, report.todos())?;

    if !report.persisted {
        helpers::print_not_saved(out, app.store.path())?;
    }

    writeln!(out, "{}", "=== Orchestrator Finished ===".cyan().bold())?;
    Ok(())
}

/// List the registered tools.
pub fn tools(app: &App, out: &mut dyn Write) -> Result<()> {
    writeln!(out, "{}", "Registered tools:".bold())?;
    for info in app.registry.tools() {
        writeln!(out, "  {:<12} {}", info.name.cyan(), info.description)?;
        writeln!(
            out,
            "  {:<12} {}",
            "",
            format!("inputs: [{}]  outputs: [{}]", info.inputs.join(", "), info.outputs.join(", "))
                .dimmed()
        )?;
    }
    Ok(())
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn offline_app(dir: &tempfile::TempDir) -> App {
        App::new(
            Config::default(),
            builtin_registry(Summarizer::offline()),
            StateStore::new(dir.path().join("agent_state.json")),
        )
    }

    fn write_input(dir: &tempfile::TempDir, text: &str) -> std::path::PathBuf {
        let path = dir.path().join("input.txt");
        std::fs::write(&path, text).unwrap();
        path
    }

    fn printed(out: Vec<u8>) -> String {
        String::from_utf8(out).unwrap()
    }

    #[tokio::test]
    async fn summarize_prints_and_persists() {
        let dir = tempfile::tempdir().unwrap();
        let app = offline_app(&dir);
        let input = write_input(&dir, "First task. Second task.");

        let mut out = Vec::new();
        summarize(&app, &input, &mut out).await.unwrap();

        assert!(printed(out).contains("First task."));
        assert_eq!(app.store.load()[LAST_SUMMARY_KEY], json!("First task."));
    }

    #[tokio::test]
    async fn todo_prints_and_persists() {
        let dir = tempfile::tempdir().unwrap();
        let app = offline_app(&dir);
        let input = write_input(&dir, "First task. Second task. Third task.");

        let mut out = Vec::new();
        todo(&app, &input, &mut out).await.unwrap();

        let text = printed(out);
        assert!(text.contains("Generated TODOs:"));
        assert!(text.contains("- First task\n- Second task\n- Third task"));
        assert_eq!(
            app.store.load()[LAST_TODO_KEY],
            json!(["- First task", "- Second task", "- Third task"])
        );
    }

    #[tokio::test]
    async fn orchestrate_prints_banners_and_persists() {
        let dir = tempfile::tempdir().unwrap();
        let app = offline_app(&dir);
        let input = write_input(&dir, "First task. Second task. Third task.");

        let mut out = Vec::new();
        orchestrate(&app, &input, &mut out).await.unwrap();

        let text = printed(out);
        assert!(text.contains("Orchestrator Starting"));
        assert!(text.contains("Summary:"));
        assert!(text.contains("Todos:"));
        assert!(text.contains("- First task"));
        assert!(text.contains("Orchestrator Finished"));

        let state = app.store.load();
        assert_eq!(state["summarize"], json!("First task."));
        assert_eq!(state["todo"], json!(["- First task"]));
    }

    #[tokio::test]
    async fn missing_input_leaves_state_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let app = offline_app(&dir);
        let missing = dir.path().join("nope.txt");

        for run in 0..3 {
            let mut out = Vec::new();
            match run {
                0 => summarize(&app, &missing, &mut out).await.unwrap(),
                1 => todo(&app, &missing, &mut out).await.unwrap(),
                _ => orchestrate(&app, &missing, &mut out).await.unwrap(),
            }
            assert!(printed(out).contains("not found"));
        }

        assert!(!app.store.path().exists());
    }

    #[tokio::test]
    async fn missing_tool_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let app = App::new(
            Config::default(),
            ToolRegistry::new(),
            StateStore::new(dir.path().join("agent_state.json")),
        );
        let input = write_input(&dir, "x.");

        let err = summarize(&app, &input, &mut Vec::new()).await.unwrap_err();
        assert!(err.to_string().contains("not registered"));
    }

    #[tokio::test]
    async fn unwritable_state_still_prints_results() {
        let dir = tempfile::tempdir().unwrap();
        let app = App::new(
            Config::default(),
            builtin_registry(Summarizer::offline()),
            StateStore::new(dir.path()),
        );
        let input = write_input(&dir, "Only task.");

        let mut out = Vec::new();
        todo(&app, &input, &mut out).await.unwrap();

        let text = printed(out);
        assert!(text.contains("- Only task"));
        assert!(text.contains("could not save state"));
    }

    #[test]
    fn tools_lists_builtins() {
        let dir = tempfile::tempdir().unwrap();
        let app = offline_app(&dir);

        let mut out = Vec::new();
        tools(&app, &mut out).unwrap();

        let text = printed(out);
        assert!(text.contains("summarize"));
        assert!(text.contains("Summarize input text into a short summary"));
        assert!(text.contains("todo"));
        assert!(text.contains("Generate a todo list from text"));
    }
}
