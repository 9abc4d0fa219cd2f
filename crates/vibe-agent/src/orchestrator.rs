//! Orchestrator — runs a fixed list of tools in order and saves the results.
//!
//! Each step looks its tool up in the registry, runs it on the current working
//! text, and records the output under the tool's name. Steps marked
//! `feeds_forward` replace the working text with their output; with the
//! default pipeline that means the todo list is built from the summary, not
//! from the original input.

use std::collections::BTreeMap;

use serde_json::Value;
use tracing::{debug, info, warn};

use vibe_core::state::{State, StateStore};

use crate::tools::{ToolOutput, ToolRegistry};

// ─────────────────────────────────────────────
// Pipeline steps
// ─────────────────────────────────────────────

/// One pipeline step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Step {
    /// Registry name of the tool to run.
    pub tool: String,
    /// Whether this step's output becomes the next step's input.
    pub feeds_forward: bool,
}

impl Step {
    /// A step whose output is passed on.
    pub fn chained(tool: impl Into<String>) -> Self {
        Self {
            tool: tool.into(),
            feeds_forward: true,
        }
    }

    /// A step whose output is only recorded.
    pub fn terminal(tool: impl Into<String>) -> Self {
        Self {
            tool: tool.into(),
            feeds_forward: false,
        }
    }
}

/// `summarize` (chained) then `todo`.
pub fn default_pipeline() -> Vec<Step> {
    vec![Step::chained("summarize"), Step::terminal("todo")]
}

// ─────────────────────────────────────────────
// Report
// ─────────────────────────────────────────────

/// Outcome of one orchestration run.
#[derive(Clone, Debug, PartialEq)]
pub struct PipelineReport {
    /// Output of each step that ran, keyed by tool name.
    pub results: BTreeMap<String, ToolOutput>,
    /// Steps that were skipped (unknown tool or tool error), in order.
    pub skipped: Vec<String>,
    /// Full state after merging `results`.
    pub state: State,
    /// Whether the merged state reached the disk.
    pub persisted: bool,
}

impl PipelineReport {
    /// The summary text, or `""` if the summarize step didn't run.
    pub fn summary(&self) -> &str {
        match self.results.get("summarize") {
            Some(ToolOutput::Text(text)) => text.as_str(),
            _ => "",
        }
    }

    /// The todo items, or an empty slice if the todo step didn't run.
    pub fn todos(&self) -> &[String] {
        self.results
            .get("todo")
            .and_then(ToolOutput::items)
            .unwrap_or(&[])
    }
}

// ─────────────────────────────────────────────
// Orchestrator
// ─────────────────────────────────────────────

/// Drives a pipeline over a registry and persists into a state store.
pub struct Orchestrator<'a> {
    registry: &'a ToolRegistry,
    store: &'a StateStore,
    steps: Vec<Step>,
}

impl<'a> Orchestrator<'a> {
    /// Orchestrator running [`default_pipeline`].
    pub fn new(registry: &'a ToolRegistry, store: &'a StateStore) -> Self {
        Self {
            registry,
            store,
            steps: default_pipeline(),
        }
    }

    /// Replace the step list.
    pub fn with_steps(mut self, steps: Vec<Step>) -> Self {
        self.steps = steps;
        self
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Run every step on `text`, then merge the results into the store.
    ///
    /// Never fails: unknown tools and tool errors skip the step, and a failed
    /// save is reported through [`PipelineReport::persisted`].
    pub async fn run(&self, text: &str) -> PipelineReport {
        info!(steps = self.steps.len(), "orchestrator starting");

        let mut working = text.to_string();
        let mut results = BTreeMap::new();
        let mut skipped = Vec::new();

        for step in &self.steps {
            let Some(tool) = self.registry.get(&step.tool) else {
                warn!(tool = %step.tool, "tool not found, skipping step");
                skipped.push(step.tool.clone());
                continue;
            };

            debug!(tool = %step.tool, input_len = working.len(), "running step");
            let output = match tool.execute(&working).await {
                Ok(output) => output,
                Err(e) => {
                    warn!(tool = %step.tool, error = %e, "tool failed, skipping step");
                    skipped.push(step.tool.clone());
                    continue;
                }
            };

            if step.feeds_forward {
                working = output.as_text();
            }
            results.insert(step.tool.clone(), output);
        }

        let updates: State = results
            .iter()
            .map(|(name, output)| (name.clone(), Value::from(output.clone())))
            .collect();
        let outcome = self.store.merge(updates);

        info!(
            ran = results.len(),
            skipped = skipped.len(),
            persisted = outcome.persisted,
            "orchestrator finished"
        );

        PipelineReport {
            results,
            skipped,
            state: outcome.state,
            persisted: outcome.persisted,
        }
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
