//! Vibe Agent — tool registry, built-in tools, and the orchestrator.
//!
//! This crate contains:
//! - **tools**: Tool trait, registry, and the `summarize` / `todo` tools
//! - **orchestrator**: runs tools in sequence and persists their results

pub mod orchestrator;
pub mod tools;

pub use orchestrator::{default_pipeline, Orchestrator, PipelineReport, Step};
pub use tools::{builtin_registry, register_builtin_tools, Summarizer, Tool, ToolOutput, ToolRegistry};
