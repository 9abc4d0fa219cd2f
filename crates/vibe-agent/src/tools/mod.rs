//! Tool modules for the Vibe agent.

pub mod base;
pub mod registry;
pub mod summarize;
pub mod todo;

use std::sync::Arc;

pub use base::{FnTool, Tool, ToolInfo, ToolOutput};
pub use registry::ToolRegistry;
pub use summarize::{degraded_summary, Summarizer};
pub use todo::{generate_todos, TodoTool};

/// Register the built-in `summarize` and `todo` tools.
pub fn register_builtin_tools(registry: &mut ToolRegistry, summarizer: Summarizer) {
    registry.register(Arc::new(summarizer));
    registry.register(Arc::new(TodoTool));
}

/// A fresh registry holding only the built-in tools.
pub fn builtin_registry(summarizer: Summarizer) -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    register_builtin_tools(&mut registry, summarizer);
    registry
}
