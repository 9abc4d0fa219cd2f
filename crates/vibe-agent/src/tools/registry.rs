//! Tool Registry — name → tool lookup.
//!
//! Built once at startup, then shared read-only with the orchestrator and the
//! command handlers.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use super::base::{FnTool, Tool, ToolInfo, ToolOutput};

// ─────────────────────────────────────────────
// Registry
// ─────────────────────────────────────────────

/// Stores tools keyed by name.
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn Tool>>,
}

impl ToolRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// Register a tool. Overwrites any previous tool with the same name.
    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        let name = tool.name().to_string();
        if self.tools.insert(name.clone(), tool).is_some() {
            debug!(tool = %name, "replaced tool");
        } else {
            debug!(tool = %name, "registered tool");
        }
    }

    /// Register a plain function as a tool.
    pub fn register_fn<F>(
        &mut self,
        name: &str,
        description: &str,
        inputs: &[&str],
        outputs: &[&str],
        handler: F,
    ) where
        F: Fn(&str) -> ToolOutput + Send + Sync + 'static,
    {
        self.register(Arc::new(FnTool::new(name, description, inputs, outputs, handler)));
    }

    /// Look up a tool by name. Absence is a normal outcome.
    pub fn get(&self, name: &str) -> Option<&Arc<dyn Tool>> {
        self.tools.get(name)
    }

    /// Check if a tool is registered.
    pub fn has(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// Names of all registered tools, sorted for determinism.
    pub fn tool_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.tools.keys().cloned().collect();
        names.sort();
        names
    }

    /// Metadata for every registered tool, sorted by name.
    pub fn tools(&self) -> Vec<ToolInfo> {
        let mut infos: Vec<ToolInfo> = self.tools.values().map(|t| t.info()).collect();
        infos.sort_by(|a, b| a.name.cmp(&b.name));
        infos
    }

    /// Number of registered tools.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}
