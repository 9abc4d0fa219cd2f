//! Tool trait — the interface every registered tool implements.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

// ─────────────────────────────────────────────
// Tool output
// ─────────────────────────────────────────────

/// What a tool hands back: a single string or an ordered list of strings.
///
/// Serialized untagged, so it lands in the state file as a plain JSON string
/// or a JSON array of strings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ToolOutput {
    Text(String),
    Items(Vec<String>),
}

impl ToolOutput {
    /// Text form used when this output feeds the next step.
    ///
    /// Items are joined with newlines.
    pub fn as_text(&self) -> String {
        match self {
            ToolOutput::Text(text) => text.clone(),
            ToolOutput::Items(items) => items.join("\n"),
        }
    }

    /// Borrow the items, if this is a list.
    pub fn items(&self) -> Option<&[String]> {
        match self {
            ToolOutput::Items(items) => Some(items),
            ToolOutput::Text(_) => None,
        }
    }
}

impl From<String> for ToolOutput {
    fn from(text: String) -> Self {
        ToolOutput::Text(text)
    }
}

impl From<Vec<String>> for ToolOutput {
    fn from(items: Vec<String>) -> Self {
        ToolOutput::Items(items)
    }
}

impl From<ToolOutput> for Value {
    fn from(output: ToolOutput) -> Self {
        match output {
            ToolOutput::Text(text) => Value::String(text),
            ToolOutput::Items(items) => Value::Array(items.into_iter().map(Value::String).collect()),
        }
    }
}

// ─────────────────────────────────────────────
// Tool metadata
// ─────────────────────────────────────────────

/// Descriptive record of a registered tool (everything but the handler).
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ToolInfo {
    pub name: String,
    pub description: String,
    pub inputs: Vec<String>,
    pub outputs: Vec<String>,
}

// ─────────────────────────────────────────────
// Tool trait
// ─────────────────────────────────────────────

/// Every tool implements this trait.
///
/// The orchestrator looks tools up by `name()` and calls `execute()` with the
/// current working text.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Unique registry key (e.g. `"summarize"`).
    fn name(&self) -> &str;

    /// Human-readable description.
    fn description(&self) -> &str;

    /// Declared input names, in order.
    fn inputs(&self) -> Vec<String>;

    /// Declared output names, in order.
    fn outputs(&self) -> Vec<String>;

    /// Run the tool on `text`.
    async fn execute(&self, text: &str) -> anyhow::Result<ToolOutput>;

    /// Snapshot of the tool's metadata.
    fn info(&self) -> ToolInfo {
        ToolInfo {
            name: self.name().to_string(),
            description: self.description().to_string(),
            inputs: self.inputs(),
            outputs: self.outputs(),
        }
    }
}

// ─────────────────────────────────────────────
// Closure-backed tool
// ─────────────────────────────────────────────

type Handler = Box<dyn Fn(&str) -> ToolOutput + Send + Sync>;

/// A tool built from a plain synchronous function plus metadata.
pub struct FnTool {
    info: ToolInfo,
    handler: Handler,
}

impl FnTool {
    pub fn new<F>(
        name: impl Into<String>,
        description: impl Into<String>,
        inputs: &[&str],
        outputs: &[&str],
        handler: F,
    ) -> Self
    where
        F: Fn(&str) -> ToolOutput + Send + Sync + 'static,
    {
        FnTool {
            info: ToolInfo {
                name: name.into(),
                description: description.into(),
                inputs: inputs.iter().map(|s| s.to_string()).collect(),
                outputs: outputs.iter().map(|s| s.to_string()).collect(),
            },
            handler: Box::new(handler),
        }
    }
}

#[async_trait]
impl Tool for FnTool {
    fn name(&self) -> &str {
        &self.info.name
    }

    fn description(&self) -> &str {
        &self.info.description
    }

    fn inputs(&self) -> Vec<String> {
        self.info.inputs.clone()
    }

    fn outputs(&self) -> Vec<String> {
        self.info.outputs.clone()
    }

    async fn execute(&self, text: &str) -> anyhow::Result<ToolOutput> {
        Ok((self.handler)(text))
    }

    fn info(&self) -> ToolInfo {
        self.info.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_output_serializes_untagged() {
        assert_eq!(
            serde_json::to_value(ToolOutput::Text("Short.".into())).unwrap(),
            json!("Short.")
        );
        assert_eq!(
            serde_json::to_value(ToolOutput::Items(vec!["- a".into(), "- b".into()])).unwrap(),
            json!(["- a", "- b"])
        );
    }

    #[test]
    fn test_output_into_value_matches_serde() {
        let items = ToolOutput::Items(vec!["- a".into()]);
        assert_eq!(Value::from(items.clone()), serde_json::to_value(items).unwrap());
    }

    #[test]
    fn test_output_deserializes_both_shapes() {
        let text: ToolOutput = serde_json::from_value(json!("x.")).unwrap();
        assert_eq!(text, ToolOutput::Text("x.".into()));
        let items: ToolOutput = serde_json::from_value(json!(["- x"])).unwrap();
        assert_eq!(items.items(), Some(&["- x".to_string()][..]));
    }

    #[test]
    fn test_as_text() {
        assert_eq!(ToolOutput::Text("a. b.".into()).as_text(), "a. b.");
        assert_eq!(
            ToolOutput::Items(vec!["- a".into(), "- b".into()]).as_text(),
            "- a\n- b"
        );
    }

    #[tokio::test]
    async fn test_fn_tool_runs_handler_and_reports_info() {
        let tool = FnTool::new("shout", "Uppercase the text", &["text"], &["loud"], |t| {
            ToolOutput::Text(t.to_uppercase())
        });

        assert_eq!(tool.execute("hi").await.unwrap(), ToolOutput::Text("HI".into()));

        let info = tool.info();
        assert_eq!(info.name, "shout");
        assert_eq!(info.description, "Uppercase the text");
        assert_eq!(info.inputs, vec!["text"]);
        assert_eq!(info.outputs, vec!["loud"]);
    }
}
