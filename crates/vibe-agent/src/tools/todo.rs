//! `todo` tool — turns sentences into a todo list.

use async_trait::async_trait;

use super::base::{Tool, ToolOutput};

/// Split `text` on periods into `"- "`-prefixed items.
///
/// Segments are trimmed and empty ones dropped, so consecutive and trailing
/// periods produce nothing. Order is preserved.
pub fn generate_todos(text: &str) -> Vec<String> {
    text.split('.')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(|segment| format!("- {segment}"))
        .collect()
}

/// Registry wrapper around [`generate_todos`].
pub struct TodoTool;

#[async_trait]
impl Tool for TodoTool {
    fn name(&self) -> &str {
        "todo"
    }

    fn description(&self) -> &str {
        "Generate a todo list from text"
    }

    fn inputs(&self) -> Vec<String> {
        vec!["text".into()]
    }

    fn outputs(&self) -> Vec<String> {
        vec!["todos".into()]
    }

    async fn execute(&self, text: &str) -> anyhow::Result<ToolOutput> {
        Ok(ToolOutput::Items(generate_todos(text)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic() {
        assert_eq!(
            generate_todos("First task. Second task. Third task."),
            vec!["- First task", "- Second task", "- Third task"]
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(generate_todos("").is_empty());
    }

    #[test]
    fn test_only_periods_and_whitespace() {
        assert!(generate_todos(" . .. \n. ").is_empty());
    }

    #[test]
    fn test_single_task() {
        assert_eq!(generate_todos("Single task."), vec!["- Single task"]);
    }

    #[test]
    fn test_no_period() {
        assert_eq!(generate_todos("No periods here"), vec!["- No periods here"]);
    }

    #[test]
    fn test_no_period_is_trimmed() {
        assert_eq!(generate_todos("  padded  \n"), vec!["- padded"]);
    }

    #[test]
    fn test_consecutive_periods_collapse() {
        let todos = generate_todos("Task one. . Task two.");
        assert_eq!(todos, vec!["- Task one", "- Task two"]);
    }

    #[test]
    fn test_strips_whitespace() {
        assert_eq!(
            generate_todos("  Task one  .  Task two  ."),
            vec!["- Task one", "- Task two"]
        );
    }

    #[test]
    fn test_count_matches_non_empty_segments() {
        for text in [
            "a.b.c",
            "...",
            "one. two.. three...",
            "\tx .\n y . ",
            "trailing text without end",
        ] {
            let expected = text.split('.').filter(|s| !s.trim().is_empty()).count();
            assert_eq!(generate_todos(text).len(), expected, "input: {text:?}");
        }
    }

    #[tokio::test]
    async fn test_tool_metadata_and_execute() {
        let tool = TodoTool;
        assert_eq!(tool.name(), "todo");
        assert_eq!(tool.description(), "Generate a todo list from text");
        assert_eq!(tool.inputs(), vec!["text"]);
        assert_eq!(tool.outputs(), vec!["todos"]);

        let out = tool.execute("A. B.").await.unwrap();
        assert_eq!(out, ToolOutput::Items(vec!["- A".into(), "- B".into()]));
    }
}
