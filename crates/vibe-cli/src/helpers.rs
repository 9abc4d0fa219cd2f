//! Shared CLI helpers — input loading and output formatting.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;

/// Read the whole input file.
///
/// Prints `Input file not found: <path>` and returns `None` when the file is
/// missing; other read failures are errors.
pub fn read_input(path: &Path, out: &mut dyn Write) -> Result<Option<String>> {
    if !path.exists() {
        writeln!(out, "Input file not found: {}", path.display())?;
        return Ok(None);
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    Ok(Some(content))
}

/// Print a bold section heading preceded by a blank line.
pub fn print_heading(out: &mut dyn Write, title: &str) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", title.bold())?;
    Ok(())
}

/// Print one item per line.
pub fn print_lines(out: &mut dyn Write, lines: &[String]) -> Result<()> {
    for line in lines {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

/// Warn that results were printed but not saved.
pub fn print_not_saved(out: &mut dyn Write, state_path: &Path) -> Result<()> {
    writeln!(
        out,
        "{}",
        format!("Warning: could not save state to {}", state_path.display()).yellow()
    )?;
    Ok(())
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_input_missing_file() {
        let mut out = Vec::new();
        let result = read_input(Path::new("/nonexistent/file.txt"), &mut out).unwrap();
        assert!(result.is_none());
        let printed = String::from_utf8(out).unwrap();
        assert!(printed.contains("Input file not found: /nonexistent/file.txt"));
    }

    #[test]
    fn read_input_present_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.txt");
        std::fs::write(&path, "First task. Second task.").unwrap();

        let mut out = Vec::new();
        let result = read_input(&path, &mut out).unwrap();
        assert_eq!(result.as_deref(), Some("First task. Second task."));
        assert!(out.is_empty());
    }

    #[test]
    fn print_lines_one_per_line() {
        let mut out = Vec::new();
        print_lines(&mut out, &["- a".to_string(), "- b".to_string()]).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "- a\n- b\n");
    }
}
