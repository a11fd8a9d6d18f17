//! Terminal rendering of marks and advisories.
//!
//! A mark is a printed location line plus a caret underline below the
//! offending source line; an advisory is a titled block. Withdrawn marks
//! leave the scrollback untouched, so "clearing" only logs.

use lint_hook::{Advisory, EditorSurface, FileStore, LocalFileStore, Mark, MarkSpec, uri_to_path};
use tracing::debug;
use unicode_width::UnicodeWidthStr;

/// [`EditorSurface`] that writes verdicts to stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalSurface {
    files: LocalFileStore,
}

impl TerminalSurface {
    /// Create a surface writing to the current process stdout.
    pub fn new() -> Self {
        Self::default()
    }
}

struct PrintedMark {
    uri: String,
}

impl Mark for PrintedMark {
    fn clear(&mut self) {
        debug!(uri = %self.uri, "mark withdrawn");
    }
}

/// Prefer a filesystem path over the raw uri when printing locations.
pub fn display_name(uri: &str) -> String {
    uri_to_path(uri)
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| uri.to_string())
}

impl EditorSurface for TerminalSurface {
    fn mark_line(&mut self, uri: &str, spec: &MarkSpec) -> Box<dyn Mark> {
        println!("{}:{}: {}", display_name(uri), spec.line + 1, spec.tooltip);

        // Echo the flagged line with a caret underline over the marked span,
        // clamped to the line's real width.
        if let Ok(text) = self.files.read_to_string(uri)
            && let Some(line) = text.lines().nth(spec.line)
        {
            let width = line.width();
            let start = spec.columns.start.min(width);
            let span = spec.columns.end.min(width.max(1)).saturating_sub(start).max(1);
            println!("  {line}");
            println!("  {}{}", " ".repeat(start), "^".repeat(span));
        }

        Box::new(PrintedMark {
            uri: uri.to_string(),
        })
    }

    fn show_advisory(&mut self, advisory: &Advisory) {
        println!();
        println!("-- {} --", advisory.title);
        println!("Error on line {}: {}", advisory.line, advisory.message);
        println!("Suggested fix: {}", advisory.suggestion);
    }
}
