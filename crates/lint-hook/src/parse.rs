//! Checker output parsing.
//!
//! This is deliberately not a diagnostic-format parser. The contract is two
//! fields scraped from free text, nothing more:
//!
//! - **line**: the digits of the first `line <digits>` token anywhere in the
//!   text (case-sensitive, one space, ASCII digits);
//! - **message**: the first line whose trimmed form is non-empty and is not a
//!   source-location frame (a line starting, after indentation, with
//!   `File "`).
//!
//! If either field is missing the whole parse fails and the caller shows
//! nothing. Checkers whose output drifts from this shape simply stop
//! producing marks; they never produce wrong ones from partial matches.

use regex::Regex;
use std::sync::LazyLock;

/// One parsed diagnostic. Lives only for the duration of a single check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// One-based line number reported by the checker. Never zero.
    pub line: u32,
    /// The first eligible message line, trimmed.
    pub message: String,
}

static LINE_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"line ([0-9]+)").expect("fixed pattern"));

/// Parse checker error text into a [`Diagnostic`].
///
/// Returns `None` when no `line <digits>` token is found, when the digits are
/// zero or exceed `u32`, or when no eligible message line exists.
pub fn parse_diagnostic(text: &str) -> Option<Diagnostic> {
    let line = LINE_TOKEN
        .captures(text)?
        .get(1)?
        .as_str()
        .parse::<u32>()
        .ok()
        .filter(|&line| line > 0)?;

    let message = text
        .lines()
        .map(str::trim)
        .find(|candidate| !candidate.is_empty() && !is_location_line(candidate))?;

    Some(Diagnostic {
        line,
        message: message.to_string(),
    })
}

/// Location frames look like `  File "<stdin>", line 4, in <module>`.
///
/// The check runs on the trimmed line so both indented traceback frames and
/// flush-left variants are excluded, while messages that merely begin with the
/// word `File` (e.g. `FileNotFoundError: ...`) are not.
fn is_location_line(trimmed: &str) -> bool {
    trimmed.starts_with("File \"")
}
