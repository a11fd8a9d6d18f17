//! Checker configuration.
//!
//! [`CheckConfig`] is caller-supplied: hosts construct one (or load one from a
//! JSON file) and hand it to the plugin. The default configuration reproduces
//! the Python compile check this engine was built around, but nothing in the
//! pipeline is Python-specific — any tool that reads source text on stdin and
//! reports `line N` locations on stderr fits.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;
use std::time::Duration;

/// The external command the file's text is piped through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckCommand {
    /// Executable name or path.
    pub program: String,
    /// Arguments, one per element (no shell involved).
    #[serde(default)]
    pub args: Vec<String>,
}

impl CheckCommand {
    /// Create a command with no arguments.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Append one argument.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }
}

/// Configuration for one checker integration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckConfig {
    /// File-name suffix that selects files for checking, e.g. `".py"`.
    /// Events for files whose uri does not end with this suffix are ignored.
    pub extension: String,
    /// The checking command. The file's full text is written to its stdin.
    pub command: CheckCommand,
    /// Style class attached to the line mark, resolved by the host's theme.
    pub style_class: String,
    /// Title of the advisory panel.
    pub panel_title: String,
    /// Optional deadline for one checker run, in milliseconds.
    ///
    /// `None` waits for the checker indefinitely. On expiry the run fails with
    /// [`CheckError::Timeout`](crate::CheckError::Timeout); the child is not
    /// killed, it is reaped in the background when it eventually exits.
    pub timeout_ms: Option<u64>,
}

impl Default for CheckConfig {
    /// The Python compile check: `python3 -m py_compile -`.
    fn default() -> Self {
        Self {
            extension: ".py".to_string(),
            command: CheckCommand::new("python3").arg("-m").arg("py_compile").arg("-"),
            style_class: "lint-error".to_string(),
            panel_title: "Python Linter".to_string(),
            timeout_ms: None,
        }
    }
}

impl CheckConfig {
    /// Returns `true` if `uri` names a file this configuration checks.
    pub fn matches_uri(&self, uri: &str) -> bool {
        uri.ends_with(&self.extension)
    }

    /// The configured deadline as a [`Duration`], if any.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }

    /// Parse a configuration from JSON text.
    ///
    /// Missing fields fall back to their [`Default`] values, so a file may
    /// override just the command or just the extension.
    pub fn from_json(json: &str) -> io::Result<Self> {
        serde_json::from_str(json).map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))
    }

    /// Load a configuration from a JSON file.
    pub fn from_json_file(path: &Path) -> io::Result<Self> {
        Self::from_json(&fs::read_to_string(path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_python_compile_check() {
        let config = CheckConfig::default();
        assert_eq!(config.extension, ".py");
        assert_eq!(config.command.program, "python3");
        assert_eq!(config.command.args, vec!["-m", "py_compile", "-"]);
        assert_eq!(config.style_class, "lint-error");
        assert_eq!(config.timeout_ms, None);
    }

    #[test]
    fn test_matches_uri_is_a_suffix_test() {
        let config = CheckConfig::default();
        assert!(config.matches_uri("file:///home/me/script.py"));
        assert!(config.matches_uri("script.py"));
        assert!(!config.matches_uri("file:///home/me/script.pyc"));
        assert!(!config.matches_uri("file:///home/me/notes.md"));
        assert!(!config.matches_uri(""));
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config = CheckConfig::from_json(r#"{ "timeout_ms": 5000 }"#).unwrap();
        assert_eq!(config.timeout(), Some(Duration::from_millis(5000)));
        assert_eq!(config.extension, ".py");

        let config = CheckConfig::from_json(
            r#"{ "extension": ".lua", "command": { "program": "luac", "args": ["-p", "-"] } }"#,
        )
        .unwrap();
        assert_eq!(config.extension, ".lua");
        assert_eq!(config.command.program, "luac");
        assert_eq!(config.timeout_ms, None);
    }

    #[test]
    fn test_invalid_json_is_invalid_data() {
        let err = CheckConfig::from_json("{ nope").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_json_round_trip() {
        let config = CheckConfig {
            timeout_ms: Some(250),
            ..CheckConfig::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(CheckConfig::from_json(&json).unwrap(), config);
    }
}
