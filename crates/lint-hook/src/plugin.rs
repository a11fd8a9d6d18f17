//! The file-check plugin.
//!
//! [`FileCheckPlugin`] owns the whole check lifecycle for every file it
//! watches:
//!
//! - reacts to open/save events for files matching the configured suffix;
//! - pipes the file's current content to the external checker;
//! - keeps at most one mark per file, replacing it on every re-check;
//! - renders a parsed failure as a line mark plus an advisory panel.
//!
//! Hosts supply the capabilities ([`FileStore`], [`CheckRunner`],
//! [`EditorSurface`]) and the plugin never touches the filesystem, processes,
//! or UI behind their backs.

use tracing::{debug, warn};

use crate::advisory::Advisory;
use crate::config::CheckConfig;
use crate::error::CheckError;
use crate::events::FileEvent;
use crate::host::{CheckRunner, EditorSurface, FileEventListener, FileStore};
use crate::marks::{MarkRegistry, MarkSpec, line_columns};
use crate::parse::{Diagnostic, parse_diagnostic};
use crate::suggest::suggestion_for;

/// Checks files with an external command and surfaces the first error.
///
/// The plugin is deliberately forgetful: it holds no per-file state beyond
/// the live marks, so every check starts from the file's current content and
/// the checker's current verdict.
pub struct FileCheckPlugin {
    config: CheckConfig,
    files: Box<dyn FileStore>,
    runner: Box<dyn CheckRunner>,
    surface: Box<dyn EditorSurface>,
    marks: MarkRegistry,
}

impl FileCheckPlugin {
    /// Wire a plugin to its host capabilities.
    pub fn new(
        config: CheckConfig,
        files: Box<dyn FileStore>,
        runner: Box<dyn CheckRunner>,
        surface: Box<dyn EditorSurface>,
    ) -> Self {
        Self {
            config,
            files,
            runner,
            surface,
            marks: MarkRegistry::new(),
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &CheckConfig {
        &self.config
    }

    /// Whether a live mark exists for `uri`.
    pub fn has_mark(&self, uri: &str) -> bool {
        self.marks.contains(uri)
    }

    /// Check one file now, regardless of its suffix.
    ///
    /// On success returns the diagnostic that was rendered, or `None` for a
    /// clean verdict. The stale-mark rule: a failure to read or run leaves
    /// any existing mark in place (the last known verdict), while a
    /// successful run always clears it before the new verdict is rendered.
    pub fn check_file(&mut self, uri: &str) -> Result<Option<Diagnostic>, CheckError> {
        let source = self
            .files
            .read_to_string(uri)
            .map_err(|source| CheckError::Read {
                uri: uri.to_string(),
                source,
            })?;

        let output = self.runner.run(&self.config.command, &source)?;

        // The checker ran: whatever we marked before no longer reflects it.
        self.marks.clear(uri);

        if output.stderr.is_empty() {
            debug!(uri, "checker verdict clean");
            return Ok(None);
        }

        let Some(diagnostic) = parse_diagnostic(&output.stderr) else {
            debug!(uri, "checker output not parseable, showing nothing");
            return Ok(None);
        };

        self.render(uri, &source, &diagnostic);
        Ok(Some(diagnostic))
    }

    /// Drop every live mark. Also happens implicitly when the plugin drops.
    pub fn shutdown(&mut self) {
        self.marks.clear_all();
    }

    fn render(&mut self, uri: &str, source: &str, diagnostic: &Diagnostic) {
        let line_index = (diagnostic.line - 1) as usize;
        let spec = MarkSpec {
            line: line_index,
            columns: line_columns(source, line_index),
            style_class: self.config.style_class.clone(),
            tooltip: diagnostic.message.clone(),
        };

        let mark = self.surface.mark_line(uri, &spec);
        self.marks.install(uri, mark);

        let advisory = Advisory {
            title: self.config.panel_title.clone(),
            line: diagnostic.line,
            message: diagnostic.message.clone(),
            suggestion: suggestion_for(&diagnostic.message).to_string(),
        };
        self.surface.show_advisory(&advisory);

        debug!(uri, line = diagnostic.line, "diagnostic rendered");
    }
}

impl FileEventListener for FileCheckPlugin {
    /// Open and save both trigger a check; other files are ignored by suffix.
    ///
    /// This is the catch boundary: check failures are logged and swallowed so
    /// a broken checker can never take the host's event loop down with it.
    fn on_file_event(&mut self, event: &FileEvent) {
        let uri = event.file.uri.as_str();
        if !self.config.matches_uri(uri) {
            return;
        }

        debug!(kind = ?event.kind, uri, "file event");
        if let Err(err) = self.check_file(uri) {
            warn!(uri, error = %err, "file check failed, keeping previous verdict");
        }
    }
}
