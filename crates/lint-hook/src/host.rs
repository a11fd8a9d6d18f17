//! Host capability interfaces.
//!
//! The engine does not own an editor, a filesystem, or a process sandbox; it
//! borrows all three from whichever host embeds it. Each capability is a small
//! trait:
//!
//! - [`FileStore`] — read a file's full text by uri
//! - [`CheckRunner`] — run the checking command with text on stdin
//! - [`EditorSurface`] — mark a line range, show an advisory panel
//!
//! Event delivery is the fourth seam: hosts hold a [`FileEventListener`] and
//! call it from their native event mechanism. The shipped implementations
//! ([`LocalFileStore`](crate::LocalFileStore),
//! [`ProcessCheckRunner`](crate::ProcessCheckRunner)) target the local
//! machine; editor embeddings supply their own.

use crate::advisory::Advisory;
use crate::config::CheckCommand;
use crate::error::CheckError;
use crate::events::FileEvent;
use crate::marks::MarkSpec;
use std::io;

/// Read access to the host's files, keyed by uri.
pub trait FileStore {
    /// Read the entire file named by `uri` as UTF-8 text.
    fn read_to_string(&self, uri: &str) -> io::Result<String>;
}

/// Captured output of one checker run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckOutput {
    /// Everything the checker wrote to stdout.
    pub stdout: String,
    /// Everything the checker wrote to stderr. Empty means the file is clean.
    pub stderr: String,
}

/// Execution of the external checking command.
pub trait CheckRunner {
    /// Run `command`, writing `input` to its stdin, and capture both output
    /// streams. The call blocks until the checker exits (or the
    /// implementation's deadline elapses).
    fn run(&self, command: &CheckCommand, input: &str) -> Result<CheckOutput, CheckError>;
}

/// A disposable handle to one installed line mark.
///
/// Returned by [`EditorSurface::mark_line`]; the engine keeps it in its
/// registry and calls [`Mark::clear`] before re-checking the file and on
/// teardown.
pub trait Mark {
    /// Remove the mark from the editor view. Called at most once.
    fn clear(&mut self);
}

/// The visual half of the host editor: line marks and advisory panels.
pub trait EditorSurface {
    /// Mark a line range in the view of the file named by `uri`.
    ///
    /// The returned handle owns the visual; dropping it without calling
    /// [`Mark::clear`] must not leave the mark visible forever (the engine
    /// clears explicitly, but hosts should be robust to either order).
    fn mark_line(&mut self, uri: &str, spec: &MarkSpec) -> Box<dyn Mark>;

    /// Display an advisory panel. Hosts may render [`Advisory::body_html`]
    /// directly or lay out the typed fields themselves.
    fn show_advisory(&mut self, advisory: &Advisory);
}

/// A value the host can deliver file lifecycle events to.
///
/// This is the registration seam: instead of calling into a host-specific
/// plugin registry, the engine is a listener value the host owns. Teardown is
/// plain ownership — drop the listener (or call its shutdown method first if
/// it has one) and its marks are released.
pub trait FileEventListener {
    /// Handle one file lifecycle event.
    fn on_file_event(&mut self, event: &FileEvent);
}
