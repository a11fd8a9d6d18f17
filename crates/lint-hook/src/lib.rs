#![warn(missing_docs)]
//! Lint Hook - Checker-Driven Diagnostics for Editor Hosts
//!
//! # Overview
//!
//! `lint-hook` runs an external checker command over a file every time the
//! host reports it opened or saved, and turns the checker's stderr into a
//! single line mark plus an advisory panel. The crate is headless: it holds
//! the policy (when to check, what to show, when to clear) while the host
//! supplies the mechanisms through small capability traits.
//!
//! # Core Features
//!
//! - **Delegated checking**: any command that reads source on stdin and
//!   complains on stderr works; `python3 -m py_compile -` is the default
//! - **One mark per file**: every re-check replaces the previous mark, and a
//!   clean verdict removes it
//! - **Stale verdicts stay**: when the file cannot be read or the checker
//!   cannot run, the last rendered mark is kept rather than cleared
//! - **Narrow parsing**: a `line <digits>` token and a first message line are
//!   scraped from free text; anything else renders nothing
//! - **Host-agnostic**: editors implement [`EditorSurface`], [`FileStore`]
//!   and optionally [`CheckRunner`]; a filesystem store and a subprocess
//!   runner ship in the crate
//!
//! # Quick Start
//!
//! ```rust
//! use lint_hook::{
//!     Advisory, CheckConfig, EditorSurface, FileCheckPlugin, FileEvent, FileEventListener,
//!     LocalFileStore, Mark, MarkSpec, ProcessCheckRunner,
//! };
//!
//! struct NullMark;
//!
//! impl Mark for NullMark {
//!     fn clear(&mut self) {}
//! }
//!
//! struct PrintSurface;
//!
//! impl EditorSurface for PrintSurface {
//!     fn mark_line(&mut self, uri: &str, spec: &MarkSpec) -> Box<dyn Mark> {
//!         println!("{uri}: mark line {} [{}]", spec.line, spec.style_class);
//!         Box::new(NullMark)
//!     }
//!
//!     fn show_advisory(&mut self, advisory: &Advisory) {
//!         println!("{}: line {}: {}", advisory.title, advisory.line, advisory.message);
//!     }
//! }
//!
//! let mut plugin = FileCheckPlugin::new(
//!     CheckConfig::default(),
//!     Box::new(LocalFileStore::new()),
//!     Box::new(ProcessCheckRunner::new()),
//!     Box::new(PrintSurface),
//! );
//!
//! // Events for non-matching files are ignored; failures are logged, never
//! // propagated into the host's event loop.
//! plugin.on_file_event(&FileEvent::save("file:///tmp/does-not-exist.py"));
//! ```
//!
//! # Module Description
//!
//! - [`plugin`] - the check lifecycle, one [`FileCheckPlugin`] per checker
//! - [`config`] - checker command, file suffix, presentation settings
//! - [`host`] - capability traits the host implements
//! - [`events`] - open/save notifications fed by the host
//! - [`parse`] - scraping a line number and message from checker output
//! - [`suggest`] - keyword-matched fix advice
//! - [`marks`] - mark geometry and the per-file mark registry
//! - [`advisory`] - the advisory panel payload
//! - [`store`] / [`runner`] - filesystem and subprocess capability impls
//! - [`uri`] - `file://` URI conversion shared by hosts

pub mod advisory;
pub mod config;
pub mod error;
pub mod events;
pub mod host;
pub mod marks;
pub mod parse;
pub mod plugin;
pub mod runner;
pub mod store;
pub mod suggest;
pub mod uri;

pub use advisory::Advisory;
pub use config::{CheckCommand, CheckConfig};
pub use error::CheckError;
pub use events::{FileEvent, FileEventKind, FileHandle};
pub use host::{CheckOutput, CheckRunner, EditorSurface, FileEventListener, FileStore, Mark};
pub use marks::{FULL_LINE_COLUMNS, MarkRegistry, MarkSpec, line_columns};
pub use parse::{Diagnostic, parse_diagnostic};
pub use plugin::FileCheckPlugin;
pub use runner::ProcessCheckRunner;
pub use store::LocalFileStore;
pub use suggest::suggestion_for;
pub use uri::{path_to_uri, uri_to_path};
