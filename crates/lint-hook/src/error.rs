//! Failure classes for the check pipeline.

use std::io;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
/// Errors produced while reading a file or driving the external checker.
///
/// The plugin itself never surfaces these to the host: they are logged and
/// swallowed at the event-handler boundary. They are public so that host
/// implementations of the collaborator traits can produce them and so that
/// callers driving a [`CheckRunner`](crate::CheckRunner) directly can match on
/// the failure class.
pub enum CheckError {
    #[error("failed to read '{uri}': {source}")]
    /// The file store could not produce the file's text.
    Read {
        /// The uri that was requested.
        uri: String,
        /// The underlying I/O error.
        source: io::Error,
    },

    #[error("failed to spawn checker '{program}': {source}")]
    /// The checker executable could not be started.
    Spawn {
        /// The program that was asked for.
        program: String,
        /// The underlying I/O error.
        source: io::Error,
    },

    #[error("checker stdin is not piped")]
    /// The spawned child did not expose a stdin pipe.
    StdinUnavailable,

    #[error("checker did not finish within {0:?}")]
    /// The configured deadline elapsed before the checker exited.
    Timeout(Duration),

    #[error("checker I/O error: {0}")]
    /// Reading the checker's output (or waiting for it) failed.
    Io(#[from] io::Error),
}
