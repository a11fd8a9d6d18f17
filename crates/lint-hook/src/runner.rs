//! Checker process execution.
//!
//! This module intentionally stays runtime-agnostic (no async runtime
//! required): the checker is a plain child process fed over stdin, with its
//! output collected on a background thread so an optional deadline can be
//! enforced from the calling side.

use std::io::{self, Write};
use std::process::{Child, ChildStdin, Command as ProcessCommand, Stdio};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use crate::config::CheckCommand;
use crate::error::CheckError;
use crate::host::{CheckOutput, CheckRunner};

/// [`CheckRunner`] backed by [`std::process`].
///
/// Each [`run`](CheckRunner::run) call spawns a fresh child, writes the whole
/// source to its stdin from a feeder thread, and drains stdout/stderr to the
/// end. With a deadline set, a run that exceeds it fails with
/// [`CheckError::Timeout`] and the child is left to the collector thread,
/// which reaps it whenever it finally exits.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessCheckRunner {
    timeout: Option<Duration>,
}

impl ProcessCheckRunner {
    /// Create a runner with no deadline: a run blocks until the checker exits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a runner with an optional deadline covering the whole run.
    pub fn with_timeout(timeout: Option<Duration>) -> Self {
        Self { timeout }
    }
}

impl CheckRunner for ProcessCheckRunner {
    fn run(&self, command: &CheckCommand, input: &str) -> Result<CheckOutput, CheckError> {
        let mut child = ProcessCommand::new(&command.program)
            .args(&command.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| CheckError::Spawn {
                program: command.program.clone(),
                source,
            })?;

        let stdin = child.stdin.take().ok_or(CheckError::StdinUnavailable)?;

        // Feed stdin on its own thread: a checker that emits output before
        // consuming all of its input would otherwise deadlock both pipes.
        let payload = input.to_string();
        thread::spawn(move || feed_stdin(stdin, payload));

        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let _ = tx.send(collect_output(child));
        });

        let collected = match self.timeout {
            Some(limit) => rx.recv_timeout(limit).map_err(|err| match err {
                mpsc::RecvTimeoutError::Timeout => CheckError::Timeout(limit),
                mpsc::RecvTimeoutError::Disconnected => collector_stopped(),
            })?,
            None => rx.recv().map_err(|_| collector_stopped())?,
        };

        Ok(collected?)
    }
}

/// Write the source and close the pipe so the checker sees EOF.
///
/// A checker that exits before reading everything breaks the pipe; that is
/// its answer, not an error worth surfacing.
fn feed_stdin(mut stdin: ChildStdin, payload: String) {
    let _ = stdin.write_all(payload.as_bytes());
}

fn collect_output(child: Child) -> io::Result<CheckOutput> {
    let output = child.wait_with_output()?;
    Ok(CheckOutput {
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    })
}

fn collector_stopped() -> CheckError {
    CheckError::Io(io::Error::new(
        io::ErrorKind::BrokenPipe,
        "checker output thread stopped",
    ))
}
