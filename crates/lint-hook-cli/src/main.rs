//! Terminal host for the check engine.
//!
//! `lint-hook check` runs each named file through the configured checker
//! once; `lint-hook watch` keeps re-checking matching files as they change.

mod surface;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use lint_hook::{CheckConfig, FileCheckPlugin, LocalFileStore, ProcessCheckRunner, path_to_uri};
use surface::{TerminalSurface, display_name};

/// Pipe files through an external checker and print the verdicts
#[derive(Parser)]
#[command(name = "lint-hook")]
#[command(version, about, long_about = None)]
#[command(subcommand_required = true, arg_required_else_help = true)]
#[command(after_help = "ENVIRONMENT:\n    RUST_LOG=debug    Enable debug logging")]
struct Cli {
    /// Path to a JSON configuration file (defaults to the Python compile check)
    #[arg(short = 'c', long = "config", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check the given files once, exiting non-zero if any is flagged
    Check {
        /// Files to check
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Watch paths and re-check matching files whenever they change
    Watch {
        /// Files or directories to watch recursively
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Check { files } => check_command(config, &files),
        Commands::Watch { paths } => watch_command(config, &paths),
    }
}

fn load_config(path: Option<&Path>) -> Result<CheckConfig> {
    match path {
        Some(path) => CheckConfig::from_json_file(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display())),
        None => Ok(CheckConfig::default()),
    }
}

fn build_plugin(config: CheckConfig) -> FileCheckPlugin {
    let runner = ProcessCheckRunner::with_timeout(config.timeout());
    FileCheckPlugin::new(
        config,
        Box::new(LocalFileStore::new()),
        Box::new(runner),
        Box::new(TerminalSurface::new()),
    )
}

fn check_command(config: CheckConfig, files: &[PathBuf]) -> Result<()> {
    let mut plugin = build_plugin(config);
    let mut flagged = 0usize;

    for file in files {
        let uri = path_to_uri(file);
        debug!(uri, "checking");
        let verdict = plugin
            .check_file(&uri)
            .with_context(|| format!("Failed to check {}", file.display()))?;
        match verdict {
            Some(_) => flagged += 1,
            None => println!("{}: ok", file.display()),
        }
    }

    plugin.shutdown();
    if flagged > 0 {
        std::process::exit(1);
    }
    Ok(())
}

fn watch_command(config: CheckConfig, paths: &[PathBuf]) -> Result<()> {
    use notify::{EventKind, RecursiveMode, Watcher};

    let (tx, rx) = std::sync::mpsc::channel();
    let mut watcher =
        notify::recommended_watcher(tx).context("Failed to create filesystem watcher")?;
    for path in paths {
        watcher
            .watch(path, RecursiveMode::Recursive)
            .with_context(|| format!("Failed to watch {}", path.display()))?;
    }

    let mut plugin = build_plugin(config);
    println!(
        "Watching {} path(s) for '*{}' files. Ctrl-C to stop.",
        paths.len(),
        plugin.config().extension
    );

    for result in rx {
        let event = match result {
            Ok(event) => event,
            Err(err) => {
                warn!(error = %err, "watch error");
                continue;
            }
        };

        // Editors fire several change events per save; re-checking is
        // idempotent, so no debouncing.
        if !matches!(event.kind, EventKind::Create(_) | EventKind::Modify(_)) {
            continue;
        }

        for path in event.paths {
            let uri = path_to_uri(&path);
            if !plugin.config().matches_uri(&uri) {
                continue;
            }
            match plugin.check_file(&uri) {
                Ok(Some(_)) => {}
                Ok(None) => println!("{}: ok", display_name(&uri)),
                Err(err) => warn!(uri, error = %err, "check failed, keeping previous verdict"),
            }
        }
    }

    Ok(())
}
