//! task-cli - command-line task tracker
//!
//! Adds, updates, deletes and lists tasks stored in a JSON file under the
//! user's config directory.

use clap::Parser;
use task_tracker::cli::Cli;
use task_tracker::output::emit_error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() {
    // Tracing is opt-in via RUST_LOG and writes to stderr.
    // Ignore invalid/huge filters rather than failing startup.
    let filter = std::env::var("RUST_LOG")
        .ok()
        .and_then(|raw| {
            let raw = raw.trim();
            if raw.is_empty() || raw.len() > 4096 {
                return None;
            }
            EnvFilter::try_new(raw).ok()
        })
        .unwrap_or_else(|| EnvFilter::new("off"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let cli = Cli::parse();
    let command = cli.command.name();
    let json = cli.json;
    // Errors are reported on stdout; the exit code stays 0.
    if let Err(err) = cli.run() {
        let _ = emit_error(command, &err, json);
    }
}
