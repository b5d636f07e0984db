use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use mri_cli::cli::Cli;
use mri_cli::{Console, Session};
use mri_data::ReferenceData;
use tracing::debug;
use tracing_subscriber::EnvFilter;

// ─── tracing ─────────────────────────────────────────────────────────────────

/// Initialise the tracing subscriber.
///
/// * Honours `RUST_LOG` when set.
/// * Falls back to `warn` so the menus are not interleaved with log lines.
/// * Writes to stderr; stdout belongs to the prompts.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .without_time()
        .with_target(false)
        .init();
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let paths = cli.data_paths();
    debug!(?paths, policy = ?cli.on_malformed_input, "starting");

    let data = ReferenceData::load(&paths).with_context(|| {
        format!(
            "Failed to load reference data from {}",
            cli.data_dir.display()
        )
    })?;

    let console = Console::new(io::stdin().lock(), io::stdout().lock(), cli.on_malformed_input);
    let summary = Session::new(&data, console)
        .run()
        .context("Session aborted")?;
    debug!(estimates = summary.estimates, "session finished");

    Ok(())
}
