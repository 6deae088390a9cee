use std::path::PathBuf;

use clap::Parser;
use tracing::debug;

use savings_cli::{app, logging};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Value calculator: estimates net savings per area and keeps a running total.
///
/// Without `--input` an interactive form runs on the terminal.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// TOML configuration file (policy constants and currency display).
    #[arg(long)]
    config: Option<PathBuf>,

    /// CSV file of areas to calculate in one batch instead of prompting.
    #[arg(long)]
    input: Option<PathBuf>,

    /// Also append log output to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `savings_core=debug`. Overrides `RUST_LOG`.
    #[arg(long)]
    log_level: Option<String>,
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    logging::init_default_logging();

    let cli = Cli::parse();

    if let Some(level) = &cli.log_level {
        logging::set_log_level(level)?;
    }
    if let Some(path) = &cli.log_file {
        logging::enable_file_logging(path)?;
    }

    let config = app::load_config(cli.config.as_deref())?;
    debug!(?config, "configuration ready");

    match &cli.input {
        Some(path) => app::run_batch(&config, path, std::io::stdout().lock())?,
        None => app::run_terminal(&config)?,
    };

    Ok(())
}
