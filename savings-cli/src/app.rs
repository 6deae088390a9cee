use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::{Context, Result};
use savings_core::{AreaInput, SavingsCalculator};
use tracing::info;

use crate::config::AppConfig;
use crate::csv_loader;
use crate::session::Session;
use crate::state::SessionState;
use crate::views::SummaryView;

/// Loads the configuration file when one is given, defaults otherwise.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig> {
    match path {
        Some(path) => Ok(AppConfig::load(path)?),
        None => Ok(AppConfig::default()),
    }
}

/// Calculates every input in order and appends each to a fresh session.
pub fn calculate_batch(
    calculator: &SavingsCalculator,
    inputs: &[AreaInput],
) -> SessionState {
    let mut state = SessionState::new();
    for input in inputs {
        state.record(calculator.calculate_area(input));
    }
    state.finish();
    state
}

/// Runs a CSV batch and writes the summary to `output`.
pub fn run_batch<W: Write>(
    config: &AppConfig,
    csv_path: &Path,
    mut output: W,
) -> Result<SessionState> {
    let inputs = csv_loader::load_from_file(csv_path)
        .with_context(|| format!("failed to load areas from {}", csv_path.display()))?;
    info!(rows = inputs.len(), path = %csv_path.display(), "loaded area batch");

    let calculator = SavingsCalculator::new(config.policy.clone());
    let state = calculate_batch(&calculator, &inputs);

    let summary = SummaryView {
        ledger: &state.ledger,
        display: &config.display,
    };
    write!(output, "{summary}")?;
    output.flush()?;
    Ok(state)
}

/// Runs the interactive form session on the given streams.
pub fn run_interactive<R: BufRead, W: Write>(
    config: &AppConfig,
    input: R,
    output: W,
) -> Result<SessionState> {
    let calculator = SavingsCalculator::new(config.policy.clone());
    let session = Session::new(input, output, calculator, config.display.clone());
    Ok(session.run()?)
}

/// Runs the interactive session on the process's stdin and stdout.
pub fn run_terminal(config: &AppConfig) -> Result<SessionState> {
    run_interactive(config, io::stdin().lock(), io::stdout().lock())
}
