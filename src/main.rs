//! Terminal tic-tac-toe binary.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;
use terminal_tictactoe::{Cli, Console, DEFAULT_CONFIG, GameConfig, GameEngine, Session};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing(cli.log_file.as_deref())?;

    let config = GameConfig::load(
        cli.config.as_deref(),
        DEFAULT_CONFIG,
        cli.first_symbol.clone(),
        cli.second_symbol.clone(),
    )
    .context("Failed to load configuration")?;
    info!(
        first = %config.first_symbol(),
        second = %config.second_symbol(),
        "Starting tic-tac-toe"
    );

    let engine = GameEngine::new(config.symbols());
    let mut session = Session::new(engine, Console::stdio());
    let summary = session.run().context("Game session failed")?;

    info!(?summary, "Goodbye");
    Ok(())
}

/// Logs go to a file when one is given, otherwise to stderr.
///
/// Stderr defaults to `warn` so the game transcript on stdout stays clean.
fn initialize_tracing(log_file: Option<&Path>) -> Result<()> {
    match log_file {
        Some(path) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| EnvFilter::new("info")),
                )
                .with_writer(std::sync::Arc::new(file))
                .with_ansi(false)
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| EnvFilter::new("warn")),
                )
                .with_writer(std::io::stderr)
                .init();
        }
    }
    Ok(())
}
