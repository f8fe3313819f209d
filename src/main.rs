//! Mousetoe - tic-tac-toe in the terminal, played with the mouse.

use anyhow::Result;
use clap::Parser;
use mousetoe::cli::Cli;
use mousetoe::config::AppConfig;
use mousetoe::{logging, menu, tui};
use mousetoe_core::Mode;
use std::io;
use tracing::{info, instrument};

fn main() -> Result<()> {
    // Load .env file (RUST_LOG)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    logging::init_file_logging(config.log_file())?;
    info!(?config, "Starting mousetoe");

    match cli.mode {
        Some(mode) => play(Mode::from(mode), &config),
        None => menu::run_menu(io::stdin().lock(), io::stdout(), |mode| play(mode, &config)),
    }
}

/// Reads the config file, if any, and applies command-line overrides.
fn load_config(cli: &Cli) -> Result<AppConfig> {
    let mut config = match &cli.config {
        Some(path) => AppConfig::from_file(path)?,
        None => AppConfig::default(),
    };
    if let Some(seed) = cli.seed {
        config.set_seed(seed);
    }
    if let Some(path) = &cli.log_file {
        config.set_log_file(path.clone());
    }
    Ok(config)
}

/// Runs one game session and prints its final score.
#[instrument(skip(config))]
fn play(mode: Mode, config: &AppConfig) -> Result<()> {
    let score = tui::run_game(mode, config)?;
    println!("{}", score);
    Ok(())
}
