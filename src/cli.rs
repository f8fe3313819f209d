//! Command-line interface for mousetoe.

use clap::{Parser, ValueEnum};
use mousetoe_core::Mode;
use std::path::PathBuf;

/// Mousetoe - tic-tac-toe in the terminal, played with the mouse
#[derive(Parser, Debug)]
#[command(name = "mousetoe")]
#[command(about = "Mouse-driven tic-tac-toe against a friend or the computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Skip the menu and play one session in this mode
    #[arg(short, long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Seed for the computer opponent (repeatable games)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write logs to this file instead of the configured one
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

/// Game mode as spelled on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeArg {
    /// Play against the computer
    Computer,
    /// Two players share the mouse
    TwoPlayer,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Computer => Mode::SinglePlayer,
            ModeArg::TwoPlayer => Mode::TwoPlayer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["mousetoe"]).expect("no args");
        assert!(cli.config.is_none());
        assert!(cli.mode.is_none());
        assert!(cli.seed.is_none());
    }

    #[test]
    fn test_mode_and_seed() {
        let cli = Cli::try_parse_from(["mousetoe", "--mode", "two-player", "--seed", "9"])
            .expect("valid args");
        assert_eq!(cli.mode.map(Mode::from), Some(Mode::TwoPlayer));
        assert_eq!(cli.seed, Some(9));
    }

    #[test]
    fn test_unknown_mode_rejected() {
        assert!(Cli::try_parse_from(["mousetoe", "--mode", "solo"]).is_err());
    }
}
