//! Text menu that picks a game mode and launches games until the user quits.

use anyhow::{Context, Result};
use mousetoe_core::Mode;
use std::io::{BufRead, Write};
use std::str::FromStr;
use tracing::{info, instrument, warn};

/// Greeting printed once when the menu starts.
pub const GREETING: &str = "Welcome to TicTacToe!";

/// Prompt printed before each selection.
pub const PROMPT: &str =
    "Press 'c' to play against the computer, 'u' to play two player, 'b' to exit: ";

/// Printed when the user quits.
pub const FAREWELL: &str = "Quitting game... Thanks for playing!";

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Play against the computer ('c').
    VsComputer,
    /// Two humans share the mouse ('u').
    TwoPlayer,
    /// Leave the program ('b').
    Quit,
}

impl MenuChoice {
    /// Game mode this choice launches, or `None` for quit.
    pub fn mode(self) -> Option<Mode> {
        match self {
            MenuChoice::VsComputer => Some(Mode::SinglePlayer),
            MenuChoice::TwoPlayer => Some(Mode::TwoPlayer),
            MenuChoice::Quit => None,
        }
    }
}

/// Input that does not match any menu entry.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MenuError {
    /// Anything other than 'c', 'u' or 'b'.
    #[display("Invalid selection.")]
    InvalidMenuSelection {
        /// What the user typed, trimmed.
        input: String,
    },
}

impl FromStr for MenuChoice {
    type Err = MenuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "c" => Ok(MenuChoice::VsComputer),
            "u" => Ok(MenuChoice::TwoPlayer),
            "b" => Ok(MenuChoice::Quit),
            other => Err(MenuError::InvalidMenuSelection {
                input: other.to_string(),
            }),
        }
    }
}

/// Runs the menu loop until the user quits or input ends.
///
/// `launch` is called with the selected mode and blocks until that game's
/// display loop returns. Invalid selections print a message and re-prompt.
///
/// # Errors
///
/// Fails if reading input or writing output fails, or if `launch` fails.
#[instrument(skip_all)]
pub fn run_menu<I, W, F>(mut input: I, mut output: W, mut launch: F) -> Result<()>
where
    I: BufRead,
    W: Write,
    F: FnMut(Mode) -> Result<()>,
{
    writeln!(output, "\n{}", GREETING)?;

    loop {
        write!(output, "\n{}", PROMPT)?;
        output.flush()?;

        let mut line = String::new();
        let read = input
            .read_line(&mut line)
            .context("Failed to read menu selection")?;
        if read == 0 {
            info!("Input closed, leaving menu");
            writeln!(output)?;
            return Ok(());
        }

        match line.parse::<MenuChoice>() {
            Ok(choice) => match choice.mode() {
                Some(mode) => {
                    info!(mode = mode.label(), "Launching game");
                    launch(mode)?;
                }
                None => {
                    info!("User quit from menu");
                    writeln!(output, "{}\n", FAREWELL)?;
                    return Ok(());
                }
            },
            Err(e) => {
                warn!(error = ?e, "Unrecognized menu input");
                writeln!(output, "{}", e)?;
            }
        }
    }
}
