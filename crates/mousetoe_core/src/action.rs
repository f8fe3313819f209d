//! Move records, move results, and the invalid-move error.

use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Player completed a line.
    Won(Player),
    /// Board filled with no line completed.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Won(player) => Some(*player),
            Outcome::Draw => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Won(player) => write!(f, "{} wins!", player),
            Outcome::Draw => write!(f, "Out of turns"),
        }
    }
}

/// Result of applying a valid move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// Game continues with the other player to move.
    Continue,
    /// The move ended the game.
    GameOver(Outcome),
}

impl MoveOutcome {
    /// Returns true if this move ended the game.
    pub fn is_game_over(&self) -> bool {
        matches!(self, MoveOutcome::GameOver(_))
    }
}

/// A rejected move. The engine state is untouched whenever this is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// Row or column outside 0-2.
    #[display("Cell ({}, {}) is off the board", row, col)]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The cell at the position is already occupied.
    #[display("{} is already occupied", _0)]
    SquareOccupied(Position),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// Computer move requested in two-player mode or on player one's turn.
    #[display("It is not the computer's turn")]
    ComputerUnavailable,
}

impl std::error::Error for MoveError {}
