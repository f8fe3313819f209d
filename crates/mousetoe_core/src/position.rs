//! Position enum for tic-tac-toe moves.

use super::types::Board;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

/// A cell on the tic-tac-toe board, addressed by (row, col).
///
/// Rows and columns both run 0-2 from the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Position {
    /// Top-left (0, 0)
    TopLeft,
    /// Top-center (0, 1)
    TopCenter,
    /// Top-right (0, 2)
    TopRight,
    /// Middle-left (1, 0)
    MiddleLeft,
    /// Center (1, 1)
    Center,
    /// Middle-right (1, 2)
    MiddleRight,
    /// Bottom-left (2, 0)
    BottomLeft,
    /// Bottom-center (2, 1)
    BottomCenter,
    /// Bottom-right (2, 2)
    BottomRight,
}

impl Position {
    /// All 9 positions, row-major.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Get label for this position (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Creates a position from (row, col), or `None` if either is outside 0-2.
    #[instrument]
    pub fn from_coords(row: usize, col: usize) -> Option<Self> {
        if row > 2 || col > 2 {
            return None;
        }
        Self::from_index(row * 3 + col)
    }

    /// Creates position from board index (row-major, 0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Converts position to board index (0-8).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Row of this position (0-2).
    pub fn row(self) -> usize {
        self.index() / 3
    }

    /// Column of this position (0-2).
    pub fn col(self) -> usize {
        self.index() % 3
    }

    /// Returns (row, col).
    pub fn coords(self) -> (usize, usize) {
        (self.row(), self.col())
    }

    /// Filters positions by board state - returns only empty cells, row-major.
    #[instrument(skip(board))]
    pub fn valid_moves(board: &Board) -> Vec<Position> {
        Self::iter().filter(|pos| board.is_empty(*pos)).collect()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
