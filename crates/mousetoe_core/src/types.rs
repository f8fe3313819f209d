//! Core domain types for tic-tac-toe.

use super::position::Position;
use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Player {
    /// Player one, marks with X and always moves first.
    #[display("Player 1")]
    One,
    /// Player two, marks with O. The computer in single-player mode.
    #[display("Player 2")]
    Two,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Mark drawn in cells owned by this player.
    pub fn mark(self) -> &'static str {
        match self {
            Player::One => "X",
            Player::Two => "O",
        }
    }

    /// Player number as shown to users (1 or 2).
    pub fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell occupied by a player.
    Occupied(Player),
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.index()]
    }

    /// Sets the cell at the given position.
    pub fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.index()] = cell;
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Number of non-empty cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| **c != Cell::Empty).count()
    }

    /// Checks if every cell is occupied.
    pub fn is_full(&self) -> bool {
        super::rules::is_full(self)
    }

    /// Clears every cell.
    pub fn clear(&mut self) {
        self.cells = [Cell::Empty; 9];
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let symbol = match self.cells[row * 3 + col] {
                    Cell::Empty => " ",
                    Cell::Occupied(player) => player.mark(),
                };
                write!(f, "{}", symbol)?;
                if col < 2 {
                    write!(f, "|")?;
                }
            }
            if row < 2 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// Returns true once the game is won or drawn.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// Who controls player two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    /// Player two is the computer.
    SinglePlayer,
    /// Player two is a second human.
    TwoPlayer,
}

impl Mode {
    /// Returns display name.
    pub fn label(self) -> &'static str {
        match self {
            Mode::SinglePlayer => "Player vs Computer",
            Mode::TwoPlayer => "Two Player",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_flips() {
        assert_eq!(Player::One.opponent(), Player::Two);
        assert_eq!(Player::Two.opponent(), Player::One);
    }

    #[test]
    fn test_board_display() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Cell::Occupied(Player::One));
        board.set(Position::Center, Cell::Occupied(Player::Two));
        assert_eq!(board.to_string(), "X| | \n-+-+-\n |O| \n-+-+-\n | | ");
    }

    #[test]
    fn test_occupied_count_and_clear() {
        let mut board = Board::new();
        board.set(Position::TopRight, Cell::Occupied(Player::One));
        board.set(Position::BottomLeft, Cell::Occupied(Player::Two));
        assert_eq!(board.occupied_count(), 2);

        board.clear();
        assert_eq!(board.occupied_count(), 0);
        assert_eq!(board, Board::new());
    }
}
