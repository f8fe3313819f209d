//! Draw detection logic for tic-tac-toe.

use crate::{Board, Cell};
use tracing::instrument;

/// Checks if the board is full (all cells occupied).
///
/// A full board with no winner is a draw.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|c| *c != Cell::Empty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position};
    use strum::IntoEnumIterator;

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        board.set(Position::Center, Cell::Occupied(Player::One));
        assert!(!is_full(&board));
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        for pos in Position::iter() {
            board.set(pos, Cell::Occupied(Player::Two));
        }
        assert!(is_full(&board));
    }
}
