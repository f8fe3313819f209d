//! Win detection logic for tic-tac-toe.

use crate::{Board, Cell, Player, Position};
use tracing::instrument;

/// Three cells that win when owned by one player.
pub type Line = [Position; 3];

/// The 8 winning lines: rows, columns, then both diagonals.
pub const LINES: [Line; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks whether `player` owns every cell of some line.
#[instrument(skip(board))]
pub fn is_winner(board: &Board, player: Player) -> bool {
    winning_line(board, player).is_some()
}

/// Returns the first line fully owned by `player`, if any.
pub fn winning_line(board: &Board, player: Player) -> Option<Line> {
    let owned = Cell::Occupied(player);
    LINES
        .into_iter()
        .find(|line| line.iter().all(|pos| board.get(*pos) == owned))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert!(!is_winner(&board, Player::One));
        assert!(!is_winner(&board, Player::Two));
    }

    #[test]
    fn test_winner_top_row() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Cell::Occupied(Player::One));
        board.set(Position::TopCenter, Cell::Occupied(Player::One));
        board.set(Position::TopRight, Cell::Occupied(Player::One));
        assert!(is_winner(&board, Player::One));
        assert!(!is_winner(&board, Player::Two));
        assert_eq!(winning_line(&board, Player::One), Some(LINES[0]));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let mut board = Board::new();
        board.set(Position::TopRight, Cell::Occupied(Player::Two));
        board.set(Position::Center, Cell::Occupied(Player::Two));
        board.set(Position::BottomLeft, Cell::Occupied(Player::Two));
        assert!(is_winner(&board, Player::Two));
        assert!(!is_winner(&board, Player::One));
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Cell::Occupied(Player::One));
        board.set(Position::Center, Cell::Occupied(Player::Two));
        board.set(Position::BottomRight, Cell::Occupied(Player::One));
        assert!(!is_winner(&board, Player::One));
        assert!(!is_winner(&board, Player::Two));
    }
}
