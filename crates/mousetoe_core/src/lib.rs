//! Tic-tac-toe game engine.
//!
//! Owns the board, turn order, win detection, session score, and the random
//! computer opponent. Drawing and input belong to the caller: it feeds
//! (row, col) moves in and reads state back out.
//!
//! # Example
//!
//! ```
//! use mousetoe_core::{GameEngine, GameStatus, Mode, MoveOutcome, Outcome, Player};
//!
//! let mut engine = GameEngine::seeded(Mode::TwoPlayer, 7);
//! for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
//!     assert_eq!(engine.apply_move(row, col), Ok(MoveOutcome::Continue));
//! }
//! assert_eq!(
//!     engine.apply_move(0, 2),
//!     Ok(MoveOutcome::GameOver(Outcome::Won(Player::One)))
//! );
//! assert_eq!(engine.status(), GameStatus::Won(Player::One));
//! assert_eq!(engine.score().player_one_wins(), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod engine;
mod opponent;
mod position;
pub mod rules;
mod score;
mod types;

pub use action::{Move, MoveError, MoveOutcome, Outcome};
pub use engine::{ComputerMove, GameEngine, GameSnapshot, TurnReport};
pub use opponent::{Opponent, RandomOpponent};
pub use position::Position;
pub use score::ScoreBoard;
pub use types::{Board, Cell, GameStatus, Mode, Player};
