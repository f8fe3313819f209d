//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](super::Board). Rules are kept apart from
//! board storage so the engine decides when each one is evaluated.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, Line, is_winner, winning_line};
