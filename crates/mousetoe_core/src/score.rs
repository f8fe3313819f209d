//! Session score tracking.

use super::Player;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Wins per player for the lifetime of a session.
///
/// Survives [`GameEngine::reset`](crate::GameEngine::reset); only
/// [`ScoreBoard::reset`] clears it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Getters, Serialize, Deserialize)]
pub struct ScoreBoard {
    /// Games won by player one.
    #[getter(copy)]
    player_one_wins: u32,
    /// Games won by player two.
    #[getter(copy)]
    player_two_wins: u32,
}

impl ScoreBoard {
    /// Creates an empty score board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Credits `player` with one win.
    #[instrument(skip(self))]
    pub fn record_win(&mut self, player: Player) {
        match player {
            Player::One => self.player_one_wins += 1,
            Player::Two => self.player_two_wins += 1,
        }
        debug!(p1 = self.player_one_wins, p2 = self.player_two_wins, "Score updated");
    }

    /// Wins credited to `player`.
    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::One => self.player_one_wins,
            Player::Two => self.player_two_wins,
        }
    }

    /// Sets both totals to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl std::fmt::Display for ScoreBoard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "P1: {}   P2: {}", self.player_one_wins, self.player_two_wins)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_display() {
        let mut score = ScoreBoard::new();
        score.record_win(Player::One);
        score.record_win(Player::One);
        score.record_win(Player::Two);

        assert_eq!(score.wins(Player::One), 2);
        assert_eq!(score.player_two_wins(), 1);
        assert_eq!(score.to_string(), "P1: 2   P2: 1");
    }

    #[test]
    fn test_reset_clears_both() {
        let mut score = ScoreBoard::new();
        score.record_win(Player::Two);
        score.reset();
        assert_eq!(score, ScoreBoard::new());
    }
}
