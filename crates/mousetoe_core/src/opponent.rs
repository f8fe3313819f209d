//! Computer opponent move selection.

use super::Position;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, instrument};

/// Chooses a cell for the computer from the currently valid cells.
pub trait Opponent {
    /// Picks one of `candidates`, or `None` if the slice is empty.
    fn choose(&mut self, candidates: &[Position]) -> Option<Position>;
}

/// Picks uniformly at random among the valid cells.
#[derive(Debug, Clone)]
pub struct RandomOpponent<R = ChaCha8Rng> {
    rng: R,
}

impl RandomOpponent<ChaCha8Rng> {
    /// Deterministic opponent: the same seed yields the same sequence of picks.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Opponent seeded from operating system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(ChaCha8Rng::from_entropy())
    }
}

impl<R: Rng> RandomOpponent<R> {
    /// Wraps an existing random source.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Opponent for RandomOpponent<R> {
    #[instrument(skip(self))]
    fn choose(&mut self, candidates: &[Position]) -> Option<Position> {
        let pick = candidates.choose(&mut self.rng).copied();
        debug!(?pick, available = candidates.len(), "Computer picked a cell");
        pick
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_empty_candidates() {
        let mut opponent = RandomOpponent::seeded(7);
        assert_eq!(opponent.choose(&[]), None);
    }

    #[test]
    fn test_pick_is_a_candidate() {
        let mut opponent = RandomOpponent::seeded(7);
        let candidates = [Position::TopRight, Position::BottomLeft];
        for _ in 0..50 {
            let pick = opponent.choose(&candidates).expect("non-empty");
            assert!(candidates.contains(&pick));
        }
    }

    #[test]
    fn test_same_seed_same_picks() {
        let all: Vec<Position> = Position::iter().collect();
        let mut a = RandomOpponent::seeded(42);
        let mut b = RandomOpponent::seeded(42);
        for _ in 0..20 {
            assert_eq!(a.choose(&all), b.choose(&all));
        }
    }

    #[test]
    fn test_every_cell_reachable() {
        let all: Vec<Position> = Position::iter().collect();
        let mut opponent = RandomOpponent::seeded(1);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            seen.insert(opponent.choose(&all).expect("non-empty"));
        }
        assert_eq!(seen.len(), 9);
    }
}
