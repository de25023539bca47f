//! Random move selection (Easy difficulty).

use super::MoveStrategy;
use crate::error::GameError;
use crate::types::{Board, Player};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// Picks uniformly among the empty squares. No look-ahead.
#[derive(Debug)]
pub struct Random {
    rng: StdRng,
}

impl Random {
    /// Creates a randomly-seeded strategy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Creates a deterministically-seeded strategy for reproducible games.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for Random {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveStrategy for Random {
    fn select_move(&mut self, board: &Board, player: Player) -> Result<usize, GameError> {
        let open = board.empty_positions();
        if open.is_empty() {
            return Err(GameError::NoLegalMove);
        }
        let pos = open[self.rng.random_range(0..open.len())];
        debug!(%player, pos, "random strategy chose position");
        Ok(pos)
    }

    fn name(&self) -> &'static str {
        "random"
    }
}
