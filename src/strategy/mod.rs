//! Move-selection strategies for the computer player.
//!
//! Three interchangeable policies back the three difficulty tiers:
//! [`Random`] (Easy), [`Heuristic`] (Medium), and [`Exhaustive`] (Hard).
//! The session dispatches through the [`MoveStrategy`] trait, so the
//! tiers stay swappable without string comparisons.

mod heuristic;
mod minimax;
mod random;

pub use heuristic::Heuristic;
pub use minimax::Exhaustive;
pub use random::Random;

use crate::error::GameError;
use crate::types::{Board, Player};
use serde::{Deserialize, Serialize};

/// A move-selection policy for one computer-controlled mark.
///
/// Implementations read the board; they never mutate the caller's
/// board. [`Exhaustive`] searches on a private clone and restores
/// every trial placement before returning.
pub trait MoveStrategy {
    /// Selects a position (0-8) for `player` on `board`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NoLegalMove`] if the board is full.
    fn select_move(&mut self, board: &Board, player: Player) -> Result<usize, GameError>;

    /// Returns the strategy name for display and logging.
    fn name(&self) -> &'static str;
}

/// Computer difficulty, selected once per session.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default, strum::EnumIter,
)]
pub enum Difficulty {
    /// Random moves, no look-ahead.
    #[default]
    Easy,
    /// Takes its own immediate win, otherwise random. Never blocks.
    Medium,
    /// Full minimax search, never loses.
    Hard,
}

impl Difficulty {
    /// Builds the strategy backing this difficulty tier.
    pub fn strategy(self) -> Box<dyn MoveStrategy> {
        match self {
            Difficulty::Easy => Box::new(Random::new()),
            Difficulty::Medium => Box::new(Heuristic::new()),
            Difficulty::Hard => Box::new(Exhaustive::new()),
        }
    }

    /// Returns display name.
    pub fn name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}
