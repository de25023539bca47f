//! Error types for the game core.
//!
//! Every error here reflects a caller-sequencing mistake, not a
//! transient condition: nothing is retried internally, and nothing is
//! silently swallowed.

use derive_more::{Display, Error};

use crate::types::Player;

/// Errors surfaced by the game core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// Position is outside the board (must be 0-8).
    #[display("position {_0} is out of bounds (must be 0-8)")]
    InvalidPosition(#[error(not(source))] usize),
    /// Square is already occupied.
    #[display("square {_0} is already occupied")]
    SquareOccupied(#[error(not(source))] usize),
    /// Move submitted by the wrong player.
    #[display("out of turn: waiting for player {_0}")]
    OutOfTurn(#[error(not(source))] Player),
    /// Move submitted after the game finished.
    #[display("game is already over")]
    GameOver,
    /// Strategy invoked on a full board.
    ///
    /// Unreachable given correct session sequencing, but defined
    /// rather than left as undefined behavior.
    #[display("no legal move: board is full")]
    NoLegalMove,
}
