//! One-ply look-ahead strategy (Medium difficulty).

use super::{MoveStrategy, Random};
use crate::error::GameError;
use crate::rules::WIN_LINES;
use crate::types::{Board, Player, Square};
use tracing::debug;

/// Takes its own immediate winning square if one exists, otherwise
/// falls back to [`Random`].
///
/// The strategy only completes its own lines; it never blocks the
/// opponent's. That asymmetry is what makes the Medium tier sit
/// between Easy and Hard, so it must stay as-is.
#[derive(Debug)]
pub struct Heuristic {
    fallback: Random,
}

impl Heuristic {
    /// Creates a heuristic strategy with a randomly-seeded fallback.
    pub fn new() -> Self {
        Self {
            fallback: Random::new(),
        }
    }

    /// Creates a heuristic strategy with a deterministically-seeded fallback.
    pub fn seeded(seed: u64) -> Self {
        Self {
            fallback: Random::seeded(seed),
        }
    }
}

impl Default for Heuristic {
    fn default() -> Self {
        Self::new()
    }
}

/// Finds the empty square completing a line that already holds two of
/// `player`'s marks. First matching line in [`WIN_LINES`] order wins
/// the tie.
pub(crate) fn winning_completion(board: &Board, player: Player) -> Option<usize> {
    let mark = Square::Occupied(player);
    for line in WIN_LINES {
        let mut own = 0;
        let mut open = None;
        for &pos in &line {
            match board.get(pos) {
                Some(sq) if sq == mark => own += 1,
                Some(Square::Empty) => open = Some(pos),
                _ => {}
            }
        }
        if own == 2 {
            if let Some(pos) = open {
                return Some(pos);
            }
        }
    }
    None
}

impl MoveStrategy for Heuristic {
    fn select_move(&mut self, board: &Board, player: Player) -> Result<usize, GameError> {
        if board.is_full() {
            return Err(GameError::NoLegalMove);
        }
        if let Some(pos) = winning_completion(board, player) {
            debug!(%player, pos, "heuristic strategy takes immediate win");
            return Ok(pos);
        }
        self.fallback.select_move(board, player)
    }

    fn name(&self) -> &'static str {
        "heuristic"
    }
}
