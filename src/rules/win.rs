//! Win detection logic for tic-tac-toe.

use crate::types::{Board, Player, Square};
use tracing::instrument;

/// The 8 winning lines: 3 rows, 3 columns, 2 diagonals.
pub const WIN_LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
#[instrument]
pub fn check_winner(board: &Board) -> Option<Player> {
    for [a, b, c] in WIN_LINES {
        let sq = board.get(a);
        if sq != Some(Square::Empty) && sq == board.get(b) && sq == board.get(c) {
            return match sq {
                Some(Square::Occupied(player)) => Some(player),
                _ => None,
            };
        }
    }

    None
}

/// Checks whether `player` has completed any winning line.
///
/// Pure function; 8 lines of 3 lookups each.
#[instrument]
pub fn is_winner(board: &Board, player: Player) -> bool {
    let mark = Square::Occupied(player);
    WIN_LINES
        .iter()
        .any(|line| line.iter().all(|&pos| board.get(pos) == Some(mark)))
}
