//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating game state
//! according to tic-tac-toe rules. Rules are separated from board
//! storage so strategies and the session share one source of truth.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{WIN_LINES, check_winner, is_winner};

use crate::types::{Board, GameStatus, Player};
use tracing::instrument;

/// Evaluates the board after `last_moved` placed a mark.
///
/// Only the player who just moved is checked for a win: a move cannot
/// create a win for the opponent.
#[instrument]
pub fn evaluate(board: &Board, last_moved: Player) -> GameStatus {
    if is_winner(board, last_moved) {
        GameStatus::Won(last_moved)
    } else if board.is_full() {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Square;

    #[test]
    fn test_evaluate_in_progress() {
        let mut board = Board::new();
        board.set(0, Square::Occupied(Player::X)).unwrap();
        assert_eq!(evaluate(&board, Player::X), GameStatus::InProgress);
    }

    #[test]
    fn test_evaluate_win_for_last_moved() {
        let mut board = Board::new();
        for pos in [0, 1, 2] {
            board.set(pos, Square::Occupied(Player::X)).unwrap();
        }
        assert_eq!(evaluate(&board, Player::X), GameStatus::Won(Player::X));
    }

    #[test]
    fn test_evaluate_full_board_draw() {
        // X O X / X O O / O X X - full, no line
        let marks = [
            Player::X,
            Player::O,
            Player::X,
            Player::X,
            Player::O,
            Player::O,
            Player::O,
            Player::X,
            Player::X,
        ];
        let mut board = Board::new();
        for (pos, player) in marks.into_iter().enumerate() {
            board.set(pos, Square::Occupied(player)).unwrap();
        }
        assert_eq!(evaluate(&board, Player::X), GameStatus::Draw);
        assert_eq!(evaluate(&board, Player::O), GameStatus::Draw);
    }
}
