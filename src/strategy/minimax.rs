//! Exhaustive minimax search (Hard difficulty).

use super::MoveStrategy;
use crate::error::GameError;
use crate::rules::is_winner;
use crate::types::{Board, Player, Square};
use tracing::{debug, instrument};

/// Terminal score for an O win. O is the maximizer.
const O_WIN_SCORE: i32 = 10;
/// Terminal score for an X win. X is the minimizer.
const X_WIN_SCORE: i32 = -10;
/// Terminal score for a draw.
const DRAW_SCORE: i32 = 0;

/// Full-depth game-tree search with no pruning and no transposition
/// cache; at most 9 empty squares bound the tree, so neither is
/// needed.
///
/// Scores carry no depth term, so among equally-scored moves the
/// first encountered wins, which can delay an inevitable result.
/// Search mutates a private clone of the board and undoes every trial
/// placement, leaving the caller's board untouched.
#[derive(Debug, Default)]
pub struct Exhaustive;

impl Exhaustive {
    /// Creates the exhaustive strategy.
    pub fn new() -> Self {
        Self
    }
}

impl MoveStrategy for Exhaustive {
    #[instrument(skip(self))]
    fn select_move(&mut self, board: &Board, player: Player) -> Result<usize, GameError> {
        let mut scratch = board.clone();
        let mut best: Option<(usize, i32)> = None;

        for pos in board.empty_positions() {
            place(&mut scratch, pos, Square::Occupied(player));
            let score = search(&mut scratch, player.opponent());
            place(&mut scratch, pos, Square::Empty);

            let better = match best {
                None => true,
                Some((_, best_score)) => match player {
                    Player::O => score > best_score,
                    Player::X => score < best_score,
                },
            };
            if better {
                best = Some((pos, score));
            }
        }

        debug_assert_eq!(&scratch, board);
        match best {
            Some((pos, score)) => {
                debug!(%player, pos, score, "minimax chose position");
                Ok(pos)
            }
            None => Err(GameError::NoLegalMove),
        }
    }

    fn name(&self) -> &'static str {
        "exhaustive"
    }
}

/// Scores the position with `to_move` to play.
///
/// Terminal checks come before child generation; scores are returned
/// unmodified by depth.
fn search(board: &mut Board, to_move: Player) -> i32 {
    if is_winner(board, Player::X) {
        return X_WIN_SCORE;
    }
    if is_winner(board, Player::O) {
        return O_WIN_SCORE;
    }
    if board.is_full() {
        return DRAW_SCORE;
    }

    let mut best: Option<i32> = None;
    for pos in board.empty_positions() {
        place(board, pos, Square::Occupied(to_move));
        let score = search(board, to_move.opponent());
        place(board, pos, Square::Empty);

        best = Some(match best {
            None => score,
            Some(current) => match to_move {
                Player::O => current.max(score),
                Player::X => current.min(score),
            },
        });
    }
    best.expect("non-terminal board has at least one empty square")
}

fn place(board: &mut Board, pos: usize, square: Square) {
    board
        .set(pos, square)
        .expect("search positions stay in bounds");
}
