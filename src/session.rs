//! Game session management: turn order, computer replies, scores.

use crate::error::GameError;
use crate::rules;
use crate::strategy::{Difficulty, MoveStrategy};
use crate::types::{Board, GameStatus, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Game mode - who controls the O mark?
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default, strum::EnumIter,
)]
pub enum Mode {
    /// Two humans alternate through [`GameSession::submit_move`].
    #[default]
    PlayerVsPlayer,
    /// X is human, O is computer-controlled by the session's strategy.
    PlayerVsComputer,
}

impl Mode {
    /// Returns display name.
    pub fn name(&self) -> &'static str {
        match self {
            Mode::PlayerVsPlayer => "Player vs Player",
            Mode::PlayerVsComputer => "Player vs Computer",
        }
    }
}

/// Running win tally for a session.
///
/// Incremented exactly once per won game; draws leave it untouched,
/// and so does [`GameSession::reset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScoreBoard {
    x: u32,
    o: u32,
}

impl ScoreBoard {
    /// Wins recorded for player X.
    pub fn x(&self) -> u32 {
        self.x
    }

    /// Wins recorded for player O.
    pub fn o(&self) -> u32 {
        self.o
    }

    fn record_win(&mut self, winner: Player) {
        match winner {
            Player::X => self.x += 1,
            Player::O => self.o += 1,
        }
    }
}

/// Where the session currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    /// Waiting for the given player to move.
    Turn(Player),
    /// Game over; no further moves accepted until [`GameSession::reset`].
    Finished(GameStatus),
}

/// Result of a successful [`GameSession::submit_move`].
///
/// Reflects the position after any computer reply, so in
/// player-vs-computer mode the board already contains O's answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveReport {
    /// Game status after the move (and any computer reply).
    pub status: GameStatus,
    /// Board snapshot after the move (and any computer reply).
    pub board: Board,
}

/// A single game session: board, turn order, difficulty, and scores.
///
/// The session exclusively owns the authoritative board. Strategies
/// receive a shared reference and search on private clones, so the
/// board only changes through [`GameSession::submit_move`] and
/// [`GameSession::reset`].
pub struct GameSession {
    board: Board,
    state: SessionState,
    mode: Mode,
    difficulty: Difficulty,
    strategy: Box<dyn MoveStrategy>,
    scores: ScoreBoard,
}

impl std::fmt::Debug for GameSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameSession")
            .field("board", &self.board)
            .field("state", &self.state)
            .field("mode", &self.mode)
            .field("difficulty", &self.difficulty)
            .field("strategy", &self.strategy.name())
            .field("scores", &self.scores)
            .finish()
    }
}

impl GameSession {
    /// Creates a new session with an empty board and X to move.
    #[instrument]
    pub fn new(mode: Mode, difficulty: Difficulty) -> Self {
        info!(mode = mode.name(), difficulty = difficulty.name(), "Creating new game session");
        Self {
            board: Board::new(),
            state: SessionState::Turn(Player::X),
            mode,
            difficulty,
            strategy: difficulty.strategy(),
            scores: ScoreBoard::default(),
        }
    }

    /// Creates a session with an explicit strategy instance.
    ///
    /// Lets callers inject a seeded strategy for reproducible games.
    /// The difficulty accessor reports the tier the strategy stands in
    /// for.
    pub fn with_strategy(
        mode: Mode,
        difficulty: Difficulty,
        strategy: Box<dyn MoveStrategy>,
    ) -> Self {
        info!(
            mode = mode.name(),
            strategy = strategy.name(),
            "Creating game session with injected strategy"
        );
        Self {
            board: Board::new(),
            state: SessionState::Turn(Player::X),
            mode,
            difficulty,
            strategy,
            scores: ScoreBoard::default(),
        }
    }

    /// Returns the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current session state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Returns the session mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns the configured difficulty.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Returns the running score tally.
    pub fn scores(&self) -> &ScoreBoard {
        &self.scores
    }

    /// Submits a move for `acting_player` at `pos` (0-8).
    ///
    /// On success the mark is placed and the outcome evaluated; a win
    /// bumps the winner's score. In player-vs-computer mode, when the
    /// turn passes to O the session immediately asks its strategy for
    /// a reply and applies it through this same path before returning,
    /// so the report reflects the position after the computer moved.
    ///
    /// # Errors
    ///
    /// - [`GameError::GameOver`] if the game already finished.
    /// - [`GameError::OutOfTurn`] if it is not `acting_player`'s turn.
    /// - [`GameError::InvalidPosition`] if `pos` is outside 0-8.
    /// - [`GameError::SquareOccupied`] if the square is taken.
    #[instrument(skip(self))]
    pub fn submit_move(
        &mut self,
        pos: usize,
        acting_player: Player,
    ) -> Result<MoveReport, GameError> {
        match self.state {
            SessionState::Finished(_) => {
                warn!(pos, %acting_player, "Move submitted after game over");
                return Err(GameError::GameOver);
            }
            SessionState::Turn(expected) if expected != acting_player => {
                warn!(pos, %acting_player, %expected, "Player tried to move out of turn");
                return Err(GameError::OutOfTurn(expected));
            }
            SessionState::Turn(_) => {}
        }

        if pos >= 9 {
            warn!(pos, "Position out of bounds");
            return Err(GameError::InvalidPosition(pos));
        }
        if !self.board.is_empty(pos) {
            warn!(pos, "Square already occupied");
            return Err(GameError::SquareOccupied(pos));
        }

        self.board.set(pos, Square::Occupied(acting_player))?;
        let status = rules::evaluate(&self.board, acting_player);
        match status {
            GameStatus::Won(winner) => {
                self.scores.record_win(winner);
                self.state = SessionState::Finished(status);
                info!(%winner, "Game won");
            }
            GameStatus::Draw => {
                self.state = SessionState::Finished(status);
                info!("Game drawn");
            }
            GameStatus::InProgress => {
                self.state = SessionState::Turn(acting_player.opponent());
                debug!(pos, %acting_player, "Move applied, turn passes");
            }
        }

        // Computer reply runs before this call returns, so no human
        // input can slip in between.
        if self.mode == Mode::PlayerVsComputer
            && self.state == SessionState::Turn(Player::O)
        {
            let reply = self.strategy.select_move(&self.board, Player::O)?;
            debug!(reply, strategy = self.strategy.name(), "Applying computer reply");
            return self.submit_move(reply, Player::O);
        }

        Ok(MoveReport {
            status: self.status(),
            board: self.board.clone(),
        })
    }

    /// Resets to an empty board with X to move, from any prior state.
    ///
    /// Scores are left untouched.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!("Session reset");
        self.board = Board::new();
        self.state = SessionState::Turn(Player::X);
    }

    fn status(&self) -> GameStatus {
        match self.state {
            SessionState::Finished(status) => status,
            SessionState::Turn(_) => GameStatus::InProgress,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_starts_with_x() {
        let session = GameSession::new(Mode::PlayerVsPlayer, Difficulty::Easy);
        assert_eq!(session.state(), SessionState::Turn(Player::X));
        assert!(session.board().empty_positions().len() == 9);
        assert_eq!(session.scores().x(), 0);
        assert_eq!(session.scores().o(), 0);
    }

    #[test]
    fn test_out_of_turn_rejected() {
        let mut session = GameSession::new(Mode::PlayerVsPlayer, Difficulty::Easy);
        assert_eq!(
            session.submit_move(0, Player::O),
            Err(GameError::OutOfTurn(Player::X))
        );
        assert_eq!(session.state(), SessionState::Turn(Player::X));
    }

    #[test]
    fn test_invalid_position_rejected() {
        let mut session = GameSession::new(Mode::PlayerVsPlayer, Difficulty::Easy);
        assert_eq!(
            session.submit_move(9, Player::X),
            Err(GameError::InvalidPosition(9))
        );
    }

    #[test]
    fn test_occupied_square_leaves_state_unchanged() {
        let mut session = GameSession::new(Mode::PlayerVsPlayer, Difficulty::Easy);
        session.submit_move(4, Player::X).unwrap();
        let board_before = session.board().clone();
        assert_eq!(
            session.submit_move(4, Player::O),
            Err(GameError::SquareOccupied(4))
        );
        assert_eq!(session.board(), &board_before);
        assert_eq!(session.state(), SessionState::Turn(Player::O));
    }

    #[test]
    fn test_move_after_game_over_rejected() {
        let mut session = GameSession::new(Mode::PlayerVsPlayer, Difficulty::Easy);
        for (pos, player) in [
            (0, Player::X),
            (4, Player::O),
            (1, Player::X),
            (7, Player::O),
            (2, Player::X),
        ] {
            session.submit_move(pos, player).unwrap();
        }
        assert_eq!(session.submit_move(5, Player::O), Err(GameError::GameOver));
    }

    #[test]
    fn test_reset_clears_board_and_keeps_scores() {
        let mut session = GameSession::new(Mode::PlayerVsPlayer, Difficulty::Easy);
        for (pos, player) in [
            (0, Player::X),
            (4, Player::O),
            (1, Player::X),
            (7, Player::O),
            (2, Player::X),
        ] {
            session.submit_move(pos, player).unwrap();
        }
        assert_eq!(session.scores().x(), 1);

        session.reset();
        assert_eq!(session.state(), SessionState::Turn(Player::X));
        assert_eq!(session.board().empty_positions().len(), 9);
        assert_eq!(session.scores().x(), 1);

        // Reset from mid-game too.
        session.submit_move(4, Player::X).unwrap();
        session.reset();
        assert_eq!(session.state(), SessionState::Turn(Player::X));
        assert_eq!(session.board().empty_positions().len(), 9);
    }
}
