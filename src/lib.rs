//! Pure tic-tac-toe game logic with a three-tier computer opponent.
//!
//! The crate is consumed as an in-process library by a rendering
//! layer that owns its own input handling and display.
//!
//! # Architecture
//!
//! - **Types**: board, players, and game status ([`Board`], [`Player`],
//!   [`GameStatus`])
//! - **Rules**: pure win/draw evaluation ([`rules`])
//! - **Strategies**: interchangeable computer policies dispatched by
//!   [`Difficulty`] - random (Easy), own-win look-ahead (Medium), and
//!   exhaustive minimax (Hard)
//! - **Session**: turn order, computer replies, and the running score
//!   tally ([`GameSession`])
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{Difficulty, GameSession, Mode, Player};
//!
//! let mut session = GameSession::new(Mode::PlayerVsComputer, Difficulty::Hard);
//! // Human X plays the center; the session applies O's reply before
//! // returning, so the report reflects both moves.
//! let report = session.submit_move(4, Player::X)?;
//! assert_eq!(report.board.empty_positions().len(), 7);
//! # Ok::<(), tictactoe_core::GameError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod error;
mod session;
mod strategy;
mod types;

// Public rules module - pure evaluation functions
pub mod rules;

// Crate-level exports - errors
pub use error::GameError;

// Crate-level exports - session management
pub use session::{GameSession, Mode, MoveReport, ScoreBoard, SessionState};

// Crate-level exports - strategies
pub use strategy::{Difficulty, Exhaustive, Heuristic, MoveStrategy, Random};

// Crate-level exports - core types
pub use types::{Board, GameStatus, Player, Square};
