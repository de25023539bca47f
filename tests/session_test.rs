//! Integration tests for session orchestration.

use tictactoe_core::{
    Difficulty, GameError, GameSession, GameStatus, Mode, Player, Random, SessionState,
};

#[test]
fn test_top_row_win_scenario() {
    let mut session = GameSession::new(Mode::PlayerVsPlayer, Difficulty::Easy);
    assert_eq!(session.scores().x(), 0);

    for (pos, player) in [(0, Player::X), (4, Player::O), (1, Player::X), (7, Player::O)] {
        let report = session.submit_move(pos, player).expect("valid move");
        assert_eq!(report.status, GameStatus::InProgress);
    }

    let report = session.submit_move(2, Player::X).expect("winning move");
    assert_eq!(report.status, GameStatus::Won(Player::X));
    assert_eq!(session.state(), SessionState::Finished(GameStatus::Won(Player::X)));
    assert_eq!(session.scores().x(), 1);
    assert_eq!(session.scores().o(), 0);
}

#[test]
fn test_computer_reply_lands_before_the_call_returns() {
    let mut session = GameSession::with_strategy(
        Mode::PlayerVsComputer,
        Difficulty::Easy,
        Box::new(Random::seeded(11)),
    );

    let report = session.submit_move(4, Player::X).expect("valid move");

    // X's mark plus O's reply are both on the board already.
    assert_eq!(report.board.empty_positions().len(), 7);
    assert_eq!(session.state(), SessionState::Turn(Player::X));

    // O is session-controlled; outside submissions as O are out of turn.
    assert_eq!(
        session.submit_move(0, Player::O),
        Err(GameError::OutOfTurn(Player::X))
    );
}

#[test]
fn test_hard_session_never_loses_a_full_game() {
    let mut session = GameSession::new(Mode::PlayerVsComputer, Difficulty::Hard);

    // Naive human: always the lowest open square.
    loop {
        let pos = session
            .board()
            .empty_positions()
            .first()
            .copied()
            .expect("unfinished game has an open square");
        let report = session.submit_move(pos, Player::X).expect("valid move");
        match report.status {
            GameStatus::InProgress => {}
            GameStatus::Draw | GameStatus::Won(Player::O) => break,
            GameStatus::Won(Player::X) => panic!("exhaustive opponent lost"),
        }
    }
    assert_eq!(session.scores().x(), 0);
}

#[test]
fn test_reset_is_unconditional_and_keeps_scores() {
    let mut session = GameSession::with_strategy(
        Mode::PlayerVsComputer,
        Difficulty::Easy,
        Box::new(Random::seeded(3)),
    );

    // Mid-game reset.
    session.submit_move(4, Player::X).expect("valid move");
    session.reset();
    assert_eq!(session.state(), SessionState::Turn(Player::X));
    assert_eq!(session.board().empty_positions().len(), 9);

    // Reset after a finished game keeps the tally.
    let mut pvp = GameSession::new(Mode::PlayerVsPlayer, Difficulty::Easy);
    for (pos, player) in [
        (0, Player::X),
        (3, Player::O),
        (1, Player::X),
        (4, Player::O),
        (2, Player::X),
    ] {
        pvp.submit_move(pos, player).expect("valid move");
    }
    assert_eq!(pvp.scores().x(), 1);
    pvp.reset();
    pvp.reset();
    assert_eq!(pvp.state(), SessionState::Turn(Player::X));
    assert_eq!(pvp.scores().x(), 1);
}

#[test]
fn test_independent_sessions_do_not_share_state() {
    let mut a = GameSession::new(Mode::PlayerVsPlayer, Difficulty::Easy);
    let b = GameSession::new(Mode::PlayerVsPlayer, Difficulty::Hard);

    a.submit_move(0, Player::X).expect("valid move");
    assert_eq!(a.board().empty_positions().len(), 8);
    assert_eq!(b.board().empty_positions().len(), 9);
    assert_eq!(b.state(), SessionState::Turn(Player::X));
}

#[test]
fn test_scores_accumulate_across_games() {
    let mut session = GameSession::new(Mode::PlayerVsPlayer, Difficulty::Easy);
    for _ in 0..2 {
        for (pos, player) in [
            (0, Player::X),
            (3, Player::O),
            (1, Player::X),
            (4, Player::O),
            (2, Player::X),
        ] {
            session.submit_move(pos, player).expect("valid move");
        }
        session.reset();
    }
    assert_eq!(session.scores().x(), 2);
    assert_eq!(session.scores().o(), 0);
}
