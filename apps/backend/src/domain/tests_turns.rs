use crate::domain::test_engine::ScriptedEngine;
use crate::domain::{
    authorize_move, create_session, create_session_with, join, phase, resolve_status, submit_move,
    Color, GameOutcome, GameStatus, PlayerId, SessionOptions, SessionPhase,
};
use crate::errors::domain::SessionError;

fn id(s: &str) -> PlayerId {
    PlayerId::from(s)
}

#[test]
fn status_is_waiting_with_one_seat_regardless_of_engine_turn() {
    let session = create_session_with(ScriptedEngine::new(), SessionOptions::default(), "alice");
    assert_eq!(resolve_status(&session), GameStatus::Waiting);
    assert_eq!(session.side_to_move(), Color::White);
}

#[test]
fn status_mirrors_engine_side_once_seated() {
    let mut session = create_session_with(ScriptedEngine::new(), SessionOptions::default(), "alice");
    join(&mut session, &id("bob")).unwrap();
    assert_eq!(resolve_status(&session), GameStatus::WhiteTurn);

    submit_move(&mut session, &id("alice"), "e2", "e4").unwrap();
    assert_eq!(resolve_status(&session), GameStatus::BlackTurn);

    submit_move(&mut session, &id("bob"), "e7", "e5").unwrap();
    assert_eq!(resolve_status(&session), GameStatus::WhiteTurn);
}

#[test]
fn authorize_before_second_seat_is_game_not_started() {
    let session = create_session("alice");
    assert_eq!(
        authorize_move(&session, &id("alice")),
        Err(SessionError::GameNotStarted)
    );
    // Unseated callers get the same answer while waiting
    assert_eq!(
        authorize_move(&session, &id("mallory")),
        Err(SessionError::GameNotStarted)
    );
}

#[test]
fn authorize_returns_mover_color_only_for_side_to_move() {
    let mut session = create_session("alice");
    join(&mut session, &id("bob")).unwrap();

    assert_eq!(authorize_move(&session, &id("alice")), Ok(Color::White));
    assert_eq!(
        authorize_move(&session, &id("bob")),
        Err(SessionError::NotCallersTurn)
    );
    assert_eq!(
        authorize_move(&session, &id("mallory")),
        Err(SessionError::NotCallersTurn)
    );
}

#[test]
fn status_side_to_move_round_trips() {
    for color in [Color::White, Color::Black] {
        assert_eq!(GameStatus::for_side(color).side_to_move(), Some(color));
    }
    assert_eq!(GameStatus::Waiting.side_to_move(), None);
}

#[test]
fn phase_tracks_waiting_in_progress_and_conclusion() {
    let mut session = create_session("alice");
    assert_eq!(phase(&session), SessionPhase::Waiting);

    join(&mut session, &id("bob")).unwrap();
    assert_eq!(phase(&session), SessionPhase::InProgress);

    // Fool's mate
    submit_move(&mut session, &id("alice"), "f2", "f3").unwrap();
    submit_move(&mut session, &id("bob"), "e7", "e5").unwrap();
    submit_move(&mut session, &id("alice"), "g2", "g4").unwrap();
    submit_move(&mut session, &id("bob"), "d8", "h4").unwrap();

    assert_eq!(
        phase(&session),
        SessionPhase::Concluded(GameOutcome::Checkmate {
            winner: Color::Black
        })
    );
    // Status still mirrors the engine; the engine refuses further moves
    assert_eq!(resolve_status(&session), GameStatus::WhiteTurn);
    assert!(matches!(
        submit_move(&mut session, &id("alice"), "e2", "e4"),
        Err(SessionError::IllegalMove { .. })
    ));
}
