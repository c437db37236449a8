use crate::domain::test_engine::{sq, ScriptedEngine};
use crate::domain::{
    create_session, create_session_with, join, project, submit_move, Color, GameOutcome,
    GameStatus, PieceType, Placement, PlayerId, ProjectedPiece, SeatPolicy, SessionOptions,
};

fn id(s: &str) -> PlayerId {
    PlayerId::from(s)
}

#[test]
fn starting_board_projects_all_pieces_from_a8() {
    let session = create_session("alice");
    let view = project(&session, &id("alice"));

    assert_eq!(view.board.len(), 32);
    assert_eq!(
        view.board[0],
        ProjectedPiece {
            color: Color::Black,
            piece_type: PieceType::Rook,
            square: Placement::OnBoard(sq("a8")),
        }
    );
    assert_eq!(view.board[4].piece_type, PieceType::King);
    assert_eq!(view.board[4].square, Placement::OnBoard(sq("e8")));
    let last = view.board.last().copied().unwrap();
    assert_eq!(last.square, Placement::OnBoard(sq("h1")));
    assert_eq!(last.color, Color::White);

    assert!(view
        .board
        .iter()
        .all(|p| p.square != Placement::Captured));
}

#[test]
fn creator_view_before_join() {
    let session = create_session("alice");
    let view = project(&session, &id("alice"));

    assert_eq!(view.status, GameStatus::Waiting);
    assert_eq!(view.color, Some(Color::White));
    assert_eq!(view.opponent, None);
    assert_eq!(view.captures, Some(vec![]));
    assert_eq!(view.history, Some(vec![]));
    assert_eq!(view.move_count, 0);
    assert_eq!(view.outcome, None);
}

#[test]
fn seated_players_see_each_other() {
    let mut session = create_session("alice");
    join(&mut session, &id("bob")).unwrap();

    let white = project(&session, &id("alice"));
    assert_eq!(white.color, Some(Color::White));
    assert_eq!(white.opponent, Some(id("bob")));
    assert_eq!(white.status, GameStatus::WhiteTurn);

    let black = project(&session, &id("bob"));
    assert_eq!(black.color, Some(Color::Black));
    assert_eq!(black.opponent, Some(id("alice")));
}

#[test]
fn unseated_viewer_gets_no_color_or_opponent() {
    let options = SessionOptions {
        seat_policy: SeatPolicy::AdmitSpectator,
        ..SessionOptions::default()
    };
    let mut session = create_session_with(ScriptedEngine::new(), options, "alice");
    join(&mut session, &id("bob")).unwrap();
    join(&mut session, &id("carol")).unwrap();

    for viewer in ["carol", "dave"] {
        let view = project(&session, &id(viewer));
        assert_eq!(view.color, None);
        assert_eq!(view.opponent, None);
        assert_eq!(view.status, GameStatus::WhiteTurn);
        assert_eq!(view.board.len(), 2);
    }
}

#[test]
fn captures_serialize_with_token() {
    let engine = ScriptedEngine::new().capturing_on("d5", PieceType::Pawn);
    let mut session = create_session_with(engine, SessionOptions::default(), "alice");
    join(&mut session, &id("bob")).unwrap();
    submit_move(&mut session, &id("alice"), "e4", "d5").unwrap();

    let view = project(&session, &id("bob"));
    assert_eq!(view.history, Some(vec!["e4d5".to_string()]));
    assert_eq!(view.move_count, 1);

    let json = serde_json::to_value(&view).unwrap();
    assert_eq!(
        json["captures"],
        serde_json::json!([{ "color": "BLACK", "type": "PAWN", "square": "CAPTURED" }])
    );
    assert_eq!(json["status"], "BLACK_TURN");
    assert_eq!(json["color"], "BLACK");
    assert_eq!(json["opponent"], "alice");
    assert_eq!(json["move_count"], 1);
    assert!(json.get("outcome").is_none());
}

#[test]
fn disabled_history_omits_both_lists() {
    let options = SessionOptions {
        include_capture_history: false,
        ..SessionOptions::default()
    };
    let engine = ScriptedEngine::new().capturing_on("d5", PieceType::Pawn);
    let mut session = create_session_with(engine, options, "alice");
    join(&mut session, &id("bob")).unwrap();
    submit_move(&mut session, &id("alice"), "e4", "d5").unwrap();

    let view = project(&session, &id("alice"));
    assert_eq!(view.captures, None);
    assert_eq!(view.history, None);
    assert_eq!(view.move_count, 1);

    let json = serde_json::to_value(&view).unwrap();
    assert!(json.get("captures").is_none());
    assert!(json.get("history").is_none());
}

#[test]
fn checkmate_is_reported_in_view() {
    let mut session = create_session("alice");
    join(&mut session, &id("bob")).unwrap();
    for (who, from, to) in [
        ("alice", "f2", "f3"),
        ("bob", "e7", "e5"),
        ("alice", "g2", "g4"),
        ("bob", "d8", "h4"),
    ] {
        submit_move(&mut session, &id(who), from, to).unwrap();
    }

    let view = project(&session, &id("carol"));
    assert_eq!(
        view.outcome,
        Some(GameOutcome::Checkmate {
            winner: Color::Black
        })
    );
    assert_eq!(view.history.as_deref().map(<[String]>::len), Some(4));
    assert_eq!(view.status, GameStatus::WhiteTurn);
}

#[test]
fn projection_is_read_only() {
    let mut session = create_session("alice");
    join(&mut session, &id("bob")).unwrap();
    let first = project(&session, &id("alice"));
    let _ = project(&session, &id("nobody"));
    assert_eq!(project(&session, &id("alice")), first);
}
