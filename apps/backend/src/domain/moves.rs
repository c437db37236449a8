//! Move pipeline: readiness, turn ownership, conclusion, engine legality,
//! then mutation.
//!
//! Nothing on the session is touched until the engine has accepted the move,
//! so every error path leaves position, captures, history and the move
//! counter exactly as they were.

use crate::domain::chess_types::{Color, PieceType, PlayerId, ProjectedPiece, Square};
use crate::domain::rules_engine::{MoveRequest, RulesEngine};
use crate::domain::session::Session;
use crate::domain::turn::authorize_move;
use crate::errors::domain::SessionError;

/// Submit a move given as two algebraic squares (`"e2"`, `"e4"`).
pub fn submit_move<E: RulesEngine>(
    session: &mut Session<E>,
    caller: &PlayerId,
    from: &str,
    to: &str,
) -> Result<(), SessionError> {
    submit_move_with_promotion(session, caller, from, to, None)
}

/// As [`submit_move`], with an explicit promotion choice.
///
/// Malformed squares are reported as `IllegalMove`, but only after the caller
/// has been authorized, so turn errors always take precedence.
pub fn submit_move_with_promotion<E: RulesEngine>(
    session: &mut Session<E>,
    caller: &PlayerId,
    from: &str,
    to: &str,
    promotion: Option<PieceType>,
) -> Result<(), SessionError> {
    let mover = authorize_move(session, caller)?;
    let request = parse_request(from, to)?.with_promotion(promotion);
    apply_authorized(session, mover, request)
}

/// Submit an already-parsed move.
pub fn submit_request<E: RulesEngine>(
    session: &mut Session<E>,
    caller: &PlayerId,
    request: MoveRequest,
) -> Result<(), SessionError> {
    let mover = authorize_move(session, caller)?;
    apply_authorized(session, mover, request)
}

fn parse_request(from: &str, to: &str) -> Result<MoveRequest, SessionError> {
    let from: Square = from
        .parse()
        .map_err(|e| SessionError::illegal_move(format!("{e}")))?;
    let to: Square = to
        .parse()
        .map_err(|e| SessionError::illegal_move(format!("{e}")))?;
    Ok(MoveRequest::new(from, to))
}

fn apply_authorized<E: RulesEngine>(
    session: &mut Session<E>,
    mover: Color,
    request: MoveRequest,
) -> Result<(), SessionError> {
    // A concluded game accepts nothing, even where the engine still has moves
    if let Some(outcome) = session.engine.outcome(&session.position) {
        return Err(SessionError::illegal_move(format!(
            "game already concluded: {outcome:?}"
        )));
    }

    let applied = session
        .engine
        .apply_move(&session.position, request)
        .map_err(|rejection| SessionError::illegal_move(rejection.reason))?;

    session.position = applied.position;
    if session.options.include_capture_history {
        // The removed piece always belongs to the side that did not move
        if let Some(piece_type) = applied.captured {
            session
                .captures
                .push(ProjectedPiece::captured(mover.opposite(), piece_type));
        }
        session.history.push(applied.notation);
    }
    session.move_count += 1;
    Ok(())
}
