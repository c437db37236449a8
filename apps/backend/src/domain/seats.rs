//! Seat assignment: first come, first served; White then Black.

use serde::{Deserialize, Serialize};

use crate::domain::chess_types::{Color, PlayerId};
use crate::domain::rules_engine::RulesEngine;
use crate::domain::session::{Seat, SeatPolicy, Session, SessionOptions, SEAT_ORDER};
use crate::domain::shakmaty_engine::ShakmatyEngine;
use crate::errors::domain::SessionError;

/// How a successful join was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "role", content = "color", rename_all = "snake_case")]
pub enum JoinOutcome {
    Seated(Color),
    Spectating,
}

/// Start a standard game with default options. The creator sits as White.
pub fn create_session(creator: impl Into<PlayerId>) -> Session<ShakmatyEngine> {
    create_session_with(ShakmatyEngine::new(), SessionOptions::default(), creator)
}

/// Start a game on an injected engine with explicit options.
pub fn create_session_with<E: RulesEngine>(
    engine: E,
    options: SessionOptions,
    creator: impl Into<PlayerId>,
) -> Session<E> {
    Session::new(engine, options, creator.into())
}

/// Seat color bound to `player`, or `None` when unseated.
pub fn seat_color<E: RulesEngine>(session: &Session<E>, player: &PlayerId) -> Option<Color> {
    session
        .seats
        .iter()
        .find(|seat| &seat.player == player)
        .map(|seat| seat.color)
}

/// Seat `caller` in the next free color.
///
/// The duplicate-identity check runs before the capacity check, so a seated
/// player re-joining a full game still gets `DuplicateSeat`.
pub fn join<E: RulesEngine>(
    session: &mut Session<E>,
    caller: &PlayerId,
) -> Result<JoinOutcome, SessionError> {
    if seat_color(session, caller).is_some() {
        return Err(SessionError::DuplicateSeat);
    }

    match SEAT_ORDER.get(session.seats.len()) {
        Some(&color) => {
            session.seats.push(Seat {
                player: caller.clone(),
                color,
            });
            Ok(JoinOutcome::Seated(color))
        }
        None => match session.options.seat_policy {
            SeatPolicy::RejectWhenFull => Err(SessionError::SessionFull),
            SeatPolicy::AdmitSpectator => Ok(JoinOutcome::Spectating),
        },
    }
}
