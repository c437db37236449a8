//! Turn controller: who may move right now.

use serde::{Deserialize, Serialize};

use crate::domain::chess_types::{Color, PlayerId};
use crate::domain::rules_engine::RulesEngine;
use crate::domain::seats::seat_color;
use crate::domain::session::{Session, SEAT_ORDER};
use crate::errors::domain::SessionError;

/// Derived game status. Never stored.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameStatus {
    /// Fewer than two seats filled.
    Waiting,
    WhiteTurn,
    BlackTurn,
}

impl GameStatus {
    pub const fn for_side(color: Color) -> Self {
        match color {
            Color::White => GameStatus::WhiteTurn,
            Color::Black => GameStatus::BlackTurn,
        }
    }

    /// Color expected to act, if any.
    pub const fn side_to_move(self) -> Option<Color> {
        match self {
            GameStatus::Waiting => None,
            GameStatus::WhiteTurn => Some(Color::White),
            GameStatus::BlackTurn => Some(Color::Black),
        }
    }
}

pub fn resolve_status<E: RulesEngine>(session: &Session<E>) -> GameStatus {
    if session.seats.len() < SEAT_ORDER.len() {
        return GameStatus::Waiting;
    }
    GameStatus::for_side(session.side_to_move())
}

/// Check that `caller` may move now and return the color they move as.
pub fn authorize_move<E: RulesEngine>(
    session: &Session<E>,
    caller: &PlayerId,
) -> Result<Color, SessionError> {
    let Some(to_move) = resolve_status(session).side_to_move() else {
        return Err(SessionError::GameNotStarted);
    };

    match seat_color(session, caller) {
        Some(color) if color == to_move => Ok(color),
        _ => Err(SessionError::NotCallersTurn),
    }
}
