//! Game-level phase derived from seats and the engine's outcome.

use serde::{Deserialize, Serialize};

use crate::domain::rules_engine::{GameOutcome, RulesEngine};
use crate::domain::session::{Session, SEAT_ORDER};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "phase", content = "outcome", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SessionPhase {
    /// Waiting for the second player.
    Waiting,
    /// Both seats filled, turns alternate.
    InProgress,
    /// The engine reports a terminal position; the move pipeline refuses
    /// every further move.
    Concluded(GameOutcome),
}

pub fn phase<E: RulesEngine>(session: &Session<E>) -> SessionPhase {
    if session.seats.len() < SEAT_ORDER.len() {
        return SessionPhase::Waiting;
    }
    match session.engine.outcome(&session.position) {
        Some(outcome) => SessionPhase::Concluded(outcome),
        None => SessionPhase::InProgress,
    }
}
