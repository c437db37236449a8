//! Player view of a session - what a given caller is allowed to see.
//!
//! Projection is total: any identity, seated or not, gets a view. What
//! changes with identity is `color` (the viewer's own seat) and `opponent`
//! (only revealed to a seated viewer once somebody else has sat down).

use serde::{Deserialize, Serialize};

use crate::domain::chess_types::{Color, PlayerId, ProjectedPiece, Square};
use crate::domain::lifecycle::{phase, SessionPhase};
use crate::domain::rules_engine::{GameOutcome, RulesEngine};
use crate::domain::seats::seat_color;
use crate::domain::session::Session;
use crate::domain::turn::{resolve_status, GameStatus};

/// Snapshot returned to one viewer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    /// Occupied squares, row-major from a8 to h1.
    pub board: Vec<ProjectedPiece>,
    /// Captured pieces in capture order. Absent when the session does not
    /// track captures and history.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub captures: Option<Vec<ProjectedPiece>>,
    /// Move notations in play order. Absent under the same condition.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub history: Option<Vec<String>>,
    pub status: GameStatus,
    /// Viewer's own seat color; `None` for unseated viewers.
    pub color: Option<Color>,
    /// The other seated identity; `None` unless the viewer is seated and an
    /// opponent has joined.
    pub opponent: Option<PlayerId>,
    pub move_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outcome: Option<GameOutcome>,
}

pub fn project<E: RulesEngine>(session: &Session<E>, viewer: &PlayerId) -> PlayerView {
    let color = seat_color(session, viewer);
    let opponent = color.and_then(|_| {
        session
            .seats
            .iter()
            .find(|seat| &seat.player != viewer)
            .map(|seat| seat.player.clone())
    });
    let outcome = match phase(session) {
        SessionPhase::Concluded(outcome) => Some(outcome),
        SessionPhase::Waiting | SessionPhase::InProgress => None,
    };
    let tracked = session.options.include_capture_history;

    PlayerView {
        board: project_board(session),
        captures: tracked.then(|| session.captures.clone()),
        history: tracked.then(|| session.history.clone()),
        status: resolve_status(session),
        color,
        opponent,
        move_count: session.move_count,
        outcome,
    }
}

fn project_board<E: RulesEngine>(session: &Session<E>) -> Vec<ProjectedPiece> {
    let grid = session.engine.board(&session.position);
    let mut pieces = Vec::with_capacity(32);
    for (row, cells) in grid.iter().enumerate() {
        for (col, cell) in cells.iter().enumerate() {
            if let (Some(piece), Some(square)) = (cell, Square::from_row_col(row, col)) {
                pieces.push(ProjectedPiece::on_board(*piece, square));
            }
        }
    }
    pieces
}
