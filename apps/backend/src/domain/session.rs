//! The session aggregate: one game's seats, position, captures and history.

use serde::{Deserialize, Serialize};

use crate::domain::chess_types::{Color, PlayerId, ProjectedPiece};
use crate::domain::rules_engine::RulesEngine;
use crate::domain::shakmaty_engine::ShakmatyEngine;

/// Seat colors in the order they are handed out: creator first, joiner second.
pub const SEAT_ORDER: [Color; 2] = [Color::White, Color::Black];

/// What happens when a third distinct identity tries to join.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeatPolicy {
    /// Refuse with `SessionFull`.
    #[default]
    RejectWhenFull,
    /// Accept without seating; the caller watches as an unseated viewer.
    AdmitSpectator,
}

/// Per-session behaviour chosen at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionOptions {
    /// Record captures and move history, and include them in projections.
    pub include_capture_history: bool,
    pub seat_policy: SeatPolicy,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            include_capture_history: true,
            seat_policy: SeatPolicy::default(),
        }
    }
}

/// Binding of a player identity to a color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seat {
    pub player: PlayerId,
    pub color: Color,
}

/// Entire game container, sufficient for all core operations.
///
/// Fields are only mutated by `seats::join` and the move pipeline in
/// `moves`; everything else reads through the accessors.
#[derive(Debug, Clone)]
pub struct Session<E: RulesEngine = ShakmatyEngine> {
    pub(crate) engine: E,
    pub(crate) options: SessionOptions,
    /// Join order; at most one seat per color and never more than two.
    pub(crate) seats: Vec<Seat>,
    pub(crate) position: E::Position,
    /// Append-only, one entry per capturing move (with history enabled).
    pub(crate) captures: Vec<ProjectedPiece>,
    /// Append-only move notations in play order (with history enabled).
    pub(crate) history: Vec<String>,
    /// Successful moves, counted regardless of the history toggle.
    pub(crate) move_count: u32,
}

impl<E: RulesEngine> Session<E> {
    pub(crate) fn new(engine: E, options: SessionOptions, creator: PlayerId) -> Self {
        let position = engine.starting_position();
        Self {
            engine,
            options,
            seats: vec![Seat {
                player: creator,
                color: SEAT_ORDER[0],
            }],
            position,
            captures: Vec::new(),
            history: Vec::new(),
            move_count: 0,
        }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn options(&self) -> SessionOptions {
        self.options
    }

    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    pub fn position(&self) -> &E::Position {
        &self.position
    }

    pub fn captures(&self) -> &[ProjectedPiece] {
        &self.captures
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Current side to move, straight from the engine.
    pub fn side_to_move(&self) -> Color {
        self.engine.side_to_move(&self.position)
    }
}
