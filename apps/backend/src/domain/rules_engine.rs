//! The seam between the session core and whatever decides chess legality.
//!
//! The core never inspects chess rules itself. Everything it needs from the
//! rules side goes through [`RulesEngine`]: the starting position, the side to
//! move, applying a move, reading the board back out, and (for display only)
//! whether the game has reached a terminal outcome.

use serde::{Deserialize, Serialize};

use crate::domain::chess_types::{Color, Piece, PieceType, Square};

/// Board occupancy as an 8x8 grid. Row 0 is rank 8, column 0 is file `a`.
pub type BoardGrid = [[Option<Piece>; 8]; 8];

/// A proposed move in coordinate form.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct MoveRequest {
    pub from: Square,
    pub to: Square,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promotion: Option<PieceType>,
}

impl MoveRequest {
    pub fn new(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            promotion: None,
        }
    }

    pub fn with_promotion(mut self, promotion: Option<PieceType>) -> Self {
        self.promotion = promotion;
        self
    }
}

/// Result of a move the engine accepted.
#[derive(Debug, Clone)]
pub struct AppliedMove<P> {
    /// Position after the move.
    pub position: P,
    /// Side to move in `position`.
    pub side_to_move: Color,
    /// Role of the piece removed from the board, if the move captured.
    pub captured: Option<PieceType>,
    /// Move notation for history (SAN for the shakmaty engine).
    pub notation: String,
}

/// Engine-internal reason a move was refused.
///
/// The session collapses every rejection into a single outward error kind;
/// the reason is kept for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{reason}")]
pub struct RulesRejection {
    pub reason: String,
}

impl RulesRejection {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Terminal outcome as reported by the engine.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameOutcome {
    Checkmate { winner: Color },
    Stalemate,
    InsufficientMaterial,
}

/// Fixed-capability rules engine.
///
/// Implementations must be pure with respect to `Position`: the same position
/// and request always produce the same answer, and no state is kept between
/// calls.
pub trait RulesEngine {
    type Position: Clone + std::fmt::Debug;

    fn starting_position(&self) -> Self::Position;

    fn side_to_move(&self, position: &Self::Position) -> Color;

    /// Validate and apply `request` against `position`.
    ///
    /// `position` is never mutated; the resulting position is returned in
    /// [`AppliedMove::position`].
    fn apply_move(
        &self,
        position: &Self::Position,
        request: MoveRequest,
    ) -> Result<AppliedMove<Self::Position>, RulesRejection>;

    fn board(&self, position: &Self::Position) -> BoardGrid;

    fn legal_moves(&self, position: &Self::Position) -> Vec<MoveRequest>;

    fn outcome(&self, position: &Self::Position) -> Option<GameOutcome>;
}
