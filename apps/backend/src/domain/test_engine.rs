//! Test-only rules engine with scripted answers.
//!
//! Accepts any move whose squares differ, except moves starting on a square
//! marked as rejected. Moves landing on a square marked as a capture report
//! that capture. Lets session tests exercise bookkeeping without depending on
//! real chess positions.

use std::collections::{HashMap, HashSet};

use crate::domain::chess_types::{Color, Piece, PieceType, Square};
use crate::domain::rules_engine::{
    AppliedMove, BoardGrid, GameOutcome, MoveRequest, RulesEngine, RulesRejection,
};

#[derive(Debug, Clone, Default)]
pub struct ScriptedEngine {
    captures: HashMap<Square, PieceType>,
    rejected_from: HashSet<Square>,
    /// Report a stalemate once this many plies have been played.
    stalemate_after: Option<u32>,
    /// Report the mover as side to move in `AppliedMove` (position still flips).
    misreport_side: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptedPosition {
    pub side: Color,
    pub ply: u32,
}

impl ScriptedEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn capturing_on(mut self, square: &str, piece_type: PieceType) -> Self {
        self.captures.insert(sq(square), piece_type);
        self
    }

    pub fn rejecting_from(mut self, square: &str) -> Self {
        self.rejected_from.insert(sq(square));
        self
    }

    pub fn stalemate_after(mut self, plies: u32) -> Self {
        self.stalemate_after = Some(plies);
        self
    }

    pub fn misreporting_side(mut self) -> Self {
        self.misreport_side = true;
        self
    }
}

pub fn sq(s: &str) -> Square {
    s.parse().expect("hardcoded valid square")
}

impl RulesEngine for ScriptedEngine {
    type Position = ScriptedPosition;

    fn starting_position(&self) -> ScriptedPosition {
        ScriptedPosition {
            side: Color::White,
            ply: 0,
        }
    }

    fn side_to_move(&self, position: &ScriptedPosition) -> Color {
        position.side
    }

    fn apply_move(
        &self,
        position: &ScriptedPosition,
        request: MoveRequest,
    ) -> Result<AppliedMove<ScriptedPosition>, RulesRejection> {
        if request.from == request.to || self.rejected_from.contains(&request.from) {
            return Err(RulesRejection::new(format!(
                "scripted rejection {}{}",
                request.from, request.to
            )));
        }
        let next = ScriptedPosition {
            side: position.side.opposite(),
            ply: position.ply + 1,
        };
        let reported_side = if self.misreport_side {
            position.side
        } else {
            next.side
        };
        Ok(AppliedMove {
            side_to_move: reported_side,
            position: next,
            captured: self.captures.get(&request.to).copied(),
            notation: format!("{}{}", request.from, request.to),
        })
    }

    fn board(&self, _position: &ScriptedPosition) -> BoardGrid {
        let mut grid: BoardGrid = [[None; 8]; 8];
        grid[0][4] = Some(Piece {
            color: Color::Black,
            piece_type: PieceType::King,
        });
        grid[7][4] = Some(Piece {
            color: Color::White,
            piece_type: PieceType::King,
        });
        grid
    }

    fn legal_moves(&self, _position: &ScriptedPosition) -> Vec<MoveRequest> {
        Vec::new()
    }

    fn outcome(&self, position: &ScriptedPosition) -> Option<GameOutcome> {
        self.stalemate_after
            .filter(|&plies| position.ply >= plies)
            .map(|_| GameOutcome::Stalemate)
    }
}
