//! Production rules engine backed by shakmaty.
//!
//! Moves are resolved through UCI in standard castling mode, so a king move
//! `e1g1` castles. SAN is computed against the position before the move.

use shakmaty::san::San;
use shakmaty::uci::UciMove;
use shakmaty::{CastlingMode, Chess, File, Position, Rank, Role};

use crate::domain::chess_types::{Color, Piece, PieceType, Square};
use crate::domain::rules_engine::{
    AppliedMove, BoardGrid, GameOutcome, MoveRequest, RulesEngine, RulesRejection,
};

/// Stateless shakmaty-backed engine. Cheap to clone and share.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShakmatyEngine;

impl ShakmatyEngine {
    pub fn new() -> Self {
        Self
    }

    /// Parse a position from FEN. Used by tests and tools that start mid-game.
    pub fn position_from_fen(fen: &str) -> Result<Chess, RulesRejection> {
        let fen: shakmaty::fen::Fen = fen
            .parse()
            .map_err(|e| RulesRejection::new(format!("invalid FEN: {e}")))?;
        fen.into_position(CastlingMode::Standard)
            .map_err(|e| RulesRejection::new(format!("invalid FEN: {e}")))
    }

    fn uci_for(position: &Chess, request: MoveRequest) -> String {
        let promotion = request
            .promotion
            .or_else(|| Self::implied_promotion(position, request));
        match promotion {
            Some(role) => format!("{}{}{}", request.from, request.to, promotion_char(role)),
            None => format!("{}{}", request.from, request.to),
        }
    }

    /// A pawn reaching the last rank without an explicit choice becomes a queen.
    fn implied_promotion(position: &Chess, request: MoveRequest) -> Option<PieceType> {
        let moving = position.board().piece_at(to_shakmaty_square(request.from))?;
        let last_rank = request.to.rank() == 0 || request.to.rank() == 7;
        (moving.role == Role::Pawn && last_rank).then_some(PieceType::Queen)
    }
}

impl RulesEngine for ShakmatyEngine {
    type Position = Chess;

    fn starting_position(&self) -> Chess {
        Chess::default()
    }

    fn side_to_move(&self, position: &Chess) -> Color {
        from_shakmaty_color(position.turn())
    }

    fn apply_move(
        &self,
        position: &Chess,
        request: MoveRequest,
    ) -> Result<AppliedMove<Chess>, RulesRejection> {
        let uci_text = Self::uci_for(position, request);
        let uci: UciMove = uci_text
            .parse()
            .map_err(|_| RulesRejection::new(format!("unparseable move {uci_text}")))?;

        let m = uci
            .to_move(position)
            .map_err(|_| RulesRejection::new(format!("illegal move {uci_text}")))?;

        // SAN depends on the position before the move
        let san = San::from_move(position, &m);
        let captured = m.capture().map(from_shakmaty_role);

        let next = position
            .clone()
            .play(&m)
            .map_err(|_| RulesRejection::new(format!("illegal move {uci_text}")))?;

        Ok(AppliedMove {
            side_to_move: from_shakmaty_color(next.turn()),
            position: next,
            captured,
            notation: san.to_string(),
        })
    }

    fn board(&self, position: &Chess) -> BoardGrid {
        let board = position.board();
        let mut grid: BoardGrid = [[None; 8]; 8];
        for (row, cells) in grid.iter_mut().enumerate() {
            for (col, cell) in cells.iter_mut().enumerate() {
                let sq = shakmaty::Square::from_coords(
                    File::new(col as u32),
                    Rank::new(7 - row as u32),
                );
                *cell = board.piece_at(sq).map(|p| Piece {
                    color: from_shakmaty_color(p.color),
                    piece_type: from_shakmaty_role(p.role),
                });
            }
        }
        grid
    }

    fn legal_moves(&self, position: &Chess) -> Vec<MoveRequest> {
        position
            .legal_moves()
            .iter()
            .map(|m| UciMove::from_move(m, CastlingMode::Standard).to_string())
            .filter_map(|uci| parse_uci_request(&uci))
            .collect()
    }

    fn outcome(&self, position: &Chess) -> Option<GameOutcome> {
        if position.is_checkmate() {
            // The side to move is mated
            Some(GameOutcome::Checkmate {
                winner: from_shakmaty_color(position.turn()).opposite(),
            })
        } else if position.is_stalemate() {
            Some(GameOutcome::Stalemate)
        } else if position.is_insufficient_material() {
            Some(GameOutcome::InsufficientMaterial)
        } else {
            None
        }
    }
}

fn to_shakmaty_square(sq: Square) -> shakmaty::Square {
    shakmaty::Square::from_coords(File::new(sq.file() as u32), Rank::new(sq.rank() as u32))
}

fn from_shakmaty_color(c: shakmaty::Color) -> Color {
    match c {
        shakmaty::Color::White => Color::White,
        shakmaty::Color::Black => Color::Black,
    }
}

fn from_shakmaty_role(r: Role) -> PieceType {
    match r {
        Role::Pawn => PieceType::Pawn,
        Role::Knight => PieceType::Knight,
        Role::Bishop => PieceType::Bishop,
        Role::Rook => PieceType::Rook,
        Role::Queen => PieceType::Queen,
        Role::King => PieceType::King,
    }
}

fn promotion_char(p: PieceType) -> char {
    match p {
        PieceType::Knight => 'n',
        PieceType::Bishop => 'b',
        PieceType::Rook => 'r',
        PieceType::Queen => 'q',
        // Not a legal promotion target; shakmaty rejects it
        PieceType::Pawn => 'p',
        PieceType::King => 'k',
    }
}

fn parse_promotion_char(c: char) -> Option<PieceType> {
    match c {
        'n' => Some(PieceType::Knight),
        'b' => Some(PieceType::Bishop),
        'r' => Some(PieceType::Rook),
        'q' => Some(PieceType::Queen),
        _ => None,
    }
}

fn parse_uci_request(uci: &str) -> Option<MoveRequest> {
    let from: Square = uci.get(0..2)?.parse().ok()?;
    let to: Square = uci.get(2..4)?.parse().ok()?;
    let promotion = match uci.get(4..) {
        Some("") | None => None,
        Some(rest) => Some(parse_promotion_char(rest.chars().next()?)?),
    };
    Some(MoveRequest::new(from, to).with_promotion(promotion))
}
