//! Core board-facing types: Color, PieceType, Piece, Square, Placement.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

const FILES: &[u8; 8] = b"abcdefgh";

/// Color of a seat or a piece.
///
/// "Not seated" is modelled as `Option<Color>::None` rather than a third variant,
/// so an unseated caller can never compare equal to a side-to-move.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PieceType {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl fmt::Display for PieceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceType::Pawn => "pawn",
            PieceType::Knight => "knight",
            PieceType::Bishop => "bishop",
            PieceType::Rook => "rook",
            PieceType::Queen => "queen",
            PieceType::King => "king",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub color: Color,
    #[serde(rename = "type")]
    pub piece_type: PieceType,
}

/// Error returned when a coordinate string is not `a1`..`h8`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid square {0:?}: expected file a-h followed by rank 1-8")]
pub struct ParseSquareError(pub String);

/// A square on the 8x8 board. `file` and `rank` are both 0-based (a1 = 0,0).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Square {
    file: u8,
    rank: u8,
}

impl Square {
    #[must_use]
    pub const fn new(file: u8, rank: u8) -> Option<Self> {
        if file < 8 && rank < 8 {
            Some(Self { file, rank })
        } else {
            None
        }
    }

    /// Map a board-grid cell to a square. Row 0 is rank 8 (the top of a
    /// White-oriented board); column 0 is file `a`.
    #[must_use]
    pub const fn from_row_col(row: usize, col: usize) -> Option<Self> {
        if row < 8 && col < 8 {
            Some(Self {
                file: col as u8,
                rank: 7 - row as u8,
            })
        } else {
            None
        }
    }

    #[inline]
    pub const fn file(self) -> u8 {
        self.file
    }

    #[inline]
    pub const fn rank(self) -> u8 {
        self.rank
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", FILES[self.file as usize] as char, self.rank + 1)
    }
}

impl FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.as_bytes() {
            [file @ b'a'..=b'h', rank @ b'1'..=b'8'] => Ok(Self {
                file: file - b'a',
                rank: rank - b'1',
            }),
            _ => Err(ParseSquareError(s.to_string())),
        }
    }
}

impl From<Square> for String {
    fn from(sq: Square) -> Self {
        sq.to_string()
    }
}

impl TryFrom<String> for Square {
    type Error = ParseSquareError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Where a projected piece sits: on a board square, or off-board after capture.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Placement {
    OnBoard(Square),
    Captured,
}

impl Placement {
    pub const CAPTURED_TOKEN: &'static str = "CAPTURED";

    #[must_use]
    pub const fn square(self) -> Option<Square> {
        match self {
            Placement::OnBoard(sq) => Some(sq),
            Placement::Captured => None,
        }
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Placement::OnBoard(sq) => write!(f, "{sq}"),
            Placement::Captured => f.write_str(Self::CAPTURED_TOKEN),
        }
    }
}

impl From<Placement> for String {
    fn from(p: Placement) -> Self {
        p.to_string()
    }
}

impl TryFrom<String> for Placement {
    type Error = ParseSquareError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        if s == Self::CAPTURED_TOKEN {
            Ok(Placement::Captured)
        } else {
            s.parse().map(Placement::OnBoard)
        }
    }
}

/// A piece as a viewer sees it: on the board, or in the capture list.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct ProjectedPiece {
    pub color: Color,
    #[serde(rename = "type")]
    pub piece_type: PieceType,
    pub square: Placement,
}

impl ProjectedPiece {
    pub fn on_board(piece: Piece, square: Square) -> Self {
        Self {
            color: piece.color,
            piece_type: piece.piece_type,
            square: Placement::OnBoard(square),
        }
    }

    pub fn captured(color: Color, piece_type: PieceType) -> Self {
        Self {
            color,
            piece_type,
            square: Placement::Captured,
        }
    }
}

/// Opaque caller identity. Only ever compared for equality.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(String);

impl PlayerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PlayerId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for PlayerId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
