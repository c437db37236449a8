use std::collections::BTreeMap;

use chess_backend::domain::{Color, MoveRequest, PieceType, PlayerId};
use chess_backend::{AppError, GameStatus, PlayerView, SessionError, SessionService};
use rand::rngs::StdRng;
use rand::Rng;
use serde::Serialize;
use tracing::debug;

/// One coordinate move as typed on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineMove {
    pub from: String,
    pub to: String,
    pub promotion: Option<PieceType>,
}

pub enum MoveSource {
    Line(Vec<LineMove>),
    Random { plies: u32, rng: StdRng },
}

/// Why a replay ended before its input ran out.
#[derive(Debug, Clone, Serialize)]
pub struct Stopped {
    pub ply: u32,
    #[serde(rename = "move")]
    pub attempted: String,
    pub code: String,
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct Report {
    pub join_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stopped: Option<Stopped>,
    pub views: BTreeMap<String, PlayerView>,
}

/// Split `"e2e4 e7e5 a7a8q"` into moves. Squares are validated later by the
/// session so that rejected input shows up as a regular stop.
pub fn parse_line(line: &str) -> Result<Vec<LineMove>, String> {
    line.split_whitespace()
        .map(|token| {
            if !token.is_ascii() || !(4..=5).contains(&token.len()) {
                return Err(format!("move {token:?} is not in e2e4 form"));
            }
            let promotion = match token.as_bytes().get(4) {
                None => None,
                Some(b'q') => Some(PieceType::Queen),
                Some(b'r') => Some(PieceType::Rook),
                Some(b'b') => Some(PieceType::Bishop),
                Some(b'n') => Some(PieceType::Knight),
                Some(_) => return Err(format!("move {token:?} has an unknown promotion")),
            };
            Ok(LineMove {
                from: token[..2].to_string(),
                to: token[2..4].to_string(),
                promotion,
            })
        })
        .collect()
}

impl From<MoveRequest> for LineMove {
    fn from(m: MoveRequest) -> Self {
        Self {
            from: m.from.to_string(),
            to: m.to.to_string(),
            promotion: m.promotion,
        }
    }
}

/// A game hosted on a [`SessionService`] with both seats filled.
pub struct Replay<'a> {
    service: &'a SessionService,
    join_code: String,
    white: PlayerId,
    black: PlayerId,
    status: GameStatus,
    ply: u32,
}

impl<'a> Replay<'a> {
    pub fn start(
        service: &'a SessionService,
        white: PlayerId,
        black: PlayerId,
    ) -> Result<Self, AppError> {
        let created = service.create_game(&white)?;
        let view = service.join_game(&created.join_code, &black)?;
        Ok(Self {
            service,
            join_code: created.join_code,
            white,
            black,
            status: view.status,
            ply: 0,
        })
    }

    pub fn join_code(&self) -> &str {
        &self.join_code
    }

    /// Play moves until the source is exhausted or a move is refused. Only
    /// lookup failures are errors; refusals are reported as [`Stopped`].
    pub fn run(&mut self, source: MoveSource) -> Result<Option<Stopped>, AppError> {
        match source {
            MoveSource::Line(moves) => {
                for mv in moves {
                    if let Some(stop) = self.play(&mv)? {
                        return Ok(Some(stop));
                    }
                }
            }
            MoveSource::Random { plies, mut rng } => {
                for _ in 0..plies {
                    let legal = self.service.legal_moves(&self.join_code)?;
                    if legal.is_empty() {
                        break;
                    }
                    let pick = legal[rng.random_range(0..legal.len())];
                    if let Some(stop) = self.play(&LineMove::from(pick))? {
                        return Ok(Some(stop));
                    }
                }
            }
        }
        Ok(None)
    }

    fn play(&mut self, mv: &LineMove) -> Result<Option<Stopped>, AppError> {
        let attempted = format!("{}{}", mv.from, mv.to);
        let caller = match self.status.side_to_move() {
            Some(Color::White) => &self.white,
            Some(Color::Black) => &self.black,
            None => {
                let err = AppError::from(SessionError::GameNotStarted);
                return Ok(Some(Stopped {
                    ply: self.ply + 1,
                    attempted,
                    code: err.code().to_string(),
                    error: err.detail(),
                }));
            }
        };
        let result = self.service.submit_move_with_promotion(
            &self.join_code,
            caller,
            &mv.from,
            &mv.to,
            mv.promotion,
        );
        match result {
            Ok(view) => {
                self.ply += 1;
                self.status = view.status;
                debug!(ply = self.ply, from = %mv.from, to = %mv.to, "Replayed move");
                Ok(None)
            }
            Err(err @ AppError::Session(_)) => Ok(Some(Stopped {
                ply: self.ply + 1,
                attempted,
                code: err.code().to_string(),
                error: err.detail(),
            })),
            Err(other) => Err(other),
        }
    }
}
