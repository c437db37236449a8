//! Domain layer: the game-session core.
//!
//! Pure and synchronous. Nothing in here logs, blocks or performs I/O; chess
//! legality is delegated to a [`RulesEngine`].

pub mod chess_types;
pub mod lifecycle;
pub mod moves;
pub mod player_view;
pub mod rules_engine;
pub mod seats;
pub mod session;
pub mod shakmaty_engine;
pub mod turn;

#[cfg(test)]
mod test_engine;
#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod tests_player_view;
#[cfg(test)]
mod tests_turns;

// Re-exports for ergonomics
pub use chess_types::{
    Color, ParseSquareError, Piece, PieceType, Placement, PlayerId, ProjectedPiece, Square,
};
pub use lifecycle::{phase, SessionPhase};
pub use moves::{submit_move, submit_move_with_promotion, submit_request};
pub use player_view::{project, PlayerView};
pub use rules_engine::{
    AppliedMove, BoardGrid, GameOutcome, MoveRequest, RulesEngine, RulesRejection,
};
pub use seats::{create_session, create_session_with, join, seat_color, JoinOutcome};
pub use session::{Seat, SeatPolicy, Session, SessionOptions, SEAT_ORDER};
pub use shakmaty_engine::ShakmatyEngine;
pub use turn::{authorize_move, resolve_status, GameStatus};
