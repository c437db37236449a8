//! Session-level error type returned by every core operation.
//!
//! This error type is transport- and storage-agnostic. Service code returns
//! `Result<T, crate::error::AppError>` and converts from `SessionError`
//! using the provided `From<SessionError> for AppError` implementation.
//!
//! Every variant is recoverable: a failed operation leaves the session exactly
//! as it was before the call.

use thiserror::Error;

use crate::errors::error_code::ErrorCode;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// Join attempted by an identity that already holds a seat.
    #[error("Already seated in this game")]
    DuplicateSeat,
    /// Join attempted by a third identity while seats are capped.
    #[error("Game is full")]
    SessionFull,
    /// Move attempted before both seats are filled.
    #[error("Game not started")]
    GameNotStarted,
    /// Move attempted by a caller whose seat is not the side to move
    /// (including callers with no seat at all).
    #[error("Not your turn")]
    NotCallersTurn,
    /// The rules engine refused the move. `reason` is diagnostic only.
    #[error("Invalid move")]
    IllegalMove { reason: String },
}

impl SessionError {
    pub fn illegal_move(reason: impl Into<String>) -> Self {
        Self::IllegalMove {
            reason: reason.into(),
        }
    }

    pub const fn code(&self) -> ErrorCode {
        match self {
            SessionError::DuplicateSeat => ErrorCode::DuplicateSeat,
            SessionError::SessionFull => ErrorCode::SessionFull,
            SessionError::GameNotStarted => ErrorCode::GameNotStarted,
            SessionError::NotCallersTurn => ErrorCode::NotCallersTurn,
            SessionError::IllegalMove { .. } => ErrorCode::IllegalMove,
        }
    }
}
