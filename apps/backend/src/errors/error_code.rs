//! Error codes for the chess session backend.
//!
//! This module defines all error codes used throughout the crate.
//! Add new codes here; never pass ad-hoc strings as error codes.
//!
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! handed to whatever transport sits in front of the service.

use core::fmt;

/// Centralized error codes.
///
/// Each variant maps to a canonical SCREAMING_SNAKE_CASE string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Seating
    /// Caller already holds a seat
    DuplicateSeat,
    /// Both seats are taken
    SessionFull,

    // Turn order
    /// Fewer than two seats filled
    GameNotStarted,
    /// Caller is not the side to move
    NotCallersTurn,

    // Rules
    /// Rules engine refused the move
    IllegalMove,

    // Resource Not Found
    /// No session under the given join code
    GameNotFound,

    // Business Logic Conflicts
    /// Could not allocate an unused join code
    JoinCodeConflict,

    // System Errors
    ConfigError,
}

impl ErrorCode {
    pub const ALL: [ErrorCode; 8] = [
        ErrorCode::DuplicateSeat,
        ErrorCode::SessionFull,
        ErrorCode::GameNotStarted,
        ErrorCode::NotCallersTurn,
        ErrorCode::IllegalMove,
        ErrorCode::GameNotFound,
        ErrorCode::JoinCodeConflict,
        ErrorCode::ConfigError,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::DuplicateSeat => "DUPLICATE_SEAT",
            Self::SessionFull => "SESSION_FULL",
            Self::GameNotStarted => "GAME_NOT_STARTED",
            Self::NotCallersTurn => "NOT_CALLERS_TURN",
            Self::IllegalMove => "ILLEGAL_MOVE",
            Self::GameNotFound => "GAME_NOT_FOUND",
            Self::JoinCodeConflict => "JOIN_CODE_CONFLICT",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
