use thiserror::Error;

use crate::errors::domain::SessionError;
use crate::errors::ErrorCode;

/// Service-level error: everything the hosting layer can hand back to a caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error("Not found: {detail}")]
    NotFound { code: ErrorCode, detail: String },
    #[error("Conflict: {detail}")]
    Conflict { code: ErrorCode, detail: String },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
}

impl AppError {
    /// Error code for any variant.
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Session(err) => err.code(),
            AppError::NotFound { code, .. } => *code,
            AppError::Conflict { code, .. } => *code,
            AppError::Config { .. } => ErrorCode::ConfigError,
        }
    }

    /// Human-readable detail for display.
    pub fn detail(&self) -> String {
        match self {
            AppError::Session(err) => err.to_string(),
            AppError::NotFound { detail, .. } => detail.clone(),
            AppError::Conflict { detail, .. } => detail.clone(),
            AppError::Config { detail } => detail.clone(),
        }
    }

    pub fn session_error(&self) -> Option<&SessionError> {
        match self {
            AppError::Session(err) => Some(err),
            _ => None,
        }
    }

    pub fn game_not_found(join_code: &str) -> Self {
        Self::NotFound {
            code: ErrorCode::GameNotFound,
            detail: format!("No game with join code {join_code}"),
        }
    }

    pub fn conflict(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::Conflict {
            code,
            detail: detail.into(),
        }
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }
}
