//! Session defaults loaded from the environment.
//!
//! - `CHESS_CAPTURE_HISTORY`: `true`/`false` (also `1`/`0`, `yes`/`no`).
//!   Defaults to `true`.
//! - `CHESS_SEAT_POLICY`: `reject` or `spectate`. Defaults to `reject`.
//!
//! Unset or blank variables fall back to the default; anything else that does
//! not parse is a configuration error rather than a silent default.

use std::env;

use crate::domain::{SeatPolicy, SessionOptions};
use crate::error::AppError;

pub const CAPTURE_HISTORY_VAR: &str = "CHESS_CAPTURE_HISTORY";
pub const SEAT_POLICY_VAR: &str = "CHESS_SEAT_POLICY";

/// Build [`SessionOptions`] from `CHESS_*` environment variables.
pub fn session_options_from_env() -> Result<SessionOptions, AppError> {
    let defaults = SessionOptions::default();

    let include_capture_history = match read_var(CAPTURE_HISTORY_VAR) {
        Some(raw) => parse_flag(&raw).ok_or_else(|| {
            AppError::config(format!(
                "{CAPTURE_HISTORY_VAR} must be true or false, got {raw:?}"
            ))
        })?,
        None => defaults.include_capture_history,
    };

    let seat_policy = match read_var(SEAT_POLICY_VAR) {
        Some(raw) => parse_seat_policy(&raw).ok_or_else(|| {
            AppError::config(format!(
                "{SEAT_POLICY_VAR} must be reject or spectate, got {raw:?}"
            ))
        })?,
        None => defaults.seat_policy,
    };

    Ok(SessionOptions {
        include_capture_history,
        seat_policy,
    })
}

fn read_var(name: &str) -> Option<String> {
    let value = env::var(name).ok()?;
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

fn parse_seat_policy(raw: &str) -> Option<SeatPolicy> {
    match raw.to_ascii_lowercase().as_str() {
        "reject" => Some(SeatPolicy::RejectWhenFull),
        "spectate" => Some(SeatPolicy::AdmitSpectator),
        _ => None,
    }
}
