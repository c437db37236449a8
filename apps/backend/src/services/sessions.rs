//! In-memory session registry.
//!
//! Sessions are keyed by join code. Each session sits behind its own mutex so
//! at most one operation mutates a given session at a time, while different
//! sessions proceed independently.

use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use parking_lot::Mutex;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::domain::{
    self, JoinOutcome, MoveRequest, PieceType, PlayerId, PlayerView, RulesEngine, Session,
    SessionOptions, SessionPhase, ShakmatyEngine,
};
use crate::error::AppError;
use crate::errors::domain::SessionError;
use crate::errors::ErrorCode;
use crate::utils::join_code::{generate_join_code, normalize_join_code};

/// Attempts at finding an unused join code before giving up.
const MAX_CODE_ATTEMPTS: usize = 8;

type SharedSession = Arc<Mutex<Session<ShakmatyEngine>>>;

/// A freshly created game as returned to its creator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreatedGame {
    pub join_code: String,
    pub view: PlayerView,
}

/// Hosts sessions in memory and routes calls to them by join code.
pub struct SessionService {
    engine: ShakmatyEngine,
    options: SessionOptions,
    sessions: DashMap<String, SharedSession>,
}

impl SessionService {
    pub fn new() -> Self {
        Self::with_options(SessionOptions::default())
    }

    /// Create a service whose new sessions all use `options`.
    pub fn with_options(options: SessionOptions) -> Self {
        Self {
            engine: ShakmatyEngine::new(),
            options,
            sessions: DashMap::new(),
        }
    }

    pub fn options(&self) -> SessionOptions {
        self.options
    }

    /// Create a session seating `creator` as White and register it under a new
    /// join code.
    pub fn create_game(&self, creator: &PlayerId) -> Result<CreatedGame, AppError> {
        let session = domain::create_session_with(self.engine, self.options, creator.clone());
        let view = domain::project(&session, creator);
        let shared = Arc::new(Mutex::new(session));

        for attempt in 1..=MAX_CODE_ATTEMPTS {
            let code = generate_join_code();
            match self.sessions.entry(code.clone()) {
                Entry::Occupied(_) => {
                    warn!(attempt, "Join code collision, retrying");
                }
                Entry::Vacant(slot) => {
                    slot.insert(shared);
                    info!(join_code = %code, creator = %creator, "Game created");
                    return Ok(CreatedGame {
                        join_code: code,
                        view,
                    });
                }
            }
        }

        Err(AppError::conflict(
            ErrorCode::JoinCodeConflict,
            format!("No free join code after {MAX_CODE_ATTEMPTS} attempts"),
        ))
    }

    /// Join the session behind `join_code`. Returns the caller's view.
    pub fn join_game(&self, join_code: &str, caller: &PlayerId) -> Result<PlayerView, AppError> {
        let (code, shared) = self.lookup(join_code)?;
        let mut session = shared.lock();

        match domain::join(&mut *session, caller) {
            Ok(JoinOutcome::Seated(color)) => {
                info!(join_code = %code, player = %caller, %color, "Player seated");
            }
            Ok(JoinOutcome::Spectating) => {
                info!(join_code = %code, player = %caller, "Spectator admitted");
            }
            Err(err) => {
                debug!(join_code = %code, player = %caller, error = %err, "Join refused");
                return Err(err.into());
            }
        }

        Ok(domain::project(&*session, caller))
    }

    /// Submit a move as `caller`. Returns the caller's view after the move.
    pub fn submit_move(
        &self,
        join_code: &str,
        caller: &PlayerId,
        from: &str,
        to: &str,
    ) -> Result<PlayerView, AppError> {
        self.submit_move_with_promotion(join_code, caller, from, to, None)
    }

    pub fn submit_move_with_promotion(
        &self,
        join_code: &str,
        caller: &PlayerId,
        from: &str,
        to: &str,
        promotion: Option<PieceType>,
    ) -> Result<PlayerView, AppError> {
        let (code, shared) = self.lookup(join_code)?;
        let mut session = shared.lock();

        if let Err(err) =
            domain::submit_move_with_promotion(&mut *session, caller, from, to, promotion)
        {
            let reason = match &err {
                SessionError::IllegalMove { reason } => Some(reason.as_str()),
                _ => None,
            };
            debug!(
                join_code = %code,
                player = %caller,
                from,
                to,
                error = %err,
                reason,
                "Move refused"
            );
            return Err(err.into());
        }

        debug!(
            join_code = %code,
            player = %caller,
            from,
            to,
            move_count = session.move_count(),
            "Move applied"
        );
        if let SessionPhase::Concluded(outcome) = domain::phase(&*session) {
            info!(join_code = %code, outcome = ?outcome, "Game concluded");
        }

        Ok(domain::project(&*session, caller))
    }

    /// Current view of the session for `viewer`, seated or not.
    pub fn player_view(&self, join_code: &str, viewer: &PlayerId) -> Result<PlayerView, AppError> {
        let (_, shared) = self.lookup(join_code)?;
        let session = shared.lock();
        Ok(domain::project(&*session, viewer))
    }

    /// Moves the side to move could legally make now.
    pub fn legal_moves(&self, join_code: &str) -> Result<Vec<MoveRequest>, AppError> {
        let (_, shared) = self.lookup(join_code)?;
        let session = shared.lock();
        Ok(session.engine().legal_moves(session.position()))
    }

    /// Drop a session. Returns whether one was registered under the code.
    pub fn remove_game(&self, join_code: &str) -> bool {
        let code = normalize_join_code(join_code);
        let removed = self.sessions.remove(&code).is_some();
        if removed {
            info!(join_code = %code, "Game removed");
        }
        removed
    }

    pub fn game_count(&self) -> usize {
        self.sessions.len()
    }

    fn lookup(&self, join_code: &str) -> Result<(String, SharedSession), AppError> {
        let code = normalize_join_code(join_code);
        let shared = self
            .sessions
            .get(&code)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| AppError::game_not_found(&code))?;
        Ok((code, shared))
    }
}

impl Default for SessionService {
    fn default() -> Self {
        Self::new()
    }
}
