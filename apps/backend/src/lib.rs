#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod config;
pub mod domain;
pub mod error;
pub mod errors;
pub mod services;
pub mod telemetry;
pub mod utils;


// Re-exports for public API
pub use config::session::session_options_from_env;
pub use domain::{
    GameStatus, PieceType, PlayerId, PlayerView, SeatPolicy, SessionOptions, ShakmatyEngine,
};
pub use error::AppError;
pub use errors::domain::SessionError;
pub use errors::ErrorCode;
pub use services::sessions::{CreatedGame, SessionService};
pub use telemetry::{init_tracing, init_tracing_with};
pub use utils::join_code::generate_join_code;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
