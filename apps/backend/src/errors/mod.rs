//! Error handling for the chess session backend.

pub mod domain;
pub mod error_code;


pub use domain::SessionError;
pub use error_code::ErrorCode;
