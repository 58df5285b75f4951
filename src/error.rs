//! Error types for the devstd CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for devstd operations.
///
/// Every variant currently maps to exit code 1; the distinction exists so
/// command code states which failure class it hit and messages stay
/// user-actionable.
#[derive(Error, Debug)]
pub enum DevstdError {
    /// User provided invalid arguments or required input is missing.
    #[error("{0}")]
    UserError(String),

    /// One or more checked files deviated from the canonical standards.
    #[error("{0}")]
    CheckFailed(String),

    /// An output file could not be written.
    #[error("{0}")]
    WriteError(String),
}

impl DevstdError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            DevstdError::UserError(_) => exit_codes::FAILURE,
            DevstdError::CheckFailed(_) => exit_codes::FAILURE,
            DevstdError::WriteError(_) => exit_codes::FAILURE,
        }
    }
}

/// Result type alias for devstd operations.
pub type Result<T> = std::result::Result<T, DevstdError>;
