//! Driver status toggle errors.

use thiserror::Error;

/// A status toggle could not start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StatusError {
    /// An update request is still outstanding.
    #[error("A status update is already in progress")]
    InFlight,
}

impl StatusError {
    pub fn error_code(&self) -> &'static str {
        match self {
            StatusError::InFlight => "E_STATUS_BUSY",
        }
    }
}
