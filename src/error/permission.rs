//! Device permission errors.
//!
//! Location failures never reach the driver: the location provider logs them
//! and substitutes its default coordinate.

use thiserror::Error;

/// Failure to obtain a device capability.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PermissionError {
    /// The foreground location permission was not granted.
    #[error("Location permission denied")]
    LocationDenied,

    /// Permission was granted but no position could be read.
    #[error("Location unavailable: {message}")]
    LocationUnavailable { message: String },
}

impl PermissionError {
    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            PermissionError::LocationDenied => "E_PERM_LOCATION",
            PermissionError::LocationUnavailable { .. } => "E_PERM_POSITION",
        }
    }
}
