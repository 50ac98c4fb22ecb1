//! Ride lookup and transition errors.

use thiserror::Error;

use crate::models::RideStatus;

/// Failures specific to ride records.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RideError {
    /// No ride could be loaded for the id. Covers both a missing record and a
    /// failed request; `reason` carries the underlying cause for logging.
    #[error("Ride {id} not found: {reason}")]
    NotFound { id: String, reason: String },

    /// The ride id was empty or would not stay one URL path segment.
    #[error("Invalid ride ID")]
    InvalidId,

    /// The driver may not move a ride between these statuses.
    #[error("Cannot move ride from {from} to {to}")]
    InvalidTransition { from: RideStatus, to: RideStatus },
}

impl RideError {
    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            RideError::NotFound { .. } => {
                "Failed to load ride details. Please try again later.".to_string()
            }
            RideError::InvalidId => "Invalid ride ID. Please try again.".to_string(),
            RideError::InvalidTransition { from, to } => {
                format!("A {} ride cannot be marked {}.", from, to)
            }
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            RideError::NotFound { .. } => "E_RIDE_NOT_FOUND",
            RideError::InvalidId => "E_RIDE_ID",
            RideError::InvalidTransition { .. } => "E_RIDE_TRANSITION",
        }
    }
}
