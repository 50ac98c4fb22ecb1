//! Online/offline toggle state machine.
//!
//! ```text
//!   Offline --begin--> Transitioning --settle_success(s)--> s
//!      ^                     |
//!      +--settle_failure-----+   (back to the prior confirmed status)
//! ```
//!
//! While transitioning, `begin` is refused, so only one update request can
//! be outstanding at a time.

use crate::error::StatusError;
use crate::models::DriverStatus;

/// What the home screen shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusPhase {
    Offline,
    Online,
    Transitioning { target: DriverStatus },
}

/// Confirmed status plus the in-flight target, if any.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusToggle {
    confirmed: DriverStatus,
    pending: Option<DriverStatus>,
}

impl StatusToggle {
    pub fn new(confirmed: DriverStatus) -> Self {
        Self {
            confirmed,
            pending: None,
        }
    }

    /// Last status the server confirmed.
    pub fn confirmed(&self) -> DriverStatus {
        self.confirmed
    }

    pub fn is_transitioning(&self) -> bool {
        self.pending.is_some()
    }

    pub fn phase(&self) -> StatusPhase {
        match (self.pending, self.confirmed) {
            (Some(target), _) => StatusPhase::Transitioning { target },
            (None, DriverStatus::Online) => StatusPhase::Online,
            (None, DriverStatus::Offline) => StatusPhase::Offline,
        }
    }

    /// Start a toggle. Returns the target status to request.
    pub fn begin(&mut self) -> Result<DriverStatus, StatusError> {
        if self.pending.is_some() {
            return Err(StatusError::InFlight);
        }
        let target = self.confirmed.toggled();
        self.pending = Some(target);
        Ok(target)
    }

    /// The request succeeded; `status` is what the server confirmed.
    pub fn settle_success(&mut self, status: DriverStatus) {
        self.confirmed = status;
        self.pending = None;
    }

    /// The request failed; keep the prior confirmed status.
    pub fn settle_failure(&mut self) {
        self.pending = None;
    }

    /// Adopt a freshly loaded profile status. Ignored mid-transition so a
    /// stale read cannot overwrite the outcome of the pending request.
    pub fn sync(&mut self, status: DriverStatus) {
        if self.pending.is_none() {
            self.confirmed = status;
        }
    }
}
