//! Location source backed by configuration.
//!
//! A terminal has no GPS, so the "device" position is whatever
//! `YURBAN_LOCATION` says. No configured position means permission denied.

use async_trait::async_trait;

use crate::error::PermissionError;
use crate::models::Coordinates;
use crate::traits::{LocationSource, PermissionStatus};

/// Location source returning a fixed, configured position.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfiguredLocation {
    position: Option<Coordinates>,
}

impl ConfiguredLocation {
    pub fn new(position: Option<Coordinates>) -> Self {
        Self { position }
    }
}

#[async_trait]
impl LocationSource for ConfiguredLocation {
    async fn request_permission(&self) -> PermissionStatus {
        if self.position.is_some() {
            PermissionStatus::Granted
        } else {
            PermissionStatus::Denied
        }
    }

    async fn current_position(&self) -> Result<Coordinates, PermissionError> {
        self.position.ok_or(PermissionError::LocationDenied)
    }
}
