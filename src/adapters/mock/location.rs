//! Scripted location source for testing.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::error::PermissionError;
use crate::models::Coordinates;
use crate::traits::{LocationSource, PermissionStatus};

/// Location source returning a fixed outcome.
#[derive(Debug, Clone)]
pub struct MockLocation {
    permission: PermissionStatus,
    position: Result<Coordinates, PermissionError>,
    position_calls: Arc<AtomicUsize>,
}

impl MockLocation {
    /// Permission granted, position available.
    pub fn at(latitude: f64, longitude: f64) -> Self {
        Self {
            permission: PermissionStatus::Granted,
            position: Ok(Coordinates::new(latitude, longitude)),
            position_calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Permission denied.
    pub fn denied() -> Self {
        Self {
            permission: PermissionStatus::Denied,
            position: Err(PermissionError::LocationDenied),
            position_calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Permission granted but reading the position fails.
    pub fn failing(message: &str) -> Self {
        Self {
            permission: PermissionStatus::Granted,
            position: Err(PermissionError::LocationUnavailable {
                message: message.to_string(),
            }),
            position_calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// How many times the position was read.
    pub fn position_calls(&self) -> usize {
        self.position_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LocationSource for MockLocation {
    async fn request_permission(&self) -> PermissionStatus {
        self.permission
    }

    async fn current_position(&self) -> Result<Coordinates, PermissionError> {
        self.position_calls.fetch_add(1, Ordering::SeqCst);
        self.position.clone()
    }
}
