//! Device location trait abstraction.

use async_trait::async_trait;

use crate::error::PermissionError;
use crate::models::Coordinates;

/// Outcome of a foreground location permission request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionStatus {
    Granted,
    Denied,
}

/// A source of device positions.
#[async_trait]
pub trait LocationSource: Send + Sync {
    /// Ask for foreground location permission.
    async fn request_permission(&self) -> PermissionStatus;

    /// Read the current position. Only called after permission is granted.
    async fn current_position(&self) -> Result<Coordinates, PermissionError>;
}
