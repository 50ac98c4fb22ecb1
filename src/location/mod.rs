//! Location for map rendering.
//!
//! The provider never fails: when permission is denied or the position
//! cannot be read it logs a warning and returns [`FALLBACK_COORDINATES`].

use std::sync::Arc;

use crate::error::PermissionError;
use crate::models::Coordinates;
use crate::traits::{LocationSource, PermissionStatus};

/// Central Nairobi, used whenever no device position is available.
pub const FALLBACK_COORDINATES: Coordinates = Coordinates::new(-1.286389, 36.817223);

/// Supplies the coordinate the home map centers on.
#[derive(Clone)]
pub struct LocationProvider {
    source: Arc<dyn LocationSource>,
}

impl std::fmt::Debug for LocationProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocationProvider").finish_non_exhaustive()
    }
}

impl LocationProvider {
    pub fn new(source: Arc<dyn LocationSource>) -> Self {
        Self { source }
    }

    /// Request permission and read the position, falling back to
    /// [`FALLBACK_COORDINATES`] on any failure.
    pub async fn current_location(&self) -> Coordinates {
        match self.try_current_location().await {
            Ok(position) => position,
            Err(e) => {
                tracing::warn!(error = %e, code = e.error_code(), "Using fallback location");
                FALLBACK_COORDINATES
            }
        }
    }

    async fn try_current_location(&self) -> Result<Coordinates, PermissionError> {
        match self.source.request_permission().await {
            PermissionStatus::Granted => self.source.current_position().await,
            PermissionStatus::Denied => Err(PermissionError::LocationDenied),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MockLocation;

    #[tokio::test]
    async fn test_granted_returns_device_position() {
        let provider = LocationProvider::new(Arc::new(MockLocation::at(0.0514, 37.6456)));
        assert_eq!(
            provider.current_location().await,
            Coordinates::new(0.0514, 37.6456)
        );
    }

    #[tokio::test]
    async fn test_denied_falls_back_to_nairobi() {
        let source = MockLocation::denied();
        let provider = LocationProvider::new(Arc::new(source.clone()));

        let position = provider.current_location().await;
        assert_eq!(position.latitude, -1.286389);
        assert_eq!(position.longitude, 36.817223);
        // Position is never read without permission
        assert_eq!(source.position_calls(), 0);
    }

    #[tokio::test]
    async fn test_position_failure_falls_back() {
        let provider = LocationProvider::new(Arc::new(MockLocation::failing("no fix")));
        assert_eq!(provider.current_location().await, FALLBACK_COORDINATES);
    }
}
