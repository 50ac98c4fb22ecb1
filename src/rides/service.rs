//! Ride operations over the API client.
//!
//! Accept and decline are plain status patches with no optimistic update:
//! the caller refreshes the list once the server has answered.

use std::cmp::Ordering;

use crate::api::ApiClient;
use crate::error::{AppError, RideError};
use crate::models::{Ride, RideStatus};

/// Newest request first; rides without a timestamp go last. Stable, so
/// rides with equal timestamps keep server order.
pub fn sort_rides(rides: &mut [Ride]) {
    rides.sort_by(|a, b| match (a.requested_at, b.requested_at) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}

/// Driver-facing ride operations.
#[derive(Debug, Clone)]
pub struct RideService {
    api: ApiClient,
}

impl RideService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// The driver's rides, newest first regardless of server order.
    pub async fn list_rides(&self) -> Result<Vec<Ride>, AppError> {
        let mut rides = self.api.fetch_driver_rides().await?;
        sort_rides(&mut rides);
        tracing::debug!(count = rides.len(), "Loaded driver rides");
        Ok(rides)
    }

    /// One ride. Any failure to load it is reported as `NotFound`.
    pub async fn get_ride(&self, id: &str) -> Result<Ride, RideError> {
        let id = checked_id(id)?;
        self.api.fetch_ride(id).await.map_err(|e| {
            tracing::warn!(ride_id = id, error = %e, "Failed to load ride");
            RideError::NotFound {
                id: id.to_string(),
                reason: e.to_string(),
            }
        })
    }

    /// Accept a pending ride.
    pub async fn accept_ride(&self, id: &str) -> Result<Option<Ride>, AppError> {
        self.respond(id, RideStatus::Accepted).await
    }

    /// Decline a pending ride.
    pub async fn decline_ride(&self, id: &str) -> Result<Option<Ride>, AppError> {
        self.respond(id, RideStatus::Rejected).await
    }

    async fn respond(&self, id: &str, status: RideStatus) -> Result<Option<Ride>, AppError> {
        let id = checked_id(id)?;
        tracing::info!(ride_id = id, %status, "Responding to ride");
        Ok(self.api.update_ride_status(id, status).await?)
    }

    /// Complete an accepted ride. Any other status is refused before a
    /// request is sent.
    pub async fn complete_ride(&self, ride: &Ride) -> Result<(), AppError> {
        let id = checked_id(&ride.id)?;
        if !ride.status.can_transition_to(RideStatus::Completed) {
            return Err(RideError::InvalidTransition {
                from: ride.status,
                to: RideStatus::Completed,
            }
            .into());
        }
        tracing::info!(ride_id = id, "Completing ride");
        self.api.complete_ride(id).await?;
        Ok(())
    }
}

/// Ride ids are interpolated into `/rides/{id}`, so only unreserved
/// characters that keep them a single path segment are accepted.
fn checked_id(id: &str) -> Result<&str, RideError> {
    let id = id.trim();
    let segment_safe = id
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if id.is_empty() || !segment_safe {
        Err(RideError::InvalidId)
    } else {
        Ok(id)
    }
}
