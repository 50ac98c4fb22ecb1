//! Ride requests as surfaced to the driver.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::deserialize_id;

/// Canonical ride lifecycle.
///
/// Other vocabularies seen in earlier backend revisions (`accept`,
/// `Cancelled`, ...) are rejected at deserialization, and ride lists skip
/// such records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RideStatus {
    Pending,
    Accepted,
    Rejected,
    Completed,
}

impl RideStatus {
    /// Whether the driver may move a ride from `self` to `to`.
    ///
    /// Pending -> Accepted | Rejected, Accepted -> Completed. Nothing else.
    pub fn can_transition_to(self, to: RideStatus) -> bool {
        matches!(
            (self, to),
            (RideStatus::Pending, RideStatus::Accepted)
                | (RideStatus::Pending, RideStatus::Rejected)
                | (RideStatus::Accepted, RideStatus::Completed)
        )
    }

    /// Completed and Rejected rides are history.
    pub fn is_terminal(self) -> bool {
        matches!(self, RideStatus::Rejected | RideStatus::Completed)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RideStatus::Pending => "Pending",
            RideStatus::Accepted => "Accepted",
            RideStatus::Rejected => "Rejected",
            RideStatus::Completed => "Completed",
        }
    }
}

impl fmt::Display for RideStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// The backend uses `0,0` for "not set".
    pub fn is_set(&self) -> bool {
        self.latitude != 0.0 && self.longitude != 0.0
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.latitude, self.longitude)
    }
}

/// Customer details embedded in a ride.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    #[serde(default, alias = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub county: Option<String>,
    #[serde(default)]
    pub sub_county: Option<String>,
}

/// `customerId` is either populated with the customer record or a bare id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CustomerRef {
    Details(Customer),
    Id(String),
}

impl CustomerRef {
    pub fn display_name(&self) -> String {
        match self {
            CustomerRef::Details(c) => match (&c.first_name, &c.last_name) {
                (Some(first), Some(last)) => format!("{} {}", first, last),
                (Some(first), None) => first.clone(),
                (None, Some(last)) => last.clone(),
                (None, None) => "Unknown customer".to_string(),
            },
            CustomerRef::Id(id) => format!("Customer {}", id),
        }
    }

    pub fn phone_number(&self) -> Option<&str> {
        match self {
            CustomerRef::Details(c) => c.phone_number.as_deref(),
            CustomerRef::Id(_) => None,
        }
    }
}

/// A trip request record owned by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ride {
    #[serde(alias = "_id", deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(rename = "customerId", default, skip_serializing_if = "Option::is_none")]
    pub customer: Option<CustomerRef>,
    #[serde(default)]
    pub pickup_location: String,
    #[serde(default)]
    pub dropoff_location: String,
    #[serde(default)]
    pub pickup_coordinates: Option<Coordinates>,
    #[serde(default)]
    pub dropoff_coordinates: Option<Coordinates>,
    #[serde(default)]
    pub passenger_number: Option<u32>,
    pub status: RideStatus,
    #[serde(default, with = "crate::models::timestamp")]
    pub requested_at: Option<DateTime<Utc>>,
    #[serde(default, with = "crate::models::timestamp")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Ride {
    pub fn customer_name(&self) -> String {
        self.customer
            .as_ref()
            .map(CustomerRef::display_name)
            .unwrap_or_else(|| "Unknown customer".to_string())
    }

    /// Accept and decline are only offered for pending rides.
    pub fn can_respond(&self) -> bool {
        self.status == RideStatus::Pending
    }

    /// Completion is only offered for accepted rides.
    pub fn can_complete(&self) -> bool {
        self.status == RideStatus::Accepted
    }
}

/// Body of `PATCH /rides/{id}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RideStatusUpdate {
    pub status: RideStatus,
}
