//! The authenticated driver and their availability status.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Whether the driver is accepting rides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DriverStatus {
    Online,
    #[default]
    Offline,
}

impl DriverStatus {
    /// The status a toggle moves to.
    pub fn toggled(self) -> Self {
        match self {
            DriverStatus::Online => DriverStatus::Offline,
            DriverStatus::Offline => DriverStatus::Online,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DriverStatus::Online => "Online",
            DriverStatus::Offline => "Offline",
        }
    }
}

impl fmt::Display for DriverStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Missing or null status means the server has never marked the driver online.
fn deserialize_status<'de, D>(deserializer: D) -> Result<DriverStatus, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<DriverStatus>::deserialize(deserializer).map(|opt| opt.unwrap_or_default())
}

/// Driver profile as returned by `GET /profile`.
///
/// Every attribute except the status is optional; the profile screen shows
/// `-` for whatever the server leaves out.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Driver {
    #[serde(default, alias = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub county: Option<String>,
    #[serde(default)]
    pub sub_county: Option<String>,
    #[serde(default, deserialize_with = "deserialize_status")]
    pub status: DriverStatus,
}

impl Driver {
    /// "First Last", with `-` standing in for a missing part.
    pub fn full_name(&self) -> String {
        format!(
            "{} {}",
            self.first_name.as_deref().unwrap_or("-"),
            self.last_name.as_deref().unwrap_or("-")
        )
    }

    pub fn is_online(&self) -> bool {
        self.status == DriverStatus::Online
    }
}

/// The `{user: {...}}` wrapper the profile and status endpoints respond with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileEnvelope {
    pub user: Driver,
}

/// Body of `PATCH /auth/update-status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusUpdate {
    pub status: DriverStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggled() {
        assert_eq!(DriverStatus::Online.toggled(), DriverStatus::Offline);
        assert_eq!(DriverStatus::Offline.toggled(), DriverStatus::Online);
    }

    #[test]
    fn test_profile_envelope_deserialization() {
        let json = r#"{
            "user": {
                "_id": "64f0c2",
                "firstName": "Amina",
                "lastName": "Otieno",
                "phoneNumber": "0712345678",
                "email": "amina@example.com",
                "gender": "Female",
                "role": "Driver",
                "county": "Nairobi",
                "subCounty": "Westlands",
                "status": "Online",
                "createdAt": "2024-01-01T00:00:00Z"
            }
        }"#;
        let envelope: ProfileEnvelope = serde_json::from_str(json).unwrap();
        let driver = envelope.user;
        assert_eq!(driver.id.as_deref(), Some("64f0c2"));
        assert_eq!(driver.full_name(), "Amina Otieno");
        assert_eq!(driver.sub_county.as_deref(), Some("Westlands"));
        assert!(driver.is_online());
    }

    #[test]
    fn test_missing_or_null_status_defaults_to_offline() {
        let driver: Driver = serde_json::from_str(r#"{"firstName":"A"}"#).unwrap();
        assert_eq!(driver.status, DriverStatus::Offline);

        let driver: Driver = serde_json::from_str(r#"{"status":null}"#).unwrap();
        assert_eq!(driver.status, DriverStatus::Offline);
    }

    #[test]
    fn test_full_name_placeholders() {
        assert_eq!(Driver::default().full_name(), "- -");
    }

    #[test]
    fn test_status_update_body() {
        let body = serde_json::to_value(StatusUpdate {
            status: DriverStatus::Online,
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({"status": "Online"}));
    }
}
