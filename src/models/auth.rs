//! Login and registration payloads.

use serde::{Deserialize, Serialize};

/// Role reported by the server at login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Role {
    Driver,
    Other(String),
}

impl Role {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "Driver" => Role::Driver,
            other => Role::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Role::Driver => "Driver",
            Role::Other(role) => role,
        }
    }
}

/// Body of `POST /auth/login`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub phone_number: String,
    pub pin: String,
}

/// Response of `POST /auth/login`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

/// Body of `POST /auth/register`. The app only ever registers drivers.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub pin: String,
    pub gender: String,
    pub email: String,
    pub county: String,
    pub sub_county: String,
}

impl RegisterRequest {
    /// Labels of the fields left empty, in form order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("firstName", &self.first_name),
            ("lastName", &self.last_name),
            ("phoneNumber", &self.phone_number),
            ("pin", &self.pin),
            ("gender", &self.gender),
            ("email", &self.email),
            ("county", &self.county),
            ("subCounty", &self.sub_county),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }

    /// The JSON body sent to the server, with the fixed driver role.
    pub fn to_body(&self) -> serde_json::Value {
        let mut body = serde_json::to_value(self).unwrap_or_else(|_| serde_json::json!({}));
        if let Some(map) = body.as_object_mut() {
            map.insert("role".to_string(), serde_json::Value::from("Driver"));
        }
        body
    }
}

/// Any `{message}` response.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}
