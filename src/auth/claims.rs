//! Bearer token and its decoded claims.
//!
//! Claims are read from the JWT payload without verifying the signature;
//! the server stays authoritative and only uses them for the startup gate.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use serde::Deserialize;

/// Claims the driver app cares about.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Claims {
    /// User id (`id`, `_id`, `userId` or `sub`).
    pub subject: Option<String>,
    pub role: Option<String>,
    /// Expiry as a Unix timestamp in seconds.
    pub expires_at: Option<i64>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawClaims {
    #[serde(default, alias = "_id", alias = "userId", alias = "sub")]
    id: Option<serde_json::Value>,
    #[serde(default)]
    role: Option<String>,
    #[serde(default)]
    exp: Option<i64>,
}

impl Claims {
    /// Decode the payload segment of a JWT. Anything that is not a
    /// well-formed JWT yields empty claims.
    pub fn decode(token: &str) -> Self {
        Self::try_decode(token).unwrap_or_default()
    }

    fn try_decode(token: &str) -> Option<Self> {
        let parts: Vec<&str> = token.split('.').collect();
        if parts.len() != 3 {
            return None;
        }
        let payload = URL_SAFE_NO_PAD
            .decode(parts[1].trim_end_matches('='))
            .ok()?;
        let raw: RawClaims = serde_json::from_slice(&payload).ok()?;
        let subject = raw.id.and_then(|v| match v {
            serde_json::Value::String(s) => Some(s),
            serde_json::Value::Number(n) => Some(n.to_string()),
            _ => None,
        });
        Some(Self {
            subject,
            role: raw.role,
            expires_at: raw.exp,
        })
    }

    /// True when an expiry is present and not after `now`.
    pub fn is_expired_at(&self, now: i64) -> bool {
        self.expires_at.is_some_and(|exp| now >= exp)
    }
}

/// An authenticated session: opaque token plus decoded claims.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub claims: Claims,
}

impl Session {
    pub fn new(token: impl Into<String>) -> Self {
        let token = token.into();
        let claims = Claims::decode(&token);
        Self { token, claims }
    }

    /// Tokens without an `exp` claim never expire client-side.
    pub fn is_expired(&self) -> bool {
        self.claims.is_expired_at(chrono::Utc::now().timestamp())
    }

    /// Seconds until expiry, if the token carries one.
    pub fn expires_in(&self) -> Option<i64> {
        self.claims
            .expires_at
            .map(|exp| (exp - chrono::Utc::now().timestamp()).max(0))
    }
}

#[cfg(test)]
pub(crate) fn make_jwt(payload: serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let body = URL_SAFE_NO_PAD.encode(payload.to_string());
    format!("{header}.{body}.signature")
}
