//! Post-authentication authorization gate.
//!
//! Only accounts whose role is exactly `Driver` may enter the app.

use crate::error::AuthError;
use crate::models::Role;

/// Outcome of the role check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Authorization {
    Authorized(Role),
    Denied { reason: String },
}

impl Authorization {
    pub fn is_authorized(&self) -> bool {
        matches!(self, Authorization::Authorized(_))
    }
}

/// Admit drivers, deny every other (or missing) role.
pub fn authorize(role: Option<&str>) -> Authorization {
    match role.map(Role::parse) {
        Some(Role::Driver) => Authorization::Authorized(Role::Driver),
        other => {
            let role = other.map(|r| r.as_str().to_string()).unwrap_or_default();
            tracing::info!(role = %role, "Authorization denied");
            Authorization::Denied {
                reason: AuthError::RoleDenied { role }.user_message(),
            }
        }
    }
}
