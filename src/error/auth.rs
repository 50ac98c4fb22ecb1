//! Authentication-related error types.

use thiserror::Error;

/// Authentication and authorization failures.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AuthError {
    /// The server rejected the phone number / PIN, or the login call failed.
    #[error("Login rejected: {message}")]
    LoginRejected { message: String },

    /// The account authenticated, but its role may not use this app.
    #[error("Role '{role}' is not allowed to use the driver app")]
    RoleDenied { role: String },

    /// No session is stored (never logged in, or logged out).
    #[error("Not authenticated")]
    NotAuthenticated,

    /// The stored session token has passed its expiry.
    #[error("Session expired")]
    SessionExpired,

    /// The login response did not carry a token.
    #[error("Login response did not contain a token")]
    MissingToken,
}

impl AuthError {
    /// Check if this error might be resolved by signing in again.
    pub fn requires_reauth(&self) -> bool {
        matches!(self, AuthError::NotAuthenticated | AuthError::SessionExpired)
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            AuthError::LoginRejected { .. } | AuthError::MissingToken => {
                "Invalid credentials or server issue.".to_string()
            }
            AuthError::RoleDenied { .. } => "Only drivers can log in.".to_string(),
            AuthError::NotAuthenticated => {
                "You are not signed in. Please sign in to continue.".to_string()
            }
            AuthError::SessionExpired => {
                "Your session has expired. Please sign in again.".to_string()
            }
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            AuthError::LoginRejected { .. } => "E_AUTH_REJECTED",
            AuthError::RoleDenied { .. } => "E_AUTH_ROLE",
            AuthError::NotAuthenticated => "E_AUTH_NONE",
            AuthError::SessionExpired => "E_AUTH_EXPIRED",
            AuthError::MissingToken => "E_AUTH_TOKEN",
        }
    }
}
