//! Errors returned by the API gateway client.

use thiserror::Error;

/// Fallback shown when the server gives no usable `message` field.
pub const DEFAULT_ERROR_MESSAGE: &str = "Something went wrong";

/// Failure of a single remote API call.
///
/// The client performs exactly one attempt per call; these errors are
/// surfaced as-is and never retried automatically.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The server answered with a 4xx/5xx status.
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// No response was received (connection refused, DNS, timeout).
    #[error("Transport error: {message}")]
    Transport { message: String },

    /// A response arrived but its body could not be decoded.
    #[error("Invalid response: {message}")]
    InvalidResponse { message: String },
}

impl ApiError {
    /// Build a status error from an error response body.
    ///
    /// Uses the body's `message` field when it is a non-empty string and
    /// falls back to [`DEFAULT_ERROR_MESSAGE`] otherwise.
    pub fn from_status(status: u16, body: &[u8]) -> Self {
        let message = serde_json::from_slice::<serde_json::Value>(body)
            .ok()
            .and_then(|v| {
                v.get("message")
                    .and_then(|m| m.as_str())
                    .map(str::trim)
                    .filter(|m| !m.is_empty())
                    .map(str::to_string)
            })
            .unwrap_or_else(|| DEFAULT_ERROR_MESSAGE.to_string());
        ApiError::Status { status, message }
    }

    /// HTTP status, when the server responded.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True for HTTP 404.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// True when no response was received.
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Transport { .. })
    }

    /// The text shown to the driver.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Status { message, .. } => message.clone(),
            ApiError::Transport { .. } => {
                "Unable to reach the server. Please check your internet connection.".to_string()
            }
            ApiError::InvalidResponse { .. } => {
                "Received an invalid response from the server. Please try again.".to_string()
            }
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::Status { .. } => "E_API_STATUS",
            ApiError::Transport { .. } => "E_API_TRANSPORT",
            ApiError::InvalidResponse { .. } => "E_API_INVALID",
        }
    }
}
