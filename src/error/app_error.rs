//! Unified error type for the driver client.
//!
//! `AppError` consolidates the domain-specific errors so every screen can
//! turn any failure into a notification the same way.

use thiserror::Error;

use super::api::ApiError;
use super::auth::AuthError;
use super::category::ErrorCategory;
use super::permission::PermissionError;
use super::ride::RideError;
use super::status::StatusError;
use super::storage::{ConfigError, StorageError};
use super::validation::ValidationError;

/// Unified error type for the driver client.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AppError {
    /// Required form fields were missing; no request was sent.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Login rejected, role denied or no session.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Server-returned failure or no response.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Device permission denied.
    #[error(transparent)]
    Permission(#[from] PermissionError),

    /// Ride lookup or transition failure.
    #[error(transparent)]
    Ride(#[from] RideError),

    /// Status toggle refused.
    #[error(transparent)]
    Status(#[from] StatusError),

    /// Local storage failure.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Invalid configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl AppError {
    /// Get the category of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            AppError::Validation(_) => ErrorCategory::User,
            AppError::Auth(_) => ErrorCategory::Auth,
            AppError::Api(ApiError::Transport { .. }) => ErrorCategory::Network,
            AppError::Api(ApiError::Status { status: 401, .. }) => ErrorCategory::Auth,
            AppError::Api(_) => ErrorCategory::Server,
            AppError::Permission(_) => ErrorCategory::User,
            AppError::Ride(RideError::NotFound { .. }) => ErrorCategory::Server,
            AppError::Ride(_) => ErrorCategory::Client,
            AppError::Status(_) => ErrorCategory::Client,
            AppError::Storage(_) => ErrorCategory::System,
            AppError::Config(_) => ErrorCategory::Configuration,
        }
    }

    /// Check if the screen should offer a manual retry.
    pub fn is_retryable(&self) -> bool {
        self.category().is_retryable()
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(err) => err.to_string(),
            AppError::Auth(err) => err.user_message(),
            AppError::Api(err) => err.user_message(),
            AppError::Permission(err) => err.to_string(),
            AppError::Ride(err) => err.user_message(),
            AppError::Status(err) => err.to_string(),
            AppError::Storage(_) => {
                "Could not access local storage. Please check file permissions.".to_string()
            }
            AppError::Config(err) => err.to_string(),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::Validation(err) => err.error_code(),
            AppError::Auth(err) => err.error_code(),
            AppError::Api(err) => err.error_code(),
            AppError::Permission(err) => err.error_code(),
            AppError::Ride(err) => err.error_code(),
            AppError::Status(err) => err.error_code(),
            AppError::Storage(err) => err.error_code(),
            AppError::Config(_) => "E_CONFIG",
        }
    }

    /// Check if this error requires signing in again.
    pub fn requires_reauth(&self) -> bool {
        match self {
            AppError::Auth(err) => err.requires_reauth(),
            AppError::Api(ApiError::Status { status: 401, .. }) => true,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories() {
        let transport: AppError = ApiError::Transport {
            message: "refused".to_string(),
        }
        .into();
        assert_eq!(transport.category(), ErrorCategory::Network);
        assert!(transport.is_retryable());

        let server: AppError = ApiError::Status {
            status: 500,
            message: "boom".to_string(),
        }
        .into();
        assert_eq!(server.category(), ErrorCategory::Server);

        let validation: AppError = ValidationError::MissingCredentials.into();
        assert_eq!(validation.category(), ErrorCategory::User);
        assert!(!validation.is_retryable());

        let storage: AppError = StorageError::NoHomeDirectory.into();
        assert_eq!(storage.category(), ErrorCategory::System);
    }

    #[test]
    fn test_user_message_delegates() {
        let err: AppError = ValidationError::MissingCredentials.into();
        assert_eq!(err.user_message(), "Please enter both phone number and pin.");

        let err: AppError = ApiError::Status {
            status: 422,
            message: "Phone number already registered".to_string(),
        }
        .into();
        assert_eq!(err.user_message(), "Phone number already registered");
    }

    #[test]
    fn test_reauth_detection() {
        let unauthorized: AppError = ApiError::Status {
            status: 401,
            message: "Unauthorized".to_string(),
        }
        .into();
        assert!(unauthorized.requires_reauth());

        let forbidden: AppError = ApiError::Status {
            status: 403,
            message: "Forbidden".to_string(),
        }
        .into();
        assert!(!forbidden.requires_reauth());
        assert!(AppError::from(AuthError::NotAuthenticated).requires_reauth());
    }
}
