//! Error handling for the driver client.
//!
//! | Type | Raised when | Shown to the driver |
//! |------|-------------|---------------------|
//! | [`ValidationError`] | required form fields are empty | yes |
//! | [`AuthError`] | login rejected, role is not Driver, no session | yes |
//! | [`ApiError`] | server error status, or no response | yes |
//! | [`PermissionError`] | location permission denied | no, degrades to a default |
//! | [`RideError`] | ride missing, or invalid status transition | yes |
//! | [`StatusError`] | a status toggle is already in flight | no, the control is disabled |
//! | [`StorageError`] | session file unreadable/unwritable | yes |
//!
//! All of them convert into [`AppError`], which carries the category,
//! user message and error code used by the notification layer.

mod api;
mod app_error;
mod auth;
mod category;
mod permission;
mod result;
mod ride;
mod status;
mod storage;
mod validation;

pub use api::{ApiError, DEFAULT_ERROR_MESSAGE};
pub use app_error::AppError;
pub use auth::AuthError;
pub use category::ErrorCategory;
pub use permission::PermissionError;
pub use result::AppResult;
pub use ride::RideError;
pub use status::StatusError;
pub use storage::{ConfigError, StorageError};
pub use validation::ValidationError;
