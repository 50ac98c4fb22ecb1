//! Result type alias for driver client operations.

use super::app_error::AppError;

/// Type alias for Results using [`AppError`].
pub type AppResult<T> = Result<T, AppError>;
