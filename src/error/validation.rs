//! Client-side form validation errors.
//!
//! These are raised before any request is sent.

use thiserror::Error;

/// A form was submitted with required fields left empty.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Sign-in needs both the phone number and the PIN.
    #[error("Please enter both phone number and pin.")]
    MissingCredentials,

    /// Sign-up needs every field; `fields` lists the empty ones.
    #[error("Please fill in all fields.")]
    MissingFields { fields: Vec<&'static str> },
}

impl ValidationError {
    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            ValidationError::MissingCredentials => "E_VAL_CREDENTIALS",
            ValidationError::MissingFields { .. } => "E_VAL_FIELDS",
        }
    }
}
