//! Sign-in and sign-up flows.
//!
//! Validation happens before any request is sent. A successful login always
//! persists the token, and only then is the role checked.

use crate::api::ApiClient;
use crate::error::{AppError, AuthError, ValidationError};
use crate::models::{LoginRequest, RegisterRequest};

use super::claims::Session;
use super::gate::Authorization;

/// Result of a completed login call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginOutcome {
    pub authorization: Authorization,
    /// Server message, if any
    pub message: Option<String>,
}

/// Both the phone number and the PIN are required. Whitespace only counts
/// as missing; the values are sent exactly as typed.
pub fn validate_login(phone_number: &str, pin: &str) -> Result<LoginRequest, ValidationError> {
    if phone_number.trim().is_empty() || pin.trim().is_empty() {
        return Err(ValidationError::MissingCredentials);
    }
    Ok(LoginRequest {
        phone_number: phone_number.to_string(),
        pin: pin.to_string(),
    })
}

/// Every sign-up field is required.
pub fn validate_registration(request: &RegisterRequest) -> Result<(), ValidationError> {
    let fields = request.missing_fields();
    if fields.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::MissingFields { fields })
    }
}

/// Validate, call `POST /auth/login`, persist the session and run the
/// driver gate.
pub async fn login(
    api: &ApiClient,
    phone_number: &str,
    pin: &str,
) -> Result<LoginOutcome, AppError> {
    let request = validate_login(phone_number, pin)?;

    let response = api.login(&request).await.map_err(|e| {
        tracing::warn!(error = %e, "Login failed");
        AuthError::LoginRejected {
            message: e.to_string(),
        }
    })?;

    let token = response
        .token
        .filter(|t| !t.is_empty())
        .ok_or(AuthError::MissingToken)?;
    let session = Session::new(token);
    let role = response.role.or_else(|| session.claims.role.clone());

    let authorization = api.session().init(session, role.as_deref()).await?;
    tracing::info!(
        role = role.as_deref().unwrap_or("<none>"),
        authorized = authorization.is_authorized(),
        "Login completed"
    );

    Ok(LoginOutcome {
        authorization,
        message: response.message,
    })
}

/// Validate and call `POST /auth/register`. Returns the server's message.
pub async fn register(api: &ApiClient, request: &RegisterRequest) -> Result<String, AppError> {
    validate_registration(request)?;
    let response = api.register(request).await?;
    tracing::info!("Registration accepted");
    Ok(response
        .message
        .unwrap_or_else(|| "Registration successful".to_string()))
}
