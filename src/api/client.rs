//! API gateway client for the Yurban backend.

use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;

use crate::auth::SessionContext;
use crate::error::ApiError;
use crate::models::{
    Driver, DriverStatus, LoginRequest, LoginResponse, MessageResponse, RegisterRequest, Ride,
    RideStatus, RideStatusUpdate, StatusUpdate,
};
use crate::traits::{Headers, HttpClient, HttpMethod};

/// Default base URL for the API, used when `YURBAN_API_URL` is unset.
pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";

/// Authenticated HTTP client for the driver endpoints.
#[derive(Clone)]
pub struct ApiClient {
    /// Base URL, without a trailing slash
    base_url: String,
    http: Arc<dyn HttpClient>,
    session: Arc<SessionContext>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    pub fn new(base_url: &str, http: Arc<dyn HttpClient>, session: Arc<SessionContext>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
            session,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &Arc<SessionContext> {
        &self.session
    }

    /// Build the headers for a request, adding the bearer token when a
    /// session is active.
    async fn headers(&self, has_body: bool) -> Headers {
        let mut headers = Headers::new();
        headers.insert("Accept".to_string(), "application/json".to_string());
        if has_body {
            headers.insert("Content-Type".to_string(), "application/json".to_string());
        }
        if let Some(token) = self.session.token().await {
            headers.insert("Authorization".to_string(), format!("Bearer {}", token));
        }
        headers
    }

    /// Issue one request and return the decoded JSON body.
    ///
    /// Empty success bodies decode as `null`. 4xx/5xx responses become
    /// [`ApiError::Status`]; a missing response becomes
    /// [`ApiError::Transport`]. Nothing is retried.
    pub async fn request(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&Value>,
    ) -> Result<Value, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let body = body.map(Value::to_string);
        let headers = self.headers(body.is_some()).await;

        tracing::debug!(%method, %url, "API request");

        let response = self
            .http
            .send(method, &url, body.as_deref(), &headers)
            .await
            .map_err(|e| {
                tracing::warn!(%method, %url, error = %e, "API request failed without response");
                ApiError::Transport {
                    message: e.to_string(),
                }
            })?;

        if !response.is_success() {
            let err = ApiError::from_status(response.status, &response.body);
            tracing::warn!(%method, %url, status = response.status, error = %err, "API error response");
            return Err(err);
        }

        if response.body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Null);
        }

        response.json::<Value>().map_err(|e| {
            tracing::warn!(%method, %url, error = %e, "Undecodable API response");
            ApiError::InvalidResponse {
                message: e.to_string(),
            }
        })
    }

    async fn request_as<T: DeserializeOwned>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&Value>,
    ) -> Result<T, ApiError> {
        let value = self.request(method, path, body).await?;
        decode(value)
    }

    /// `POST /auth/login`
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let body = to_body(request)?;
        self.request_as(HttpMethod::Post, "/auth/login", Some(&body))
            .await
    }

    /// `POST /auth/register`, always with role `Driver`.
    pub async fn register(&self, request: &RegisterRequest) -> Result<MessageResponse, ApiError> {
        let value = self
            .request(HttpMethod::Post, "/auth/register", Some(&request.to_body()))
            .await?;
        if value.is_null() {
            return Ok(MessageResponse::default());
        }
        decode(value)
    }

    /// `GET /profile`. Accepts the `{user: {...}}` envelope or a bare
    /// driver object.
    pub async fn fetch_profile(&self) -> Result<Driver, ApiError> {
        let value = self.request(HttpMethod::Get, "/profile", None).await?;
        decode(unwrap_key(value, "user"))
    }

    /// `PATCH /auth/update-status`. Returns the status the server reports
    /// back, if the response carries one.
    pub async fn update_status(
        &self,
        status: DriverStatus,
    ) -> Result<Option<DriverStatus>, ApiError> {
        let body = to_body(&StatusUpdate { status })?;
        let value = self
            .request(HttpMethod::Patch, "/auth/update-status", Some(&body))
            .await?;
        Ok(reported_status(&value))
    }

    /// `GET /driver/rides`, in server order.
    ///
    /// Records that do not decode are skipped, not fatal to the list.
    pub async fn fetch_driver_rides(&self) -> Result<Vec<Ride>, ApiError> {
        let value = self.request(HttpMethod::Get, "/driver/rides", None).await?;
        let items = match unwrap_key(value, "rides") {
            Value::Null => return Ok(Vec::new()),
            Value::Array(items) => items,
            other => return decode(other),
        };

        let total = items.len();
        let rides: Vec<Ride> = items
            .into_iter()
            .filter_map(|item| match serde_json::from_value::<Ride>(item) {
                Ok(ride) => Some(ride),
                Err(e) => {
                    tracing::warn!(error = %e, "Skipping undecodable ride");
                    None
                }
            })
            .collect();
        if rides.len() < total {
            tracing::debug!(total, kept = rides.len(), "Ride list partially decoded");
        }
        Ok(rides)
    }

    /// `GET /rides/{id}`
    pub async fn fetch_ride(&self, id: &str) -> Result<Ride, ApiError> {
        let value = self
            .request(HttpMethod::Get, &format!("/rides/{}", id), None)
            .await?;
        decode(unwrap_key(value, "ride"))
    }

    /// `PATCH /rides/{id}` with the new status. Returns the updated ride
    /// when the response decodes as one.
    pub async fn update_ride_status(
        &self,
        id: &str,
        status: RideStatus,
    ) -> Result<Option<Ride>, ApiError> {
        let body = to_body(&RideStatusUpdate { status })?;
        let value = self
            .request(HttpMethod::Patch, &format!("/rides/{}", id), Some(&body))
            .await?;
        Ok(serde_json::from_value(unwrap_key(value, "ride")).ok())
    }

    /// `PATCH /rides/{id}/complete`
    pub async fn complete_ride(&self, id: &str) -> Result<Value, ApiError> {
        self.request(HttpMethod::Patch, &format!("/rides/{}/complete", id), None)
            .await
    }
}

fn to_body<T: serde::Serialize>(value: &T) -> Result<Value, ApiError> {
    serde_json::to_value(value).map_err(|e| ApiError::InvalidResponse {
        message: e.to_string(),
    })
}

fn decode<T: DeserializeOwned>(value: Value) -> Result<T, ApiError> {
    serde_json::from_value(value).map_err(|e| ApiError::InvalidResponse {
        message: e.to_string(),
    })
}

/// Take `value[key]` when present, otherwise the value itself.
fn unwrap_key(value: Value, key: &str) -> Value {
    match value {
        Value::Object(mut map) if map.contains_key(key) => map.remove(key).unwrap_or(Value::Null),
        other => other,
    }
}

/// The driver status in a status-update response: `{user: {status}}` or
/// `{status}`.
fn reported_status(value: &Value) -> Option<DriverStatus> {
    let status = value
        .get("user")
        .and_then(|u| u.get("status"))
        .or_else(|| value.get("status"))?;
    serde_json::from_value(status.clone()).ok()
}
