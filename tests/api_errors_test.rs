//! Error mapping for failed API calls.

mod common;

use std::sync::Arc;

use common::TestEnv;
use serde_json::json;
use wiremock::{matchers::method, Mock, ResponseTemplate};

use yurban_driver::adapters::{InMemoryStore, MockLocation, ReqwestHttpClient};
use yurban_driver::error::{ApiError, AppError, ErrorCategory, DEFAULT_ERROR_MESSAGE};
use yurban_driver::startup::Services;

#[tokio::test]
async fn test_server_message_is_surfaced() {
    let env = TestEnv::start().await;
    env.sign_in().await;
    env.mount_json("GET", "/profile", 403, json!({"message": "Account suspended"})).await;

    let err = env.services.profile.get().await.unwrap_err();

    assert_eq!(err.user_message(), "Account suspended");
    assert_eq!(err.category(), ErrorCategory::Server);
}

#[tokio::test]
async fn test_non_json_error_uses_generic_message() {
    let env = TestEnv::start().await;
    env.sign_in().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad gateway</html>"))
        .mount(&env.server)
        .await;

    let err = env.services.rides.list_rides().await.unwrap_err();

    assert!(matches!(err, AppError::Api(ApiError::Status { status: 502, .. })));
    assert_eq!(err.user_message(), DEFAULT_ERROR_MESSAGE);
    assert!(err.is_retryable());
}

#[tokio::test]
async fn test_unauthorized_requires_reauth() {
    let env = TestEnv::start().await;
    env.sign_in().await;
    env.mount_json("GET", "/profile", 401, json!({"message": "Token expired"})).await;

    let err = env.services.profile.get().await.unwrap_err();
    assert!(err.requires_reauth());
}

#[tokio::test]
async fn test_unreachable_server_is_transport_error() {
    // Port 9 (discard) is closed on test hosts
    let services = Services::new(
        "http://127.0.0.1:9",
        Arc::new(ReqwestHttpClient::new()),
        Arc::new(InMemoryStore::new()),
        Arc::new(MockLocation::denied()),
    );

    let err = services.rides.list_rides().await.unwrap_err();

    assert!(matches!(err, AppError::Api(ApiError::Transport { .. })));
    assert_eq!(err.category(), ErrorCategory::Network);
}
