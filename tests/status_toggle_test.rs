//! Driver availability toggle over HTTP.

mod common;

use std::time::Duration;

use common::TestEnv;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, ResponseTemplate};

use yurban_driver::error::{AppError, StatusError};
use yurban_driver::models::DriverStatus;
use yurban_driver::status::StatusPhase;

#[tokio::test]
async fn test_toggle_goes_online() {
    let env = TestEnv::start().await;
    env.sign_in().await;
    Mock::given(method("PATCH"))
        .and(path("/auth/update-status"))
        .and(body_json(json!({"status": "Online"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"user": {"status": "Online"}})))
        .expect(1)
        .mount(&env.server)
        .await;

    let status = env.services.status.toggle().await.unwrap();

    assert_eq!(status, DriverStatus::Online);
    assert_eq!(env.services.status.phase(), StatusPhase::Online);
}

#[tokio::test]
async fn test_concurrent_toggles_send_one_request() {
    let env = TestEnv::start().await;
    env.sign_in().await;
    Mock::given(method("PATCH"))
        .and(path("/auth/update-status"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"user": {"status": "Online"}}))
                .set_delay(Duration::from_millis(200)),
        )
        .expect(1)
        .mount(&env.server)
        .await;

    let status = &env.services.status;
    let (first, second) = tokio::join!(status.toggle(), async {
        tokio::time::sleep(Duration::from_millis(20)).await;
        status.toggle().await
    });

    assert_eq!(first.unwrap(), DriverStatus::Online);
    assert!(matches!(second, Err(AppError::Status(StatusError::InFlight))));
    assert_eq!(status.confirmed(), DriverStatus::Online);
}

#[tokio::test]
async fn test_failed_toggle_keeps_previous_status() {
    let env = TestEnv::start().await;
    env.sign_in().await;
    env.mount_json("PATCH", "/auth/update-status", 500, json!({"message": "Database unavailable"}))
        .await;

    let err = env.services.status.toggle().await.unwrap_err();

    assert_eq!(err.user_message(), "Database unavailable");
    assert_eq!(env.services.status.phase(), StatusPhase::Offline);
}

#[tokio::test]
async fn test_status_confirmed_by_refetch_when_response_is_bare() {
    let env = TestEnv::start().await;
    env.sign_in().await;
    env.mount_json("PATCH", "/auth/update-status", 200, json!({"message": "ok"})).await;
    env.mount_json("GET", "/profile", 200, json!({"user": {"firstName": "Amina", "status": "Online"}}))
        .await;

    let status = env.services.status.toggle().await.unwrap();
    assert_eq!(status, DriverStatus::Online);
}
