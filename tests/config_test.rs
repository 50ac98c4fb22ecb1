//! Environment-driven configuration. Serialised since it mutates the
//! process environment.

use serial_test::serial;
use tempfile::TempDir;

use yurban_driver::api::DEFAULT_API_URL;
use yurban_driver::startup::config::{ENV_API_URL, ENV_HOME, ENV_LOCATION, ENV_LOG};
use yurban_driver::startup::AppConfig;

fn clear_env() {
    for key in [ENV_API_URL, ENV_HOME, ENV_LOG, ENV_LOCATION] {
        std::env::remove_var(key);
    }
}

#[test]
#[serial]
fn test_defaults_without_env() {
    clear_env();
    let config = AppConfig::from_env().unwrap();
    assert_eq!(config.api_url, DEFAULT_API_URL);
    assert_eq!(config.log_filter, "info");
    assert_eq!(config.location, None);
}

#[test]
#[serial]
fn test_env_overrides() {
    clear_env();
    let dir = TempDir::new().unwrap();
    std::env::set_var(ENV_API_URL, "https://api.yurban.test/api/");
    std::env::set_var(ENV_HOME, dir.path());
    std::env::set_var(ENV_LOG, "debug");
    std::env::set_var(ENV_LOCATION, "-1.3, 36.8");

    let config = AppConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.api_url, "https://api.yurban.test/api");
    assert_eq!(config.store_path(), dir.path().join("session.json"));
    assert_eq!(config.log_path(), dir.path().join("yurban.log"));
    assert_eq!(config.log_filter, "debug");
    let location = config.location.unwrap();
    assert_eq!(location.latitude, -1.3);
    assert_eq!(location.longitude, 36.8);
}

#[test]
#[serial]
fn test_bad_url_is_rejected() {
    clear_env();
    std::env::set_var(ENV_API_URL, "localhost:8000");
    let err = AppConfig::from_env().unwrap_err();
    clear_env();
    assert_eq!(err.key, ENV_API_URL);
}
