//! Startup: configuration and service wiring.

pub mod config;
pub mod services;

pub use config::AppConfig;
pub use services::Services;
