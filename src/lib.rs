//! Yurban Driver - a terminal client for Yurban ride-hailing drivers
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod api;
pub mod app;
pub mod auth;
pub mod cache;
pub mod cli;
pub mod error;
pub mod location;
pub mod logging;
pub mod models;
pub mod rides;
pub mod startup;
pub mod status;
pub mod terminal;
pub mod traits;
pub mod ui;
