//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`HttpClient`] - HTTP client operations (GET, POST, PATCH)
//! - [`KeyValueStore`] - Durable key/value storage for the session
//! - [`LocationSource`] - Device location permission and position

pub mod http;
pub mod location;
pub mod storage;

pub use http::{Headers, HttpClient, HttpError, HttpMethod, Response};
pub use location::{LocationSource, PermissionStatus};
pub use storage::KeyValueStore;
