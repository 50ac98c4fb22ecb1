//! Mock implementations for testing.
//!
//! This module provides mock implementations of all trait abstractions,
//! enabling unit testing without network dependencies or file system access.
//!
//! # Available Mocks
//!
//! - [`MockHttpClient`] - HTTP client with configurable responses
//! - [`InMemoryStore`] - In-memory key/value storage
//! - [`MockLocation`] - Location source with a scripted outcome

pub mod http;
pub mod location;
pub mod store;

pub use http::{MockHttpClient, MockResponse, RecordedRequest};
pub use location::MockLocation;
pub use store::InMemoryStore;
