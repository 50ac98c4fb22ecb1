//! Concrete implementations of trait abstractions.
//!
//! # Adapters
//!
//! - [`ReqwestHttpClient`] - HTTP client using reqwest
//! - [`FileStore`] - JSON-file key/value storage under the data dir
//! - [`ConfiguredLocation`] - Location source backed by configuration
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides test doubles:
//! - [`mock::MockHttpClient`] - Configurable, recording HTTP responses
//! - [`mock::InMemoryStore`] - In-memory key/value storage
//! - [`mock::MockLocation`] - Scripted permission and position

pub mod configured_location;
pub mod file_store;
pub mod mock;
pub mod reqwest_http;

pub use configured_location::ConfiguredLocation;
pub use file_store::FileStore;
pub use mock::{InMemoryStore, MockHttpClient, MockLocation};
pub use reqwest_http::ReqwestHttpClient;
