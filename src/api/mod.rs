//! Remote API access.
//!
//! [`ApiClient`] is the single gateway to the Yurban backend. It attaches
//! the session's bearer token, performs exactly one attempt per call and
//! turns every failure into an [`ApiError`](crate::error::ApiError).

pub mod client;

pub use client::{ApiClient, DEFAULT_API_URL};
