//! Authentication and session lifecycle for the driver client.
//!
//! This module provides:
//! - Durable session storage (token, profile snapshot, identity fields)
//! - JWT claim decoding for role and expiry
//! - The [`SessionContext`] shared by the API client and the views
//! - The driver-only authorization gate
//! - Sign-in and sign-up flows with client-side validation

pub mod claims;
pub mod context;
pub mod flow;
pub mod gate;
pub mod session_store;

pub use claims::{Claims, Session};
pub use context::SessionContext;
pub use flow::{login, register, validate_login, validate_registration, LoginOutcome};
pub use gate::{authorize, Authorization};
pub use session_store::{keys, SessionStore};
