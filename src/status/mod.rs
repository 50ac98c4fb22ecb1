//! Driver online/offline status.
//!
//! [`StatusToggle`] is the pure state machine; [`StatusService`] drives it
//! against the API and the profile cache.

pub mod service;
pub mod toggle;

pub use service::StatusService;
pub use toggle::{StatusPhase, StatusToggle};
