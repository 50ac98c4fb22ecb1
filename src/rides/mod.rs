//! Ride list and ride detail operations.

pub mod service;

pub use service::{sort_rides, RideService};
