//! AppMessage enum for async communication within the application.

use crate::auth::LoginOutcome;
use crate::error::{AppError, RideError, StorageError};
use crate::models::{Coordinates, Driver, DriverStatus, Ride};

use super::types::RideAction;

/// Results of spawned tasks, delivered to the event loop
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// `POST /auth/login` finished
    LoginFinished(Result<LoginOutcome, AppError>),
    /// `POST /auth/register` finished; `Ok` carries the server message
    RegisterFinished(Result<String, AppError>),
    /// Profile read through the cache
    ProfileLoaded(Result<Driver, AppError>),
    /// Map center resolved (never fails)
    LocationResolved(Coordinates),
    /// Status toggle settled
    StatusToggled(Result<DriverStatus, AppError>),
    /// Ride list loaded
    RidesLoaded(Result<Vec<Ride>, AppError>),
    /// Ride detail loaded
    RideLoaded {
        id: String,
        result: Result<Ride, RideError>,
    },
    /// Accept/decline/complete settled
    RideActionFinished {
        action: RideAction,
        result: Result<(), AppError>,
    },
    /// Session cleared
    LoggedOut(Result<(), StorageError>),
}
