//! Spawned network tasks.
//!
//! Each method clones what its task needs, marks the matching state as
//! loading and spawns; the result comes back as an [`AppMessage`].

use std::sync::Arc;

use tracing::debug;

use super::{App, AppMessage, LoadState, RideAction};
use crate::auth;
use crate::error::AppError;
use crate::status::StatusPhase;

impl App {
    /// Submit the sign-in form. Validation failures never leave the client.
    pub fn submit_sign_in(&mut self) {
        if self.auth_pending {
            return;
        }
        let phone = self.sign_in.phone_number.value.clone();
        let pin = self.sign_in.pin.value.clone();
        if let Err(e) = auth::validate_login(&phone, &pin) {
            self.toast_error(e.to_string());
            return;
        }

        self.auth_pending = true;
        self.mark_dirty();
        let api = self.services.api.clone();
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let result = auth::login(&api, &phone, &pin).await;
            let _ = tx.send(AppMessage::LoginFinished(result));
        });
    }

    /// Submit the sign-up form.
    pub fn submit_sign_up(&mut self) {
        if self.auth_pending {
            return;
        }
        let request = self.sign_up.to_request();
        if let Err(e) = auth::validate_registration(&request) {
            self.toast_error(e.to_string());
            return;
        }

        self.auth_pending = true;
        self.mark_dirty();
        let api = self.services.api.clone();
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let result = auth::register(&api, &request).await;
            let _ = tx.send(AppMessage::RegisterFinished(result));
        });
    }

    /// Read the profile through the cache.
    pub fn load_profile(&mut self) {
        if self.profile.is_loading() {
            return;
        }
        // Keep showing the previous profile while reloading
        if self.profile.loaded().is_none() {
            self.profile = LoadState::Loading;
        }
        let profile = Arc::clone(&self.services.profile);
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let result = profile.get().await;
            let _ = tx.send(AppMessage::ProfileLoaded(result));
        });
    }

    /// Manual retry: drop the cached profile and fetch again.
    pub fn reload_profile(&mut self) {
        self.profile = LoadState::Loading;
        self.mark_dirty();
        let profile = Arc::clone(&self.services.profile);
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let result = profile.refresh().await;
            let _ = tx.send(AppMessage::ProfileLoaded(result));
        });
    }

    pub fn resolve_location(&mut self) {
        let location = self.services.location.clone();
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let position = location.current_location().await;
            let _ = tx.send(AppMessage::LocationResolved(position));
        });
    }

    /// Flip Online/Offline. Does nothing until the profile has loaded or
    /// while a toggle is in flight.
    pub fn toggle_status(&mut self) {
        if self.profile.loaded().is_none() {
            debug!("Status toggle ignored until the profile has loaded");
            return;
        }
        if matches!(self.services.status.phase(), StatusPhase::Transitioning { .. }) {
            debug!("Status toggle ignored while in flight");
            return;
        }
        let status = Arc::clone(&self.services.status);
        let tx = self.message_tx.clone();
        // A second press before this task runs gets StatusError::InFlight
        tokio::spawn(async move {
            let result = status.toggle().await;
            let _ = tx.send(AppMessage::StatusToggled(result));
        });
        self.mark_dirty();
    }

    pub fn load_rides(&mut self) {
        if self.rides.is_loading() {
            return;
        }
        self.rides = LoadState::Loading;
        let rides = self.services.rides.clone();
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let result = rides.list_rides().await;
            let _ = tx.send(AppMessage::RidesLoaded(result));
        });
    }

    pub(crate) fn load_ride(&mut self, id: String) {
        self.ride = LoadState::Loading;
        let rides = self.services.rides.clone();
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let result = rides.get_ride(&id).await;
            let _ = tx.send(AppMessage::RideLoaded { id, result });
        });
    }

    /// Accept, decline or complete the ride on the detail screen.
    ///
    /// Only actions valid for the ride's status are started, and only one
    /// at a time.
    pub fn start_ride_action(&mut self, action: RideAction) {
        if self.ride_action.is_some() {
            return;
        }
        let Some(ride) = self.ride.loaded().cloned() else {
            return;
        };
        let allowed = match action {
            RideAction::Accept | RideAction::Decline => ride.can_respond(),
            RideAction::Complete => ride.can_complete(),
        };
        if !allowed {
            return;
        }

        self.ride_action = Some(action);
        self.mark_dirty();
        let rides = self.services.rides.clone();
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let result: Result<(), AppError> = match action {
                RideAction::Accept => rides.accept_ride(&ride.id).await.map(|_| ()),
                RideAction::Decline => rides.decline_ride(&ride.id).await.map(|_| ()),
                RideAction::Complete => rides.complete_ride(&ride).await,
            };
            let _ = tx.send(AppMessage::RideActionFinished { action, result });
        });
    }

    pub fn logout(&mut self) {
        // Profile results still in flight belong to the old session
        self.profile = LoadState::Idle;
        let services = self.services.clone();
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let result = services.logout().await;
            let _ = tx.send(AppMessage::LoggedOut(result));
        });
    }
}
