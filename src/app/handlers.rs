//! Message handling for the App.

use tracing::{debug, info, warn};

use super::{App, AppMessage, LoadState, Screen, SignInForm, SignUpForm};
use crate::auth::Authorization;
use crate::error::{AppError, StatusError};

pub(crate) const WELCOME_MESSAGE: &str = "Welcome Driver!";
pub(crate) const STATUS_UPDATED_MESSAGE: &str = "Status updated successfully!";
pub(crate) const PROFILE_FAILED_MESSAGE: &str =
    "Failed to load profile. Please check your internet connection.";
pub(crate) const LOGOUT_FAILED_MESSAGE: &str = "Failed to log out. Please try again.";

impl App {
    /// Handle an incoming async message
    /// All message handlers mark the app as dirty since they update visible state.
    pub fn handle_message(&mut self, msg: AppMessage) {
        self.mark_dirty();
        match msg {
            AppMessage::LoginFinished(result) => {
                self.auth_pending = false;
                match result {
                    Ok(outcome) => match outcome.authorization {
                        Authorization::Authorized(_) => {
                            info!("Driver signed in");
                            self.sign_in = SignInForm::default();
                            self.toast_success(WELCOME_MESSAGE);
                            self.navigate_to(Screen::Home);
                        }
                        Authorization::Denied { reason } => self.toast_error(reason),
                    },
                    Err(e) => {
                        warn!(code = e.error_code(), "Sign in failed: {}", e);
                        self.toast_error(e.user_message());
                    }
                }
            }

            AppMessage::RegisterFinished(result) => {
                self.auth_pending = false;
                match result {
                    Ok(message) => {
                        self.sign_up = SignUpForm::default();
                        self.toast_success(message);
                        self.navigate_to(Screen::SignIn);
                    }
                    Err(e) => {
                        warn!(code = e.error_code(), "Registration failed: {}", e);
                        self.toast_error(e.user_message());
                    }
                }
            }

            AppMessage::ProfileLoaded(_) if !self.expects_profile() => {
                debug!("Dropping profile result outside a signed-in session");
            }

            AppMessage::ProfileLoaded(result) => match result {
                Ok(driver) => {
                    self.services.status.sync(driver.status);
                    self.profile = LoadState::Loaded(driver);
                }
                Err(e) => {
                    warn!(code = e.error_code(), "Profile load failed: {}", e);
                    let reauth = e.requires_reauth();
                    self.profile = LoadState::Failed(e);
                    if reauth {
                        self.toast_error(crate::error::AuthError::SessionExpired.user_message());
                        self.logout();
                    } else {
                        self.toast_error(PROFILE_FAILED_MESSAGE);
                    }
                }
            },

            AppMessage::LocationResolved(position) => {
                self.location = Some(position);
            }

            AppMessage::StatusToggled(result) => match result {
                Ok(status) => {
                    info!(status = %status, "Driver status changed");
                    self.toast_success(STATUS_UPDATED_MESSAGE);
                    self.load_profile();
                }
                Err(AppError::Status(StatusError::InFlight)) => {
                    debug!("Duplicate status toggle dropped");
                }
                Err(e) => {
                    warn!(code = e.error_code(), "Status toggle failed: {}", e);
                    self.toast_error(e.user_message());
                }
            },

            AppMessage::RidesLoaded(result) => {
                if let Err(e) = &result {
                    warn!(code = e.error_code(), "Ride list failed: {}", e);
                }
                self.rides = LoadState::from_result(result);
                let count = self.rides.loaded().map_or(0, Vec::len);
                self.rides_index = self.rides_index.min(count.saturating_sub(1));
            }

            AppMessage::RideLoaded { id, result } => {
                if self.ride_id.as_deref() != Some(id.as_str()) {
                    debug!(ride_id = %id, "Dropping stale ride result");
                    return;
                }
                self.ride = LoadState::from_result(result.map_err(AppError::from));
            }

            AppMessage::RideActionFinished { action, result } => {
                self.ride_action = None;
                match result {
                    Ok(()) => {
                        self.toast_success(action.success_message());
                        if self.screen == Screen::RideDetail {
                            self.navigate_to(Screen::Rides);
                        }
                    }
                    Err(e) => {
                        warn!(code = e.error_code(), action = action.label(), "Ride action failed: {}", e);
                        self.toast_error(e.user_message());
                    }
                }
            }

            AppMessage::LoggedOut(result) => match result {
                Ok(()) => {
                    info!("Driver signed out");
                    self.reset_to_welcome();
                }
                Err(e) => {
                    warn!(code = e.error_code(), "Logout failed: {}", e);
                    self.toast_error(LOGOUT_FAILED_MESSAGE);
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{app, next_message, BASE};
    use super::super::{Form, RideAction, ToastKind};
    use super::*;
    use crate::adapters::mock::MockResponse;
    use crate::error::{ApiError, RideError, StorageError};
    use crate::models::{Driver, DriverStatus};
    use crate::traits::HttpMethod;
    use serde_json::json;

    fn type_into(form: &mut impl Form, text: &str) {
        for c in text.chars() {
            form.insert_char(c);
        }
    }

    #[tokio::test]
    async fn test_driver_login_goes_home() {
        let (mut app, http) = app(false).await;
        http.set_response_for(
            HttpMethod::Post,
            &format!("{BASE}/auth/login"),
            MockResponse::json(200, json!({"token": "tok", "role": "Driver"})),
        );
        app.navigate_to(Screen::SignIn);
        type_into(&mut app.sign_in, "0712345678");
        app.sign_in.next_field();
        type_into(&mut app.sign_in, "1234");

        app.submit_sign_in();
        assert!(app.auth_pending);
        let msg = next_message(&mut app).await;
        app.handle_message(msg);

        assert!(!app.auth_pending);
        assert_eq!(app.screen, Screen::Home);
        let toast = app.toast.as_ref().unwrap();
        assert_eq!(toast.message, WELCOME_MESSAGE);
        assert_eq!(toast.kind, ToastKind::Success);
        assert!(app.sign_in.pin.value.is_empty());
    }

    #[tokio::test]
    async fn test_non_driver_login_stays_on_sign_in() {
        let (mut app, http) = app(false).await;
        http.set_response_for(
            HttpMethod::Post,
            &format!("{BASE}/auth/login"),
            MockResponse::json(200, json!({"token": "tok", "role": "Customer"})),
        );
        app.navigate_to(Screen::SignIn);
        type_into(&mut app.sign_in, "0712345678");
        app.sign_in.next_field();
        type_into(&mut app.sign_in, "1234");

        app.submit_sign_in();
        let msg = next_message(&mut app).await;
        app.handle_message(msg);

        assert_eq!(app.screen, Screen::SignIn);
        assert_eq!(app.toast.as_ref().unwrap().message, "Only drivers can log in.");
    }

    #[tokio::test]
    async fn test_empty_sign_in_never_sends() {
        let (mut app, http) = app(false).await;
        app.navigate_to(Screen::SignIn);
        app.submit_sign_in();

        assert!(!app.auth_pending);
        assert_eq!(app.toast.as_ref().unwrap().kind, ToastKind::Error);
        assert!(http.get_requests().is_empty());
    }

    #[tokio::test]
    async fn test_register_success_moves_to_sign_in() {
        let (mut app, _) = app(false).await;
        app.navigate_to(Screen::SignUp);
        app.auth_pending = true;
        app.handle_message(AppMessage::RegisterFinished(Ok("Account created".to_string())));

        assert!(!app.auth_pending);
        assert_eq!(app.screen, Screen::SignIn);
        assert_eq!(app.toast.as_ref().unwrap().message, "Account created");
    }

    #[tokio::test]
    async fn test_profile_loaded_syncs_status() {
        let (mut app, _) = app(true).await;
        let driver = Driver {
            first_name: Some("Amina".to_string()),
            status: DriverStatus::Online,
            ..Driver::default()
        };
        app.handle_message(AppMessage::ProfileLoaded(Ok(driver.clone())));

        assert_eq!(app.profile.loaded(), Some(&driver));
        assert_eq!(app.services.status.confirmed(), DriverStatus::Online);
    }

    #[tokio::test]
    async fn test_profile_failure_shows_message() {
        let (mut app, _) = app(true).await;
        let err = AppError::Api(ApiError::Transport {
            message: "refused".to_string(),
        });
        app.handle_message(AppMessage::ProfileLoaded(Err(err)));

        assert!(matches!(app.profile, LoadState::Failed(_)));
        assert_eq!(app.toast.as_ref().unwrap().message, PROFILE_FAILED_MESSAGE);
    }

    #[tokio::test]
    async fn test_late_profile_after_logout_is_dropped() {
        let (mut app, http) = app(true).await;
        http.set_delay(std::time::Duration::from_millis(80));
        app.reload_profile();
        app.logout();

        loop {
            let msg = next_message(&mut app).await;
            let done = matches!(msg, AppMessage::LoggedOut(_));
            app.handle_message(msg);
            if done {
                break;
            }
        }
        app.toast = None;
        // The reload completes after sign-out
        loop {
            let msg = next_message(&mut app).await;
            let done = matches!(msg, AppMessage::ProfileLoaded(_));
            app.handle_message(msg);
            if done {
                break;
            }
        }

        assert_eq!(app.screen, Screen::Welcome);
        assert!(matches!(app.profile, LoadState::Idle));
        assert!(app.toast.is_none());
        assert_eq!(app.services.status.confirmed(), DriverStatus::Offline);
    }

    #[tokio::test]
    async fn test_duplicate_toggle_is_silent() {
        let (mut app, _) = app(true).await;
        app.toast = None;
        app.handle_message(AppMessage::StatusToggled(Err(StatusError::InFlight.into())));
        assert!(app.toast.is_none());
    }

    #[tokio::test]
    async fn test_toggle_success_toasts() {
        let (mut app, _) = app(true).await;
        app.handle_message(AppMessage::StatusToggled(Ok(DriverStatus::Online)));
        assert_eq!(app.toast.as_ref().unwrap().message, STATUS_UPDATED_MESSAGE);
    }

    #[tokio::test]
    async fn test_stale_ride_result_is_dropped() {
        let (mut app, _) = app(true).await;
        app.ride_id = Some("current".to_string());
        app.ride = LoadState::Loading;
        app.handle_message(AppMessage::RideLoaded {
            id: "old".to_string(),
            result: Err(RideError::InvalidId),
        });
        assert!(app.ride.is_loading());
    }

    #[tokio::test]
    async fn test_ride_action_failure_stays_on_detail() {
        let (mut app, _) = app(true).await;
        app.screen = Screen::RideDetail;
        app.ride_action = Some(RideAction::Accept);
        let err = AppError::Api(ApiError::Status {
            status: 409,
            message: "Ride already taken".to_string(),
        });
        app.handle_message(AppMessage::RideActionFinished {
            action: RideAction::Accept,
            result: Err(err),
        });

        assert_eq!(app.screen, Screen::RideDetail);
        assert!(app.ride_action.is_none());
        assert_eq!(app.toast.as_ref().unwrap().message, "Ride already taken");
    }

    #[tokio::test]
    async fn test_ride_action_success_returns_to_list() {
        let (mut app, _) = app(true).await;
        app.screen = Screen::RideDetail;
        app.ride_action = Some(RideAction::Complete);
        app.handle_message(AppMessage::RideActionFinished {
            action: RideAction::Complete,
            result: Ok(()),
        });

        assert_eq!(app.screen, Screen::Rides);
        assert!(app.rides.is_loading());
        assert_eq!(app.toast.as_ref().unwrap().message, "Ride completed");
    }

    #[tokio::test]
    async fn test_logout_resets_state() {
        let (mut app, _) = app(true).await;
        app.logout();
        loop {
            let msg = next_message(&mut app).await;
            let done = matches!(msg, AppMessage::LoggedOut(_));
            app.handle_message(msg);
            if done {
                break;
            }
        }

        assert_eq!(app.screen, Screen::Welcome);
        assert!(matches!(app.profile, LoadState::Idle));
        assert!(!app.services.session.is_authenticated().await);
    }

    #[tokio::test]
    async fn test_logout_failure_keeps_screen() {
        let (mut app, _) = app(true).await;
        let err = StorageError::Io {
            path: "session.json".into(),
            message: "read-only".to_string(),
        };
        app.handle_message(AppMessage::LoggedOut(Err(err)));

        assert_eq!(app.screen, Screen::Home);
        assert_eq!(app.toast.as_ref().unwrap().message, LOGOUT_FAILED_MESSAGE);
    }
}
