//! Application state and event handling.
//!
//! `App` is owned by the event loop in `main`. Network work runs in spawned
//! tasks (see [`actions`]) that report back through `message_tx`; the loop
//! feeds those [`AppMessage`]s to [`App::handle_message`] and key presses to
//! [`App::handle_key`]. Nothing here blocks.

mod actions;
mod forms;
mod handlers;
mod keys;
mod messages;
mod navigation;
mod types;

pub use forms::{Form, SignInForm, SignUpForm, TextField};
pub use keys::WELCOME_BUTTONS;
pub use messages::AppMessage;
pub use types::{LoadState, RideAction, Screen, Toast, ToastKind, TOAST_LONG_TICKS, TOAST_SHORT_TICKS};

use tokio::sync::mpsc;

use crate::models::{Coordinates, Driver, Ride};
use crate::startup::Services;

/// Main application state
pub struct App {
    /// Wired services (session, API, caches)
    pub services: Services,
    /// Current screen
    pub screen: Screen,
    /// Set when the loop should exit
    pub should_quit: bool,
    /// Dirty flag; the loop only draws when set
    pub needs_redraw: bool,
    /// Incremented every 16ms tick
    pub tick_count: u64,
    /// Sender handed to spawned tasks
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Receiver, taken by the event loop
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,

    /// Welcome screen button (0 = Sign In, 1 = Sign Up)
    pub welcome_index: usize,
    pub sign_in: SignInForm,
    pub sign_up: SignUpForm,
    /// A sign-in or sign-up request is outstanding
    pub auth_pending: bool,

    pub profile: LoadState<Driver>,
    /// Map center; `None` until resolved
    pub location: Option<Coordinates>,

    pub rides: LoadState<Vec<Ride>>,
    /// Selected row in the ride list
    pub rides_index: usize,
    /// Ride shown on the detail screen
    pub ride_id: Option<String>,
    pub ride: LoadState<Ride>,
    /// Ride action awaiting the server
    pub ride_action: Option<RideAction>,

    pub toast: Option<Toast>,
}

impl App {
    /// Create the app. `signed_in` starts on Home (and begins loading),
    /// otherwise on the welcome screen.
    pub fn new(services: Services, signed_in: bool) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        let mut app = Self {
            services,
            screen: Screen::Welcome,
            should_quit: false,
            needs_redraw: true,
            tick_count: 0,
            message_tx,
            message_rx: Some(message_rx),
            welcome_index: 0,
            sign_in: SignInForm::default(),
            sign_up: SignUpForm::default(),
            auth_pending: false,
            profile: LoadState::Idle,
            location: None,
            rides: LoadState::Idle,
            rides_index: 0,
            ride_id: None,
            ride: LoadState::Idle,
            ride_action: None,
            toast: None,
        };
        if signed_in {
            app.enter_home();
        }
        app
    }

    /// Mark the UI as needing a redraw
    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Advance animations and expire the toast.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);

        if let Some(toast) = &self.toast {
            if self.tick_count >= toast.expires_at {
                self.toast = None;
                self.mark_dirty();
            }
        }

        // Spinners animate while anything is in flight
        if self.is_busy() && self.tick_count % 6 == 0 {
            self.mark_dirty();
        }
    }

    /// True while any request the UI waits on is outstanding.
    pub fn is_busy(&self) -> bool {
        self.auth_pending
            || self.ride_action.is_some()
            || self.profile.is_loading()
            || self.rides.is_loading()
            || self.ride.is_loading()
            || matches!(
                self.services.status.phase(),
                crate::status::StatusPhase::Transitioning { .. }
            )
    }

    /// Show a transient notification.
    pub fn show_toast(&mut self, message: impl Into<String>, kind: ToastKind, ticks: u64) {
        self.toast = Some(Toast {
            message: message.into(),
            kind,
            expires_at: self.tick_count + ticks,
        });
        self.mark_dirty();
    }

    pub fn toast_info(&mut self, message: impl Into<String>) {
        self.show_toast(message, ToastKind::Info, TOAST_SHORT_TICKS);
    }

    pub fn toast_success(&mut self, message: impl Into<String>) {
        self.show_toast(message, ToastKind::Success, TOAST_SHORT_TICKS);
    }

    pub fn toast_error(&mut self, message: impl Into<String>) {
        self.show_toast(message, ToastKind::Error, TOAST_LONG_TICKS);
    }

    /// The ride currently selected in the list.
    pub fn selected_ride(&self) -> Option<&Ride> {
        self.rides.loaded().and_then(|rides| rides.get(self.rides_index))
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::app;
    use super::*;

    #[tokio::test]
    async fn test_starts_on_welcome_when_signed_out() {
        let (app, _) = app(false).await;
        assert_eq!(app.screen, Screen::Welcome);
        assert!(app.needs_redraw);
    }

    #[tokio::test]
    async fn test_starts_on_home_when_signed_in() {
        let (app, _) = app(true).await;
        assert_eq!(app.screen, Screen::Home);
        assert!(app.profile.is_loading());
    }

    #[tokio::test]
    async fn test_toast_expires() {
        let (mut app, _) = app(false).await;
        app.show_toast("hi", ToastKind::Info, 2);
        app.tick();
        assert!(app.toast.is_some());
        app.tick();
        assert!(app.toast.is_none());
    }
}
