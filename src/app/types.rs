//! Type definitions for the application state.
//!
//! - [`Screen`] - Which screen is currently displayed
//! - [`LoadState`] - Progress of a server-backed view
//! - [`Toast`] - Transient notification

use crate::error::AppError;

/// Represents which screen is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Landing screen with Sign In / Sign Up
    #[default]
    Welcome,
    SignIn,
    SignUp,
    /// Status toggle and map
    Home,
    /// The driver's ride list
    Rides,
    /// One ride, with accept/decline/complete
    RideDetail,
    Profile,
}

impl Screen {
    /// Screens reachable from the tab bar once signed in.
    pub const TABS: [Screen; 3] = [Screen::Home, Screen::Rides, Screen::Profile];

    pub fn is_authenticated(&self) -> bool {
        !matches!(self, Screen::Welcome | Screen::SignIn | Screen::SignUp)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Screen::Welcome => "Welcome",
            Screen::SignIn => "Login",
            Screen::SignUp => "Create Account",
            Screen::Home => "Home",
            Screen::Rides => "My Rides",
            Screen::RideDetail => "Ride Details",
            Screen::Profile => "Profile",
        }
    }

    /// The tab highlighted for this screen.
    pub fn tab(&self) -> Option<Screen> {
        match self {
            Screen::Home => Some(Screen::Home),
            Screen::Rides | Screen::RideDetail => Some(Screen::Rides),
            Screen::Profile => Some(Screen::Profile),
            _ => None,
        }
    }
}

/// Progress of a server-backed view.
///
/// `Failed` is terminal until the driver presses retry.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState<T> {
    #[default]
    Idle,
    Loading,
    Loaded(T),
    Failed(AppError),
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            LoadState::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn from_result(result: Result<T, AppError>) -> Self {
        match result {
            Ok(value) => LoadState::Loaded(value),
            Err(e) => LoadState::Failed(e),
        }
    }
}

/// Severity of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Error,
}

/// Transient notification shown at the bottom of the screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    /// Tick at which the toast disappears
    pub expires_at: u64,
}

/// Ticks are 16ms; short toasts last about 2.5s, long ones about 4s.
pub const TOAST_SHORT_TICKS: u64 = 150;
pub const TOAST_LONG_TICKS: u64 = 250;

/// Ride action awaiting the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RideAction {
    Accept,
    Decline,
    Complete,
}

impl RideAction {
    pub fn label(&self) -> &'static str {
        match self {
            RideAction::Accept => "Accept",
            RideAction::Decline => "Decline",
            RideAction::Complete => "Complete",
        }
    }

    pub fn success_message(&self) -> &'static str {
        match self {
            RideAction::Accept => "Ride accepted",
            RideAction::Decline => "Ride declined",
            RideAction::Complete => "Ride completed",
        }
    }
}
