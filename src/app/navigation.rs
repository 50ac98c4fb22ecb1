//! Navigation methods for the App.

use super::{App, LoadState, Screen, SignInForm, SignUpForm};
use crate::status::StatusPhase;

impl App {
    /// Switch screens, starting whatever load the target screen needs.
    pub fn navigate_to(&mut self, screen: Screen) {
        match screen {
            Screen::Home => self.enter_home(),
            Screen::Rides => {
                self.screen = Screen::Rides;
                self.load_rides();
            }
            Screen::Profile => {
                self.screen = Screen::Profile;
                self.load_profile();
            }
            Screen::RideDetail => {
                if let Some(id) = self.ride_id.clone() {
                    self.open_ride(id);
                }
            }
            Screen::Welcome | Screen::SignIn | Screen::SignUp => {
                self.screen = screen;
            }
        }
        self.mark_dirty();
    }

    /// Home: profile (for the status) and the map center.
    pub(crate) fn enter_home(&mut self) {
        self.screen = Screen::Home;
        self.load_profile();
        if self.location.is_none() {
            self.resolve_location();
        }
    }

    /// Show one ride and load it.
    pub fn open_ride(&mut self, id: String) {
        self.screen = Screen::RideDetail;
        self.ride_id = Some(id.clone());
        self.ride_action = None;
        self.load_ride(id);
    }

    /// Open the ride under the list cursor.
    pub fn open_selected_ride(&mut self) {
        if let Some(id) = self.selected_ride().map(|r| r.id.clone()) {
            self.open_ride(id);
        }
    }

    /// Go one level up.
    pub fn navigate_back(&mut self) {
        match self.screen {
            Screen::RideDetail => self.navigate_to(Screen::Rides),
            Screen::SignIn | Screen::SignUp => self.navigate_to(Screen::Welcome),
            _ => {}
        }
    }

    /// Cycle through Home / Rides / Profile.
    pub fn next_tab(&mut self) {
        self.step_tab(1);
    }

    pub fn prev_tab(&mut self) {
        self.step_tab(Screen::TABS.len() - 1);
    }

    fn step_tab(&mut self, step: usize) {
        let Some(current) = self.screen.tab() else {
            return;
        };
        let index = Screen::TABS.iter().position(|s| *s == current).unwrap_or(0);
        let next = Screen::TABS[(index + step) % Screen::TABS.len()];
        self.navigate_to(next);
    }

    pub fn select_next_ride(&mut self) {
        let count = self.rides.loaded().map_or(0, Vec::len);
        if count > 0 && self.rides_index + 1 < count {
            self.rides_index += 1;
            self.mark_dirty();
        }
    }

    pub fn select_prev_ride(&mut self) {
        if self.rides_index > 0 {
            self.rides_index -= 1;
            self.mark_dirty();
        }
    }

    /// Whether a profile result is still wanted by this session.
    pub(crate) fn expects_profile(&self) -> bool {
        self.screen.is_authenticated() && !matches!(self.profile, LoadState::Idle)
    }

    /// The status toggle needs a server-reported status to flip from.
    pub(crate) fn can_toggle_status(&self) -> bool {
        self.profile.loaded().is_some()
            && !matches!(self.services.status.phase(), StatusPhase::Transitioning { .. })
    }

    /// Forget everything tied to the session and return to the welcome
    /// screen.
    pub(crate) fn reset_to_welcome(&mut self) {
        self.screen = Screen::Welcome;
        self.welcome_index = 0;
        self.sign_in = SignInForm::default();
        self.sign_up = SignUpForm::default();
        self.auth_pending = false;
        self.profile = LoadState::Idle;
        self.rides = LoadState::Idle;
        self.rides_index = 0;
        self.ride_id = None;
        self.ride = LoadState::Idle;
        self.ride_action = None;
        self.mark_dirty();
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::app;
    use super::*;

    #[tokio::test]
    async fn test_tabs_cycle() {
        let (mut app, _) = app(true).await;
        app.next_tab();
        assert_eq!(app.screen, Screen::Rides);
        app.next_tab();
        assert_eq!(app.screen, Screen::Profile);
        app.next_tab();
        assert_eq!(app.screen, Screen::Home);
        app.prev_tab();
        assert_eq!(app.screen, Screen::Profile);
    }

    #[tokio::test]
    async fn test_tabs_ignored_when_signed_out() {
        let (mut app, _) = app(false).await;
        app.next_tab();
        assert_eq!(app.screen, Screen::Welcome);
    }

    #[tokio::test]
    async fn test_back_from_sign_in() {
        let (mut app, _) = app(false).await;
        app.navigate_to(Screen::SignIn);
        app.navigate_back();
        assert_eq!(app.screen, Screen::Welcome);
    }
}
