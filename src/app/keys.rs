//! Key bindings.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{App, Form, RideAction, Screen};

/// Welcome screen buttons, in order.
pub const WELCOME_BUTTONS: [&str; 2] = ["Sign In", "Sign Up"];

impl App {
    /// Dispatch a key press to the current screen.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.quit();
            return;
        }

        match self.screen {
            Screen::Welcome => self.handle_welcome_key(key),
            Screen::SignIn | Screen::SignUp => self.handle_form_key(key),
            Screen::Home | Screen::Rides | Screen::RideDetail | Screen::Profile => {
                if !self.handle_tab_key(key) {
                    self.handle_screen_key(key);
                }
            }
        }
    }

    fn handle_welcome_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Left | KeyCode::BackTab => {
                self.welcome_index = self.welcome_index.saturating_sub(1);
                self.mark_dirty();
            }
            KeyCode::Down | KeyCode::Right | KeyCode::Tab => {
                self.welcome_index = (self.welcome_index + 1).min(WELCOME_BUTTONS.len() - 1);
                self.mark_dirty();
            }
            KeyCode::Enter => {
                let target = if self.welcome_index == 0 {
                    Screen::SignIn
                } else {
                    Screen::SignUp
                };
                self.navigate_to(target);
            }
            KeyCode::Char('i') => self.navigate_to(Screen::SignIn),
            KeyCode::Char('u') => self.navigate_to(Screen::SignUp),
            KeyCode::Char('q') | KeyCode::Esc => self.quit(),
            _ => {}
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        let sign_in = self.screen == Screen::SignIn;
        match key.code {
            KeyCode::Esc => {
                self.navigate_back();
                return;
            }
            KeyCode::Enter => {
                if sign_in {
                    self.submit_sign_in();
                } else {
                    self.submit_sign_up();
                }
                return;
            }
            _ => {}
        }

        // Fields are locked while the request is out
        if self.auth_pending {
            return;
        }
        let form: &mut dyn Form = if sign_in {
            &mut self.sign_in
        } else {
            &mut self.sign_up
        };
        match key.code {
            KeyCode::Tab | KeyCode::Down => form.next_field(),
            KeyCode::BackTab | KeyCode::Up => form.prev_field(),
            KeyCode::Backspace => form.backspace(),
            KeyCode::Char(c) => form.insert_char(c),
            _ => return,
        }
        self.mark_dirty();
    }

    /// Tab switching shared by the signed-in screens. Returns true when
    /// the key was consumed.
    fn handle_tab_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('1') => self.navigate_to(Screen::Home),
            KeyCode::Char('2') => self.navigate_to(Screen::Rides),
            KeyCode::Char('3') => self.navigate_to(Screen::Profile),
            KeyCode::Tab => self.next_tab(),
            KeyCode::BackTab => self.prev_tab(),
            KeyCode::Char('q') => self.quit(),
            _ => return false,
        }
        true
    }

    fn handle_screen_key(&mut self, key: KeyEvent) {
        match self.screen {
            Screen::Home => match key.code {
                KeyCode::Char('t') | KeyCode::Char(' ') | KeyCode::Enter => {
                    if self.can_toggle_status() {
                        self.toggle_status();
                    }
                }
                _ => {}
            },
            Screen::Rides => match key.code {
                KeyCode::Up | KeyCode::Char('k') => self.select_prev_ride(),
                KeyCode::Down | KeyCode::Char('j') => self.select_next_ride(),
                KeyCode::Enter => self.open_selected_ride(),
                KeyCode::Char('r') => self.load_rides(),
                _ => {}
            },
            Screen::RideDetail => match key.code {
                KeyCode::Char('a') => self.start_ride_action(RideAction::Accept),
                KeyCode::Char('d') => self.start_ride_action(RideAction::Decline),
                KeyCode::Char('c') => self.start_ride_action(RideAction::Complete),
                KeyCode::Char('r') => {
                    if let Some(id) = self.ride_id.clone() {
                        self.open_ride(id);
                    }
                }
                KeyCode::Esc | KeyCode::Backspace => self.navigate_back(),
                _ => {}
            },
            Screen::Profile => match key.code {
                KeyCode::Char('r') => self.reload_profile(),
                KeyCode::Char('l') => self.logout(),
                _ => {}
            },
            Screen::Welcome | Screen::SignIn | Screen::SignUp => {}
        }
    }
}
