//! UI rendering for the driver app
//!
//! Every frame is header (title and tabs), body (the current screen) and a
//! one-line footer of key hints. A toast, if any, is drawn over the body.

mod auth;
mod components;
mod helpers;
mod home;
mod layout;
mod map;
mod profile;
mod rides;
mod theme;
mod toast;
mod welcome;

pub use helpers::SPINNER_FRAMES;
pub use layout::LayoutContext;
pub use map::MapMarker;

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::{App, Screen};
use components::{render_tab_selector, TabItem};
use helpers::key_hints;
use theme::{COLOR_BORDER, COLOR_DIM, COLOR_HEADER};

/// Product name shown in the header.
pub const APP_TITLE: &str = "Yurban Driver";

/// Main render function - dispatches to the current screen.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let ctx = LayoutContext::from_area(area);

    let [header, body, footer] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    render_header(frame, header, app, &ctx);

    match app.screen {
        Screen::Welcome => welcome::render_welcome(frame, body, app, &ctx),
        Screen::SignIn => auth::render_sign_in(frame, body, app, &ctx),
        Screen::SignUp => auth::render_sign_up(frame, body, app, &ctx),
        Screen::Home => home::render_home(frame, body, app, &ctx),
        Screen::Rides => rides::render_rides(frame, body, app, &ctx),
        Screen::RideDetail => rides::render_ride_detail(frame, body, app, &ctx),
        Screen::Profile => profile::render_profile(frame, body, app, &ctx),
    }

    frame.render_widget(Paragraph::new(footer_hints(app)), footer);

    if let Some(toast) = &app.toast {
        toast::render_toast(frame, body, toast);
    }
}

fn render_header(frame: &mut Frame, area: Rect, app: &App, ctx: &LayoutContext) {
    let title = Span::styled(
        format!(" {APP_TITLE} "),
        Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
    );
    let line = match app.screen.tab() {
        Some(active) => {
            let items: Vec<TabItem> = Screen::TABS
                .iter()
                .enumerate()
                .map(|(i, s)| TabItem::new(char::from(b'1' + i as u8), s.title()))
                .collect();
            let selected = Screen::TABS.iter().position(|s| *s == active).unwrap_or(0);
            let mut spans = vec![title, Span::styled("│", Style::default().fg(COLOR_DIM))];
            spans.extend(render_tab_selector(&items, selected, ctx).spans);
            Line::from(spans)
        }
        None => Line::from(vec![
            title,
            Span::styled(
                format!("│ {}", app.screen.title()),
                Style::default().fg(COLOR_DIM),
            ),
        ]),
    };

    frame.render_widget(
        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(COLOR_BORDER)),
        ),
        area,
    );
}

/// Key hints for the current screen and state.
fn footer_hints(app: &App) -> Line<'static> {
    let mut hints: Vec<(&str, &str)> = match app.screen {
        Screen::Welcome => vec![("↑↓", "Select"), ("Enter", "Open"), ("q", "Quit")],
        Screen::SignIn | Screen::SignUp => {
            vec![("Tab", "Next field"), ("Enter", "Submit"), ("Esc", "Back")]
        }
        Screen::Home if app.can_toggle_status() => vec![("t", "Toggle status")],
        Screen::Home => Vec::new(),
        Screen::Rides => vec![("↑↓", "Select"), ("Enter", "Details"), ("r", "Refresh")],
        Screen::RideDetail => {
            let mut hints = Vec::new();
            if app.ride_action.is_none() {
                if let Some(ride) = app.ride.loaded() {
                    if ride.can_respond() {
                        hints.push(("a", "Accept"));
                        hints.push(("d", "Decline"));
                    }
                    if ride.can_complete() {
                        hints.push(("c", "Complete"));
                    }
                }
            }
            hints.push(("r", "Reload"));
            hints.push(("Esc", "Back"));
            hints
        }
        Screen::Profile => vec![("r", "Refresh"), ("l", "Log out")],
    };
    if app.screen.is_authenticated() {
        hints.push(("1-3", "Tabs"));
        hints.push(("q", "Quit"));
    }
    key_hints(&hints)
}
