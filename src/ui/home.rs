//! Home screen: availability toggle over the map.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::helpers::{driver_status_color, spinner};
use super::layout::{centered_rect, LayoutContext};
use super::map::{render_map, MapMarker};
use super::theme::{COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_MARKER_DRIVER, COLOR_PENDING};
use crate::app::{App, LoadState};
use crate::models::DriverStatus;
use crate::status::StatusPhase;

/// Status line shown before the profile has loaded.
pub const STATUS_UNKNOWN: &str = "Status unknown";

/// Label of the toggle button for the current status.
pub fn toggle_label(status: DriverStatus) -> &'static str {
    match status {
        DriverStatus::Online => "GO OFFLINE",
        DriverStatus::Offline => "GO ONLINE",
    }
}

pub fn render_home(frame: &mut Frame, area: Rect, app: &App, _ctx: &LayoutContext) {
    let [panel, map_area] =
        Layout::vertical([Constraint::Length(7), Constraint::Min(0)]).areas(area);

    let greeting = match &app.profile {
        LoadState::Loaded(driver) => format!(
            "Hello, {}",
            driver.first_name.as_deref().unwrap_or("driver")
        ),
        _ => "Hello, driver".to_string(),
    };

    let phase = app.services.status.phase();
    // The status is only known once the server has reported it
    let known = app.profile.loaded().is_some();
    let status_line = match phase {
        StatusPhase::Transitioning { target } => Line::from(Span::styled(
            format!("{} Going {}...", spinner(app.tick_count), target),
            Style::default().fg(COLOR_PENDING),
        )),
        _ if !known => Line::from(Span::styled(
            STATUS_UNKNOWN,
            Style::default().fg(COLOR_DIM),
        )),
        _ => {
            let status = app.services.status.confirmed();
            Line::from(vec![
                Span::styled("You are ", Style::default().fg(COLOR_DIM)),
                Span::styled(
                    status.as_str(),
                    Style::default()
                        .fg(driver_status_color(status))
                        .add_modifier(Modifier::BOLD),
                ),
            ])
        }
    };

    let mut lines = vec![
        Line::from(Span::styled(greeting, Style::default().fg(Color::White))),
        status_line,
    ];
    match &app.profile {
        LoadState::Loading => lines.push(Line::from(Span::styled(
            format!("{} Loading profile...", spinner(app.tick_count)),
            Style::default().fg(COLOR_DIM),
        ))),
        LoadState::Failed(err) => lines.push(Line::from(Span::styled(
            err.user_message(),
            Style::default().fg(COLOR_ERROR),
        ))),
        _ => {}
    }
    let [text_area, button_area] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(20)]).areas(panel);
    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(COLOR_BORDER)),
        ),
        text_area,
    );

    let (label, color) = match phase {
        StatusPhase::Transitioning { .. } => ("UPDATING", COLOR_DIM),
        _ if !known => ("...", COLOR_DIM),
        _ => {
            let status = app.services.status.confirmed();
            (toggle_label(status), driver_status_color(status.toggled()))
        }
    };
    let button = Paragraph::new(Span::styled(
        label,
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Thick)
            .border_style(Style::default().fg(color)),
    );
    frame.render_widget(button, centered_rect(button_area, 18, 3));

    match app.location {
        Some(position) => {
            let markers = [MapMarker::new(position, "You", COLOR_MARKER_DRIVER)];
            render_map(frame, map_area, "Your location", &markers);
        }
        None => {
            let waiting = Paragraph::new(Span::styled(
                format!("{} Locating...", spinner(app.tick_count)),
                Style::default().fg(COLOR_DIM),
            ))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(COLOR_BORDER)),
            );
            frame.render_widget(waiting, map_area);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_label_offers_opposite() {
        assert_eq!(toggle_label(DriverStatus::Offline), "GO ONLINE");
        assert_eq!(toggle_label(DriverStatus::Online), "GO OFFLINE");
    }
}
