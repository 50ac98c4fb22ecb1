//! Profile screen.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::helpers::{driver_status_color, field_line, or_dash, spinner};
use super::layout::{centered_rect, LayoutContext};
use super::theme::{COLOR_BORDER, COLOR_DIM, COLOR_ERROR};
use crate::app::{App, LoadState};
use crate::models::Driver;

/// Label/value rows for every profile attribute.
pub fn profile_rows(driver: &Driver) -> Vec<(&'static str, String)> {
    vec![
        ("Name", driver.full_name()),
        ("Phone", or_dash(driver.phone_number.as_deref()).to_string()),
        ("Email", or_dash(driver.email.as_deref()).to_string()),
        ("Gender", or_dash(driver.gender.as_deref()).to_string()),
        ("Role", or_dash(driver.role.as_deref()).to_string()),
        ("County", or_dash(driver.county.as_deref()).to_string()),
        ("Sub-county", or_dash(driver.sub_county.as_deref()).to_string()),
    ]
}

pub fn render_profile(frame: &mut Frame, area: Rect, app: &App, ctx: &LayoutContext) {
    let outer = centered_rect(area, ctx.form_width(), 14);
    let block = Block::default()
        .title(" Profile ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));

    let lines = match &app.profile {
        LoadState::Idle | LoadState::Loading => vec![Line::from(Span::styled(
            format!("{} Loading profile...", spinner(app.tick_count)),
            Style::default().fg(COLOR_DIM),
        ))],
        LoadState::Failed(err) => vec![
            Line::from(Span::styled(err.user_message(), Style::default().fg(COLOR_ERROR))),
            Line::from(""),
            Line::from(Span::styled("Press [r] to retry", Style::default().fg(COLOR_DIM))),
        ],
        LoadState::Loaded(driver) => {
            let mut lines: Vec<Line> = profile_rows(driver)
                .into_iter()
                .map(|(label, value)| field_line(label, value))
                .collect();
            lines.push(Line::from(vec![
                Span::styled("Status: ", Style::default().fg(COLOR_DIM)),
                Span::styled(
                    driver.status.as_str(),
                    Style::default().fg(driver_status_color(driver.status)),
                ),
            ]));
            lines
        }
    };

    frame.render_widget(Paragraph::new(lines).block(block), outer);
}
