//! Welcome screen: logo and the Sign In / Sign Up buttons.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::layout::{centered_rect, LayoutContext};
use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_HEADER};
use crate::app::{App, WELCOME_BUTTONS};

/// Block-letter logo
pub const YURBAN_LOGO: [&str; 5] = [
    "█   █ █   █ ████  ████   ███  █   █",
    " █ █  █   █ █   █ █   █ █   █ ██  █",
    "  █   █   █ ████  ████  █████ █ █ █",
    "  █   █   █ █  █  █   █ █   █ █  ██",
    "  █    ███  █   █ ████  █   █ █   █",
];

pub const TAGLINE: &str = "Drive. Earn. Move your city.";

pub fn render_welcome(frame: &mut Frame, area: Rect, app: &App, ctx: &LayoutContext) {
    let width = ctx.form_width().max(YURBAN_LOGO[0].chars().count() as u16 + 4);
    let content = centered_rect(area, width, 16);

    let mut lines: Vec<Line> = if ctx.is_compact() {
        vec![Line::from(Span::styled(
            "YURBAN",
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        ))]
    } else {
        YURBAN_LOGO
            .iter()
            .map(|row| Line::from(Span::styled(*row, Style::default().fg(COLOR_HEADER))))
            .collect()
    };
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(TAGLINE, Style::default().fg(COLOR_DIM))));
    lines.push(Line::from(""));

    let logo_height = lines.len() as u16;
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        Rect { height: logo_height.min(content.height), ..content },
    );

    let mut y = content.y + logo_height;
    for (idx, label) in WELCOME_BUTTONS.iter().enumerate() {
        if y + 3 > content.y + content.height {
            break;
        }
        let selected = idx == app.welcome_index;
        let (border, text) = if selected {
            (
                Style::default().fg(COLOR_ACCENT),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )
        } else {
            (Style::default().fg(COLOR_BORDER), Style::default().fg(COLOR_DIM))
        };
        let button = Paragraph::new(Span::styled(*label, text))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(border),
            );
        let button_area = centered_rect(Rect { y, height: 3, ..content }, 24, 3);
        frame.render_widget(button, button_area);
        y += 3;
    }
}
