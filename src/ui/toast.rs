//! Transient notification overlay.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use unicode_width::UnicodeWidthStr;

use super::theme::{COLOR_DIALOG_BG, COLOR_ERROR, COLOR_ONLINE};
use crate::app::{Toast, ToastKind};

fn toast_color(kind: ToastKind) -> Color {
    match kind {
        ToastKind::Info => Color::White,
        ToastKind::Success => COLOR_ONLINE,
        ToastKind::Error => COLOR_ERROR,
    }
}

/// Draw the toast at the bottom of `area`, above the footer.
pub fn render_toast(frame: &mut Frame, area: Rect, toast: &Toast) {
    let width = (toast.message.width() as u16 + 4).max(20).min(area.width);
    let height = 3.min(area.height);
    let rect = Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: (area.y + area.height).saturating_sub(height + 1),
        width,
        height,
    };
    let color = toast_color(toast.kind);

    frame.render_widget(Clear, rect);
    frame.render_widget(
        Paragraph::new(Span::styled(toast.message.as_str(), Style::default().fg(color)))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(color))
                    .style(Style::default().bg(COLOR_DIALOG_BG)),
            ),
        rect,
    );
}
