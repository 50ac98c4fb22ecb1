//! Helper functions and constants for UI rendering

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use super::theme::{COLOR_DIM, COLOR_ONLINE, COLOR_PENDING, COLOR_RIDE_PENDING};
use crate::models::{DriverStatus, RideStatus};

/// Spinner frames for in-flight requests
pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Spinner frame for a tick count; advances every 6 ticks.
pub fn spinner(tick: u64) -> &'static str {
    SPINNER_FRAMES[((tick / 6) % SPINNER_FRAMES.len() as u64) as usize]
}

/// `-` for a missing value.
pub fn or_dash(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => "-",
    }
}

/// "Label: value" with a dim label.
pub fn field_line(label: &str, value: impl Into<String>) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label}: "), Style::default().fg(COLOR_DIM)),
        Span::styled(value.into(), Style::default().fg(Color::White)),
    ])
}

/// "[k] label" key hints for footers.
pub fn key_hints(hints: &[(&str, &str)]) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, (key, label)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(
            format!("[{key}]"),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(format!(" {label}"), Style::default().fg(COLOR_DIM)));
    }
    Line::from(spans)
}

pub fn driver_status_color(status: DriverStatus) -> Color {
    match status {
        DriverStatus::Online => COLOR_ONLINE,
        DriverStatus::Offline => super::theme::COLOR_OFFLINE,
    }
}

pub fn ride_status_color(status: RideStatus) -> Color {
    match status {
        RideStatus::Pending => COLOR_RIDE_PENDING,
        RideStatus::Accepted => COLOR_PENDING,
        RideStatus::Completed => COLOR_ONLINE,
        RideStatus::Rejected => COLOR_DIM,
    }
}
