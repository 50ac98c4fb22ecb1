//! Ride list and ride detail screens.

use chrono::{DateTime, Local, Utc};
use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph, Wrap},
};

use super::helpers::{field_line, or_dash, ride_status_color, spinner};
use super::layout::LayoutContext;
use super::map::{render_map, MapMarker};
use super::theme::{
    COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_MARKER_DROPOFF, COLOR_MARKER_PICKUP, COLOR_PENDING,
};
use crate::app::{App, LoadState};
use crate::error::AppError;
use crate::models::Ride;

/// Local-time rendering of a server timestamp.
pub fn format_timestamp(value: Option<DateTime<Utc>>) -> String {
    value
        .map(|t| t.with_timezone(&Local).format("%d %b %Y %H:%M").to_string())
        .unwrap_or_else(|| "-".to_string())
}

fn panel(title: &str) -> Block<'static> {
    Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
}

fn loading(tick: u64, what: &str) -> Paragraph<'static> {
    Paragraph::new(Span::styled(
        format!("{} Loading {what}...", spinner(tick)),
        Style::default().fg(COLOR_DIM),
    ))
}

fn failed(err: &AppError) -> Paragraph<'static> {
    Paragraph::new(vec![
        Line::from(Span::styled(err.user_message(), Style::default().fg(COLOR_ERROR))),
        Line::from(""),
        Line::from(Span::styled("Press [r] to retry", Style::default().fg(COLOR_DIM))),
    ])
    .wrap(Wrap { trim: true })
}

fn ride_item(ride: &Ride, ctx: &LayoutContext) -> ListItem<'static> {
    let status = Span::styled(
        format!("{:<9}", ride.status.as_str()),
        Style::default().fg(ride_status_color(ride.status)),
    );
    let route = Span::styled(
        format!(" {} → {}", or_dash(Some(ride.pickup_location.as_str())), or_dash(Some(ride.dropoff_location.as_str()))),
        Style::default().fg(Color::White),
    );
    let mut lines = vec![Line::from(vec![status, route])];
    if !ctx.is_compact() {
        lines.push(Line::from(Span::styled(
            format!(
                "          {}  ·  {}",
                ride.customer_name(),
                format_timestamp(ride.requested_at)
            ),
            Style::default().fg(COLOR_DIM),
        )));
    }
    ListItem::new(lines)
}

pub fn render_rides(frame: &mut Frame, area: Rect, app: &App, ctx: &LayoutContext) {
    let block = panel("My Rides");
    match &app.rides {
        LoadState::Idle | LoadState::Loading => {
            frame.render_widget(loading(app.tick_count, "rides").block(block), area)
        }
        LoadState::Failed(err) => frame.render_widget(failed(err).block(block), area),
        LoadState::Loaded(rides) if rides.is_empty() => frame.render_widget(
            Paragraph::new(Span::styled("No rides yet", Style::default().fg(COLOR_DIM)))
                .block(block),
            area,
        ),
        LoadState::Loaded(rides) => {
            let items: Vec<ListItem> = rides.iter().map(|r| ride_item(r, ctx)).collect();
            let list = List::new(items)
                .block(block)
                .highlight_symbol("▶ ")
                .highlight_style(Style::default().add_modifier(Modifier::BOLD));
            let mut state = ListState::default().with_selected(Some(app.rides_index));
            frame.render_stateful_widget(list, area, &mut state);
        }
    }
}

/// Map markers for a ride's pickup and dropoff, skipping unset points.
pub fn ride_markers(ride: &Ride) -> Vec<MapMarker> {
    let mut markers = Vec::new();
    if let Some(pickup) = ride.pickup_coordinates.filter(|c| c.is_set()) {
        markers.push(MapMarker::new(pickup, "Pickup", COLOR_MARKER_PICKUP));
    }
    if let Some(dropoff) = ride.dropoff_coordinates.filter(|c| c.is_set()) {
        markers.push(MapMarker::new(dropoff, "Dropoff", COLOR_MARKER_DROPOFF));
    }
    markers
}

pub fn render_ride_detail(frame: &mut Frame, area: Rect, app: &App, ctx: &LayoutContext) {
    let block = panel("Ride Details");
    let ride = match &app.ride {
        LoadState::Idle | LoadState::Loading => {
            frame.render_widget(loading(app.tick_count, "ride").block(block), area);
            return;
        }
        LoadState::Failed(err) => {
            frame.render_widget(failed(err).block(block), area);
            return;
        }
        LoadState::Loaded(ride) => ride,
    };

    let markers = ride_markers(ride);
    let show_map = !markers.is_empty() && !ctx.is_short();
    let [info_area, map_area] = if show_map {
        Layout::vertical([Constraint::Length(12), Constraint::Min(0)]).areas(area)
    } else {
        [area, Rect::default()]
    };

    let phone = ride.customer.as_ref().and_then(|c| c.phone_number());
    let mut lines = vec![
        Line::from(vec![
            Span::styled("Status: ", Style::default().fg(COLOR_DIM)),
            Span::styled(
                ride.status.as_str(),
                Style::default()
                    .fg(ride_status_color(ride.status))
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        field_line("Customer", ride.customer_name()),
        field_line("Phone", or_dash(phone)),
        field_line("Pickup", or_dash(Some(ride.pickup_location.as_str()))),
        field_line("Dropoff", or_dash(Some(ride.dropoff_location.as_str()))),
        field_line(
            "Passengers",
            ride.passenger_number.map_or_else(|| "-".to_string(), |n| n.to_string()),
        ),
        field_line("Requested", format_timestamp(ride.requested_at)),
        field_line("Updated", format_timestamp(ride.updated_at)),
        Line::from(""),
    ];
    if let Some(action) = app.ride_action {
        lines.push(Line::from(Span::styled(
            format!("{} {}...", spinner(app.tick_count), action.label()),
            Style::default().fg(COLOR_PENDING),
        )));
    }
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        info_area,
    );

    if show_map {
        render_map(frame, map_area, "Route", &markers);
    }
}
