//! Map canvas: a coordinate grid with labelled markers.
//!
//! There are no map tiles in a terminal; the canvas frames the markers in a
//! padded bounding box and draws a light grid for scale.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols::Marker,
    text::Span,
    widgets::{
        canvas::{Canvas, Line as CanvasLine, Points},
        Block, BorderType, Borders,
    },
    Frame,
};

use super::theme::{COLOR_BORDER, COLOR_MAP_GRID};
use crate::models::Coordinates;

/// Smallest span shown, in degrees (about 2 km at the equator).
const MIN_SPAN: f64 = 0.02;

/// Grid lines per axis.
const GRID_LINES: u32 = 4;

/// A labelled point on the map.
#[derive(Debug, Clone, PartialEq)]
pub struct MapMarker {
    pub position: Coordinates,
    pub label: String,
    pub color: Color,
}

impl MapMarker {
    pub fn new(position: Coordinates, label: impl Into<String>, color: Color) -> Self {
        Self {
            position,
            label: label.into(),
            color,
        }
    }
}

/// Longitude (x) and latitude (y) bounds framing every marker.
pub fn bounds(markers: &[MapMarker]) -> ([f64; 2], [f64; 2]) {
    let Some(first) = markers.first() else {
        let span = MIN_SPAN / 2.0;
        return ([-span, span], [-span, span]);
    };

    let (mut min_x, mut max_x) = (first.position.longitude, first.position.longitude);
    let (mut min_y, mut max_y) = (first.position.latitude, first.position.latitude);
    for marker in &markers[1..] {
        min_x = min_x.min(marker.position.longitude);
        max_x = max_x.max(marker.position.longitude);
        min_y = min_y.min(marker.position.latitude);
        max_y = max_y.max(marker.position.latitude);
    }

    let pad = |min: f64, max: f64| {
        let span = ((max - min) * 1.4).max(MIN_SPAN);
        let center = (min + max) / 2.0;
        [center - span / 2.0, center + span / 2.0]
    };
    (pad(min_x, max_x), pad(min_y, max_y))
}

/// Draw the map into `area`.
pub fn render_map(frame: &mut Frame, area: Rect, title: &str, markers: &[MapMarker]) {
    let (x_bounds, y_bounds) = bounds(markers);

    let canvas = Canvas::default()
        .block(
            Block::default()
                .title(format!(" {title} "))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(COLOR_BORDER)),
        )
        .marker(Marker::Braille)
        .x_bounds(x_bounds)
        .y_bounds(y_bounds)
        .paint(|ctx| {
            for i in 1..GRID_LINES {
                let t = f64::from(i) / f64::from(GRID_LINES);
                let x = x_bounds[0] + (x_bounds[1] - x_bounds[0]) * t;
                let y = y_bounds[0] + (y_bounds[1] - y_bounds[0]) * t;
                ctx.draw(&CanvasLine::new(x, y_bounds[0], x, y_bounds[1], COLOR_MAP_GRID));
                ctx.draw(&CanvasLine::new(x_bounds[0], y, x_bounds[1], y, COLOR_MAP_GRID));
            }
            ctx.layer();

            for marker in markers {
                let point = (marker.position.longitude, marker.position.latitude);
                ctx.draw(&Points {
                    coords: &[point],
                    color: marker.color,
                });
                ctx.print(
                    point.0,
                    point.1,
                    Span::styled(format!("● {}", marker.label), Style::default().fg(marker.color)),
                );
            }
        });

    frame.render_widget(canvas, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_marker_is_centered() {
        let markers = [MapMarker::new(Coordinates::new(-1.286389, 36.817223), "You", Color::Blue)];
        let (x, y) = bounds(&markers);
        assert!((x[1] - x[0] - MIN_SPAN).abs() < 1e-9);
        assert!(((x[0] + x[1]) / 2.0 - 36.817223).abs() < 1e-9);
        assert!(((y[0] + y[1]) / 2.0 + 1.286389).abs() < 1e-9);
    }

    #[test]
    fn test_bounds_contain_all_markers() {
        let markers = [
            MapMarker::new(Coordinates::new(-1.30, 36.70), "Pickup", Color::Green),
            MapMarker::new(Coordinates::new(-1.20, 36.90), "Dropoff", Color::Red),
        ];
        let (x, y) = bounds(&markers);
        assert!(x[0] < 36.70 && x[1] > 36.90);
        assert!(y[0] < -1.30 && y[1] > -1.20);
    }

    #[test]
    fn test_empty_bounds() {
        let (x, y) = bounds(&[]);
        assert!(x[0] < x[1]);
        assert!(y[0] < y[1]);
    }
}
