//! Color theme constants for the driver UI
//!
//! Defines the dark color palette used throughout the UI.

use ratatui::style::Color;

// ============================================================================
// Base palette
// ============================================================================

/// Primary border color
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color for highlights and the selected tab
pub const COLOR_ACCENT: Color = Color::White;

/// Header text color for the logo
pub const COLOR_HEADER: Color = Color::White;

/// Dim text for less important info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Background for input areas
pub const COLOR_INPUT_BG: Color = Color::Rgb(20, 20, 30);

// ============================================================================
// Status colors
// ============================================================================

/// Driver online, success toasts
pub const COLOR_ONLINE: Color = Color::Rgb(4, 181, 117); // green #04B575

/// Driver offline
pub const COLOR_OFFLINE: Color = Color::Gray;

/// Errors and the decline action
pub const COLOR_ERROR: Color = Color::Red;

/// In-flight work
pub const COLOR_PENDING: Color = Color::Cyan;

/// Ride waiting for a response
pub const COLOR_RIDE_PENDING: Color = Color::Yellow;

// ============================================================================
// Map
// ============================================================================

pub const COLOR_MAP_GRID: Color = Color::Rgb(40, 40, 55);

/// Driver marker
pub const COLOR_MARKER_DRIVER: Color = Color::Rgb(0, 122, 204); // blue #007ACC

pub const COLOR_MARKER_PICKUP: Color = Color::LightGreen;

pub const COLOR_MARKER_DROPOFF: Color = Color::LightRed;

/// Background color for toasts and dialogs
pub const COLOR_DIALOG_BG: Color = Color::Rgb(10, 15, 35);
