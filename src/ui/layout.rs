//! Responsive layout helpers.
//!
//! `LayoutContext` carries the terminal size so render functions can pick
//! compact variants on small terminals.

use ratatui::layout::Rect;

/// Terminal width breakpoints for responsive layouts
pub mod breakpoints {
    /// Extra small terminal (< 60 columns)
    pub const XS_WIDTH: u16 = 60;
    /// Small terminal height (< 24 rows)
    pub const SM_HEIGHT: u16 = 24;
}

/// Terminal dimensions for the current frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutContext {
    pub width: u16,
    pub height: u16,
}

impl LayoutContext {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    pub fn from_area(area: Rect) -> Self {
        Self::new(area.width, area.height)
    }

    /// Narrow terminals get short labels.
    pub fn is_compact(&self) -> bool {
        self.width < breakpoints::XS_WIDTH
    }

    /// Short terminals drop the map on the detail screen.
    pub fn is_short(&self) -> bool {
        self.height < breakpoints::SM_HEIGHT
    }

    /// Width for a centered form or dialog.
    pub fn form_width(&self) -> u16 {
        if self.is_compact() {
            self.width
        } else {
            ((u32::from(self.width) * 3 / 5) as u16)
                .clamp(40, 70)
                .min(self.width)
        }
    }
}

/// A rect of at most `width` x `height`, centered in `area`.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
