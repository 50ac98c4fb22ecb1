//! Tab Selector Component
//!
//! A horizontal tab line. Uses a `▶` marker for the selected item.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use crate::ui::layout::LayoutContext;
use crate::ui::theme::{COLOR_ACCENT, COLOR_DIM};

/// A single tab item in the selector
#[derive(Debug, Clone)]
pub struct TabItem<'a> {
    /// Number key that selects the tab
    pub key: char,
    pub label: &'a str,
}

impl<'a> TabItem<'a> {
    pub fn new(key: char, label: &'a str) -> Self {
        Self { key, label }
    }
}

/// Render a horizontal tab selector
pub fn render_tab_selector(items: &[TabItem<'_>], selected: usize, ctx: &LayoutContext) -> Line<'static> {
    let mut spans: Vec<Span<'static>> = vec![Span::raw(" ")];

    for (idx, item) in items.iter().enumerate() {
        let label = if ctx.is_compact() {
            item.label.to_string()
        } else {
            format!("{} {}", item.key, item.label)
        };

        if idx == selected {
            spans.push(Span::styled(
                "▶ ",
                Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled(
                label,
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(label, Style::default().fg(COLOR_DIM)));
        }

        if idx + 1 < items.len() {
            let spacing = if ctx.is_compact() { "  " } else { "    " };
            spans.push(Span::raw(spacing));
        }
    }

    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_marks_selected_tab() {
        let items = [TabItem::new('1', "Home"), TabItem::new('2', "Rides")];
        let line = render_tab_selector(&items, 1, &LayoutContext::new(100, 30));
        let rendered = text(&line);
        assert!(rendered.contains("▶ 2 Rides"));
        assert!(rendered.contains("1 Home"));
    }

    #[test]
    fn test_compact_drops_keys() {
        let items = [TabItem::new('1', "Home")];
        let line = render_tab_selector(&items, 0, &LayoutContext::new(40, 30));
        assert!(text(&line).contains("▶ Home"));
    }
}
