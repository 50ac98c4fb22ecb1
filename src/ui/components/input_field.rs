//! Input Field Component
//!
//! A labelled text input with focus handling and masking for PINs.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::app::TextField;
use crate::ui::theme::{COLOR_BORDER, COLOR_DIM, COLOR_INPUT_BG};

/// Configuration for rendering an input field
#[derive(Debug, Clone)]
pub struct InputFieldConfig<'a> {
    pub label: &'a str,
    /// Text to show; already masked for secret fields
    pub value: String,
    pub focused: bool,
    /// Shown dimmed while the value is empty
    pub placeholder: Option<&'a str>,
}

impl<'a> InputFieldConfig<'a> {
    pub fn new(label: &'a str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
            focused: false,
            placeholder: None,
        }
    }

    /// Build from a form field, masking it if needed.
    pub fn from_field(field: &'a TextField) -> Self {
        Self::new(field.label, field.display())
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }
}

/// Rows one input field takes: label (1) + input box (3).
pub fn calculate_input_field_height(compact: bool) -> u16 {
    // Compact mode drops the box border
    if compact {
        2
    } else {
        4
    }
}

/// Render an input field, returning the height consumed.
pub fn render_input_field(
    frame: &mut Frame,
    area: Rect,
    config: &InputFieldConfig,
    compact: bool,
) -> u16 {
    let label_style = if config.focused {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(COLOR_DIM)
    };
    let label_area = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: 1.min(area.height),
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(config.label, label_style))),
        label_area,
    );

    let placeholder = config.value.is_empty() && config.placeholder.is_some();
    let mut content = match config.placeholder {
        Some(text) if placeholder => text.to_string(),
        _ => config.value.clone(),
    };
    let text_style = if placeholder {
        Style::default().fg(COLOR_DIM)
    } else if config.focused {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    };
    if config.focused && !placeholder {
        content.push('\u{2588}'); // Block cursor
    }

    let height = calculate_input_field_height(compact);
    let input_area = Rect {
        x: area.x,
        y: area.y + 1,
        width: area.width,
        height: (height - 1).min(area.height.saturating_sub(1)),
    };
    let mut input = Paragraph::new(Line::from(Span::styled(content, text_style)))
        .style(Style::default().bg(COLOR_INPUT_BG));
    if !compact {
        let border_color = if config.focused {
            Color::White
        } else {
            COLOR_BORDER
        };
        input = input.block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(border_color)),
        );
    }
    frame.render_widget(input, input_area);

    height
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_field_masks_pin() {
        let mut pin = TextField::new("PIN").numeric().masked();
        pin.insert_char('1');
        pin.insert_char('2');
        let config = InputFieldConfig::from_field(&pin);
        assert_eq!(config.label, "PIN");
        assert_ne!(config.value, "12");
        assert_eq!(config.value.chars().count(), 2);
    }

    #[test]
    fn test_height() {
        assert_eq!(calculate_input_field_height(false), 4);
        assert_eq!(calculate_input_field_height(true), 2);
    }
}
