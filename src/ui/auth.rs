//! Sign-in and sign-up forms.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::components::{calculate_input_field_height, render_input_field, InputFieldConfig};
use super::helpers::spinner;
use super::layout::{centered_rect, LayoutContext};
use super::theme::{COLOR_BORDER, COLOR_DIM, COLOR_HEADER, COLOR_PENDING};
use crate::app::{App, Form};

pub fn render_sign_in(frame: &mut Frame, area: Rect, app: &App, ctx: &LayoutContext) {
    let placeholders = ["07XXXXXXXX", "4-digit PIN"];
    render_form(
        frame,
        area,
        app,
        ctx,
        FormView {
            heading: "Welcome back, driver",
            form: &app.sign_in,
            placeholders: &placeholders,
            submit: "Login",
            pending: "Signing in...",
        },
    );
}

pub fn render_sign_up(frame: &mut Frame, area: Rect, app: &App, ctx: &LayoutContext) {
    render_form(
        frame,
        area,
        app,
        ctx,
        FormView {
            heading: "Create your driver account",
            form: &app.sign_up,
            placeholders: &[],
            submit: "Register",
            pending: "Creating account...",
        },
    );
}

struct FormView<'a> {
    heading: &'a str,
    form: &'a dyn Form,
    placeholders: &'a [&'a str],
    submit: &'a str,
    pending: &'a str,
}

fn render_form(frame: &mut Frame, area: Rect, app: &App, ctx: &LayoutContext, view: FormView) {
    let fields = view.form.fields();
    let full_height = fields.len() as u16 * calculate_input_field_height(false) + 6;
    let compact = ctx.is_compact() || full_height > area.height;
    let field_height = calculate_input_field_height(compact);
    let height = fields.len() as u16 * field_height + 6;

    let outer = centered_rect(area, ctx.form_width(), height);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));
    let inner = block.inner(outer);
    frame.render_widget(block, outer);

    let heading = Paragraph::new(Span::styled(
        view.heading,
        Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(heading, Rect { height: 1, ..inner });

    let mut y = inner.y + 2;
    let bottom = inner.y + inner.height;
    for (idx, field) in fields.iter().enumerate() {
        if y + field_height > bottom.saturating_sub(2) {
            break;
        }
        let mut config = InputFieldConfig::from_field(field).focused(idx == view.form.focus());
        if let Some(placeholder) = view.placeholders.get(idx) {
            config = config.placeholder(placeholder);
        }
        let field_area = Rect {
            x: inner.x + 1,
            y,
            width: inner.width.saturating_sub(2),
            height: field_height,
        };
        y += render_input_field(frame, field_area, &config, compact);
    }

    let submit = if app.auth_pending {
        Line::from(Span::styled(
            format!("{} {}", spinner(app.tick_count), view.pending),
            Style::default().fg(COLOR_PENDING),
        ))
    } else {
        Line::from(vec![
            Span::styled("[Enter] ", Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
            Span::styled(view.submit, Style::default().fg(COLOR_DIM)),
        ])
    };
    let submit_area = Rect {
        x: inner.x,
        y: bottom.saturating_sub(1),
        width: inner.width,
        height: 1,
    };
    frame.render_widget(Paragraph::new(submit).alignment(Alignment::Center), submit_area);
}
