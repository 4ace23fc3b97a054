//! Field rendering utilities for forms

use crate::state::FormField;
use crate::ui::BRAND_COLOR;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Height of a single-line input including borders
pub const FIELD_HEIGHT: u16 = 3;

/// Draw a single-line text input
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool, has_error: bool) {
    let border_style = if has_error {
        Style::default().fg(Color::Red)
    } else if is_active {
        Style::default().fg(BRAND_COLOR)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let value_span = if field.is_empty() {
        Span::styled(
            field.display_value(),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )
    } else {
        Span::styled(field.as_text(), Style::default().fg(Color::White))
    };

    let mut spans = vec![Span::raw(" ")];
    if is_active && field.is_empty() {
        // cursor sits before the placeholder
        spans.push(Span::styled("▌", Style::default().fg(BRAND_COLOR)));
        spans.push(value_span);
    } else {
        spans.push(value_span);
        if is_active {
            spans.push(Span::styled("▌", Style::default().fg(BRAND_COLOR)));
        }
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

/// Draw the validation message under a field
pub fn draw_error(frame: &mut Frame, area: Rect, message: &str) {
    let line = Line::from(Span::styled(
        format!(" {message}"),
        Style::default().fg(Color::Red),
    ));
    frame.render_widget(Paragraph::new(line), area);
}
