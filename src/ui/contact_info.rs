//! Static contact info panel

use crate::content::{ASSISTANCE_HOURS, CONTACT_INFO, CONTACT_INFO_HEADING};
use crate::ui::BRAND_COLOR;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect) {
    let mut lines = vec![
        Line::from(Span::styled(
            CONTACT_INFO_HEADING,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    for entry in CONTACT_INFO {
        lines.push(Line::from(Span::styled(
            entry.title,
            Style::default()
                .fg(BRAND_COLOR)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            format!("  {}", entry.value),
            Style::default().fg(Color::Gray),
        )));
        lines.push(Line::from(Span::styled(
            format!("  {ASSISTANCE_HOURS}"),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
