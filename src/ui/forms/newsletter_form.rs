//! Newsletter signup panel

use super::field_renderer::{draw_field, FIELD_HEIGHT};
use crate::app::App;
use crate::content::{NEWSLETTER_BLURB, NEWSLETTER_HEADING, SUBSCRIBE_LABEL};
use crate::state::PageFocus;
use crate::ui::components::render_button;
use crate::ui::BRAND_DARK;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.newsletter;
    let focused = app.state.focus == PageFocus::Newsletter;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if focused { Color::White } else { BRAND_DARK }))
        .style(Style::default().bg(BRAND_DARK));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),            // heading
            Constraint::Length(2),            // blurb
            Constraint::Length(FIELD_HEIGHT), // input + button
            Constraint::Min(0),
        ])
        .horizontal_margin(1)
        .split(inner);

    let heading = Paragraph::new(Line::from(Span::styled(
        NEWSLETTER_HEADING,
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(heading, chunks[0]);

    let blurb = Paragraph::new(NEWSLETTER_BLURB)
        .style(Style::default().fg(Color::Gray))
        .wrap(Wrap { trim: true });
    frame.render_widget(blurb, chunks[1]);

    let row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(13)])
        .split(chunks[2]);

    draw_field(
        frame,
        row[0],
        &form.email,
        focused && form.active_field_index == 0,
        false,
    );
    render_button(
        frame,
        row[1],
        SUBSCRIBE_LABEL,
        focused && form.active_field_index == 1,
        true,
    );
}
