//! Footer with link columns and copyright line

use crate::content::{
    COPYRIGHT, FOOTER_BRAND, FOOTER_COLUMNS, FOOTER_TAGLINE, LOGIN, TRY_FOR_FREE,
};
use crate::ui::BRAND_COLOR;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows needed by the footer
pub const FOOTER_HEIGHT: u16 = 9;

pub fn draw(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(inner);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .horizontal_margin(1)
        .split(rows[0]);

    let brand = vec![
        Line::from(Span::styled(
            FOOTER_BRAND,
            Style::default()
                .fg(BRAND_COLOR)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(FOOTER_TAGLINE, Style::default().fg(Color::Gray))),
    ];
    frame.render_widget(Paragraph::new(brand), columns[0]);

    for (column, area) in FOOTER_COLUMNS.iter().zip(columns.iter().skip(1)) {
        let mut lines = vec![Line::from(Span::styled(
            column.title,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ))];
        lines.extend(
            column
                .items
                .iter()
                .map(|item| Line::from(Span::styled(*item, Style::default().fg(Color::Gray)))),
        );
        frame.render_widget(Paragraph::new(lines), *area);
    }

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(30)])
        .horizontal_margin(1)
        .split(rows[1]);

    frame.render_widget(
        Paragraph::new(Span::styled(COPYRIGHT, Style::default().fg(Color::Gray))),
        bottom[0],
    );
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(LOGIN, Style::default().fg(Color::Gray)),
            Span::raw("  "),
            Span::styled(
                format!(" {TRY_FOR_FREE} "),
                Style::default().fg(Color::White).bg(BRAND_COLOR),
            ),
        ]))
        .alignment(Alignment::Right),
        bottom[1],
    );
}
