//! Layout components (navigation bar, page grid, status bar)

use super::footer::FOOTER_HEIGHT;
use super::BRAND_COLOR;
use crate::app::App;
use crate::content::{BRAND, GET_IN_TOUCH, LOGIN, NAV_LINKS};
use crate::platform::{COPY_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::PageFocus;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rectangles for every page section
pub struct PageLayout {
    pub nav: Rect,
    pub hero: Rect,
    pub form: Rect,
    pub info: Rect,
    pub newsletter: Rect,
    pub footer: Rect,
    pub status: Rect,
}

/// Split the screen into the page sections
pub fn create_layout(area: Rect) -> PageLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Navigation
            Constraint::Length(4),             // Hero
            Constraint::Min(25),               // Form grid
            Constraint::Length(FOOTER_HEIGHT), // Footer
            Constraint::Length(1),             // Status bar
        ])
        .split(area);

    let grid = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .spacing(2)
        .horizontal_margin(2)
        .split(rows[2]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(11), // Contact info
            Constraint::Length(1),  // Gap
            Constraint::Length(8),  // Newsletter
            Constraint::Min(0),
        ])
        .split(grid[1]);

    PageLayout {
        nav: rows[0],
        hero: rows[1],
        form: grid[0],
        info: right[0],
        newsletter: right[2],
        footer: rows[3],
        status: rows[4],
    }
}

/// Draw the navigation bar
pub fn draw_nav_bar(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(8),  // Brand
            Constraint::Min(0),     // Links
            Constraint::Length(24), // Buttons
        ])
        .horizontal_margin(2)
        .split(inner);

    let brand = Paragraph::new(Span::styled(
        BRAND,
        Style::default()
            .fg(BRAND_COLOR)
            .add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(brand, chunks[0]);

    let mut links = Vec::with_capacity(NAV_LINKS.len() * 2);
    for (i, link) in NAV_LINKS.iter().enumerate() {
        if i > 0 {
            links.push(Span::raw("    "));
        }
        links.push(Span::styled(*link, Style::default().fg(Color::Gray)));
    }
    frame.render_widget(
        Paragraph::new(Line::from(links)).alignment(Alignment::Center),
        chunks[1],
    );

    let buttons = Line::from(vec![
        Span::styled(LOGIN, Style::default().fg(Color::Gray)),
        Span::raw("  "),
        Span::styled(
            format!(" {GET_IN_TOUCH} "),
            Style::default().fg(Color::White).bg(BRAND_COLOR),
        ),
    ]);
    frame.render_widget(
        Paragraph::new(buttons).alignment(Alignment::Right),
        chunks[2],
    );
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![];

    // Submission status
    let contact = &app.state.contact;
    let indicator = if contact.is_submitting() {
        Span::styled(" ● sending ", Style::default().fg(Color::Yellow))
    } else {
        Span::styled(" ○ ", Style::default().fg(Color::Green))
    };
    spans.push(indicator);

    spans.push(Span::styled(
        get_focus_hints(app),
        Style::default().fg(Color::Gray),
    ));

    // Feedback message
    if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    // Quit hint on the right
    let quit_hint = " ^C:quit ";
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(quit_hint.len() as u16),
        y: area.y,
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the focused region
fn get_focus_hints(app: &App) -> String {
    let state = &app.state;
    if state.contact.is_submitting() {
        return "Esc:cancel".to_string();
    }
    let action = match (state.focus, state.is_input_focused()) {
        (PageFocus::ContactForm, true) => format!("type to edit  Enter/{SUBMIT_SHORTCUT}:send"),
        (PageFocus::ContactForm, false) => format!("Enter/{SUBMIT_SHORTCUT}:send"),
        (PageFocus::Newsletter, true) => "type to edit  Enter:subscribe".to_string(),
        (PageFocus::Newsletter, false) => "Enter:subscribe".to_string(),
    };
    let mut hints = format!(
        "{}  Tab:next  {action}  {COPY_SHORTCUT}:copy email",
        state.focus.label()
    );
    let invalid = state.contact.errors().len();
    if invalid > 0 {
        hints.push_str(&format!("  ({invalid} to fix)"));
    }
    hints
}
