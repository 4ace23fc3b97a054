//! Toast overlay for submission notifications

use crate::state::{Notification, NotificationCenter};
use crate::ui::BRAND_COLOR;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use std::time::Instant;

/// Maximum toast width including borders
const TOAST_WIDTH: u16 = 44;
/// Gap kept between the toast and the right edge
const MARGIN: u16 = 1;

/// Render visible toasts stacked upward from the bottom-right corner of `area`
pub fn render_toasts(frame: &mut Frame, area: Rect, center: &NotificationCenter, now: Instant) {
    let width = TOAST_WIDTH.min(area.width.saturating_sub(MARGIN));
    if width < 6 {
        return;
    }
    let inner_width = (width - 4) as usize; // borders + 1 col padding each side

    let mut bottom = area.y + area.height;
    for toast in center.visible().collect::<Vec<_>>().into_iter().rev() {
        let description = wrap_text(&toast.description, inner_width);
        let height = description.len() as u16 + 3; // title + borders
        if bottom < area.y + height {
            break;
        }
        let y = bottom - height;
        bottom = y;

        // Slide in from the right edge
        let progress = NotificationCenter::slide_progress(toast, now);
        let visible_width = ((width as f32 * progress).round() as u16).max(1);
        let toast_area = Rect {
            x: area.x + area.width - MARGIN - visible_width,
            y,
            width: visible_width,
            height,
        };

        frame.render_widget(Clear, toast_area);
        frame.render_widget(toast_paragraph(toast, description), toast_area);
    }
}

fn toast_paragraph(toast: &Notification, description: Vec<String>) -> Paragraph<'_> {
    let accent = if toast.is_destructive() {
        Color::Red
    } else {
        BRAND_COLOR
    };

    let mut lines = vec![Line::from(vec![
        Span::styled(
            format!(" {}", toast.title),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {}", toast.raised_at.format("%H:%M:%S")),
            Style::default().fg(Color::DarkGray),
        ),
    ])];
    lines.extend(description.into_iter().map(|l| Line::from(format!(" {l}"))));

    Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(accent))
                .style(Style::default().bg(Color::Black)),
        )
        .style(Style::default().bg(Color::Black).fg(Color::White))
}

/// Wrap text to fit within a maximum width
fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        if paragraph.is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current_line = String::new();
        for word in paragraph.split_whitespace() {
            let current_len = current_line.chars().count();
            if current_len + word.chars().count() + 1 > max_width && !current_line.is_empty() {
                lines.push(current_line);
                current_line = String::new();
            }
            if !current_line.is_empty() {
                current_line.push(' ');
            }
            current_line.push_str(word);
        }
        if !current_line.is_empty() {
            lines.push(current_line);
        }
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}
