//! Contact form rendering

use super::field_renderer::{draw_error, draw_field, FIELD_HEIGHT};
use crate::app::App;
use crate::content::{SUBMITTING_LABEL, SUBMIT_LABEL};
use crate::state::{ContactField, PageFocus};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use crate::ui::BRAND_COLOR;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Draw the contact form: five inputs with their error lines, then the submit button
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.contact;
    let focused = app.state.focus == PageFocus::ContactForm;

    let border_color = if focused { BRAND_COLOR } else { Color::DarkGray };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut constraints = Vec::with_capacity(ContactField::ALL.len() * 2 + 2);
    for _ in ContactField::ALL {
        constraints.push(Constraint::Length(FIELD_HEIGHT));
        constraints.push(Constraint::Length(1)); // error line
    }
    constraints.push(Constraint::Length(BUTTON_HEIGHT));
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .horizontal_margin(1)
        .split(inner);

    for field in ContactField::ALL {
        let row = field.index() * 2;
        let is_active = focused && form.active_contact_field() == Some(field);
        let error = form.error_for(field);

        draw_field(frame, chunks[row], form.field(field), is_active, error.is_some());
        if let Some(error) = error {
            draw_error(frame, chunks[row + 1], &error.to_string());
        }
    }

    let submitting = form.is_submitting();
    let label = if submitting {
        SUBMITTING_LABEL
    } else {
        SUBMIT_LABEL
    };
    render_button(
        frame,
        chunks[ContactField::ALL.len() * 2],
        label,
        focused && form.is_submit_row_active(),
        !submitting,
    );
}
