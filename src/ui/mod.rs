//! UI module for rendering the landing page

mod components;
mod contact_info;
mod footer;
mod forms;
mod hero;
mod layout;

use crate::app::App;
use ratatui::{style::Color, Frame};
use std::time::Instant;

/// Brand accent (purple-600)
pub const BRAND_COLOR: Color = Color::Rgb(147, 51, 234);
/// Dark brand background (purple-900)
pub const BRAND_DARK: Color = Color::Rgb(88, 28, 135);

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let page = layout::create_layout(frame.area());

    layout::draw_nav_bar(frame, page.nav);
    hero::draw(frame, page.hero);
    forms::draw_contact_form(frame, page.form, app);
    contact_info::draw(frame, page.info);
    forms::draw_newsletter(frame, page.newsletter, app);
    footer::draw(frame, page.footer);
    layout::draw_status_bar(frame, page.status, app);

    // Toasts float above everything except the status bar
    let toast_area = ratatui::layout::Rect {
        height: page.status.y.saturating_sub(frame.area().y),
        ..frame.area()
    };
    components::render_toasts(frame, toast_area, &app.state.notifications, Instant::now());
}
