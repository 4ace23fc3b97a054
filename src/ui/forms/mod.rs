//! Form rendering (contact form and newsletter signup)

mod contact_form;
mod field_renderer;
mod newsletter_form;

pub use contact_form::draw as draw_contact_form;
pub use newsletter_form::draw as draw_newsletter;
