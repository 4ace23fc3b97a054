//! Application state definitions

use super::forms::{ContactField, ContactForm, Form, NewsletterForm};
use super::notifications::NotificationCenter;

/// Page region holding keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageFocus {
    #[default]
    ContactForm,
    Newsletter,
}

impl PageFocus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::ContactForm => "Contact form",
            Self::Newsletter => "Newsletter",
        }
    }
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    pub focus: PageFocus,
    pub contact: ContactForm,
    pub newsletter: NewsletterForm,
    pub notifications: NotificationCenter,
    /// Short feedback shown in the status bar
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(notifications: NotificationCenter) -> Self {
        Self {
            notifications,
            ..Default::default()
        }
    }

    /// Move focus to the next row, crossing from the contact form into the
    /// newsletter panel and wrapping back around
    pub fn next_focus(&mut self) {
        match self.focus {
            PageFocus::ContactForm if self.contact.is_last_field_active() => {
                self.focus = PageFocus::Newsletter;
                self.newsletter.set_active_field(0);
            }
            PageFocus::ContactForm => self.contact.next_field(),
            PageFocus::Newsletter if self.newsletter.is_last_field_active() => {
                self.focus = PageFocus::ContactForm;
                self.contact.set_active_field(0);
            }
            PageFocus::Newsletter => self.newsletter.next_field(),
        }
    }

    /// Move focus to the previous row
    pub fn prev_focus(&mut self) {
        match self.focus {
            PageFocus::ContactForm if self.contact.active_field() == 0 => {
                self.focus = PageFocus::Newsletter;
                let last = self.newsletter.field_count() - 1;
                self.newsletter.set_active_field(last);
            }
            PageFocus::ContactForm => self.contact.prev_field(),
            PageFocus::Newsletter if self.newsletter.active_field() == 0 => {
                self.focus = PageFocus::ContactForm;
                self.contact.set_active_field(ContactForm::SUBMIT_ROW);
            }
            PageFocus::Newsletter => self.newsletter.prev_field(),
        }
    }

    /// Focus a specific contact input
    pub fn focus_contact_field(&mut self, field: ContactField) {
        self.focus = PageFocus::ContactForm;
        self.contact.set_active_field(field.index());
    }

    /// Whether a text input (not a button) has focus
    pub fn is_input_focused(&self) -> bool {
        match self.focus {
            PageFocus::ContactForm => self.contact.active_contact_field().is_some(),
            PageFocus::Newsletter => self.newsletter.get_field(self.newsletter.active_field()).is_some(),
        }
    }

    /// Type a character into whichever input has focus
    pub fn input_char(&mut self, c: char) {
        match self.focus {
            PageFocus::ContactForm => self.contact.input_char(c),
            PageFocus::Newsletter => {
                if let Some(field) = self.newsletter.get_active_field_mut() {
                    field.push_char(c);
                }
            }
        }
    }

    /// Delete the last character of whichever input has focus
    pub fn backspace(&mut self) {
        match self.focus {
            PageFocus::ContactForm => self.contact.backspace(),
            PageFocus::Newsletter => {
                if let Some(field) = self.newsletter.get_active_field_mut() {
                    field.pop_char();
                }
            }
        }
    }
}
