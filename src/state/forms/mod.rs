//! Form domain layer
//!
//! Type-safe form handling for the contact form and the newsletter signup.

mod field;
mod form_state;
mod validation;

pub use field::{ContactField, FormField};
pub use form_state::{ContactForm, Form, NewsletterForm};
pub use validation::{validate, ContactSubmission, FieldError, FieldErrors};
