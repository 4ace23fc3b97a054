//! Field validation rules for the contact form

use super::field::ContactField;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// Minimum length of the name and company fields
const MIN_NAME_LEN: usize = 2;
/// Minimum length of the phone field
const MIN_PHONE_LEN: usize = 10;

/// Email grammar: local part, `@`, dot-terminated labels, alphabetic TLD.
/// Classes are spelled out in ASCII; case folding would admit `ſ` and `K`.
/// Leading dots and `..` in the local part are rejected separately since the
/// regex engine has no lookaround.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^",
        r"[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]", // local part, last char not '.' or '\''
        r"@",
        r"(?:[A-Za-z0-9][A-Za-z0-9\-]*\.)+", // domain labels
        r"[A-Za-z]{2,}$",                   // TLD
    ))
    .expect("email regex should compile")
});

/// A failed validation rule; `Display` is the message shown under the field
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("Name must be at least 2 characters")]
    NameTooShort,
    #[error("Please enter a valid email")]
    InvalidEmail,
    #[error("Please enter a valid phone number")]
    InvalidPhone,
    #[error("Company name must be at least 2 characters")]
    CompanyTooShort,
}

/// The values of the contact form as handed to the submission boundary
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub budget: String,
}

impl ContactSubmission {
    pub fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Phone => &self.phone,
            ContactField::Company => &self.company,
            ContactField::Budget => &self.budget,
        }
    }
}

/// Validation result: one entry per invalid field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<ContactField, FieldError>);

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: ContactField) -> Option<FieldError> {
        self.0.get(&field).copied()
    }

    /// First invalid field in form order
    pub fn first(&self) -> Option<ContactField> {
        self.0.keys().next().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ContactField, FieldError)> + '_ {
        self.0.iter().map(|(field, error)| (*field, *error))
    }

    fn insert(&mut self, field: ContactField, error: FieldError) {
        self.0.insert(field, error);
    }
}

/// Check a single field against its rule
pub fn validate_field(field: ContactField, value: &str) -> Option<FieldError> {
    match field {
        ContactField::Name if utf16_len(value) < MIN_NAME_LEN => Some(FieldError::NameTooShort),
        ContactField::Email if !is_valid_email(value) => Some(FieldError::InvalidEmail),
        ContactField::Phone if utf16_len(value) < MIN_PHONE_LEN => Some(FieldError::InvalidPhone),
        ContactField::Company if utf16_len(value) < MIN_NAME_LEN => {
            Some(FieldError::CompanyTooShort)
        }
        _ => None,
    }
}

/// Validate every field; the result fully replaces any previous error set
pub fn validate(submission: &ContactSubmission) -> FieldErrors {
    let mut errors = FieldErrors::default();
    for field in ContactField::ALL {
        if let Some(error) = validate_field(field, submission.value(field)) {
            errors.insert(field, error);
        }
    }
    errors
}

/// Whether `value` matches the email grammar
pub fn is_valid_email(value: &str) -> bool {
    let Some((local, _)) = value.split_once('@') else {
        return false;
    };
    if local.starts_with('.') || local.contains("..") {
        return false;
    }
    EMAIL_PATTERN.is_match(value)
}

/// Length in UTF-16 code units, as browsers count `String.length`
fn utf16_len(value: &str) -> usize {
    value.encode_utf16().count()
}
