//! Form field value objects

/// Fields of the contact form, in display and focus order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ContactField {
    Name,
    Email,
    Phone,
    Company,
    Budget,
}

impl ContactField {
    /// All fields in display order
    pub const ALL: [ContactField; 5] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Phone,
        ContactField::Company,
        ContactField::Budget,
    ];

    /// Stable key used in logs and payloads
    pub fn key(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Company => "company",
            Self::Budget => "budget",
        }
    }

    /// Placeholder shown while the input is empty
    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Name => "Your Name",
            Self::Email => "Email Address",
            Self::Phone => "Phone Number",
            Self::Company => "Company / Influencer Name",
            Self::Budget => "Do you have any specific Budget for the campaign?",
        }
    }

    /// Position of the field in the form
    pub fn index(&self) -> usize {
        match self {
            Self::Name => 0,
            Self::Email => 1,
            Self::Phone => 2,
            Self::Company => 3,
            Self::Budget => 4,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// Represents a single text input with its label and value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: String,
    pub placeholder: String,
    pub value: String,
}

impl FormField {
    /// Create a new empty text field
    pub fn text(name: &str, placeholder: &str) -> Self {
        Self {
            name: name.to_string(),
            placeholder: placeholder.to_string(),
            value: String::new(),
        }
    }

    /// Create a field for one of the contact form inputs
    pub fn for_contact(field: ContactField) -> Self {
        Self::text(field.key(), field.placeholder())
    }

    pub fn as_text(&self) -> &str {
        &self.value
    }

    pub fn set_text(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        self.value.push(c);
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        self.value.pop();
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Text to render: the value, or the placeholder when empty
    pub fn display_value(&self) -> &str {
        if self.value.is_empty() {
            &self.placeholder
        } else {
            &self.value
        }
    }
}
