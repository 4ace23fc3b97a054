//! Form state management and form structs

use super::field::{ContactField, FormField};
use super::validation::{validate, ContactSubmission, FieldError, FieldErrors};
use crate::state::notifications::Notification;
use crate::state::submission::{
    PendingSubmission, SubmissionOutcome, SubmissionPhase, SubmissionTicket, SubmitRejected,
};
use crate::submission::SubmissionError;

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    /// The focused text input, or `None` when a button row is focused
    fn get_active_field_mut(&mut self) -> Option<&mut FormField>;
    fn get_field(&self, index: usize) -> Option<&FormField>;
    /// Whether the focused row is the last one
    fn is_last_field_active(&self) -> bool {
        self.active_field() + 1 == self.field_count()
    }
}

// Contact Form
#[derive(Debug, Clone)]
pub struct ContactForm {
    pub name: FormField,
    pub email: FormField,
    pub phone: FormField,
    pub company: FormField,
    pub budget: FormField,
    /// 0-4 are the inputs, 5 is the submit button
    pub active_field_index: usize,
    errors: FieldErrors,
    phase: SubmissionPhase,
    /// Set by the first submit attempt; keystrokes then re-run the validator
    revalidate_on_change: bool,
    next_ticket: u64,
}

impl ContactForm {
    /// Index of the submit button row
    pub const SUBMIT_ROW: usize = 5;

    pub fn new() -> Self {
        Self {
            name: FormField::for_contact(ContactField::Name),
            email: FormField::for_contact(ContactField::Email),
            phone: FormField::for_contact(ContactField::Phone),
            company: FormField::for_contact(ContactField::Company),
            budget: FormField::for_contact(ContactField::Budget),
            active_field_index: 0,
            errors: FieldErrors::default(),
            phase: SubmissionPhase::default(),
            revalidate_on_change: false,
            next_ticket: 0,
        }
    }

    pub fn field(&self, field: ContactField) -> &FormField {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Phone => &self.phone,
            ContactField::Company => &self.company,
            ContactField::Budget => &self.budget,
        }
    }

    fn field_mut(&mut self, field: ContactField) -> &mut FormField {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Phone => &mut self.phone,
            ContactField::Company => &mut self.company,
            ContactField::Budget => &mut self.budget,
        }
    }

    /// Snapshot of the current values
    pub fn values(&self) -> ContactSubmission {
        ContactSubmission {
            name: self.name.value.clone(),
            email: self.email.value.clone(),
            phone: self.phone.value.clone(),
            company: self.company.value.clone(),
            budget: self.budget.value.clone(),
        }
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error_for(&self, field: ContactField) -> Option<FieldError> {
        self.errors.get(field)
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase.is_submitting()
    }

    pub fn is_submit_row_active(&self) -> bool {
        self.active_field_index == Self::SUBMIT_ROW
    }

    /// The contact field under focus, if an input is focused
    pub fn active_contact_field(&self) -> Option<ContactField> {
        ContactField::from_index(self.active_field_index)
    }

    /// Replace a field's value
    pub fn set_value(&mut self, field: ContactField, value: impl Into<String>) {
        self.field_mut(field).set_text(value);
        self.on_change();
    }

    /// Type a character into the focused input
    pub fn input_char(&mut self, c: char) {
        if let Some(field) = self.get_active_field_mut() {
            field.push_char(c);
            self.on_change();
        }
    }

    /// Delete the last character of the focused input
    pub fn backspace(&mut self) {
        if let Some(field) = self.get_active_field_mut() {
            field.pop_char();
            self.on_change();
        }
    }

    fn on_change(&mut self) {
        if self.revalidate_on_change {
            self.errors = validate(&self.values());
        }
    }

    fn transition(&mut self, next: SubmissionPhase) {
        tracing::debug!(from = self.phase.label(), to = next.label(), "contact form transition");
        self.phase = next;
    }

    /// Validate every field and, if all pass, enter the submitting state.
    ///
    /// Rejected while a submission is in flight. On validation failure the
    /// form returns to idle with per-field errors and focus moves to the
    /// first invalid field.
    pub fn begin_submit(&mut self) -> Result<PendingSubmission, SubmitRejected> {
        if self.is_submitting() {
            tracing::debug!("submit ignored: already submitting");
            return Err(SubmitRejected::AlreadySubmitting);
        }

        self.transition(SubmissionPhase::Validating);
        self.revalidate_on_change = true;

        let payload = self.values();
        self.errors = validate(&payload);

        if let Some(first) = self.errors.first() {
            let invalid: Vec<&str> = self.errors.iter().map(|(field, _)| field.key()).collect();
            tracing::info!(?invalid, "contact form failed validation");
            self.active_field_index = first.index();
            self.transition(SubmissionPhase::Idle(None));
            return Err(SubmitRejected::Invalid(self.errors.clone()));
        }

        self.next_ticket += 1;
        let ticket = SubmissionTicket(self.next_ticket);
        self.transition(SubmissionPhase::Submitting(ticket));
        Ok(PendingSubmission { ticket, payload })
    }

    /// Finish the submission identified by `ticket`.
    ///
    /// Returns the notification to raise, or `None` when the ticket does not
    /// belong to the submission currently in flight.
    pub fn complete(
        &mut self,
        ticket: SubmissionTicket,
        result: &Result<(), SubmissionError>,
    ) -> Option<Notification> {
        match self.phase {
            SubmissionPhase::Submitting(current) if current == ticket => {}
            _ => {
                tracing::debug!(ticket = ticket.0, "ignoring stale submission result");
                return None;
            }
        }

        match result {
            Ok(()) => {
                self.reset();
                self.transition(SubmissionPhase::Idle(Some(SubmissionOutcome::Succeeded)));
                Some(Notification::submission_succeeded())
            }
            Err(e) => {
                tracing::warn!(error = %e, "contact submission failed");
                self.transition(SubmissionPhase::Idle(Some(SubmissionOutcome::Failed)));
                Some(Notification::submission_failed())
            }
        }
    }

    /// Abandon the in-flight submission without any outcome.
    /// Returns the cancelled ticket.
    pub fn cancel(&mut self) -> Option<SubmissionTicket> {
        if let SubmissionPhase::Submitting(ticket) = self.phase {
            tracing::info!(ticket = ticket.0, "contact submission cancelled");
            self.transition(SubmissionPhase::Idle(None));
            Some(ticket)
        } else {
            None
        }
    }

    /// Clear all values and errors
    pub fn reset(&mut self) {
        for field in ContactField::ALL {
            self.field_mut(field).clear();
        }
        self.errors = FieldErrors::default();
        self.revalidate_on_change = false;
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for ContactForm {
    fn field_count(&self) -> usize {
        6 // five inputs, submit button
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(Self::SUBMIT_ROW);
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        let field = ContactField::from_index(self.active_field_index)?;
        Some(self.field_mut(field))
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        ContactField::from_index(index).map(|f| self.field(f))
    }
}

// Newsletter Form
#[derive(Debug, Clone)]
pub struct NewsletterForm {
    pub email: FormField,
    /// 0 is the email input, 1 is the subscribe button
    pub active_field_index: usize,
}

impl NewsletterForm {
    pub fn new() -> Self {
        Self {
            email: FormField::text("newsletter_email", "youremail123@gmail.com"),
            active_field_index: 0,
        }
    }

    /// Signup stub: the address is discarded. Returns what was typed.
    pub fn subscribe(&mut self) -> String {
        let address = std::mem::take(&mut self.email.value);
        tracing::debug!(has_address = !address.is_empty(), "newsletter signup discarded");
        address
    }
}

impl Default for NewsletterForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for NewsletterForm {
    fn field_count(&self) -> usize {
        2
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(1);
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        match self.active_field_index {
            0 => Some(&mut self.email),
            _ => None,
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.email),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::notifications::Severity;
    use pretty_assertions::assert_eq;

    fn filled_form(name: &str) -> ContactForm {
        let mut form = ContactForm::new();
        form.set_value(ContactField::Name, name);
        form.set_value(ContactField::Email, "jo@x.com");
        form.set_value(ContactField::Phone, "1234567890");
        form.set_value(ContactField::Company, "Ac");
        form.set_value(ContactField::Budget, "");
        form
    }

    mod navigation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_new_has_correct_defaults() {
            let form = ContactForm::new();
            assert_eq!(form.active_field_index, 0);
            assert_eq!(form.phase(), SubmissionPhase::Idle(None));
            assert!(form.errors().is_empty());
            assert_eq!(form.values(), ContactSubmission::default());
        }

        #[test]
        fn test_field_count() {
            assert_eq!(ContactForm::new().field_count(), 6);
            assert_eq!(NewsletterForm::new().field_count(), 2);
        }

        #[test]
        fn test_next_field_cycles() {
            let mut form = ContactForm::new();
            for _ in 0..6 {
                form.next_field();
            }
            assert_eq!(form.active_field_index, 0);
        }

        #[test]
        fn test_prev_field_cycles() {
            let mut form = ContactForm::new();
            form.prev_field();
            assert_eq!(form.active_field_index, ContactForm::SUBMIT_ROW);
            assert!(form.is_submit_row_active());
            assert!(form.is_last_field_active());
        }

        #[test]
        fn test_set_active_field_clamps() {
            let mut form = ContactForm::new();
            form.set_active_field(100);
            assert_eq!(form.active_field_index, ContactForm::SUBMIT_ROW);
        }

        #[test]
        fn test_get_field_returns_correct_fields() {
            let form = ContactForm::new();
            assert_eq!(form.get_field(0).unwrap().name, "name");
            assert_eq!(form.get_field(1).unwrap().name, "email");
            assert_eq!(form.get_field(2).unwrap().name, "phone");
            assert_eq!(form.get_field(3).unwrap().name, "company");
            assert_eq!(form.get_field(4).unwrap().name, "budget");
            assert!(form.get_field(5).is_none()); // submit button
        }

        #[test]
        fn test_typing_on_submit_row_is_ignored() {
            let mut form = ContactForm::new();
            form.active_field_index = ContactForm::SUBMIT_ROW;
            form.input_char('x');
            form.backspace();
            assert_eq!(form.values(), ContactSubmission::default());
        }

        #[test]
        fn test_typing_goes_to_active_field() {
            let mut form = ContactForm::new();
            form.active_field_index = 2;
            for c in "555".chars() {
                form.input_char(c);
            }
            form.backspace();
            assert_eq!(form.phone.as_text(), "55");
            assert_eq!(form.active_contact_field(), Some(ContactField::Phone));
        }
    }

    mod validation_pass {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_short_name_never_reaches_submitting() {
            let mut form = filled_form("J");
            let Err(SubmitRejected::Invalid(errors)) = form.begin_submit() else {
                panic!("expected validation failure");
            };
            assert_eq!(errors.len(), 1);
            assert_eq!(form.error_for(ContactField::Name), Some(FieldError::NameTooShort));
            assert_eq!(form.phase(), SubmissionPhase::Idle(None));
            assert!(!form.is_submitting());
            // values untouched
            assert_eq!(form.name.as_text(), "J");
            assert_eq!(form.email.as_text(), "jo@x.com");
        }

        #[test]
        fn test_focus_moves_to_first_invalid_field() {
            let mut form = filled_form("Jo");
            form.set_value(ContactField::Phone, "12");
            form.set_value(ContactField::Company, "A");
            form.active_field_index = ContactForm::SUBMIT_ROW;
            assert!(form.begin_submit().is_err());
            assert_eq!(form.active_contact_field(), Some(ContactField::Phone));
        }

        #[test]
        fn test_typing_before_first_submit_shows_no_errors() {
            let mut form = ContactForm::new();
            form.input_char('J');
            assert!(form.errors().is_empty());
        }

        #[test]
        fn test_errors_revalidate_on_change_after_submit_attempt() {
            let mut form = filled_form("J");
            assert!(form.begin_submit().is_err());
            assert!(form.errors().get(ContactField::Name).is_some());

            // focus is on the name field; typing fixes it
            form.input_char('o');
            assert!(form.errors().is_empty(), "stale name error must be cleared");

            form.set_value(ContactField::Email, "broken");
            assert_eq!(form.error_for(ContactField::Email), Some(FieldError::InvalidEmail));
        }

        #[test]
        fn test_stale_errors_cleared_on_next_submit() {
            let mut form = ContactForm::new();
            assert!(form.begin_submit().is_err());
            assert_eq!(form.errors().len(), 4);

            form.name.set_text("Jo");
            form.email.set_text("jo@x.com");
            form.phone.set_text("1234567890");
            let Err(SubmitRejected::Invalid(errors)) = form.begin_submit() else {
                panic!("company is still empty");
            };
            assert_eq!(errors.len(), 1);
            assert_eq!(form.errors().first(), Some(ContactField::Company));
        }
    }

    mod lifecycle {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_valid_submission_succeeds_and_clears_fields() {
            let mut form = filled_form("Jo");
            assert_eq!(form.phase(), SubmissionPhase::Idle(None));

            let pending = form.begin_submit().expect("form is valid");
            assert_eq!(form.phase(), SubmissionPhase::Submitting(pending.ticket));
            assert_eq!(pending.payload.name, "Jo");
            assert_eq!(pending.payload.phone, "1234567890");

            let notification = form.complete(pending.ticket, &Ok(()));
            let notification = notification.expect("success raises a notification");
            assert_eq!(notification.title, "Message sent successfully!");
            assert_eq!(notification.severity, Severity::Normal);
            assert_eq!(
                form.phase(),
                SubmissionPhase::Idle(Some(SubmissionOutcome::Succeeded))
            );
            assert_eq!(form.values(), ContactSubmission::default());
            assert!(form.errors().is_empty());
        }

        #[test]
        fn test_success_stops_revalidating() {
            let mut form = filled_form("Jo");
            let pending = form.begin_submit().unwrap();
            form.complete(pending.ticket, &Ok(()));
            form.active_field_index = 0;
            form.input_char('J');
            assert!(form.errors().is_empty());
        }

        #[test]
        fn test_fault_preserves_values() {
            let mut form = filled_form("Jo");
            let before = form.values();
            let pending = form.begin_submit().unwrap();

            let notification = form
                .complete(pending.ticket, &Err(SubmissionError::Rejected))
                .expect("failure raises a notification");
            assert_eq!(notification.title, "Error");
            assert_eq!(notification.description, "Something went wrong. Please try again.");
            assert!(notification.is_destructive());
            assert_eq!(form.phase(), SubmissionPhase::Idle(Some(SubmissionOutcome::Failed)));
            assert_eq!(form.values(), before);
        }

        #[test]
        fn test_second_submit_while_submitting_is_rejected() {
            let mut form = filled_form("Jo");
            let pending = form.begin_submit().unwrap();

            assert_eq!(form.begin_submit(), Err(SubmitRejected::AlreadySubmitting));
            assert_eq!(form.phase(), SubmissionPhase::Submitting(pending.ticket));
        }

        #[test]
        fn test_completion_only_applies_once() {
            let mut form = filled_form("Jo");
            let pending = form.begin_submit().unwrap();
            assert!(form.complete(pending.ticket, &Ok(())).is_some());
            assert!(form.complete(pending.ticket, &Ok(())).is_none());
        }

        #[test]
        fn test_retry_after_fault_uses_new_ticket() {
            let mut form = filled_form("Jo");
            let first = form.begin_submit().unwrap();
            form.complete(first.ticket, &Err(SubmissionError::Rejected));

            let second = form.begin_submit().expect("values were preserved");
            assert_ne!(first.ticket, second.ticket);
            assert!(form.complete(first.ticket, &Ok(())).is_none());
            assert!(form.is_submitting());
        }

        #[test]
        fn test_cancel_returns_to_idle_without_outcome() {
            let mut form = filled_form("Jo");
            let pending = form.begin_submit().unwrap();

            assert_eq!(form.cancel(), Some(pending.ticket));
            assert_eq!(form.phase(), SubmissionPhase::Idle(None));
            assert!(form.complete(pending.ticket, &Ok(())).is_none());
            assert_eq!(form.name.as_text(), "Jo");
        }

        #[test]
        fn test_cancel_when_idle_is_noop() {
            let mut form = ContactForm::new();
            assert_eq!(form.cancel(), None);
        }
    }

    mod newsletter {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_subscribe_discards_address() {
            let mut form = NewsletterForm::new();
            for c in "me@x.com".chars() {
                form.get_active_field_mut().unwrap().push_char(c);
            }
            assert_eq!(form.subscribe(), "me@x.com");
            assert!(form.email.is_empty());
        }

        #[test]
        fn test_button_row_has_no_input() {
            let mut form = NewsletterForm::new();
            form.next_field();
            assert!(form.get_active_field_mut().is_none());
            assert!(form.get_field(1).is_none());
        }
    }
}
