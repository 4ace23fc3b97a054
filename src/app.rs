//! Application state and core logic

use crate::config::LandingConfig;
use crate::content::SUPPORT_EMAIL;
use crate::state::{
    AppState, NotificationCenter, PageFocus, PendingSubmission, SubmissionTicket, SubmitRejected,
};
use crate::submission::{SubmissionBoundary, SubmissionError};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Result of one submission attempt, reported by the spawned task
type SubmissionReport = (SubmissionTicket, Result<(), SubmissionError>);

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Where validated contact requests are sent
    boundary: Arc<dyn SubmissionBoundary>,
    report_tx: mpsc::UnboundedSender<SubmissionReport>,
    report_rx: mpsc::UnboundedReceiver<SubmissionReport>,
    /// Task awaiting the boundary, if a submission is in flight
    in_flight: Option<JoinHandle<()>>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(config: &LandingConfig, boundary: Arc<dyn SubmissionBoundary>) -> Self {
        let (report_tx, report_rx) = mpsc::unbounded_channel();
        let notifications = NotificationCenter::new(config.toast_limit(), config.toast_duration());

        Self {
            state: AppState::new(notifications),
            boundary,
            report_tx,
            report_rx,
            in_flight: None,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn request_quit(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            handle.abort();
        }
        self.quit = true;
    }

    /// Per-frame housekeeping: apply finished submissions and expire toasts
    pub fn tick(&mut self, now: Instant) {
        self.poll_submissions();
        self.state.notifications.expire(now);
    }

    /// Drain results reported by submission tasks
    pub fn poll_submissions(&mut self) {
        while let Ok((ticket, result)) = self.report_rx.try_recv() {
            self.finish_submission(ticket, result);
        }
    }

    fn finish_submission(&mut self, ticket: SubmissionTicket, result: Result<(), SubmissionError>) {
        if let Some(notification) = self.state.contact.complete(ticket, &result) {
            self.in_flight = None;
            self.state.notifications.notify(notification);
        }
    }

    /// Validate the contact form and, if valid, start sending it.
    /// Ignored while a submission is already in flight.
    pub fn submit_contact_form(&mut self) {
        match self.state.contact.begin_submit() {
            Ok(pending) => self.spawn_submission(pending),
            Err(SubmitRejected::AlreadySubmitting) => {}
            Err(SubmitRejected::Invalid(_)) => {
                // begin_submit already moved focus to the first invalid field
                self.state.focus = PageFocus::ContactForm;
            }
        }
    }

    fn spawn_submission(&mut self, pending: PendingSubmission) {
        let PendingSubmission { ticket, payload } = pending;
        tracing::info!(ticket = ticket.0, "sending contact request");

        let boundary = Arc::clone(&self.boundary);
        let report_tx = self.report_tx.clone();
        self.in_flight = Some(tokio::spawn(async move {
            let result = boundary.submit(payload).await;
            // Receiver lives as long as the app; a send error means we are shutting down
            let _ = report_tx.send((ticket, result));
        }));
    }

    /// Abort the in-flight submission. Returns false when nothing was in flight.
    pub fn cancel_submission(&mut self) -> bool {
        if self.state.contact.cancel().is_none() {
            return false;
        }
        if let Some(handle) = self.in_flight.take() {
            handle.abort();
        }
        self.state.status_message = Some("Submission cancelled".to_string());
        true
    }

    /// Newsletter signup stub
    pub fn subscribe_newsletter(&mut self) {
        self.state.newsletter.subscribe();
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        self.state.status_message = None;

        match key.code {
            KeyCode::Esc => {
                if !self.cancel_submission() {
                    self.state.notifications.dismiss_latest();
                }
            }
            KeyCode::Tab | KeyCode::Down => self.state.next_focus(),
            KeyCode::BackTab | KeyCode::Up => self.state.prev_focus(),
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.submit_contact_form();
            }
            KeyCode::Char('y') if key.modifiers.contains(crate::platform::COPY_MODIFIER) => {
                self.copy_support_email();
            }
            KeyCode::Enter => match self.state.focus {
                PageFocus::ContactForm => self.submit_contact_form(),
                PageFocus::Newsletter => self.subscribe_newsletter(),
            },
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.input_char(c);
            }
            KeyCode::Backspace => self.state.backspace(),
            _ => {}
        }
    }

    fn copy_support_email(&mut self) {
        match self.copy_to_clipboard(SUPPORT_EMAIL) {
            Ok(()) => {
                self.state.status_message = Some(format!("Copied {SUPPORT_EMAIL}"));
            }
            Err(e) => {
                tracing::warn!(error = %e, "clipboard unavailable");
                self.state.status_message = Some("Clipboard unavailable".to_string());
            }
        }
    }

    fn copy_to_clipboard(&self, text: &str) -> Result<()> {
        use arboard::Clipboard;
        let mut clipboard = Clipboard::new()?;
        clipboard.set_text(text)?;
        Ok(())
    }

    /// Wait for the in-flight submission to report and apply it
    #[cfg(test)]
    async fn settle_submission(&mut self) {
        if let Some((ticket, result)) = self.report_rx.recv().await {
            self.finish_submission(ticket, result);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimulatedFailure;
    use crate::state::{
        ContactField, ContactSubmission, Form, Severity, SubmissionOutcome, SubmissionPhase,
    };
    use crate::submission::{MockSubmissionBoundary, SimulatedBoundary};
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
    }

    /// Fill the contact form through the keyboard, leaving focus on the last input
    fn fill_form(app: &mut App, values: [&str; 5]) {
        app.state.focus_contact_field(ContactField::Name);
        for (i, value) in values.iter().enumerate() {
            if i > 0 {
                app.handle_key(key(KeyCode::Tab));
            }
            type_text(app, value);
        }
    }

    fn expected_payload() -> ContactSubmission {
        ContactSubmission {
            name: "Jo".to_string(),
            email: "jo@x.com".to_string(),
            phone: "1234567890".to_string(),
            company: "Ac".to_string(),
            budget: String::new(),
        }
    }

    const VALID: [&str; 5] = ["Jo", "jo@x.com", "1234567890", "Ac", ""];

    fn app_with(boundary: impl SubmissionBoundary + 'static) -> App {
        App::new(&LandingConfig::default(), Arc::new(boundary))
    }

    mod keyboard {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_typing_fills_fields_in_order() {
            let mut app = app_with(MockSubmissionBoundary::new());
            fill_form(&mut app, VALID);
            assert_eq!(app.state.contact.values(), expected_payload());
        }

        #[test]
        fn test_backspace_edits_focused_field() {
            let mut app = app_with(MockSubmissionBoundary::new());
            type_text(&mut app, "Joe");
            app.handle_key(key(KeyCode::Backspace));
            assert_eq!(app.state.contact.name.as_text(), "Jo");
        }

        #[test]
        fn test_control_chars_are_not_typed() {
            let mut app = app_with(MockSubmissionBoundary::new());
            app.handle_key(ctrl('x'));
            assert!(app.state.contact.name.is_empty());
        }

        #[test]
        fn test_enter_on_newsletter_discards_address() {
            let mut app = app_with(MockSubmissionBoundary::new());
            app.handle_key(key(KeyCode::BackTab)); // subscribe button
            app.handle_key(key(KeyCode::BackTab)); // newsletter input
            type_text(&mut app, "me@x.com");
            assert_eq!(app.state.newsletter.email.as_text(), "me@x.com");

            app.handle_key(key(KeyCode::Enter));
            assert!(app.state.newsletter.email.is_empty());
            assert!(app.state.notifications.is_empty());
        }

        #[test]
        fn test_esc_dismisses_toast_when_idle() {
            let mut app = app_with(MockSubmissionBoundary::new());
            app.state
                .notifications
                .notify(crate::state::Notification::submission_succeeded());
            app.handle_key(key(KeyCode::Esc));
            assert!(app.state.notifications.is_empty());
        }

        #[test]
        fn test_request_quit() {
            let mut app = app_with(MockSubmissionBoundary::new());
            assert!(!app.should_quit());
            app.request_quit();
            assert!(app.should_quit());
        }
    }

    mod submission {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_valid_submission_succeeds_and_notifies_once() {
            let mut boundary = MockSubmissionBoundary::new();
            boundary
                .expect_submit()
                .withf(|s| *s == expected_payload())
                .times(1)
                .returning(|_| Ok(()));
            let mut app = app_with(boundary);
            fill_form(&mut app, VALID);

            app.handle_key(key(KeyCode::Enter));
            assert!(app.state.contact.is_submitting());

            app.settle_submission().await;

            assert_eq!(
                app.state.contact.phase(),
                SubmissionPhase::Idle(Some(SubmissionOutcome::Succeeded))
            );
            assert_eq!(app.state.contact.values(), ContactSubmission::default());
            assert_eq!(app.state.notifications.len(), 1);
            let toast = app.state.notifications.visible().next().unwrap();
            assert_eq!(toast.title, "Message sent successfully!");
            assert_eq!(toast.severity, Severity::Normal);
        }

        #[tokio::test]
        async fn test_invalid_submission_never_reaches_boundary() {
            let mut boundary = MockSubmissionBoundary::new();
            boundary.expect_submit().times(0);
            let mut app = app_with(boundary);
            fill_form(&mut app, ["J", "jo@x.com", "1234567890", "Ac", ""]);

            app.handle_key(ctrl('s'));
            tokio::task::yield_now().await;
            app.poll_submissions();

            assert_eq!(app.state.contact.phase(), SubmissionPhase::Idle(None));
            assert!(app.state.notifications.is_empty());
            assert_eq!(app.state.contact.name.as_text(), "J");
            assert_eq!(app.state.contact.active_contact_field(), Some(ContactField::Name));
        }

        #[tokio::test]
        async fn test_resubmit_while_submitting_has_no_effect() {
            let mut boundary = MockSubmissionBoundary::new();
            boundary.expect_submit().times(1).returning(|_| Ok(()));
            let mut app = app_with(boundary);
            fill_form(&mut app, VALID);

            app.submit_contact_form();
            let phase = app.state.contact.phase();
            app.submit_contact_form();
            app.handle_key(ctrl('s'));
            assert_eq!(app.state.contact.phase(), phase);

            app.settle_submission().await;
            tokio::task::yield_now().await;
            app.poll_submissions();
            assert_eq!(app.state.notifications.len(), 1);
        }

        #[tokio::test]
        async fn test_fault_keeps_values_and_raises_one_error() {
            let mut boundary = MockSubmissionBoundary::new();
            boundary
                .expect_submit()
                .times(1)
                .returning(|_| Err(SubmissionError::Rejected));
            let config = LandingConfig {
                toast_limit: Some(5),
                ..Default::default()
            };
            let mut app = App::new(&config, Arc::new(boundary));
            fill_form(&mut app, VALID);

            app.submit_contact_form();
            app.settle_submission().await;

            assert_eq!(
                app.state.contact.phase(),
                SubmissionPhase::Idle(Some(SubmissionOutcome::Failed))
            );
            assert_eq!(app.state.contact.values(), expected_payload());
            assert_eq!(app.state.notifications.len(), 1);
            let toast = app.state.notifications.visible().next().unwrap();
            assert_eq!(toast.title, "Error");
            assert!(toast.is_destructive());
        }

        #[tokio::test]
        async fn test_simulated_failure_from_config() {
            let boundary =
                SimulatedBoundary::new(Duration::ZERO, Some(SimulatedFailure::Unavailable));
            let mut app = app_with(boundary);
            fill_form(&mut app, VALID);

            app.submit_contact_form();
            app.settle_submission().await;

            assert_eq!(app.state.contact.values(), expected_payload());
            assert!(app
                .state
                .notifications
                .visible()
                .all(|toast| toast.is_destructive()));
        }

        #[tokio::test]
        async fn test_cancel_goes_idle_without_notification() {
            let boundary = SimulatedBoundary::new(Duration::from_secs(60), None);
            let mut app = app_with(boundary);
            fill_form(&mut app, VALID);

            app.submit_contact_form();
            assert!(app.state.contact.is_submitting());

            app.handle_key(key(KeyCode::Esc));
            for _ in 0..3 {
                tokio::task::yield_now().await;
            }
            app.tick(Instant::now());

            assert_eq!(app.state.contact.phase(), SubmissionPhase::Idle(None));
            assert!(app.state.notifications.is_empty());
            assert_eq!(app.state.contact.values(), expected_payload());
            assert_eq!(
                app.state.status_message.as_deref(),
                Some("Submission cancelled")
            );
        }

        #[tokio::test]
        async fn test_late_result_of_cancelled_attempt_is_ignored() {
            let mut boundary = MockSubmissionBoundary::new();
            boundary.expect_submit().times(0..=2).returning(|_| Ok(()));
            let mut app = app_with(boundary);
            fill_form(&mut app, VALID);

            app.submit_contact_form();
            let SubmissionPhase::Submitting(ticket) = app.state.contact.phase() else {
                panic!("expected submitting");
            };
            assert!(app.cancel_submission());

            // a report for the cancelled ticket arrives after a new attempt started
            app.submit_contact_form();
            app.finish_submission(ticket, Ok(()));
            assert!(app.state.contact.is_submitting());
            assert!(app.state.notifications.is_empty());
        }
    }

    #[test]
    fn test_tick_expires_toasts() {
        let config = LandingConfig {
            toast_duration_ms: Some(10),
            ..Default::default()
        };
        let mut app = App::new(&config, Arc::new(MockSubmissionBoundary::new()));
        app.state
            .notifications
            .notify(crate::state::Notification::submission_failed());
        app.tick(Instant::now() + Duration::from_millis(20));
        assert!(app.state.notifications.is_empty());
    }

    #[test]
    fn test_focus_is_unchanged_by_tab_count_wrap() {
        let mut app = app_with(MockSubmissionBoundary::new());
        for _ in 0..8 {
            app.handle_key(key(KeyCode::Tab));
        }
        assert_eq!(app.state.focus, PageFocus::ContactForm);
        assert_eq!(app.state.contact.active_field(), 0);
    }
}
