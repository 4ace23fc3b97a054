//! Toast notifications raised when a submission completes

use chrono::{DateTime, Utc};
use std::collections::VecDeque;
use std::time::{Duration, Instant};
use uuid::Uuid;

/// Visual severity of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Normal,
    Destructive,
}

/// A transient message reporting the outcome of a submission
#[derive(Debug, Clone)]
pub struct Notification {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub severity: Severity,
    /// Wall-clock time shown on the toast
    pub raised_at: DateTime<Utc>,
    /// Monotonic time used for expiry and animation
    pub shown_at: Instant,
}

impl Notification {
    pub fn new(title: &str, description: &str, severity: Severity) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.to_string(),
            description: description.to_string(),
            severity,
            raised_at: Utc::now(),
            shown_at: Instant::now(),
        }
    }

    pub fn submission_succeeded() -> Self {
        Self::new(
            "Message sent successfully!",
            "We'll get back to you soon.",
            Severity::Normal,
        )
    }

    pub fn submission_failed() -> Self {
        Self::new(
            "Error",
            "Something went wrong. Please try again.",
            Severity::Destructive,
        )
    }

    pub fn is_destructive(&self) -> bool {
        self.severity == Severity::Destructive
    }
}

/// Visible toasts, oldest first
#[derive(Debug)]
pub struct NotificationCenter {
    toasts: VecDeque<Notification>,
    limit: usize,
    duration: Duration,
}

impl NotificationCenter {
    /// Slide-in animation length
    const SLIDE_DURATION: Duration = Duration::from_millis(200);

    pub fn new(limit: usize, duration: Duration) -> Self {
        Self {
            toasts: VecDeque::new(),
            limit: limit.max(1),
            duration,
        }
    }

    /// Show a notification, dropping the oldest ones beyond the limit
    pub fn notify(&mut self, notification: Notification) {
        tracing::info!(
            id = %notification.id,
            title = %notification.title,
            severity = ?notification.severity,
            "notification raised"
        );
        self.toasts.push_back(notification);
        while self.toasts.len() > self.limit {
            if let Some(dropped) = self.toasts.pop_front() {
                tracing::debug!(id = %dropped.id, "notification replaced");
            }
        }
    }

    /// Dismiss the newest toast. Returns false when nothing was visible.
    pub fn dismiss_latest(&mut self) -> bool {
        self.toasts.pop_back().is_some()
    }

    /// Drop toasts that have been visible for longer than the configured duration
    pub fn expire(&mut self, now: Instant) {
        let duration = self.duration;
        self.toasts
            .retain(|t| now.saturating_duration_since(t.shown_at) < duration);
    }

    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.toasts.iter()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// Slide-in progress of a toast from 0.0 (off screen) to 1.0 (in place)
    pub fn slide_progress(notification: &Notification, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(notification.shown_at);
        if elapsed >= Self::SLIDE_DURATION {
            return 1.0;
        }
        let progress = elapsed.as_secs_f32() / Self::SLIDE_DURATION.as_secs_f32();
        simple_easing::cubic_out(progress)
    }
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new(1, Duration::from_millis(5000))
    }
}
