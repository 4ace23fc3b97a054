//! Submission lifecycle of the contact form

use crate::state::forms::{ContactSubmission, FieldErrors};

/// Identifies one submit attempt so late completions can be recognised
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubmissionTicket(pub u64);

/// How the last submission ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Succeeded,
    Failed,
}

/// Where the contact form is in its submit cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionPhase {
    /// Interactive; carries the outcome of the last completed submission, if any
    Idle(Option<SubmissionOutcome>),
    /// Running the validator over every field
    Validating,
    /// Waiting for the submission boundary
    Submitting(SubmissionTicket),
}

impl Default for SubmissionPhase {
    fn default() -> Self {
        Self::Idle(None)
    }
}

impl SubmissionPhase {
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting(_))
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle(None) => "idle",
            Self::Idle(Some(SubmissionOutcome::Succeeded)) => "idle (success)",
            Self::Idle(Some(SubmissionOutcome::Failed)) => "idle (error)",
            Self::Validating => "validating",
            Self::Submitting(_) => "submitting",
        }
    }
}

/// A validated submission that is ready to hand to the boundary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSubmission {
    pub ticket: SubmissionTicket,
    pub payload: ContactSubmission,
}

/// Why a submit request did not start a submission
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitRejected {
    #[error("a submission is already in flight")]
    AlreadySubmitting,
    #[error("{} field(s) failed validation", .0.len())]
    Invalid(FieldErrors),
}
