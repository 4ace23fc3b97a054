//! Trait abstraction for the submission boundary to enable mocking in tests

use super::SubmissionError;
use crate::state::ContactSubmission;
use async_trait::async_trait;

/// Accepts validated contact requests and reports success or failure
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionBoundary: Send + Sync {
    /// Send a contact request
    async fn submit(&self, submission: ContactSubmission) -> Result<(), SubmissionError>;
}
