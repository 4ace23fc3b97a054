//! Placeholder boundary that waits a fixed delay instead of calling a server

use super::{SubmissionBoundary, SubmissionError};
use crate::config::SimulatedFailure;
use crate::state::ContactSubmission;
use async_trait::async_trait;
use std::time::Duration;

/// Stand-in for a real endpoint: sleeps, then reports the configured outcome
#[derive(Debug, Clone)]
pub struct SimulatedBoundary {
    delay: Duration,
    failure: Option<SimulatedFailure>,
}

impl SimulatedBoundary {
    pub fn new(delay: Duration, failure: Option<SimulatedFailure>) -> Self {
        Self { delay, failure }
    }
}

#[async_trait]
impl SubmissionBoundary for SimulatedBoundary {
    async fn submit(&self, submission: ContactSubmission) -> Result<(), SubmissionError> {
        match serde_json::to_string(&submission) {
            Ok(payload) => tracing::debug!(%payload, "simulating contact submission"),
            Err(e) => tracing::debug!(error = %e, "could not serialize contact submission"),
        }

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        match self.failure {
            None => Ok(()),
            Some(SimulatedFailure::Rejected) => Err(SubmissionError::Rejected),
            Some(SimulatedFailure::Unavailable) => Err(SubmissionError::Unavailable(
                "simulated endpoint is offline".to_string(),
            )),
        }
    }
}
