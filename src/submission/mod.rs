//! Submission boundary: where validated contact requests are sent

mod error;
mod simulated;
mod traits;

pub use error::SubmissionError;
pub use simulated::SimulatedBoundary;
pub use traits::SubmissionBoundary;

#[cfg(test)]
pub use traits::MockSubmissionBoundary;
