//! Submission fault taxonomy

/// Reasons the submission boundary reports failure
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmissionError {
    /// The receiving side refused the request
    #[error("submission was rejected")]
    Rejected,
    /// The receiving side could not be reached
    #[error("submission endpoint unavailable: {0}")]
    Unavailable(String),
}
