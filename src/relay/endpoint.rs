use std::fmt;

use async_trait::async_trait;

use super::types::ContactSubmission;

/// Why a submission did not go through.
///
/// Both variants end up as the same generic error on screen; the split is kept
/// for logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelayError {
    /// No response obtained (connection refused, DNS, timeout, TLS).
    Transport(String),
    /// A response arrived but its status is outside the success range.
    Rejected { status: u16, message: String },
}

impl fmt::Display for RelayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RelayError::Transport(msg) => write!(f, "transport failure: {msg}"),
            RelayError::Rejected { status, message } => {
                write!(f, "rejected by endpoint (HTTP {status}): {message}")
            }
        }
    }
}

impl std::error::Error for RelayError {}

/// An external form-processing service.
///
/// One call to `deliver` is one outbound request. Implementations never retry.
#[async_trait]
pub trait FormEndpoint: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &str;

    /// Sends the submission and classifies the outcome.
    async fn deliver(&self, submission: &ContactSubmission) -> Result<(), RelayError>;
}
