//! # Submission State Machine
//!
//! ```text
//!            submit()               Ok(())
//!   Idle ─────────────► Submitting ─────────► Succeeded
//!     ▲                     │                    │
//!     │                     │ Err(RelayError)    │ submit()
//!     │                     ▼                    ▼
//!     │                   Failed ──submit()──► Submitting
//! ```
//!
//! There is no timeout-driven reset: `Succeeded` and `Failed` stay put until
//! the next submission.

/// User-visible outcome of the latest submission.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    None,
    Success,
    Error,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

impl SubmissionPhase {
    pub fn status(self) -> SubmissionStatus {
        match self {
            SubmissionPhase::Idle | SubmissionPhase::Submitting => SubmissionStatus::None,
            SubmissionPhase::Succeeded => SubmissionStatus::Success,
            SubmissionPhase::Failed => SubmissionStatus::Error,
        }
    }

    pub fn in_flight(self) -> bool {
        self == SubmissionPhase::Submitting
    }

    /// Starts an attempt. Returns `false` (and stays put) if one is already in flight.
    pub fn begin(&mut self) -> bool {
        if self.in_flight() {
            return false;
        }
        *self = SubmissionPhase::Submitting;
        true
    }

    /// Records the outcome of the in-flight attempt.
    pub fn resolve(&mut self, accepted: bool) {
        *self = if accepted {
            SubmissionPhase::Succeeded
        } else {
            SubmissionPhase::Failed
        };
    }

    /// Label for the submit button.
    pub fn button_label(self) -> &'static str {
        if self.in_flight() {
            "Sending..."
        } else {
            "Send Message"
        }
    }

    /// Feedback line under the form, if any.
    pub fn feedback(self) -> Option<&'static str> {
        match self.status() {
            SubmissionStatus::None => None,
            SubmissionStatus::Success => Some("Thanks! Your message has been sent."),
            SubmissionStatus::Error => Some("Something went wrong. Please try again."),
        }
    }
}
