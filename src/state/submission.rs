//! Submission lifecycle state and relay payloads

use crate::error::SubmitError;
use serde::Serialize;

/// Lifecycle state of a single submit attempt.
///
/// Idle moves to InProgress only when every required field validates.
/// InProgress moves to Completed when the external call resolves, and a
/// Completed status settles back to Idle when the notification dismisses
/// or the user reopens the form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    InProgress,
    Completed(SubmitOutcome),
}

impl SubmissionStatus {
    /// True while the external call is outstanding
    pub fn is_in_progress(&self) -> bool {
        matches!(self, SubmissionStatus::InProgress)
    }

    /// Collapse a Completed status back to Idle; Idle and InProgress are
    /// left untouched.
    pub fn settle(&mut self) {
        if matches!(self, SubmissionStatus::Completed(_)) {
            *self = SubmissionStatus::Idle;
        }
    }
}

/// How a resolved submission ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Success,
    Failure(SubmitError),
}

/// Result of attempting to start a submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitGate<P> {
    /// Validation failed; field errors were recorded and no call goes out
    Rejected,
    /// A submission is already in flight (or there is nothing to submit)
    Suppressed,
    /// All required fields passed; carry the payload to the relay
    Proceed(P),
}

/// Wire payload for a contact message, serialized with the mail relay's
/// camelCase key shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

/// Payload for a job application submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationSubmission {
    pub opening_id: String,
    pub position: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub resume_file_name: String,
}
