//! Error types for the submission flow

use thiserror::Error;

/// Failure of the external submission call.
///
/// Every variant is recoverable: the form keeps the user's input so the
/// submission can be retried as-is or after edits.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// Transport-level failure reaching the relay
    #[error("network error: {0}")]
    Network(String),
    /// Relay answered with a non-success HTTP status
    #[error("relay returned status {0}")]
    Status(u16),
    /// Anything else that interrupted the call
    #[error("unexpected error: {0}")]
    Unexpected(String),
}
