//! Trait abstraction for the submission relay to enable mocking in tests

use crate::error::SubmitError;
use crate::state::{ApplicationSubmission, ContactSubmission};
use async_trait::async_trait;

/// Trait for submission relay operations, enabling mocking in tests.
///
/// The session flow only depends on this trait, so the delivery mechanism
/// can be swapped without touching validation or lifecycle logic.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RelayClient: Send + Sync {
    /// Deliver a contact message to the mail relay
    async fn send_contact(&self, message: &ContactSubmission) -> Result<(), SubmitError>;

    /// Deliver a job application
    async fn send_application(&self, application: &ApplicationSubmission)
        -> Result<(), SubmitError>;
}
