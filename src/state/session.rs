//! Page-session state owning the forms, notification, and submit lifecycle
//!
//! One `PageSession` per rendered page; dropping it on navigation resets
//! everything. Each form owns its own values, errors and status, so form
//! instances never share state.

use std::time::Duration;

use tokio::sync::mpsc::UnboundedReceiver;
use uuid::Uuid;

use crate::config::FormsConfig;
use crate::content::JobOpening;
use crate::error::SubmitError;
use crate::notify::{DismissEvent, Notification, NotificationKind, Notifier};
use crate::relay::RelayClient;
use crate::state::{
    ApplicationField, ApplicationForm, ApplicationSubmission, ContactField, ContactForm,
    ContactSubmission, ResumeAttachment, SubmissionStatus, SubmitGate, SubmitOutcome,
};

/// Generic validation-failure toast
const FIX_ERRORS_MESSAGE: &str = "Please fix the errors before submitting.";

const CONTACT_SENDING_MESSAGE: &str = "Sending your message...";
const CONTACT_SUCCESS_MESSAGE: &str = "Message sent successfully!";
const CONTACT_FAILED_MESSAGE: &str = "Failed to send message. Please try again later.";

const APPLICATION_SENDING_MESSAGE: &str = "Submitting your application...";
const APPLICATION_SUCCESS_MESSAGE: &str = "Application submitted successfully!";
const APPLICATION_FAILED_MESSAGE: &str = "Failed to submit application. Please try again later.";

/// Catch-all for transport-level and unexpected failures
const GENERIC_FAILURE_MESSAGE: &str = "An error occurred. Please try again later.";

/// Session-scoped owner of the contact form, the optional application
/// modal, and the shared notification state.
#[derive(Debug)]
pub struct PageSession {
    contact: ContactForm,
    application: Option<ApplicationForm>,
    notifier: Notifier,
}

impl PageSession {
    /// Create a session and the receiving end of its dismiss-timer events.
    /// The host event loop forwards each received event to `handle_dismiss`.
    pub fn new(dismiss_after: Duration) -> (Self, UnboundedReceiver<DismissEvent>) {
        let (notifier, events) = Notifier::new(dismiss_after);
        (
            Self {
                contact: ContactForm::new(),
                application: None,
                notifier,
            },
            events,
        )
    }

    /// Create a session using the configured dismiss duration
    pub fn from_config(config: &FormsConfig) -> (Self, UnboundedReceiver<DismissEvent>) {
        Self::new(config.dismiss_after())
    }

    pub fn contact(&self) -> &ContactForm {
        &self.contact
    }

    /// The open application modal, if any
    pub fn application(&self) -> Option<&ApplicationForm> {
        self.application.as_ref()
    }

    /// The currently visible notification, if any
    pub fn notification(&self) -> Option<&Notification> {
        self.notifier.current()
    }

    /// Store contact input and recompute that field's error
    pub fn edit_contact(&mut self, field: ContactField, input: &str) {
        self.contact.edit(field, input);
    }

    /// Store application input and recompute that field's error.
    /// Ignored when no application modal is open.
    pub fn edit_application(&mut self, field: ApplicationField, input: &str) {
        if let Some(form) = self.application.as_mut() {
            form.edit(field, input);
        }
    }

    /// Attach a resume to the open application modal
    pub fn attach_resume(&mut self, attachment: ResumeAttachment) {
        if let Some(form) = self.application.as_mut() {
            form.attach_resume(attachment);
        }
    }

    /// Open the application modal with a fresh form for an opening.
    /// Any previously open modal is discarded.
    pub fn open_application(&mut self, opening: &JobOpening) {
        self.application = Some(ApplicationForm::for_opening(opening));
    }

    /// Close the application modal, discarding its values and errors
    pub fn close_application(&mut self) {
        self.application = None;
    }

    /// Settle a completed contact submission back to Idle, as when the
    /// user returns to the form before the notification dismisses
    pub fn reopen_contact(&mut self) {
        self.contact.status.settle();
    }

    /// Start a contact submission: validate every field and either reject
    /// with errors recorded, suppress a re-entrant attempt, or hand back
    /// the payload for the relay. Validation failure leaves the status
    /// untouched; it is a local, recoverable outcome.
    pub fn begin_contact(&mut self) -> SubmitGate<ContactSubmission> {
        if self.contact.status.is_in_progress() {
            return SubmitGate::Suppressed;
        }
        self.contact.status.settle();

        if !self.contact.validate_all() {
            self.notifier.show(NotificationKind::Error, FIX_ERRORS_MESSAGE);
            return SubmitGate::Rejected;
        }

        self.contact.status = SubmissionStatus::InProgress;
        self.notifier
            .show(NotificationKind::Success, CONTACT_SENDING_MESSAGE);
        SubmitGate::Proceed(self.contact.payload())
    }

    /// Apply the relay outcome of a contact submission. Success clears the
    /// form; failure keeps the user's input for a retry.
    pub fn finish_contact(&mut self, result: Result<(), SubmitError>) {
        match result {
            Ok(()) => {
                self.contact.reset();
                self.contact.status = SubmissionStatus::Completed(SubmitOutcome::Success);
                self.notifier
                    .show(NotificationKind::Success, CONTACT_SUCCESS_MESSAGE);
            }
            Err(error) => {
                let message = contact_failure_message(&error);
                self.notifier.show(NotificationKind::Error, message);
                self.contact.status = SubmissionStatus::Completed(SubmitOutcome::Failure(error));
            }
        }
    }

    /// Run a full contact submission against the relay. Re-entrant calls
    /// while one is outstanding are no-ops; at most one call goes out.
    pub async fn submit_contact(&mut self, relay: &dyn RelayClient) {
        let payload = match self.begin_contact() {
            SubmitGate::Proceed(payload) => payload,
            SubmitGate::Rejected | SubmitGate::Suppressed => return,
        };

        let submission_id = Uuid::new_v4();
        tracing::info!(%submission_id, "dispatching contact message to relay");
        let result = relay.send_contact(&payload).await;
        if let Err(ref error) = result {
            tracing::warn!(%submission_id, error = %error, "contact submission failed");
        }
        self.finish_contact(result);
    }

    /// Start an application submission. With no modal open there is
    /// nothing to submit and the attempt is suppressed.
    pub fn begin_application(&mut self) -> SubmitGate<ApplicationSubmission> {
        let Some(form) = self.application.as_mut() else {
            return SubmitGate::Suppressed;
        };
        if form.status.is_in_progress() {
            return SubmitGate::Suppressed;
        }
        form.status.settle();

        if !form.validate_all() {
            self.notifier.show(NotificationKind::Error, FIX_ERRORS_MESSAGE);
            return SubmitGate::Rejected;
        }

        form.status = SubmissionStatus::InProgress;
        self.notifier
            .show(NotificationKind::Success, APPLICATION_SENDING_MESSAGE);
        SubmitGate::Proceed(form.payload())
    }

    /// Apply the relay outcome of an application submission. Success
    /// closes the modal; failure keeps it open with the input intact.
    pub fn finish_application(&mut self, result: Result<(), SubmitError>) {
        if self.application.is_none() {
            return;
        }
        match result {
            Ok(()) => {
                self.application = None;
                self.notifier
                    .show(NotificationKind::Success, APPLICATION_SUCCESS_MESSAGE);
            }
            Err(error) => {
                let message = application_failure_message(&error);
                self.notifier.show(NotificationKind::Error, message);
                if let Some(form) = self.application.as_mut() {
                    form.status = SubmissionStatus::Completed(SubmitOutcome::Failure(error));
                }
            }
        }
    }

    /// Run a full application submission against the relay
    pub async fn submit_application(&mut self, relay: &dyn RelayClient) {
        let payload = match self.begin_application() {
            SubmitGate::Proceed(payload) => payload,
            SubmitGate::Rejected | SubmitGate::Suppressed => return,
        };

        let submission_id = Uuid::new_v4();
        tracing::info!(%submission_id, position = %payload.position, "dispatching application");
        let result = relay.send_application(&payload).await;
        if let Err(ref error) = result {
            tracing::warn!(%submission_id, error = %error, "application submission failed");
        }
        self.finish_application(result);
    }

    /// Apply a dismiss-timer event: clear the notification it was armed
    /// for and settle any completed submission back to Idle. Stale events
    /// from superseded timers are ignored.
    pub fn handle_dismiss(&mut self, event: DismissEvent) {
        if self.notifier.dismiss(event) {
            self.contact.status.settle();
            if let Some(form) = self.application.as_mut() {
                form.status.settle();
            }
        }
    }
}

fn contact_failure_message(error: &SubmitError) -> &'static str {
    match error {
        SubmitError::Status(_) => CONTACT_FAILED_MESSAGE,
        SubmitError::Network(_) | SubmitError::Unexpected(_) => GENERIC_FAILURE_MESSAGE,
    }
}

fn application_failure_message(error: &SubmitError) -> &'static str {
    match error {
        SubmitError::Status(_) => APPLICATION_FAILED_MESSAGE,
        SubmitError::Network(_) | SubmitError::Unexpected(_) => GENERIC_FAILURE_MESSAGE,
    }
}
