//! Transient notifications with single-shot auto-dismiss
//!
//! Every notification arms a fresh dismiss timer; arming aborts the previous
//! timer's task, and a generation counter guards against a stale timer event
//! that was already in flight, so an old timer can never clear a newer
//! message.

use std::time::Duration;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tokio::time::Instant;

/// How long a notification stays visible before auto-dismissing
pub const DEFAULT_DISMISS_AFTER: Duration = Duration::from_secs(4);

/// Visual flavor of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// A transient user-facing message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
}

/// Timer event asking the session to clear the notification it was armed for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DismissEvent {
    pub generation: u64,
}

/// Owner of the current notification and its dismiss timer.
///
/// Must live inside a tokio runtime: `show` spawns the timer task.
#[derive(Debug)]
pub struct Notifier {
    tx: UnboundedSender<DismissEvent>,
    current: Option<Notification>,
    generation: u64,
    dismiss_after: Duration,
    timer: Option<JoinHandle<()>>,
}

impl Notifier {
    /// Create a notifier and the receiving end of its dismiss events.
    /// The host event loop forwards received events to the session.
    pub fn new(dismiss_after: Duration) -> (Self, UnboundedReceiver<DismissEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Self {
                tx,
                current: None,
                generation: 0,
                dismiss_after,
                timer: None,
            },
            rx,
        )
    }

    /// Show a notification, superseding any visible one, and arm a fresh
    /// dismiss timer. Returns the generation the timer was armed for.
    pub fn show(&mut self, kind: NotificationKind, message: impl Into<String>) -> u64 {
        self.generation += 1;
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
        self.current = Some(Notification {
            message: message.into(),
            kind,
        });

        let generation = self.generation;
        let tx = self.tx.clone();
        // Deadline is fixed here, not at first poll of the task
        let deadline = Instant::now() + self.dismiss_after;
        self.timer = Some(tokio::spawn(async move {
            tokio::time::sleep_until(deadline).await;
            let _ = tx.send(DismissEvent { generation });
        }));
        generation
    }

    /// Apply a dismiss event. Clears the notification and returns true only
    /// when the event belongs to the currently visible one.
    pub fn dismiss(&mut self, event: DismissEvent) -> bool {
        if event.generation == self.generation && self.current.is_some() {
            self.current = None;
            true
        } else {
            false
        }
    }

    /// The currently visible notification, if any
    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl Drop for Notifier {
    fn drop(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_show_makes_notification_visible() {
        let (mut notifier, _events) = Notifier::new(DEFAULT_DISMISS_AFTER);
        notifier.show(NotificationKind::Success, "Message sent successfully!");

        let current = notifier.current().unwrap();
        assert_eq!(current.message, "Message sent successfully!");
        assert_eq!(current.kind, NotificationKind::Success);
    }

    #[tokio::test]
    async fn test_dismiss_with_current_generation_clears() {
        let (mut notifier, _events) = Notifier::new(DEFAULT_DISMISS_AFTER);
        let generation = notifier.show(NotificationKind::Error, "Something went wrong");

        assert!(notifier.dismiss(DismissEvent { generation }));
        assert!(notifier.current().is_none());
    }

    #[tokio::test]
    async fn test_stale_dismiss_leaves_newer_notification() {
        let (mut notifier, _events) = Notifier::new(DEFAULT_DISMISS_AFTER);
        let first = notifier.show(NotificationKind::Success, "Sending your message...");
        notifier.show(NotificationKind::Success, "Message sent successfully!");

        assert!(!notifier.dismiss(DismissEvent { generation: first }));
        assert_eq!(
            notifier.current().unwrap().message,
            "Message sent successfully!"
        );
    }

    #[tokio::test]
    async fn test_dismiss_after_clear_is_ignored() {
        let (mut notifier, _events) = Notifier::new(DEFAULT_DISMISS_AFTER);
        let generation = notifier.show(NotificationKind::Success, "done");
        assert!(notifier.dismiss(DismissEvent { generation }));
        assert!(!notifier.dismiss(DismissEvent { generation }));
    }

    #[tokio::test(start_paused = true)]
    async fn test_timer_fires_after_dismiss_duration() {
        let (mut notifier, mut events) = Notifier::new(Duration::from_secs(4));
        let generation = notifier.show(NotificationKind::Success, "saved");

        // Not yet at the deadline
        tokio::time::advance(Duration::from_secs(3)).await;
        tokio::task::yield_now().await;
        assert!(events.try_recv().is_err());

        tokio::time::advance(Duration::from_secs(1)).await;
        let event = events.recv().await.expect("dismiss event");
        assert_eq!(event.generation, generation);
        assert!(notifier.dismiss(event));
    }

    #[tokio::test(start_paused = true)]
    async fn test_rearming_supersedes_pending_timer() {
        let (mut notifier, mut events) = Notifier::new(Duration::from_secs(4));
        notifier.show(NotificationKind::Success, "first");
        tokio::time::advance(Duration::from_secs(2)).await;
        let second = notifier.show(NotificationKind::Success, "second");

        // Only the second timer survives; the first was aborted
        tokio::time::advance(Duration::from_secs(10)).await;
        let event = events.recv().await.expect("dismiss event");
        assert_eq!(event.generation, second);
        assert!(events.try_recv().is_err());
    }
}
