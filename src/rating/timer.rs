//! Cancellable two-phase submission timer.

use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Events emitted after a rating is submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionEvent {
    /// Show the confirmation screen.
    Confirmed,
    /// Leave the wizard for the dashboard.
    Redirect,
}

/// Drives the confirmation and redirect delays on a tokio task.
///
/// The task is aborted on [`SubmissionTimer::cancel`] or when the timer is
/// dropped, so nothing is delivered once the owning view is gone.
pub struct SubmissionTimer {
    rx: mpsc::UnboundedReceiver<SubmissionEvent>,
    handle: JoinHandle<()>,
}

impl SubmissionTimer {
    pub fn start(rt: &Handle, confirm_after: Duration, redirect_after: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();

        let handle = rt.spawn(async move {
            tokio::time::sleep(confirm_after).await;
            if tx.send(SubmissionEvent::Confirmed).is_err() {
                return;
            }
            tokio::time::sleep(redirect_after).await;
            let _ = tx.send(SubmissionEvent::Redirect);
        });

        Self { rx, handle }
    }

    /// Next pending event, if any.
    pub fn poll(&mut self) -> Option<SubmissionEvent> {
        self.rx.try_recv().ok()
    }

    pub fn cancel(&self) {
        self.handle.abort();
    }
}

impl Drop for SubmissionTimer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_emits_both_events_in_order() {
        let mut timer = SubmissionTimer::start(
            &Handle::current(),
            Duration::from_millis(5),
            Duration::from_millis(5),
        );
        assert_eq!(timer.poll(), None);

        tokio::time::sleep(Duration::from_millis(200)).await;

        assert_eq!(timer.poll(), Some(SubmissionEvent::Confirmed));
        assert_eq!(timer.poll(), Some(SubmissionEvent::Redirect));
        assert_eq!(timer.poll(), None);
    }

    #[tokio::test]
    async fn test_cancel_suppresses_events() {
        let mut timer = SubmissionTimer::start(
            &Handle::current(),
            Duration::from_millis(20),
            Duration::from_millis(20),
        );
        timer.cancel();

        tokio::time::sleep(Duration::from_millis(100)).await;

        assert_eq!(timer.poll(), None);
        assert!(timer.handle.is_finished());
    }

    #[tokio::test]
    async fn test_drop_aborts_task() {
        let timer = SubmissionTimer::start(
            &Handle::current(),
            Duration::from_secs(30),
            Duration::from_secs(30),
        );
        let task = timer.handle.abort_handle();
        assert!(!task.is_finished());

        drop(timer);
        tokio::time::sleep(Duration::from_millis(50)).await;

        assert!(task.is_finished());
    }

    #[tokio::test]
    async fn test_cancel_between_phases() {
        let mut timer = SubmissionTimer::start(
            &Handle::current(),
            Duration::from_millis(1),
            Duration::from_secs(30),
        );

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(timer.poll(), Some(SubmissionEvent::Confirmed));

        timer.cancel();
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert_eq!(timer.poll(), None);
    }
}
