//! # Debounce Timer
//!
//! The only async piece of the browser. Turns [`Effect::ScheduleCommit`]
//! into a tokio sleep that reports back as [`Action::DebounceElapsed`]
//! through an action channel, and aborts the previous sleep whenever a new
//! one is scheduled.
//!
//! Aborting is best effort: a sleep that already fired may still deliver.
//! The generation check in `DebouncedSearch` drops such late deliveries.

use log::debug;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::AbortHandle;

use crate::core::action::{Action, Effect, update};
use crate::core::debounce::PendingCommit;
use crate::core::state::NavigationState;

pub struct DebounceTimer {
    sender: UnboundedSender<Action>,
    running: Option<AbortHandle>,
}

impl DebounceTimer {
    pub fn new(sender: UnboundedSender<Action>) -> Self {
        Self {
            sender,
            running: None,
        }
    }

    /// Cancels any running sleep and starts one for `pending`.
    /// Must be called from within a tokio runtime.
    pub fn schedule(&mut self, pending: PendingCommit) {
        self.cancel();
        let sender = self.sender.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(pending.delay).await;
            // Receiver gone means the browser is shutting down.
            let _ = sender.send(Action::DebounceElapsed(pending.generation));
        });
        self.running = Some(handle.abort_handle());
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.running.take() {
            handle.abort();
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for DebounceTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Runs `update` and carries out the timer side of its effect.
/// The effect is handed back for the caller's own reactions
/// (re-filtering, scrolling, quitting).
pub fn dispatch(state: &mut NavigationState, timer: &mut DebounceTimer, action: Action) -> Effect {
    let effect = update(state, action);
    match &effect {
        Effect::ScheduleCommit(pending) => timer.schedule(*pending),
        Effect::CancelCommit | Effect::QueryCommitted(_) | Effect::Quit => timer.cancel(),
        Effect::None | Effect::ScrollTo(_) => {}
    }
    if let Effect::QueryCommitted(query) = &effect {
        debug!("Committed query {:?}", query);
    }
    effect
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::sync::mpsc;

    #[tokio::test(start_paused = true)]
    async fn test_timer_delivers_after_delay() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut timer = DebounceTimer::new(tx);
        timer.schedule(PendingCommit {
            generation: 7,
            delay: Duration::from_millis(300),
        });

        tokio::time::sleep(Duration::from_millis(299)).await;
        assert!(rx.try_recv().is_err());

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert_eq!(rx.recv().await, Some(Action::DebounceElapsed(7)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_reschedule_aborts_previous() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut timer = DebounceTimer::new(tx);
        let delay = Duration::from_millis(300);
        timer.schedule(PendingCommit { generation: 1, delay });
        tokio::time::sleep(Duration::from_millis(100)).await;
        timer.schedule(PendingCommit { generation: 2, delay });

        tokio::time::sleep(Duration::from_millis(500)).await;
        assert_eq!(rx.try_recv().ok(), Some(Action::DebounceElapsed(2)));
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_stops_delivery() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut timer = DebounceTimer::new(tx);
        timer.schedule(PendingCommit {
            generation: 1,
            delay: Duration::from_millis(300),
        });
        assert!(timer.is_running());
        timer.cancel();
        assert!(!timer.is_running());

        tokio::time::sleep(Duration::from_secs(1)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_dispatch_commits_through_timer() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut timer = DebounceTimer::new(tx);
        let mut state = NavigationState::default();

        let effect = dispatch(&mut state, &mut timer, Action::EditSearch("afro".into()));
        assert!(matches!(effect, Effect::ScheduleCommit(_)));

        let action = rx.recv().await.unwrap();
        let effect = dispatch(&mut state, &mut timer, action);
        assert_eq!(effect, Effect::QueryCommitted("afro".into()));
        assert_eq!(state.search_query(), "afro");
    }
}
