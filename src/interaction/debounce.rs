use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::trace;

/// Quiescence window used by the dashboard's filter bindings.
pub const DEFAULT_QUIESCENCE: Duration = Duration::from_millis(300);

/// Collapses bursts of triggers into one delayed action.
///
/// Every `trigger` cancels the pending timer and starts a new one, so the
/// action runs once, `window` after the last trigger of a burst. Timers are
/// local tasks: `trigger` must be called from inside a `tokio::task::LocalSet`.
#[derive(Debug)]
pub struct Debouncer {
    window: Duration,
    pending: RefCell<Option<JoinHandle<()>>>,
    fired: Rc<Cell<u64>>,
}

impl Debouncer {
    #[must_use]
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            pending: RefCell::new(None),
            fired: Rc::new(Cell::new(0)),
        }
    }

    #[must_use]
    pub fn window(&self) -> Duration {
        self.window
    }

    /// Schedules `action`, replacing any timer that has not elapsed yet.
    pub fn trigger(&self, action: Rc<dyn Fn()>) {
        if let Some(previous) = self.pending.borrow_mut().take() {
            previous.abort();
        }

        let window = self.window;
        let fired = Rc::clone(&self.fired);
        trace!(window_ms = window.as_millis() as u64, "debounce timer armed");
        let handle = tokio::task::spawn_local(async move {
            tokio::time::sleep(window).await;
            fired.set(fired.get() + 1);
            trace!("debounce window elapsed");
            action();
        });
        *self.pending.borrow_mut() = Some(handle);
    }

    /// Drops the pending timer, if any, without running its action.
    pub fn cancel(&self) {
        if let Some(pending) = self.pending.borrow_mut().take() {
            pending.abort();
        }
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending
            .borrow()
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Number of actions that ran so far.
    #[must_use]
    pub fn fired_count(&self) -> u64 {
        self.fired.get()
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_QUIESCENCE)
    }
}
