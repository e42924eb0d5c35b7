use std::sync::{Arc, Condvar, Mutex, MutexGuard};
use std::time::{Duration, Instant};

use crate::{PoolError, Result};

#[derive(Default)]
struct State {
    done: bool,
    panicked: Vec<usize>,
}

/// The one-shot completion signal of a pool.
///
/// It behaves like a closed channel: it fires exactly once,
/// and then every `wait`, past or future, returns at once.
/// Clone it freely, every clone observes the same transition.
/// Only a started pool creates one, and that pool fires it.
#[derive(Clone)]
pub struct Completion {
    inner: Arc<(Mutex<State>, Condvar)>,
}

impl Completion {
    /// Create an unfired signal.
    pub(crate) fn new() -> Self {
        Completion {
            inner: Arc::new((Mutex::new(State::default()), Condvar::new())),
        }
    }

    fn state(&self) -> MutexGuard<'_, State> {
        // nobody panics while holding the lock, but don't let a poison stop the broadcast.
        self.inner.0.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Fire the signal and wake every observer.
    /// Firing twice is a no-op.
    pub(crate) fn fire(&self) {
        let mut state = self.state();
        state.done = true;
        self.inner.1.notify_all();
    }

    /// remember that a worker unwound.
    pub(crate) fn record_panic(&self, worker_index: usize) {
        self.state().panicked.push(worker_index);
    }

    /// test whether the signal has fired.
    pub fn is_done(&self) -> bool {
        self.state().done
    }

    /// blocking the current thread until the signal fires.
    ///
    /// # Errors
    /// `PoolError::WorkerPanicked` if some workers unwound
    /// (only possible under `PanicPolicy::Record`).
    pub fn wait(&self) -> Result<()> {
        let mut state = self.state();
        while !state.done {
            state = self.inner.1.wait(state).unwrap_or_else(|poisoned| poisoned.into_inner());
        }
        if state.panicked.is_empty() {
            return Ok(());
        }
        let mut workers = state.panicked.clone();
        workers.sort();
        Err(PoolError::WorkerPanicked { workers })
    }

    /// like `wait`, but gives up after `timeout`.
    /// returns whether the signal has fired.
    pub fn wait_timeout(&self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        let mut state = self.state();
        while !state.done {
            let now = Instant::now();
            if now >= deadline {
                return false;
            }
            state = self.inner.1.wait_timeout(state, deadline - now)
                .map(|(state, _)| state)
                .unwrap_or_else(|poisoned| poisoned.into_inner().0);
        }
        true
    }
}
