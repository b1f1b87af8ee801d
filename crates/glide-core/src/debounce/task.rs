//! Debounced actions driven by tokio timers

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::trace;

use super::state::DebounceState;

/// Wait used by `Debouncer::with_defaults`
pub const DEFAULT_WAIT: Duration = Duration::from_millis(20);

type Action<A> = Arc<dyn Fn(A) + Send + Sync>;

struct Inner<A> {
    state: DebounceState<A>,
    /// Timer task for the pending token
    pending: Option<JoinHandle<()>>,
    /// Bumped on every call so a stale timer cannot clear a newer one
    generation: u64,
}

/// A rate-limited wrapper around an action
///
/// Each `call` cancels the pending timer task and schedules a new one, so a
/// burst of calls keeps at most one timer alive. Must be used inside a tokio
/// runtime.
pub struct Debouncer<A> {
    inner: Arc<Mutex<Inner<A>>>,
    action: Action<A>,
}

impl<A> Clone for Debouncer<A> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            action: Arc::clone(&self.action),
        }
    }
}

fn lock<A>(inner: &Mutex<Inner<A>>) -> MutexGuard<'_, Inner<A>> {
    inner.lock().unwrap_or_else(PoisonError::into_inner)
}

impl<A: Send + 'static> Debouncer<A> {
    /// Wrap `action`
    ///
    /// With `immediate`, the first call of a burst runs synchronously and the
    /// rest of the burst is dropped. Without it, only the last call of a burst
    /// runs, `wait` after it arrived.
    pub fn new<F>(action: F, wait: Duration, immediate: bool) -> Self
    where
        F: Fn(A) + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                state: DebounceState::new(wait, immediate),
                pending: None,
                generation: 0,
            })),
            action: Arc::new(action),
        }
    }

    /// Leading-edge debounce with a 20ms window
    pub fn with_defaults<F>(action: F) -> Self
    where
        F: Fn(A) + Send + Sync + 'static,
    {
        Self::new(action, DEFAULT_WAIT, true)
    }

    /// Invoke the wrapped action, subject to debouncing
    pub fn call(&self, args: A) {
        let run_now = {
            let mut inner = lock(&self.inner);
            let run_now = inner.state.call(Instant::now().into_std(), args);

            if let Some(previous) = inner.pending.take() {
                previous.abort();
            }
            inner.generation = inner.generation.wrapping_add(1);

            if let Some(deadline) = inner.state.deadline() {
                let generation = inner.generation;
                let shared = Arc::clone(&self.inner);
                let action = Arc::clone(&self.action);
                inner.pending = Some(tokio::spawn(async move {
                    tokio::time::sleep_until(Instant::from_std(deadline)).await;
                    let trailing = {
                        let mut inner = lock(&shared);
                        if inner.generation == generation {
                            inner.pending = None;
                        }
                        inner.state.expire(Instant::now().into_std())
                    };
                    if let Some(args) = trailing {
                        trace!("Running trailing debounced call");
                        action(args);
                    }
                }));
            }

            run_now
        };

        // The lock is released before running so the action may call back in
        if let Some(args) = run_now {
            (self.action)(args);
        }
    }

    /// True while a window or trailing call is pending
    pub fn is_pending(&self) -> bool {
        lock(&self.inner).state.is_pending()
    }

    /// Drop any pending call and its timer
    pub fn cancel(&self) {
        let mut inner = lock(&self.inner);
        if let Some(pending) = inner.pending.take() {
            pending.abort();
        }
        inner.state.cancel();
    }
}

/// Wrap `action` in a `Debouncer`
pub fn debounce<A, F>(action: F, wait: Duration, immediate: bool) -> Debouncer<A>
where
    A: Send + 'static,
    F: Fn(A) + Send + Sync + 'static,
{
    Debouncer::new(action, wait, immediate)
}
