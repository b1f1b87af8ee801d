//! Clock-injected debounce engine
//!
//! The host owns the timer: it reports calls with `call(now, args)` and, once
//! `deadline()` has passed, reports expiry with `expire(now)`. Both return the
//! arguments to run the action with, if any.

use std::time::{Duration, Instant};

/// Debounce bookkeeping for one wrapped action
#[derive(Debug, Clone)]
pub struct DebounceState<A> {
    wait: Duration,
    immediate: bool,
    /// Expiry of the pending window; `Some` is the single pending token
    deadline: Option<Instant>,
    /// Arguments of the latest call, held for the trailing edge
    latest: Option<A>,
}

impl<A> DebounceState<A> {
    pub fn new(wait: Duration, immediate: bool) -> Self {
        Self {
            wait,
            immediate,
            deadline: None,
            latest: None,
        }
    }

    pub fn wait(&self) -> Duration {
        self.wait
    }

    pub fn is_immediate(&self) -> bool {
        self.immediate
    }

    /// True while a window or a trailing call is pending
    #[inline]
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// When the pending token expires
    #[inline]
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Record a call at `now`
    ///
    /// Replaces any pending token with one expiring `wait` from now. Returns
    /// the arguments to run synchronously: only on the leading edge of an
    /// immediate debounce. Calls inside an immediate window are swallowed.
    pub fn call(&mut self, now: Instant, args: A) -> Option<A> {
        let call_now = self.immediate && self.deadline.is_none();
        self.deadline = Some(now + self.wait);

        if call_now {
            Some(args)
        } else {
            if !self.immediate {
                self.latest = Some(args);
            }
            None
        }
    }

    /// Report that the host timer fired at `now`
    ///
    /// Clears the pending token once its deadline has passed and returns the
    /// trailing arguments (never for immediate debounces). Early or spurious
    /// expiries are ignored.
    pub fn expire(&mut self, now: Instant) -> Option<A> {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                self.latest.take()
            }
            _ => None,
        }
    }

    /// Drop the pending token without running anything
    pub fn cancel(&mut self) {
        self.deadline = None;
        self.latest = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_immediate_single_call_runs_once() {
        let t0 = Instant::now();
        let mut state = DebounceState::new(ms(20), true);

        assert_eq!(state.call(t0, 1), Some(1));
        assert!(state.is_pending());
        assert_eq!(state.deadline(), Some(t0 + ms(20)));

        // expiry produces no trailing call
        assert_eq!(state.expire(t0 + ms(20)), None);
        assert!(!state.is_pending());
    }

    #[test]
    fn test_immediate_window_swallows_and_extends() {
        let t0 = Instant::now();
        let mut state = DebounceState::new(ms(20), true);

        assert_eq!(state.call(t0, "a"), Some("a"));
        assert_eq!(state.call(t0 + ms(10), "b"), None);
        assert_eq!(state.call(t0 + ms(25), "c"), None);
        assert_eq!(state.deadline(), Some(t0 + ms(45)));

        // the first deadline has passed, but the window was extended
        assert_eq!(state.expire(t0 + ms(30)), None);
        assert!(state.is_pending());

        assert_eq!(state.expire(t0 + ms(45)), None);
        assert!(!state.is_pending());
        assert_eq!(state.call(t0 + ms(50), "d"), Some("d"));
    }

    #[test]
    fn test_trailing_runs_with_last_arguments() {
        let t0 = Instant::now();
        let mut state = DebounceState::new(ms(20), false);

        for (i, at) in [0, 5, 10, 15].into_iter().enumerate() {
            assert_eq!(state.call(t0 + ms(at), i), None);
        }

        assert_eq!(state.expire(t0 + ms(20)), None);
        assert_eq!(state.expire(t0 + ms(35)), Some(3));
        assert_eq!(state.expire(t0 + ms(60)), None);
    }

    #[test]
    fn test_no_calls_never_fire() {
        let mut state: DebounceState<()> = DebounceState::new(ms(20), false);
        assert!(!state.is_pending());
        assert_eq!(state.expire(Instant::now() + ms(100)), None);
    }

    #[test]
    fn test_cancel_drops_trailing_call() {
        let t0 = Instant::now();
        let mut state = DebounceState::new(ms(20), false);
        state.call(t0, 7);
        state.cancel();
        assert_eq!(state.expire(t0 + ms(40)), None);
    }
}
