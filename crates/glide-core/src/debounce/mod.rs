//! Debouncing for bursty event handlers
//!
//! `DebounceState` is the engine and knows nothing about timers; hosts with
//! their own frame loop drive it directly. `Debouncer` wraps an action and
//! drives the same engine with tokio timers.

mod state;
mod task;

pub use state::DebounceState;
pub use task::{debounce, Debouncer, DEFAULT_WAIT};
