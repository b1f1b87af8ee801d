//! Page behaviors
//!
//! Each behavior is a set of free functions over a `Page`. A missing element
//! is a silent no-op: functions return `None` or `false` instead of failing.
//! `PageController` decides when each one runs.

pub mod back_to_top;
pub mod highlight;
pub mod hover;
pub mod mobile_menu;
pub mod reveal;
pub mod smooth_scroll;
pub mod sticky_header;

pub use reveal::RevealObserver;
