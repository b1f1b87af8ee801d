//! Smooth scrolling engine
//!
//! # Layout
//!
//! - `easing` - Pure easing functions (cubic in-out, ease-out family)
//! - `timing` - Time conversion and interpolation helpers
//! - `config` - Derived values on `ScrollConfig`
//! - `run` - One interpolation (`ScrollRun`) and the async frame driver
//! - `animation` - Single-run controller used by page behaviors
//!
//! # Usage
//!
//! ```ignore
//! use glide_core::scroll::ScrollAnimator;
//!
//! let mut animator = ScrollAnimator::with_defaults();
//! animator.set_scroll(page.scroll_y());
//! animator.scroll_to(target);
//!
//! // On every frame callback
//! let offset = animator.update(Instant::now());
//! ```

pub mod config;
pub mod easing;
pub mod timing;

pub mod animation;
pub mod run;

pub use animation::ScrollAnimator;
pub use config::ScrollConfig;
pub use easing::{ease_in_out_cubic, EasingType};
pub use run::{animate_scroll_to, ScrollRun, Step};
