pub mod behavior;
pub mod config;
pub mod controller;
pub mod debounce;
pub mod error;
pub mod page;
pub mod scroll;

pub use config::{AppConfig, EasingType, ScrollConfig};
pub use controller::{PageController, PageEvent};
pub use debounce::{debounce, DebounceState, Debouncer};
pub use error::{Error, Result};
pub use page::{Element, Page, PageLayout};
pub use scroll::{animate_scroll_to, ease_in_out_cubic, ScrollAnimator};
