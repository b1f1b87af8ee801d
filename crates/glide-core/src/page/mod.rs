//! In-memory page model
//!
//! The document tree, viewport and history that page behaviors operate on,
//! plus the TOML layouts pages are built from.

mod document;
mod element;
mod layout;
mod selector;

pub use document::{ids, Page, SectionBounds};
pub use element::Element;
pub use layout::{ButtonLayout, CardLayout, HeaderLayout, PageLayout, SectionLayout};
pub use selector::Selector;
