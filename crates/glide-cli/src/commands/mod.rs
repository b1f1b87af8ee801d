pub mod config;
pub mod ease;
pub mod highlight;
pub mod run;
pub mod scroll;

use std::path::Path;

use anyhow::{Context, Result};

use glide_core::{Page, PageLayout};

/// Build the page from a layout file, or the demo page
pub fn load_page(path: Option<&Path>) -> Result<Page> {
    let layout = match path {
        Some(path) => PageLayout::load(path)
            .with_context(|| format!("failed to read page layout {}", path.display()))?,
        None => PageLayout::demo()?,
    };
    Ok(layout.into_page()?)
}
