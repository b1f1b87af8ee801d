use std::path::Path;

use anyhow::Result;

use glide_core::behavior::highlight;
use glide_core::AppConfig;

use super::load_page;

pub fn run(config: &AppConfig, page_path: Option<&Path>, position: f64) -> Result<()> {
    let mut page = load_page(page_path)?;
    page.scroll_to(position);

    let nav_offset = config.highlight.nav_offset;
    let scan = page.scroll_y() + nav_offset;

    match highlight::highlight_active_section(&mut page, nav_offset) {
        Some(section) => {
            println!("Scroll {} (+{} offset = {}): #{}", page.scroll_y(), nav_offset, scan, section);
        }
        None => {
            println!("Scroll {} (+{} offset = {}): no section", page.scroll_y(), nav_offset, scan);
        }
    }

    println!();
    for section in page.sections() {
        let marker = if scan >= section.top && scan < section.top + section.height {
            "▶"
        } else {
            " "
        };
        println!(
            "  {} #{:<24} [{}, {})",
            marker,
            section.id,
            section.top,
            section.top + section.height
        );
    }

    Ok(())
}
