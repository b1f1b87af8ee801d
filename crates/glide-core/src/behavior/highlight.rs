//! Active navigation link highlighting

use tracing::trace;

use crate::page::{Page, SectionBounds};

pub const ACTIVE_CLASS: &str = "active";

/// First section whose `[top, top + height)` contains `position`
pub fn active_section(sections: &[SectionBounds], position: f64) -> Option<&SectionBounds> {
    sections
        .iter()
        .find(|section| position >= section.top && position < section.top + section.height)
}

/// Mark the nav link of the section under the scroll position as active
///
/// The scan position is the scroll offset plus `nav_offset`. When no section
/// contains it the links keep their current state. Returns the id of the
/// matched section.
pub fn highlight_active_section(page: &mut Page, nav_offset: f64) -> Option<String> {
    let position = page.scroll_y() + nav_offset;
    let sections = page.sections();
    let id = active_section(&sections, position)?.id.clone();
    let href = format!("#{}", id);

    for link_id in page.ids_matching(".nav-link") {
        if let Some(link) = page.get_mut(&link_id) {
            if link.href.as_deref() == Some(href.as_str()) {
                link.add_class(ACTIVE_CLASS);
            } else {
                link.remove_class(ACTIVE_CLASS);
            }
        }
    }

    trace!(section = %id, position, "Highlighted section");
    Some(id)
}

/// Href of the currently active nav link
pub fn active_link(page: &Page) -> Option<String> {
    page.nav_links()
        .into_iter()
        .find(|link| link.has_class(ACTIVE_CLASS))
        .and_then(|link| link.href.clone())
}
