//! Anchor scrolling with header offset

use tracing::debug;

use crate::page::{ids, Page};
use crate::scroll::ScrollAnimator;

/// Whether a link href should trigger an in-page smooth scroll
pub fn is_scroll_anchor(href: &str) -> bool {
    href.starts_with('#') && href != "#" && href.len() > 1
}

/// Scroll offset that puts the target just below the header
///
/// `None` when the selector matches nothing.
pub fn scroll_target(page: &Page, selector: &str, header_offset: bool) -> Option<f64> {
    let target = page.query(selector)?;
    let header_height = if header_offset {
        page.get(ids::HEADER).map_or(0.0, |header| header.height)
    } else {
        0.0
    };
    Some(target.top - header_height)
}

/// Start a smooth scroll to the element matching `selector` over `duration_ms`
///
/// Pushes `selector` onto the page history. A selector that matches nothing
/// leaves the page untouched and returns false. When smooth scrolling is
/// disabled the position is written immediately.
pub fn smooth_scroll_to(
    page: &mut Page,
    animator: &mut ScrollAnimator,
    selector: &str,
    duration_ms: f64,
) -> bool {
    let header_offset = animator.config().header_offset;
    let Some(target) = scroll_target(page, selector, header_offset) else {
        debug!(selector, "Smooth scroll target not found");
        return false;
    };
    if !target.is_finite() {
        debug!(selector, target, "Smooth scroll target has no usable position");
        return false;
    }
    let target = target.clamp(0.0, page.max_scroll());

    animator.set_scroll(page.scroll_y());
    animator.animate(target, duration_ms);
    if !animator.is_animating() {
        page.scroll_to(animator.current_scroll());
    }
    page.push_history(selector);

    debug!(selector, from = page.scroll_y(), target, "Smooth scroll started");
    true
}
