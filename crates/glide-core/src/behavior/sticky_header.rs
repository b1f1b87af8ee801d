//! Header style switch once the page has scrolled

use crate::page::{ids, Page};

pub const SCROLLED_CLASS: &str = "header-scrolled";

/// Apply the scrolled or resting header style for the current position
///
/// Returns `None` when the page has no header, otherwise whether the
/// scrolled style is now applied.
pub fn update_header(page: &mut Page, threshold: f64) -> Option<bool> {
    let scrolled = page.scroll_y() > threshold;
    let header = page.get_mut(ids::HEADER)?;

    if scrolled {
        header.add_class(SCROLLED_CLASS);
        header.set_style("box-shadow", "0 4px 20px rgba(0, 0, 0, 0.1)");
        header.set_style("backdrop-filter", "blur(10px)");
        header.set_style("background-color", "rgba(255, 255, 255, 0.95)");
    } else {
        header.remove_class(SCROLLED_CLASS);
        header.set_style("box-shadow", "0 2px 10px rgba(0, 0, 0, 0.05)");
        header.set_style("backdrop-filter", "none");
        header.set_style("background-color", "#ffffff");
    }

    Some(scrolled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::Element;

    fn page(with_header: bool) -> Page {
        let mut body = Element::new("body", "").with_child(Element::new("section", "a").at(0.0, 2000.0));
        if with_header {
            body.children.insert(0, Element::new("header", ids::HEADER).at(0.0, 80.0));
        }
        Page::new(body, 500.0)
    }

    #[test]
    fn test_switches_at_threshold() {
        let mut page = page(true);
        page.scroll_to(100.0);
        assert_eq!(update_header(&mut page, 100.0), Some(false));
        assert_eq!(page.get(ids::HEADER).unwrap().style("backdrop-filter"), Some("none"));

        page.scroll_to(101.0);
        assert_eq!(update_header(&mut page, 100.0), Some(true));
        let header = page.get(ids::HEADER).unwrap();
        assert!(header.has_class(SCROLLED_CLASS));
        assert_eq!(header.style("backdrop-filter"), Some("blur(10px)"));

        page.scroll_to(0.0);
        update_header(&mut page, 100.0);
        assert!(!page.get(ids::HEADER).unwrap().has_class(SCROLLED_CLASS));
    }

    #[test]
    fn test_missing_header_is_noop() {
        let mut page = page(false);
        page.scroll_to(400.0);
        let before = page.clone();
        assert_eq!(update_header(&mut page, 100.0), None);
        assert_eq!(page, before);
    }
}
