//! Collapsible mobile navigation

use crate::page::{ids, Page};

pub const ACTIVE_CLASS: &str = "active";

pub fn is_open(page: &Page) -> bool {
    page.get(ids::MOBILE_MENU)
        .is_some_and(|menu| menu.has_class(ACTIVE_CLASS))
}

/// Open a closed menu or close an open one
///
/// Needs both the menu and its button; returns `None` without touching the
/// page when either is missing, otherwise whether the menu is now open.
pub fn toggle(page: &mut Page) -> Option<bool> {
    page.get(ids::MOBILE_MENU_BUTTON)?;

    let menu = page.get_mut(ids::MOBILE_MENU)?;
    let open = menu.toggle_class(ACTIVE_CLASS);
    if open {
        let max_height = format!("{}px", menu.scroll_height);
        menu.set_style("max-height", &max_height);
        menu.set_style("opacity", "1");
    } else {
        menu.set_style("max-height", "0");
        menu.set_style("opacity", "0");
    }

    if let Some(button) = page.get_mut(ids::MOBILE_MENU_BUTTON) {
        if open {
            button.add_class(ACTIVE_CLASS);
        } else {
            button.remove_class(ACTIVE_CLASS);
        }
    }

    // Lock page scrolling while the menu covers it
    page.body_mut()
        .set_style("overflow", if open { "hidden" } else { "" });

    Some(open)
}

/// Close the menu if it is open; returns whether anything changed
pub fn close(page: &mut Page) -> bool {
    is_open(page) && toggle(page).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::Element;

    fn page() -> Page {
        let mut menu = Element::new("nav", ids::MOBILE_MENU);
        menu.scroll_height = 160.0;
        let body = Element::new("body", "").with_child(
            Element::new("header", ids::HEADER)
                .at(0.0, 80.0)
                .with_child(Element::new("button", ids::MOBILE_MENU_BUTTON))
                .with_child(menu),
        );
        Page::new(body, 500.0)
    }

    #[test]
    fn test_toggle_open_and_closed() {
        let mut page = page();

        assert_eq!(toggle(&mut page), Some(true));
        assert!(is_open(&page));
        let menu = page.get(ids::MOBILE_MENU).unwrap();
        assert_eq!(menu.style("max-height"), Some("160px"));
        assert_eq!(menu.style("opacity"), Some("1"));
        assert!(page.get(ids::MOBILE_MENU_BUTTON).unwrap().has_class(ACTIVE_CLASS));
        assert_eq!(page.body().style("overflow"), Some("hidden"));

        assert_eq!(toggle(&mut page), Some(false));
        assert!(!is_open(&page));
        let menu = page.get(ids::MOBILE_MENU).unwrap();
        assert_eq!(menu.style("max-height"), Some("0"));
        assert_eq!(menu.style("opacity"), Some("0"));
        assert!(!page.get(ids::MOBILE_MENU_BUTTON).unwrap().has_class(ACTIVE_CLASS));
        assert_eq!(page.body().style("overflow"), None);
    }

    #[test]
    fn test_close_only_acts_when_open() {
        let mut page = page();
        assert!(!close(&mut page));
        toggle(&mut page);
        assert!(close(&mut page));
        assert!(!is_open(&page));
    }

    #[test]
    fn test_missing_button_is_noop() {
        let mut menu = Element::new("nav", ids::MOBILE_MENU);
        menu.scroll_height = 80.0;
        let mut page = Page::new(Element::new("body", "").with_child(menu), 500.0);
        let before = page.clone();
        assert_eq!(toggle(&mut page), None);
        assert_eq!(page, before);
    }
}
