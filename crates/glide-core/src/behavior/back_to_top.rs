//! Floating "back to top" control

use crate::page::{ids, Element, Page};

const BASE_CLASSES: [&str; 5] = ["fixed", "bottom-8", "right-8", "rounded-full", "z-40"];
pub const VISIBLE_CLASSES: [&str; 2] = ["opacity-100", "translate-y-0"];
pub const HIDDEN_CLASSES: [&str; 2] = ["opacity-0", "translate-y-10"];

/// Insert the button into the body, hidden; false if it already exists
pub fn install(page: &mut Page) -> bool {
    if page.get(ids::BACK_TO_TOP).is_some() {
        return false;
    }

    let mut button = Element::new("button", ids::BACK_TO_TOP).with_label("Back to top");
    for class in BASE_CLASSES.iter().chain(HIDDEN_CLASSES.iter()) {
        button.add_class(class);
    }
    page.append(button);
    true
}

/// Show the button past `threshold`, hide it otherwise
///
/// Returns `None` if the button is not installed, else its new visibility.
pub fn update_visibility(page: &mut Page, threshold: f64) -> Option<bool> {
    let visible = page.scroll_y() > threshold;
    let button = page.get_mut(ids::BACK_TO_TOP)?;

    let (remove, add) = if visible {
        (HIDDEN_CLASSES, VISIBLE_CLASSES)
    } else {
        (VISIBLE_CLASSES, HIDDEN_CLASSES)
    };
    for class in remove {
        button.remove_class(class);
    }
    for class in add {
        button.add_class(class);
    }

    Some(visible)
}

pub fn is_visible(page: &Page) -> bool {
    page.get(ids::BACK_TO_TOP)
        .is_some_and(|button| button.has_class(VISIBLE_CLASSES[0]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Page {
        let body = Element::new("body", "").with_child(Element::new("section", "hero").at(0.0, 3000.0));
        Page::new(body, 600.0)
    }

    #[test]
    fn test_install_once() {
        let mut page = page();
        assert!(install(&mut page));
        assert!(!install(&mut page));
        assert_eq!(page.query_all("button").len(), 1);

        let button = page.get(ids::BACK_TO_TOP).unwrap();
        assert_eq!(button.label.as_deref(), Some("Back to top"));
        assert!(button.has_class("opacity-0"));
        assert!(!is_visible(&page));
    }

    #[test]
    fn test_visibility_follows_threshold() {
        let mut page = page();
        install(&mut page);

        page.scroll_to(501.0);
        assert_eq!(update_visibility(&mut page, 500.0), Some(true));
        assert!(is_visible(&page));
        let button = page.get(ids::BACK_TO_TOP).unwrap();
        assert!(button.has_class("translate-y-0"));
        assert!(!button.has_class("translate-y-10"));

        page.scroll_to(500.0);
        assert_eq!(update_visibility(&mut page, 500.0), Some(false));
        assert!(!is_visible(&page));
    }

    #[test]
    fn test_not_installed() {
        let mut page = page();
        page.scroll_to(900.0);
        assert_eq!(update_visibility(&mut page, 500.0), None);
    }
}
