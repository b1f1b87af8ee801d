//! Lift effect for buttons and cards

use crate::page::{Element, Page};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverKind {
    Button,
    Card,
}

impl HoverKind {
    pub fn of(element: &Element) -> Option<Self> {
        if element.has_class("card-hover") || element.has_class("contact-card") {
            Some(HoverKind::Card)
        } else if element.has_class("btn") {
            Some(HoverKind::Button)
        } else {
            None
        }
    }

    fn lifted(self) -> (&'static str, &'static str) {
        match self {
            HoverKind::Button => ("translateY(-3px)", "0 10px 20px rgba(0, 0, 0, 0.1)"),
            HoverKind::Card => ("translateY(-5px)", "0 15px 30px rgba(0, 0, 0, 0.1)"),
        }
    }
}

/// Pointer entered the element; false if it has no hover effect
pub fn enter(page: &mut Page, id: &str) -> bool {
    let Some(element) = page.get_mut(id) else {
        return false;
    };
    let Some(kind) = HoverKind::of(element) else {
        return false;
    };
    let (transform, shadow) = kind.lifted();
    element.set_style("transform", transform);
    element.set_style("box-shadow", shadow);
    true
}

/// Pointer left the element
pub fn leave(page: &mut Page, id: &str) -> bool {
    let Some(element) = page.get_mut(id) else {
        return false;
    };
    if HoverKind::of(element).is_none() {
        return false;
    }
    element.set_style("transform", "translateY(0)");
    element.set_style("box-shadow", "");
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Page {
        let body = Element::new("body", "")
            .with_child(Element::new("a", "cta").with_class("btn"))
            .with_child(Element::new("div", "card").with_class("card").with_class("card-hover"))
            .with_child(Element::new("div", "plain").with_class("card"));
        Page::new(body, 600.0)
    }

    #[test]
    fn test_button_lift() {
        let mut page = page();
        assert!(enter(&mut page, "cta"));
        let button = page.get("cta").unwrap();
        assert_eq!(button.style("transform"), Some("translateY(-3px)"));
        assert_eq!(button.style("box-shadow"), Some("0 10px 20px rgba(0, 0, 0, 0.1)"));

        assert!(leave(&mut page, "cta"));
        let button = page.get("cta").unwrap();
        assert_eq!(button.style("transform"), Some("translateY(0)"));
        assert_eq!(button.style("box-shadow"), None);
    }

    #[test]
    fn test_card_lift() {
        let mut page = page();
        enter(&mut page, "card");
        assert_eq!(page.get("card").unwrap().style("transform"), Some("translateY(-5px)"));
    }

    #[test]
    fn test_elements_without_effect() {
        let mut page = page();
        assert!(!enter(&mut page, "plain"));
        assert!(!enter(&mut page, "missing"));
        assert!(page.get("plain").unwrap().style.is_empty());
    }
}
