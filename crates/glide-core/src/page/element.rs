use std::collections::{BTreeMap, BTreeSet};

use super::selector::Selector;

/// A node of the in-memory document
///
/// Geometry is in page units, measured from the top of the document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Element {
    pub id: String,
    pub tag: String,
    pub classes: BTreeSet<String>,
    /// Inline style properties
    pub style: BTreeMap<String, String>,
    /// Link target for anchors
    pub href: Option<String>,
    /// Accessible label
    pub label: Option<String>,
    pub text: String,
    /// Distance from the document top (offsetTop)
    pub top: f64,
    /// Rendered height (clientHeight)
    pub height: f64,
    /// Full content height, used when expanding collapsible elements
    pub scroll_height: f64,
    pub children: Vec<Element>,
}

impl Element {
    pub fn new(tag: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.insert(class.into());
        self
    }

    pub fn with_href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Place the element at `top` with the given height
    pub fn at(mut self, top: f64, height: f64) -> Self {
        self.top = top;
        self.height = height;
        self.scroll_height = height;
        self
    }

    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    pub fn add_class(&mut self, class: &str) {
        if !self.classes.contains(class) {
            self.classes.insert(class.to_string());
        }
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.remove(class);
    }

    /// Toggle a class, returning whether it is now present
    pub fn toggle_class(&mut self, class: &str) -> bool {
        if self.classes.remove(class) {
            false
        } else {
            self.classes.insert(class.to_string());
            true
        }
    }

    pub fn style(&self, property: &str) -> Option<&str> {
        self.style.get(property).map(String::as_str)
    }

    /// Set an inline style property; an empty value removes it
    pub fn set_style(&mut self, property: &str, value: &str) {
        if value.is_empty() {
            self.style.remove(property);
        } else {
            self.style.insert(property.to_string(), value.to_string());
        }
    }

    pub fn matches(&self, selector: &Selector) -> bool {
        match selector {
            Selector::Id(id) => self.id == *id,
            Selector::Class(class) => self.has_class(class),
            Selector::Tag(tag) => self.tag == *tag,
        }
    }

    /// Whether an element with `id` is nested inside this one
    pub fn contains(&self, id: &str) -> bool {
        self.children
            .iter()
            .any(|child| child.id == id || child.contains(id))
    }

    /// Depth-first search of the descendants
    pub fn find(&self, selector: &Selector) -> Option<&Element> {
        for child in &self.children {
            if child.matches(selector) {
                return Some(child);
            }
            if let Some(found) = child.find(selector) {
                return Some(found);
            }
        }
        None
    }

    pub fn find_mut(&mut self, selector: &Selector) -> Option<&mut Element> {
        for child in self.children.iter_mut() {
            if child.matches(selector) {
                return Some(child);
            }
            if let Some(found) = child.find_mut(selector) {
                return Some(found);
            }
        }
        None
    }

    /// All matching descendants in document order
    pub fn find_all<'a>(&'a self, selector: &Selector, out: &mut Vec<&'a Element>) {
        for child in &self.children {
            if child.matches(selector) {
                out.push(child);
            }
            child.find_all(selector, out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree() -> Element {
        Element::new("body", "")
            .with_child(
                Element::new("header", "main-header")
                    .with_child(Element::new("a", "nav-a").with_class("nav-link").with_href("#a"))
                    .with_child(Element::new("a", "nav-b").with_class("nav-link").with_href("#b")),
            )
            .with_child(Element::new("section", "a").at(0.0, 300.0))
    }

    #[test]
    fn test_toggle_class() {
        let mut el = Element::new("div", "menu");
        assert!(el.toggle_class("active"));
        assert!(el.has_class("active"));
        assert!(!el.toggle_class("active"));
        assert!(!el.has_class("active"));
    }

    #[test]
    fn test_empty_style_value_removes_property() {
        let mut el = Element::new("div", "card");
        el.set_style("box-shadow", "0 1px 2px black");
        assert_eq!(el.style("box-shadow"), Some("0 1px 2px black"));
        el.set_style("box-shadow", "");
        assert_eq!(el.style("box-shadow"), None);
    }

    #[test]
    fn test_find_in_document_order() {
        let body = tree();
        let first = body.find(&Selector::Class("nav-link".into())).unwrap();
        assert_eq!(first.id, "nav-a");

        let mut all = Vec::new();
        body.find_all(&Selector::Class("nav-link".into()), &mut all);
        let ids: Vec<_> = all.iter().map(|el| el.id.as_str()).collect();
        assert_eq!(ids, ["nav-a", "nav-b"]);
    }

    #[test]
    fn test_contains_descendants() {
        let body = tree();
        let header = body.find(&Selector::Id("main-header".into())).unwrap();
        assert!(header.contains("nav-b"));
        assert!(!header.contains("a"));
    }
}
