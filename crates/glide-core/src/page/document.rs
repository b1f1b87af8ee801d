use super::element::Element;
use super::selector::Selector;

/// Well-known element ids the page behaviors look for
pub mod ids {
    pub const HEADER: &str = "main-header";
    pub const MOBILE_MENU: &str = "mobile-menu";
    pub const MOBILE_MENU_BUTTON: &str = "mobile-menu-btn";
    pub const BACK_TO_TOP: &str = "back-to-top";
}

/// Vertical extent of a `section[id]`
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

/// In-memory document and viewport
///
/// Stands in for the host page: behaviors read geometry from it and write
/// classes, inline styles, scroll position and history entries to it.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    body: Element,
    scroll_y: f64,
    viewport_height: f64,
    history: Vec<String>,
}

impl Page {
    pub fn new(body: Element, viewport_height: f64) -> Self {
        Self {
            body,
            scroll_y: 0.0,
            viewport_height,
            history: Vec::new(),
        }
    }

    pub fn body(&self) -> &Element {
        &self.body
    }

    pub fn body_mut(&mut self) -> &mut Element {
        &mut self.body
    }

    #[inline]
    pub fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    pub fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    pub fn set_viewport_height(&mut self, height: f64) {
        self.viewport_height = height.max(0.0);
        self.scroll_y = self.scroll_y.min(self.max_scroll());
    }

    /// Bottom edge of the lowest element
    pub fn document_height(&self) -> f64 {
        fn deepest(el: &Element) -> f64 {
            el.children
                .iter()
                .map(|child| child.bottom().max(deepest(child)))
                .fold(0.0, f64::max)
        }
        deepest(&self.body).max(self.viewport_height)
    }

    pub fn max_scroll(&self) -> f64 {
        (self.document_height() - self.viewport_height).max(0.0)
    }

    /// Write the scroll position, clamped to the scrollable range
    ///
    /// Returns whether the position changed. NaN is ignored.
    pub fn scroll_to(&mut self, y: f64) -> bool {
        if y.is_nan() {
            return false;
        }
        let clamped = y.clamp(0.0, self.max_scroll());
        let changed = clamped != self.scroll_y;
        self.scroll_y = clamped;
        changed
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn push_history(&mut self, entry: impl Into<String>) {
        self.history.push(entry.into());
    }

    /// First element matching a selector string
    pub fn query(&self, selector: &str) -> Option<&Element> {
        Selector::parse(selector).and_then(|selector| self.body.find(&selector))
    }

    /// Every element matching a selector string, in document order
    pub fn query_all(&self, selector: &str) -> Vec<&Element> {
        let mut out = Vec::new();
        if let Some(selector) = Selector::parse(selector) {
            self.body.find_all(&selector, &mut out);
        }
        out
    }

    pub fn get(&self, id: &str) -> Option<&Element> {
        self.body.find(&Selector::Id(id.to_string()))
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.body.find_mut(&Selector::Id(id.to_string()))
    }

    /// Ids of every element matching a selector string
    pub fn ids_matching(&self, selector: &str) -> Vec<String> {
        self.query_all(selector)
            .into_iter()
            .map(|el| el.id.clone())
            .filter(|id| !id.is_empty())
            .collect()
    }

    /// `section[id]` elements in document order
    pub fn sections(&self) -> Vec<SectionBounds> {
        self.query_all("section")
            .into_iter()
            .filter(|el| !el.id.is_empty())
            .map(|el| SectionBounds {
                id: el.id.clone(),
                top: el.top,
                height: el.height,
            })
            .collect()
    }

    /// `.nav-link` elements in document order
    pub fn nav_links(&self) -> Vec<&Element> {
        self.query_all(".nav-link")
    }

    /// Append an element to the body
    pub fn append(&mut self, element: Element) {
        self.body.children.push(element);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Page {
        let body = Element::new("body", "")
            .with_child(Element::new("header", ids::HEADER).at(0.0, 80.0))
            .with_child(Element::new("section", "a").at(80.0, 300.0))
            .with_child(Element::new("section", "").at(380.0, 100.0))
            .with_child(Element::new("section", "b").at(480.0, 520.0));
        Page::new(body, 400.0)
    }

    #[test]
    fn test_document_height_and_clamp() {
        let mut page = page();
        assert_eq!(page.document_height(), 1000.0);
        assert_eq!(page.max_scroll(), 600.0);

        assert!(page.scroll_to(900.0));
        assert_eq!(page.scroll_y(), 600.0);
        assert!(!page.scroll_to(650.0));
        assert!(page.scroll_to(-20.0));
        assert_eq!(page.scroll_y(), 0.0);
    }

    #[test]
    fn test_nan_scroll_is_ignored() {
        let mut page = page();
        page.scroll_to(250.0);
        assert!(!page.scroll_to(f64::NAN));
        assert_eq!(page.scroll_y(), 250.0);
    }

    #[test]
    fn test_sections_skip_missing_ids() {
        let ids: Vec<_> = page().sections().into_iter().map(|s| s.id).collect();
        assert_eq!(ids, ["a", "b"]);
    }

    #[test]
    fn test_query_by_id() {
        let page = page();
        assert_eq!(page.query("#b").map(|el| el.top), Some(480.0));
        assert!(page.query("#missing").is_none());
        assert!(page.query("#").is_none());
    }

    #[test]
    fn test_shrinking_document_reclamps_scroll() {
        let mut page = page();
        page.scroll_to(600.0);
        page.set_viewport_height(900.0);
        assert_eq!(page.scroll_y(), 100.0);
    }
}
