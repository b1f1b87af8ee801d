//! TOML page descriptions
//!
//! A layout lists the header and the sections of a page; `into_page` stacks
//! the sections vertically under the header and generates the navigation,
//! mobile menu, cards and buttons the behaviors work with.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::document::{ids, Page};
use super::element::Element;
use crate::{Error, Result};

const DEMO_LAYOUT: &str = include_str!("../../assets/demo_page.toml");

/// Offset of the first card below its section's top edge
const CARD_INSET: f64 = 60.0;
const CARD_GAP: f64 = 20.0;
/// Height of one mobile menu entry
const MENU_ITEM_HEIGHT: f64 = 40.0;
/// Tallest page a layout may describe, in page units
const MAX_DOCUMENT_HEIGHT: f64 = 1_000_000.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageLayout {
    #[serde(default = "default_viewport_height")]
    pub viewport_height: f64,
    #[serde(default)]
    pub header: Option<HeaderLayout>,
    /// Generate a collapsible mobile menu in the header
    #[serde(default = "default_true")]
    pub mobile_menu: bool,
    #[serde(default)]
    pub sections: Vec<SectionLayout>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeaderLayout {
    pub title: String,
    #[serde(default = "default_header_height")]
    pub height: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionLayout {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub text: String,
    #[serde(default = "default_section_height")]
    pub height: f64,
    #[serde(default)]
    pub classes: Vec<String>,
    /// List the section in the navigation
    #[serde(default = "default_true")]
    pub nav: bool,
    #[serde(default)]
    pub cards: Vec<CardLayout>,
    #[serde(default)]
    pub buttons: Vec<ButtonLayout>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardLayout {
    pub title: String,
    #[serde(default)]
    pub text: String,
    #[serde(default = "default_card_height")]
    pub height: f64,
    /// Lift on hover
    #[serde(default = "default_true")]
    pub hover: bool,
    /// Render as a contact card
    #[serde(default)]
    pub contact: bool,
    /// Items revealed one after another
    #[serde(default)]
    pub stagger: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ButtonLayout {
    pub label: String,
    pub href: String,
}

fn default_viewport_height() -> f64 {
    600.0
}

fn default_header_height() -> f64 {
    80.0
}

fn default_section_height() -> f64 {
    500.0
}

fn default_card_height() -> f64 {
    120.0
}

fn default_true() -> bool {
    true
}

impl PageLayout {
    /// Parse a layout from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load a layout file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// The bundled demo page
    pub fn demo() -> Result<Self> {
        Self::from_toml(DEMO_LAYOUT)
    }

    fn validate(&self) -> Result<()> {
        if !self.viewport_height.is_finite() || self.viewport_height <= 0.0 {
            return Err(Error::Layout(format!(
                "viewport_height must be a positive number, got {}",
                self.viewport_height
            )));
        }
        let mut total = 0.0;
        if let Some(header) = &self.header {
            if !header.height.is_finite() || header.height < 0.0 {
                return Err(Error::Layout(format!(
                    "header height must be a non-negative number, got {}",
                    header.height
                )));
            }
            total += header.height;
        }

        let mut seen = HashSet::new();
        for section in &self.sections {
            if section.id.is_empty() || section.id.contains(char::is_whitespace) {
                return Err(Error::Layout(format!(
                    "invalid section id {:?}",
                    section.id
                )));
            }
            if !seen.insert(section.id.as_str()) {
                return Err(Error::Layout(format!("duplicate section id {}", section.id)));
            }
            if !section.height.is_finite() || section.height <= 0.0 {
                return Err(Error::Layout(format!(
                    "section {} must have a positive height",
                    section.id
                )));
            }
            if let Some(card) = section
                .cards
                .iter()
                .find(|card| !card.height.is_finite() || card.height < 0.0)
            {
                return Err(Error::Layout(format!(
                    "card {:?} in section {} has an invalid height",
                    card.title, section.id
                )));
            }
            total += section.height;
        }

        if total > MAX_DOCUMENT_HEIGHT {
            return Err(Error::Layout(format!(
                "page is {} units tall, the limit is {}",
                total, MAX_DOCUMENT_HEIGHT
            )));
        }
        Ok(())
    }

    /// Build the in-memory page
    pub fn into_page(&self) -> Result<Page> {
        self.validate()?;

        let mut body = Element::new("body", "");
        let header_height = self.header.as_ref().map_or(0.0, |h| h.height);

        if let Some(header) = &self.header {
            body.children.push(self.header_element(header));
        }

        let mut top = header_height;
        for section in &self.sections {
            body.children.push(section_element(section, top));
            top += section.height;
        }

        Ok(Page::new(body, self.viewport_height))
    }

    fn header_element(&self, header: &HeaderLayout) -> Element {
        let mut element = Element::new("header", ids::HEADER)
            .with_text(&header.title)
            .at(0.0, header.height);

        let linked: Vec<&SectionLayout> = self.sections.iter().filter(|s| s.nav).collect();

        for section in &linked {
            element.children.push(
                Element::new("a", format!("nav-{}", section.id))
                    .with_class("nav-link")
                    .with_href(format!("#{}", section.id))
                    .with_text(&section.title)
                    .at(0.0, header.height),
            );
        }

        if self.mobile_menu {
            element.children.push(
                Element::new("button", ids::MOBILE_MENU_BUTTON)
                    .with_label("Toggle menu")
                    .at(0.0, header.height),
            );

            let mut menu = Element::new("nav", ids::MOBILE_MENU).at(header.height, 0.0);
            menu.scroll_height = linked.len() as f64 * MENU_ITEM_HEIGHT;
            for (index, section) in linked.iter().enumerate() {
                menu.children.push(
                    Element::new("a", format!("mobile-nav-{}", section.id))
                        .with_class("mobile-link")
                        .with_href(format!("#{}", section.id))
                        .with_text(&section.title)
                        .at(header.height + index as f64 * MENU_ITEM_HEIGHT, MENU_ITEM_HEIGHT),
                );
            }
            element.children.push(menu);
        }

        element
    }
}

fn section_element(section: &SectionLayout, top: f64) -> Element {
    let mut element = Element::new("section", &section.id)
        .with_class("section")
        .with_label(&section.title)
        .with_text(&section.text)
        .at(top, section.height);
    for class in &section.classes {
        element.add_class(class);
    }

    let mut card_top = top + CARD_INSET;
    for (index, card) in section.cards.iter().enumerate() {
        let card_id = format!("{}-card-{}", section.id, index + 1);
        let mut el = Element::new("div", &card_id)
            .with_label(&card.title)
            .with_text(&card.text)
            .at(card_top, card.height);
        if card.contact {
            el.add_class("contact-card");
        } else {
            el.add_class("card");
        }
        if card.hover {
            el.add_class("card-hover");
        }
        for (item_index, item) in card.stagger.iter().enumerate() {
            el.children.push(
                Element::new("li", format!("{}-item-{}", card_id, item_index + 1))
                    .with_class("stagger-child")
                    .with_text(item),
            );
        }
        element.children.push(el);
        card_top += card.height + CARD_GAP;
    }

    for (index, button) in section.buttons.iter().enumerate() {
        element.children.push(
            Element::new("a", format!("{}-btn-{}", section.id, index + 1))
                .with_class("btn")
                .with_href(&button.href)
                .with_text(&button.label),
        );
    }

    element
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL: &str = r##"
        viewport_height = 400.0

        [header]
        title = "Site"
        height = 80.0

        [[sections]]
        id = "a"
        title = "A"
        height = 300.0

        [[sections]]
        id = "b"
        title = "B"
        height = 500.0
        classes = ["section-alt"]

        [[sections.cards]]
        title = "Card"
        stagger = ["one", "two"]

        [[sections.buttons]]
        label = "Back"
        href = "#a"
    "##;

    #[test]
    fn test_sections_stack_below_header() {
        let page = PageLayout::from_toml(SMALL).unwrap().into_page().unwrap();
        let sections = page.sections();
        assert_eq!(sections.len(), 2);
        assert_eq!((sections[0].top, sections[0].height), (80.0, 300.0));
        assert_eq!((sections[1].top, sections[1].height), (380.0, 500.0));
        assert_eq!(page.document_height(), 880.0);
    }

    #[test]
    fn test_generates_navigation_and_menu() {
        let page = PageLayout::from_toml(SMALL).unwrap().into_page().unwrap();
        let hrefs: Vec<_> = page
            .nav_links()
            .into_iter()
            .filter_map(|link| link.href.clone())
            .collect();
        assert_eq!(hrefs, ["#a", "#b"]);

        let menu = page.get(ids::MOBILE_MENU).unwrap();
        assert_eq!(menu.height, 0.0);
        assert_eq!(menu.scroll_height, 80.0);
        assert!(page.get(ids::MOBILE_MENU_BUTTON).is_some());
    }

    #[test]
    fn test_cards_and_buttons() {
        let page = PageLayout::from_toml(SMALL).unwrap().into_page().unwrap();
        let card = page.get("b-card-1").unwrap();
        assert!(card.has_class("card"));
        assert!(card.has_class("card-hover"));
        assert_eq!(card.top, 380.0 + CARD_INSET);
        assert_eq!(card.children.len(), 2);
        assert!(page.get("b-card-1-item-2").unwrap().has_class("stagger-child"));

        let button = page.get("b-btn-1").unwrap();
        assert!(button.has_class("btn"));
        assert_eq!(button.href.as_deref(), Some("#a"));
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let layout = PageLayout::from_toml(
            r#"
            [[sections]]
            id = "a"
            title = "A"

            [[sections]]
            id = "a"
            title = "Again"
            "#,
        )
        .unwrap();
        assert!(matches!(layout.into_page(), Err(Error::Layout(_))));
    }

    #[test]
    fn test_rejects_empty_section() {
        let layout = PageLayout::from_toml(
            r#"
            [[sections]]
            id = "a"
            title = "A"
            height = 0.0
            "#,
        )
        .unwrap();
        assert!(layout.into_page().is_err());
    }

    #[test]
    fn test_rejects_non_finite_geometry() {
        for layout in [
            "viewport_height = nan",
            "viewport_height = inf",
            "[header]\ntitle = \"Site\"\nheight = inf",
            "[header]\ntitle = \"Site\"\nheight = nan",
            "[[sections]]\nid = \"a\"\ntitle = \"A\"\nheight = inf",
            "[[sections]]\nid = \"a\"\ntitle = \"A\"\nheight = nan",
            "[[sections]]\nid = \"a\"\ntitle = \"A\"\n[[sections.cards]]\ntitle = \"C\"\nheight = -inf",
        ] {
            let parsed = PageLayout::from_toml(layout).unwrap();
            assert!(
                matches!(parsed.into_page(), Err(Error::Layout(_))),
                "accepted {:?}",
                layout
            );
        }
    }

    #[test]
    fn test_rejects_oversized_page() {
        let layout = PageLayout::from_toml(
            r#"
            [[sections]]
            id = "a"
            title = "A"
            height = 1e12
            "#,
        )
        .unwrap();
        assert!(matches!(layout.into_page(), Err(Error::Layout(_))));
    }

    #[test]
    fn test_page_without_header() {
        let layout = PageLayout::from_toml(
            r#"
            mobile_menu = false

            [[sections]]
            id = "only"
            title = "Only"
            "#,
        )
        .unwrap();
        let page = layout.into_page().unwrap();
        assert!(page.get(ids::HEADER).is_none());
        assert_eq!(page.sections()[0].top, 0.0);
    }

    #[test]
    fn test_demo_layout_builds() {
        let page = PageLayout::demo().unwrap().into_page().unwrap();
        assert!(page.get("hero").is_some());
        assert!(page.get("contact-card-1").unwrap().has_class("contact-card"));
        assert!(page.max_scroll() > 0.0);
    }
}
