//! Flattening a page into terminal rows
//!
//! Every row covers `units_per_row` page units. Elements land on the row of
//! their top edge, or the next free row when that one is taken.

use glide_core::behavior::{highlight, hover::HoverKind, reveal};
use glide_core::page::{Element, Page};

/// Most rows a page is flattened into; anything placed lower is dropped
pub const MAX_ROWS: usize = 100_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    SectionTitle { active: bool },
    Text,
    Card { revealed: bool, hovered: bool },
    CardText,
    Item { animated: bool },
    Button { hovered: bool },
    Blank,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLine {
    pub kind: LineKind,
    pub text: String,
    /// Element the row belongs to
    pub id: Option<String>,
}

impl PageLine {
    fn blank() -> Self {
        Self {
            kind: LineKind::Blank,
            text: String::new(),
            id: None,
        }
    }

    fn new(kind: LineKind, text: impl Into<String>, id: &str) -> Self {
        Self {
            kind,
            text: text.into(),
            id: Some(id.to_string()),
        }
    }
}

/// Row holding page offset `y`
pub fn row_of(y: f64, units_per_row: f64) -> usize {
    (y / units_per_row.max(1.0)).floor().max(0.0) as usize
}

/// Page offset at the top of `row`
pub fn offset_of(row: usize, units_per_row: f64) -> f64 {
    row as f64 * units_per_row.max(1.0)
}

/// Put `line` on the first blank row at or after `row`, returning that row
///
/// Rows at or past `MAX_ROWS` are not created; the line is dropped and the
/// returned row is `MAX_ROWS`.
fn place(lines: &mut Vec<PageLine>, row: usize, line: PageLine) -> usize {
    let mut at = row;
    while at < lines.len() && lines[at].kind != LineKind::Blank {
        at += 1;
    }
    if at >= MAX_ROWS {
        return MAX_ROWS;
    }
    if at >= lines.len() {
        lines.resize(at + 1, PageLine::blank());
    }
    lines[at] = line;
    at
}

fn is_hovered(element: &Element) -> bool {
    element
        .style("transform")
        .is_some_and(|transform| transform != "translateY(0)")
}

/// Lay out every `section[id]` of the page as rows
pub fn page_lines(page: &Page, units_per_row: f64) -> Vec<PageLine> {
    // `as` saturates: an infinite height gives usize::MAX and NaN gives 0
    let total = (page.document_height() / units_per_row.max(1.0)).ceil() as usize;
    let mut lines = vec![PageLine::blank(); total.min(MAX_ROWS)];
    let active = highlight::active_link(page);

    for section in page.query_all("section") {
        if section.id.is_empty() {
            continue;
        }
        let is_active = active
            .as_deref()
            .and_then(|href| href.strip_prefix('#'))
            == Some(section.id.as_str());
        let title = section.label.clone().unwrap_or_else(|| section.id.clone());

        let mut row = place(
            &mut lines,
            row_of(section.top, units_per_row),
            PageLine::new(LineKind::SectionTitle { active: is_active }, title, &section.id),
        );
        if !section.text.is_empty() {
            row = place(
                &mut lines,
                row + 1,
                PageLine::new(LineKind::Text, &section.text, &section.id),
            );
        }

        for child in &section.children {
            match HoverKind::of(child) {
                Some(HoverKind::Button) => {
                    row = place(
                        &mut lines,
                        row + 1,
                        PageLine::new(
                            LineKind::Button { hovered: is_hovered(child) },
                            &child.text,
                            &child.id,
                        ),
                    );
                }
                Some(HoverKind::Card) => card_lines(&mut lines, child, units_per_row),
                None if child.has_class("card") => card_lines(&mut lines, child, units_per_row),
                None => {}
            }
        }
    }

    lines
}

fn card_lines(lines: &mut Vec<PageLine>, card: &Element, units_per_row: f64) {
    let title = card.label.clone().unwrap_or_else(|| card.id.clone());
    let kind = LineKind::Card {
        revealed: card.has_class(reveal::REVEALED_CLASS),
        hovered: is_hovered(card),
    };
    let mut row = place(lines, row_of(card.top, units_per_row), PageLine::new(kind, title, &card.id));
    if !card.text.is_empty() {
        row = place(lines, row + 1, PageLine::new(LineKind::CardText, &card.text, &card.id));
    }
    for item in &card.children {
        let kind = LineKind::Item {
            animated: item.has_class(reveal::STAGGER_ANIMATED_CLASS),
        };
        row = place(lines, row + 1, PageLine::new(kind, &item.text, &card.id));
    }
}

/// Id of the element drawn on `row`
pub fn hit_test(lines: &[PageLine], row: usize) -> Option<&str> {
    lines.get(row).and_then(|line| line.id.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use glide_core::PageLayout;

    const LAYOUT: &str = r##"
        viewport_height = 400.0

        [header]
        title = "Site"
        height = 80.0

        [[sections]]
        id = "a"
        title = "Alpha"
        text = "First"
        height = 300.0

        [[sections.buttons]]
        label = "Go"
        href = "#b"

        [[sections]]
        id = "b"
        title = "Beta"
        height = 500.0

        [[sections.cards]]
        title = "Card"
        text = "Body"
        stagger = ["one", "two"]
    "##;

    fn page() -> Page {
        PageLayout::from_toml(LAYOUT).unwrap().into_page().unwrap()
    }

    #[test]
    fn test_rows_follow_geometry() {
        let lines = page_lines(&page(), 20.0);
        assert_eq!(lines.len(), 44);

        assert_eq!(lines[4].text, "Alpha");
        assert_eq!(lines[5].kind, LineKind::Text);
        assert_eq!(lines[6].kind, LineKind::Button { hovered: false });
        assert_eq!(lines[19].text, "Beta");

        // card top is 380 + 60
        assert_eq!(lines[22].text, "Card");
        assert_eq!(lines[23].kind, LineKind::CardText);
        assert_eq!(lines[24].text, "one");
        assert_eq!(lines[25].kind, LineKind::Item { animated: false });
    }

    #[test]
    fn test_collisions_move_down() {
        // at 200 units per row Beta's own row 1 is already taken
        let lines = page_lines(&page(), 200.0);
        assert_eq!(lines[0].text, "Alpha");
        assert_eq!(lines[1].kind, LineKind::Text);
        assert_eq!(lines[2].kind, LineKind::Button { hovered: false });
        assert_eq!(lines[3].text, "Beta");
        assert_eq!(lines[4].text, "Card");
        // rows past the document end are appended
        assert_eq!(lines.len(), 8);
    }

    #[test]
    fn test_active_section_marked() {
        let mut page = page();
        glide_core::behavior::highlight::highlight_active_section(&mut page, 100.0);
        let lines = page_lines(&page, 20.0);
        assert_eq!(lines[4].kind, LineKind::SectionTitle { active: true });
        assert_eq!(lines[19].kind, LineKind::SectionTitle { active: false });
    }

    #[test]
    fn test_hit_test() {
        let lines = page_lines(&page(), 20.0);
        assert_eq!(hit_test(&lines, 6), Some("a-btn-1"));
        assert_eq!(hit_test(&lines, 23), Some("b-card-1"));
        assert_eq!(hit_test(&lines, 0), None);
        assert_eq!(hit_test(&lines, 500), None);
    }

    #[test]
    fn test_unbounded_geometry_is_capped() {
        // pages built in code skip layout validation
        let body = Element::new("body", "")
            .with_child(Element::new("section", "tall").with_label("Tall").at(0.0, f64::INFINITY))
            .with_child(Element::new("section", "far").with_label("Far").at(1e12, 100.0));
        let page = Page::new(body, 600.0);

        let lines = page_lines(&page, 20.0);
        assert_eq!(lines.len(), MAX_ROWS);
        assert_eq!(lines[0].text, "Tall");
        assert!(lines.iter().all(|line| line.text != "Far"));
    }

    #[test]
    fn test_row_conversions() {
        assert_eq!(row_of(0.0, 20.0), 0);
        assert_eq!(row_of(39.9, 20.0), 1);
        assert_eq!(row_of(-5.0, 20.0), 0);
        assert_eq!(offset_of(3, 20.0), 60.0);
    }
}
