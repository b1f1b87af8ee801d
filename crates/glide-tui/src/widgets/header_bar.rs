use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use glide_core::behavior::{highlight, sticky_header};
use glide_core::page::ids;

use crate::app::App;
use crate::theme::GruvboxMaterial;

pub struct HeaderBarWidget;

impl HeaderBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let page = app.page();
        let header = page.get(ids::HEADER);
        let scrolled = header.is_some_and(|h| h.has_class(sticky_header::SCROLLED_CLASS));

        // The scrolled header gets a heavier border, like its drop shadow
        let border_style = if scrolled {
            Style::default().fg(GruvboxMaterial::ACCENT)
        } else {
            Style::default().fg(GruvboxMaterial::GREY0)
        };

        let title = header.map(|h| h.text.clone()).unwrap_or_default();
        let block = Block::default()
            .title(format!(" {} ", title))
            .borders(Borders::BOTTOM)
            .border_style(border_style)
            .style(Style::default().bg(if scrolled {
                GruvboxMaterial::BG1
            } else {
                GruvboxMaterial::BG0
            }));

        let mut spans = Vec::new();
        for (index, link) in page.nav_links().into_iter().enumerate() {
            let style = if link.has_class(highlight::ACTIVE_CLASS) {
                Style::default()
                    .fg(GruvboxMaterial::ACTIVE)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default().fg(GruvboxMaterial::FG0)
            };
            spans.push(Span::styled(
                format!("{}", index + 1),
                Style::default().fg(GruvboxMaterial::GREY1),
            ));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(link.text.clone(), style));
            spans.push(Span::raw("   "));
        }

        let paragraph = Paragraph::new(Line::from(spans)).block(block);
        frame.render_widget(paragraph, area);
    }
}
