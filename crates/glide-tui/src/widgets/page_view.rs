use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::app::App;
use crate::page_lines::{LineKind, PageLine};
use crate::theme::GruvboxMaterial;

pub struct PageViewWidget;

impl PageViewWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let lines = app.lines();
        let first = app.scroll_row();

        let visible: Vec<Line> = lines
            .iter()
            .skip(first)
            .take(area.height as usize)
            .map(Self::render_line)
            .collect();

        let paragraph = Paragraph::new(visible)
            .block(Block::default().style(Style::default().bg(GruvboxMaterial::BG0)));
        frame.render_widget(paragraph, area);
    }

    fn render_line(line: &PageLine) -> Line<'static> {
        match line.kind {
            LineKind::SectionTitle { active } => {
                let style = if active {
                    Style::default()
                        .fg(GruvboxMaterial::ACTIVE)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                        .fg(GruvboxMaterial::FG1)
                        .add_modifier(Modifier::BOLD)
                };
                Line::from(Span::styled(format!("# {}", line.text), style))
            }
            LineKind::Text => Line::from(Span::styled(
                format!("  {}", line.text),
                Style::default().fg(GruvboxMaterial::FG0),
            )),
            LineKind::Card { revealed, hovered } => {
                // Unrevealed cards are dimmed until they scroll into view
                let mut style = if revealed {
                    Style::default().fg(GruvboxMaterial::AQUA)
                } else {
                    Style::default().fg(GruvboxMaterial::GREY0)
                };
                if hovered {
                    style = style.bg(GruvboxMaterial::SELECTION);
                }
                Line::from(Span::styled(format!("  ▌ {}", line.text), style))
            }
            LineKind::CardText => Line::from(Span::styled(
                format!("  ▌   {}", line.text),
                Style::default().fg(GruvboxMaterial::GREY2),
            )),
            LineKind::Item { animated } => {
                let style = if animated {
                    Style::default().fg(GruvboxMaterial::GREEN)
                } else {
                    Style::default().fg(GruvboxMaterial::GREY0)
                };
                Line::from(Span::styled(format!("  ▌   • {}", line.text), style))
            }
            LineKind::Button { hovered } => {
                let style = if hovered {
                    Style::default()
                        .fg(GruvboxMaterial::BG0)
                        .bg(GruvboxMaterial::HOVER)
                } else {
                    Style::default().fg(GruvboxMaterial::ORANGE)
                };
                Line::from(vec![
                    Span::raw("  "),
                    Span::styled(format!("[ {} ]", line.text), style),
                ])
            }
            LineKind::Blank => Line::default(),
        }
    }
}
