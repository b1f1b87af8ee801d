use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::App;
use crate::theme::GruvboxMaterial;

pub struct PopupWidget;

impl PopupWidget {
    /// Render the open mobile menu as a panel under the header
    pub fn render_menu(frame: &mut Frame, area: Rect, app: &App) {
        let links = app.page().query_all(".mobile-link");
        let height = (links.len() as u16 + 2).min(area.height);
        let menu_area = Rect::new(area.x, area.y, area.width.min(40), height);

        frame.render_widget(Clear, menu_area);

        let block = Block::default()
            .title(" Menu ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GruvboxMaterial::ACCENT))
            .style(Style::default().bg(GruvboxMaterial::BG1));

        let lines: Vec<Line> = links
            .iter()
            .enumerate()
            .map(|(index, link)| {
                Line::from(vec![
                    Span::styled(
                        format!(" {} ", index + 1),
                        Style::default().fg(GruvboxMaterial::GREY1),
                    ),
                    Span::styled(link.text.clone(), Style::default().fg(GruvboxMaterial::FG0)),
                ])
            })
            .collect();

        frame.render_widget(Paragraph::new(lines).block(block), menu_area);
    }

    /// Render the key binding help
    pub fn render_help(frame: &mut Frame) {
        let area = frame.area();
        let bindings = [
            ("j / k", "scroll one row"),
            ("Ctrl-d / Ctrl-u", "scroll half a page"),
            ("1-9", "follow nav link"),
            ("t", "back to top"),
            ("m", "toggle menu"),
            ("q", "quit"),
        ];

        let popup_width = 44u16.min(area.width.saturating_sub(4));
        let popup_height = (bindings.len() as u16 + 2).min(area.height.saturating_sub(2));
        let popup_area = centered_rect(popup_width, popup_height, area);

        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(" Help ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GruvboxMaterial::ACCENT))
            .style(Style::default().bg(GruvboxMaterial::BG1));

        let lines: Vec<Line> = bindings
            .iter()
            .map(|(keys, what)| {
                Line::from(vec![
                    Span::styled(
                        format!(" {:<16}", keys),
                        Style::default()
                            .fg(GruvboxMaterial::YELLOW)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(*what, Style::default().fg(GruvboxMaterial::FG0)),
                ])
            })
            .collect();

        frame.render_widget(Paragraph::new(lines).block(block), popup_area);
    }
}

/// Helper function to create a centered rect
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}
