use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use glide_core::behavior::back_to_top;

use crate::app::{App, Mode};
use crate::theme::GruvboxMaterial;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let page = app.page();
        let mode_str = match app.mode {
            Mode::Normal if app.controller.animator().is_animating() => "SCROLL",
            Mode::Normal => "NORMAL",
            Mode::Menu => "MENU",
            Mode::Help => "HELP",
        };

        let max_scroll = page.max_scroll();
        let percent = if max_scroll > 0.0 {
            (page.scroll_y() / max_scroll * 100.0).round() as u32
        } else {
            100
        };
        let section = app
            .controller
            .active_link()
            .map(|href| href.trim_start_matches('#').to_string())
            .unwrap_or_else(|| "-".to_string());

        let status_text = if let Some(msg) = &app.status_message {
            format!(" {}", msg)
        } else {
            format!(" {} | {} | {}%", mode_str, section, percent)
        };

        let help_hint = if back_to_top::is_visible(page) {
            " t:top ↑ | q:quit j/k:scroll 1-9:links m:menu ?:help "
        } else {
            " q:quit j/k:scroll 1-9:links m:menu ?:help "
        };
        let padding_len = (area.width as usize)
            .saturating_sub(status_text.chars().count() + help_hint.chars().count());

        let line = Line::from(vec![
            Span::styled(
                status_text,
                Style::default()
                    .fg(GruvboxMaterial::FG0)
                    .bg(GruvboxMaterial::BG2),
            ),
            Span::styled(
                " ".repeat(padding_len),
                Style::default().bg(GruvboxMaterial::BG2),
            ),
            Span::styled(
                help_hint,
                Style::default()
                    .fg(GruvboxMaterial::GREY2)
                    .bg(GruvboxMaterial::BG2),
            ),
        ]);

        let paragraph = Paragraph::new(line);
        frame.render_widget(paragraph, area);
    }
}
