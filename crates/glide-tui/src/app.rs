use std::time::Instant;

use glide_core::behavior::{back_to_top, mobile_menu};
use glide_core::page::{ids, Page};
use glide_core::{AppConfig, PageController, PageEvent};
use tracing::debug;

use crate::page_lines::{self, PageLine};

/// Application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Browsing the page
    Normal,
    /// Mobile menu overlay is open
    Menu,
    /// Help overlay
    Help,
}

/// Application state
pub struct App {
    /// Page and its wired behaviors
    pub controller: PageController,
    /// Current application mode
    pub mode: Mode,
    /// Page units drawn per terminal row
    pub units_per_row: f64,
    /// Rows available to the page view
    pub viewport_rows: u16,
    /// Element under the mouse pointer
    pub hovered: Option<String>,
    /// Whether the app should quit
    pub should_quit: bool,
    /// Status message
    pub status_message: Option<String>,
}

impl App {
    pub fn new(page: Page, config: &AppConfig, now: Instant) -> Self {
        let units_per_row = config.ui.units_per_row.max(1.0);
        let viewport_rows = (page.viewport_height() / units_per_row).round() as u16;
        Self {
            controller: PageController::wire(page, config, now),
            mode: Mode::Normal,
            units_per_row,
            viewport_rows,
            hovered: None,
            should_quit: false,
            status_message: None,
        }
    }

    pub fn page(&self) -> &Page {
        self.controller.page()
    }

    /// First visible row
    pub fn scroll_row(&self) -> usize {
        page_lines::row_of(self.page().scroll_y(), self.units_per_row)
    }

    pub fn lines(&self) -> Vec<PageLine> {
        page_lines::page_lines(self.page(), self.units_per_row)
    }

    /// Fit the page viewport to `rows` terminal rows
    pub fn relayout(&mut self, rows: u16, now: Instant) {
        self.viewport_rows = rows.max(1);
        let viewport_height = page_lines::offset_of(self.viewport_rows as usize, self.units_per_row);
        debug!(rows = self.viewport_rows, viewport_height, "Relayout");
        self.controller
            .handle(PageEvent::Resized { viewport_height }, now);
    }

    pub fn scroll_rows(&mut self, rows: i32, now: Instant) {
        let delta = f64::from(rows) * self.units_per_row;
        self.controller.scroll_by(delta, now);
    }

    pub fn scroll_half_page_down(&mut self, now: Instant) {
        self.scroll_rows(i32::from(self.viewport_rows / 2), now);
    }

    pub fn scroll_half_page_up(&mut self, now: Instant) {
        self.scroll_rows(-i32::from(self.viewport_rows / 2), now);
    }

    /// Click an element of the page
    pub fn click(&mut self, id: &str, now: Instant) {
        self.controller.handle(PageEvent::Click { id: id.to_string() }, now);
        self.sync_mode();
    }

    /// Follow the `index`-th (1-based) link of the nav bar, or of the menu
    /// while it is open
    pub fn follow_link(&mut self, index: usize, now: Instant) {
        let selector = if self.mode == Mode::Menu {
            ".mobile-link"
        } else {
            ".nav-link"
        };
        let Some(id) = index
            .checked_sub(1)
            .and_then(|i| self.page().ids_matching(selector).into_iter().nth(i))
        else {
            self.set_status(format!("No link {}", index));
            return;
        };
        self.click(&id, now);
    }

    pub fn back_to_top(&mut self, now: Instant) {
        if back_to_top::is_visible(self.page()) {
            self.click(ids::BACK_TO_TOP, now);
        }
    }

    pub fn toggle_menu(&mut self, now: Instant) {
        if self.page().get(ids::MOBILE_MENU).is_none() {
            self.set_status("This page has no menu");
            return;
        }
        self.click(ids::MOBILE_MENU_BUTTON, now);
    }

    pub fn toggle_help(&mut self) {
        self.mode = match self.mode {
            Mode::Help => Mode::Normal,
            _ => Mode::Help,
        };
    }

    /// Pointer moved over page row `row` of the page view
    pub fn hover_row(&mut self, row: usize, now: Instant) {
        let lines = self.lines();
        let target = page_lines::hit_test(&lines, self.scroll_row() + row).map(String::from);
        if target == self.hovered {
            return;
        }
        if let Some(previous) = self.hovered.take() {
            self.controller.handle(PageEvent::MouseLeave { id: previous }, now);
        }
        if let Some(id) = &target {
            self.controller
                .handle(PageEvent::MouseEnter { id: id.clone() }, now);
        }
        self.hovered = target;
    }

    /// Pointer clicked page row `row` of the page view
    pub fn click_row(&mut self, row: usize, now: Instant) {
        let lines = self.lines();
        if let Some(id) = page_lines::hit_test(&lines, self.scroll_row() + row).map(String::from) {
            self.click(&id, now);
        }
    }

    /// Deliver an animation frame
    pub fn tick(&mut self, now: Instant) {
        self.controller.handle(PageEvent::Frame, now);
    }

    /// Whether frames should come at the animation rate
    pub fn needs_fast_update(&self) -> bool {
        self.controller.needs_frames()
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    fn sync_mode(&mut self) {
        let open = mobile_menu::is_open(self.page());
        self.mode = match (self.mode, open) {
            (_, true) => Mode::Menu,
            (Mode::Menu, false) => Mode::Normal,
            (mode, false) => mode,
        };
    }
}
