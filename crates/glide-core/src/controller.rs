//! Event wiring for a page
//!
//! `PageController` owns a `Page` together with the scroll animator, the
//! debounced scroll handlers and the reveal observer, and routes host events
//! to the behaviors. The host feeds it events and a clock; it never reads the
//! time itself, so tests drive it with fixed instants.

use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::behavior::{
    back_to_top, highlight, hover, mobile_menu, smooth_scroll, sticky_header, RevealObserver,
};
use crate::config::AppConfig;
use crate::debounce::DebounceState;
use crate::page::{ids, Page};
use crate::scroll::ScrollAnimator;

/// Class added to the body once the page has settled after wiring
pub const LOADED_CLASS: &str = "page-loaded";

/// Input from the host
#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    /// The host changed the scroll position
    Scrolled,
    /// An element was clicked
    Click { id: String },
    MouseEnter { id: String },
    MouseLeave { id: String },
    /// Animation frame
    Frame,
    /// The viewport changed size
    Resized { viewport_height: f64 },
}

#[derive(Debug)]
pub struct PageController {
    page: Page,
    config: AppConfig,
    animator: ScrollAnimator,
    header_debounce: DebounceState<()>,
    highlight_debounce: DebounceState<()>,
    reveal: RevealObserver,
    /// When the body gets `page-loaded`, until it has it
    loaded_at: Option<Instant>,
}

impl PageController {
    /// Attach every behavior to `page`
    ///
    /// Inserts the back-to-top button, registers reveal targets, runs the
    /// initial highlight and reveal pass and schedules the page-loaded class.
    pub fn wire(mut page: Page, config: &AppConfig, now: Instant) -> Self {
        let debounce = &config.debounce;
        back_to_top::install(&mut page);

        let mut reveal = RevealObserver::new(config.reveal.clone());
        reveal.observe_selectors(&page);

        let mut animator = ScrollAnimator::starting_at(config.scroll.clone(), now);
        animator.set_scroll(page.scroll_y());

        let mut controller = Self {
            page,
            config: config.clone(),
            animator,
            header_debounce: DebounceState::new(
                Duration::from_millis(debounce.header_wait_ms),
                debounce.immediate,
            ),
            highlight_debounce: DebounceState::new(
                Duration::from_millis(debounce.highlight_wait_ms),
                debounce.immediate,
            ),
            reveal,
            loaded_at: Some(now + Duration::from_millis(config.page.loaded_delay_ms)),
        };

        controller.highlight();
        controller.reveal.check(&mut controller.page, now);

        info!(
            sections = controller.page.sections().len(),
            observed = controller.reveal.observed().len(),
            "Page wired"
        );
        controller
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn animator(&self) -> &ScrollAnimator {
        &self.animator
    }

    /// Href of the highlighted nav link
    pub fn active_link(&self) -> Option<String> {
        highlight::active_link(&self.page)
    }

    pub fn is_loaded(&self) -> bool {
        self.page.body().has_class(LOADED_CLASS)
    }

    /// Route one host event
    pub fn handle(&mut self, event: PageEvent, now: Instant) {
        match event {
            PageEvent::Scrolled => self.on_scroll(now),
            PageEvent::Click { id } => self.on_click(&id, now),
            PageEvent::MouseEnter { id } => {
                hover::enter(&mut self.page, &id);
            }
            PageEvent::MouseLeave { id } => {
                hover::leave(&mut self.page, &id);
            }
            PageEvent::Frame => self.on_frame(now),
            PageEvent::Resized { viewport_height } => {
                self.page.set_viewport_height(viewport_height);
                // A running animation keeps going; the page clamps each frame
                if !self.animator.is_animating() {
                    self.animator.set_scroll(self.page.scroll_y());
                }
                self.on_scroll(now);
            }
        }
    }

    /// User scroll by `delta`; stops any running animation
    ///
    /// Returns whether the position changed.
    pub fn scroll_by(&mut self, delta: f64, now: Instant) -> bool {
        let target = self.page.scroll_y() + delta;
        self.scroll_to(target, now)
    }

    /// User scroll to an absolute position; stops any running animation
    pub fn scroll_to(&mut self, y: f64, now: Instant) -> bool {
        self.animator.cancel();
        let changed = self.page.scroll_to(y);
        self.animator.set_scroll(self.page.scroll_y());
        if changed {
            self.on_scroll(now);
        }
        changed
    }

    /// Smooth scroll to the element matching `selector`
    pub fn smooth_scroll_to(&mut self, selector: &str, now: Instant) -> bool {
        let before = self.page.scroll_y();
        let duration_ms = self.config.scroll.duration_ms_f64();
        let started =
            smooth_scroll::smooth_scroll_to(&mut self.page, &mut self.animator, selector, duration_ms);
        // Smooth scrolling disabled: the position was written directly
        if started && self.page.scroll_y() != before {
            self.on_scroll(now);
        }
        started
    }

    /// Whether the host should keep delivering frames
    pub fn needs_frames(&self) -> bool {
        self.animator.is_animating() || self.next_deadline().is_some()
    }

    /// Earliest instant at which a frame has timed work to do
    pub fn next_deadline(&self) -> Option<Instant> {
        [
            self.header_debounce.deadline(),
            self.highlight_debounce.deadline(),
            self.reveal.next_deadline(),
            self.loaded_at,
        ]
        .into_iter()
        .flatten()
        .min()
    }

    fn update_header(&mut self) {
        let threshold = self.config.header.scrolled_threshold;
        sticky_header::update_header(&mut self.page, threshold);
    }

    fn highlight(&mut self) {
        let nav_offset = self.config.highlight.nav_offset;
        highlight::highlight_active_section(&mut self.page, nav_offset);
    }

    /// Run handlers whose debounce window has closed
    fn flush_debounces(&mut self, now: Instant) {
        if self.header_debounce.expire(now).is_some() {
            self.update_header();
        }
        if self.highlight_debounce.expire(now).is_some() {
            self.highlight();
        }
    }

    fn on_scroll(&mut self, now: Instant) {
        self.flush_debounces(now);

        if self.header_debounce.call(now, ()).is_some() {
            self.update_header();
        }
        if self.highlight_debounce.call(now, ()).is_some() {
            self.highlight();
        }

        back_to_top::update_visibility(&mut self.page, self.config.back_to_top.show_threshold);
        self.reveal.check(&mut self.page, now);
    }

    fn on_click(&mut self, id: &str, now: Instant) {
        if id == ids::BACK_TO_TOP {
            let target = self.config.back_to_top.target.clone();
            self.smooth_scroll_to(&target, now);
            return;
        }
        if id == ids::MOBILE_MENU_BUTTON {
            mobile_menu::toggle(&mut self.page);
            return;
        }

        let Some(element) = self.page.get(id) else {
            debug!(id, "Click on unknown element");
            return;
        };
        let href = element.href.clone();
        let in_menu = self
            .page
            .get(ids::MOBILE_MENU)
            .is_some_and(|menu| menu.contains(id));

        match href {
            Some(href) if smooth_scroll::is_scroll_anchor(&href) => {
                self.smooth_scroll_to(&href, now);
                mobile_menu::close(&mut self.page);
            }
            Some(_) if in_menu => {
                mobile_menu::toggle(&mut self.page);
            }
            _ => {}
        }
    }

    fn on_frame(&mut self, now: Instant) {
        self.flush_debounces(now);

        if self.animator.is_animating() {
            let offset = self.animator.update(now);
            if self.page.scroll_to(offset) {
                self.on_scroll(now);
            }
        }

        self.reveal.expire(now);

        if self.loaded_at.is_some_and(|at| now >= at) {
            self.loaded_at = None;
            self.page.body_mut().add_class(LOADED_CLASS);
            debug!("Page loaded");
        }
    }
}
