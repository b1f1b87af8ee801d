//! Scroll-triggered reveal of cards and sections
//!
//! A polling stand-in for an intersection observer: `check` is called after
//! every scroll and compares each observed element against the viewport.

use std::time::{Duration, Instant};

use tracing::debug;

use crate::config::RevealConfig;
use crate::page::{Element, Page};

pub const REVEALED_CLASS: &str = "scrolled-into-view";
pub const STAGGER_CHILD_CLASS: &str = "stagger-child";
pub const STAGGER_ANIMATED_CLASS: &str = "stagger-animated";

/// Fraction of `element` inside the viewport window `[top, bottom]`
pub fn visible_ratio(element: &Element, top: f64, bottom: f64) -> f64 {
    if element.height <= 0.0 {
        return if element.top >= top && element.top <= bottom { 1.0 } else { 0.0 };
    }
    let overlap = element.bottom().min(bottom) - element.top.max(top);
    (overlap / element.height).clamp(0.0, 1.0)
}

#[derive(Debug, Clone)]
pub struct RevealObserver {
    config: RevealConfig,
    /// Ids still being watched, in registration order
    observed: Vec<String>,
    /// Revealed ids and when they stop being watched
    unobserve_at: Vec<(String, Instant)>,
}

impl RevealObserver {
    pub fn new(config: RevealConfig) -> Self {
        Self {
            config,
            observed: Vec::new(),
            unobserve_at: Vec::new(),
        }
    }

    pub fn observe(&mut self, id: &str) {
        if !id.is_empty() && !self.is_observing(id) {
            self.observed.push(id.to_string());
        }
    }

    /// Observe every element matching the configured selectors
    pub fn observe_selectors(&mut self, page: &Page) {
        for selector in &self.config.selectors.clone() {
            for id in page.ids_matching(selector) {
                self.observe(&id);
            }
        }
        debug!(count = self.observed.len(), "Observing elements for reveal");
    }

    pub fn is_observing(&self, id: &str) -> bool {
        self.observed.iter().any(|observed| observed == id)
    }

    pub fn observed(&self) -> &[String] {
        &self.observed
    }

    /// Viewport window used for intersection, after the bottom margin
    fn viewport_window(&self, page: &Page) -> (f64, f64) {
        let top = page.scroll_y();
        let bottom = top + page.viewport_height() + self.config.bottom_margin;
        (top, bottom)
    }

    fn is_intersecting(&self, element: &Element, window: (f64, f64)) -> bool {
        let (top, bottom) = window;
        if bottom < top {
            return false;
        }
        let ratio = visible_ratio(element, top, bottom);
        ratio > 0.0 && ratio >= self.config.threshold
    }

    /// Reveal observed elements now in view
    ///
    /// Revealed elements stay observed until `unobserve_delay_ms` later.
    /// Returns the ids revealed by this call for the first time.
    pub fn check(&mut self, page: &mut Page, now: Instant) -> Vec<String> {
        let window = self.viewport_window(page);
        let mut revealed = Vec::new();

        for id in &self.observed {
            let in_view = page
                .get(id)
                .is_some_and(|element| self.is_intersecting(element, window));
            if !in_view {
                continue;
            }

            if let Some(element) = page.get_mut(id) {
                reveal(element, self.config.stagger_step_ms);
            }

            if !self.unobserve_at.iter().any(|(pending, _)| pending == id) {
                let at = now + Duration::from_millis(self.config.unobserve_delay_ms);
                self.unobserve_at.push((id.clone(), at));
                revealed.push(id.clone());
            }
        }

        if !revealed.is_empty() {
            debug!(?revealed, "Revealed elements");
        }
        revealed
    }

    /// Stop watching revealed elements whose delay has passed
    pub fn expire(&mut self, now: Instant) -> usize {
        let (due, waiting): (Vec<_>, Vec<_>) = self
            .unobserve_at
            .drain(..)
            .partition(|(_, at)| now >= *at);
        self.unobserve_at = waiting;
        self.observed
            .retain(|id| !due.iter().any(|(done, _)| done == id));
        due.len()
    }

    /// Earliest pending unobserve
    pub fn next_deadline(&self) -> Option<Instant> {
        self.unobserve_at.iter().map(|(_, at)| *at).min()
    }
}

/// Mark an element revealed and stagger its `.stagger-child` descendants
fn reveal(element: &mut Element, step_ms: u64) {
    element.add_class(REVEALED_CLASS);
    let mut index = 0u64;
    stagger(element, step_ms, &mut index);
}

fn stagger(element: &mut Element, step_ms: u64, index: &mut u64) {
    for child in element.children.iter_mut() {
        if child.has_class(STAGGER_CHILD_CLASS) {
            let delay = format!("{}s", (*index * step_ms) as f64 / 1000.0);
            child.set_style("transition-delay", &delay);
            child.add_class(STAGGER_ANIMATED_CLASS);
            *index += 1;
        }
        stagger(child, step_ms, index);
    }
}
