//! Scroll animation controller
//!
//! Combines the stepping engine with configuration and owns the single
//! active run for a viewport. This is what page behaviors talk to.

use std::time::Instant;

use tracing::debug;

use super::config::ScrollConfig;
use super::run::ScrollRun;
use super::timing::elapsed_ms;

/// Scroll animation controller
///
/// Call `scroll_to()` to begin an animation, then `update()` each frame
/// to get the current interpolated scroll position. Starting a new animation
/// replaces the running one, so at most one run writes the viewport.
#[derive(Debug, Clone)]
pub struct ScrollAnimator {
    /// Current active run (if any)
    animation: Option<ScrollRun>,
    /// Configuration
    config: ScrollConfig,
    /// Current scroll position (always up-to-date)
    current_scroll: f64,
    /// Reference point for frame timestamps
    epoch: Instant,
}

impl Default for ScrollAnimator {
    fn default() -> Self {
        Self::new(ScrollConfig::default())
    }
}

impl ScrollAnimator {
    /// Create a new scroll animator with configuration
    pub fn new(config: ScrollConfig) -> Self {
        Self::starting_at(config, Instant::now())
    }

    /// Create a scroll animator whose frame clock counts from `epoch`
    pub fn starting_at(config: ScrollConfig, epoch: Instant) -> Self {
        Self {
            animation: None,
            config,
            current_scroll: 0.0,
            epoch,
        }
    }

    /// Create with default configuration
    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// Update configuration
    pub fn set_config(&mut self, config: ScrollConfig) {
        self.config = config;
    }

    /// Get current configuration
    pub fn config(&self) -> &ScrollConfig {
        &self.config
    }

    /// Check if an animation is currently active
    #[inline]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Get the target scroll position (final position after animation)
    pub fn target_scroll(&self) -> f64 {
        self.animation
            .as_ref()
            .map(ScrollRun::target)
            .unwrap_or(self.current_scroll)
    }

    /// Get the current interpolated scroll position
    #[inline]
    pub fn current_scroll(&self) -> f64 {
        self.current_scroll
    }

    /// Set scroll position immediately (no animation)
    pub fn set_scroll(&mut self, scroll: f64) {
        self.animation = None;
        self.current_scroll = scroll;
    }

    /// Start a scroll animation to a target position using the configured duration
    ///
    /// If smooth scrolling is disabled, jumps immediately to target.
    pub fn scroll_to(&mut self, target: f64) {
        let duration_ms = self.config.duration_ms_f64();
        self.animate(target, duration_ms);
    }

    /// Start a scroll animation with an explicit duration
    ///
    /// A running animation is replaced; the new one starts from the last
    /// applied offset.
    pub fn animate(&mut self, target: f64, duration_ms: f64) {
        if !self.config.smooth_enabled || duration_ms <= 0.0 {
            // Instant jump when smooth scrolling is disabled
            self.current_scroll = target;
            self.animation = None;
            return;
        }

        let from = self.current_scroll;

        // Skip animation if already at target
        if from == target {
            self.animation = None;
            return;
        }

        if let Some(previous) = &self.animation {
            debug!(
                previous_target = previous.target(),
                target, "Replacing running scroll animation"
            );
        }

        self.animation =
            Some(ScrollRun::new(from, target, duration_ms).with_easing(self.config.easing));
    }

    /// Advance the animation to `now` and return the current scroll position
    ///
    /// Call this every frame. The first frame after `scroll_to` anchors the
    /// run's clock.
    pub fn update(&mut self, now: Instant) -> f64 {
        if let Some(run) = self.animation.as_mut() {
            let step = run.step(elapsed_ms(self.epoch, now));
            self.current_scroll = step.offset;
            if step.done {
                debug!(offset = step.offset, "Scroll animation complete");
                self.animation = None;
            }
        }

        self.current_scroll
    }

    /// Cancel any active animation and stop at current position
    pub fn cancel(&mut self) {
        self.animation = None;
    }

    /// Reset to initial state
    pub fn reset(&mut self) {
        self.animation = None;
        self.current_scroll = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn config(duration_ms: u64) -> ScrollConfig {
        ScrollConfig {
            smooth_enabled: true,
            duration_ms,
            ..Default::default()
        }
    }

    #[test]
    fn test_instant_scroll_when_disabled() {
        let config = ScrollConfig {
            smooth_enabled: false,
            ..Default::default()
        };
        let mut animator = ScrollAnimator::new(config);

        animator.scroll_to(100.0);
        assert_eq!(animator.current_scroll(), 100.0);
        assert!(!animator.is_animating());
    }

    #[test]
    fn test_animation_starts() {
        let mut animator = ScrollAnimator::new(config(100));

        animator.scroll_to(100.0);
        assert!(animator.is_animating());
        assert_eq!(animator.target_scroll(), 100.0);
        assert_eq!(animator.current_scroll(), 0.0);
    }

    #[test]
    fn test_no_animation_when_already_at_target() {
        let mut animator = ScrollAnimator::new(config(100));
        animator.set_scroll(250.0);
        animator.scroll_to(250.0);
        assert!(!animator.is_animating());
    }

    #[test]
    fn test_update_runs_to_completion() {
        let start = Instant::now();
        let mut animator = ScrollAnimator::starting_at(config(800), start);
        animator.scroll_to(800.0);

        assert_eq!(animator.update(start), 0.0);
        assert_eq!(animator.update(start + Duration::from_millis(400)), 400.0);
        assert!(animator.is_animating());

        assert_eq!(animator.update(start + Duration::from_millis(900)), 800.0);
        assert!(!animator.is_animating());

        // Further frames leave the position alone
        assert_eq!(animator.update(start + Duration::from_millis(1000)), 800.0);
    }

    #[test]
    fn test_new_target_replaces_running_animation() {
        let start = Instant::now();
        let mut animator = ScrollAnimator::starting_at(config(100), start);
        animator.scroll_to(1000.0);
        animator.update(start);
        let partway = animator.update(start + Duration::from_millis(50));
        assert_eq!(partway, 500.0);

        animator.scroll_to(0.0);
        assert_eq!(animator.target_scroll(), 0.0);
        // The replacement starts from where the first run left off
        assert_eq!(animator.update(start + Duration::from_millis(60)), 500.0);
        assert_eq!(animator.update(start + Duration::from_millis(160)), 0.0);
        assert!(!animator.is_animating());
    }

    #[test]
    fn test_cancel_keeps_position() {
        let start = Instant::now();
        let mut animator = ScrollAnimator::starting_at(config(100), start);
        animator.scroll_to(200.0);
        animator.update(start);
        animator.update(start + Duration::from_millis(50));
        animator.cancel();
        assert!(!animator.is_animating());
        assert_eq!(animator.current_scroll(), 100.0);
    }
}
