//! Scroll configuration helpers
//!
//! The config types themselves live in `crate::config`; this adds the
//! derived values the animator needs.

use std::time::Duration;

pub use crate::config::{EasingType, ScrollConfig};

use super::timing::frame_interval;

impl ScrollConfig {
    /// Animation duration as Duration
    #[inline]
    pub fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    /// Animation duration in fractional milliseconds
    #[inline]
    pub fn duration_ms_f64(&self) -> f64 {
        self.duration_ms as f64
    }

    /// Frame interval for timer-driven animation
    #[inline]
    pub fn animation_tick_duration(&self) -> Duration {
        frame_interval(self.animation_fps)
    }

    /// Check if smooth scrolling is effectively enabled
    #[inline]
    pub fn is_smooth(&self) -> bool {
        self.smooth_enabled && self.duration_ms > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ScrollConfig::default();
        assert!(config.smooth_enabled);
        assert_eq!(config.duration_ms, 800);
        assert_eq!(config.easing, EasingType::CubicInOut);
        assert_eq!(config.animation_fps, 60);
        assert!(config.header_offset);
    }

    #[test]
    fn test_animation_duration() {
        let config = ScrollConfig {
            duration_ms: 200,
            ..Default::default()
        };
        assert_eq!(config.animation_duration(), Duration::from_millis(200));
        assert_eq!(config.duration_ms_f64(), 200.0);
    }

    #[test]
    fn test_is_smooth() {
        let mut config = ScrollConfig::default();
        assert!(config.is_smooth());

        config.smooth_enabled = false;
        assert!(!config.is_smooth());

        config.smooth_enabled = true;
        config.duration_ms = 0;
        assert!(!config.is_smooth());
    }
}
