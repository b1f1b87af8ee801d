//! Time calculation utilities for scroll animations
//!
//! Frame timestamps are carried as `f64` milliseconds so the stepping code
//! works the same whether the host hands out `Instant`s or raw frame times.

use std::time::{Duration, Instant};

/// Fallback frame interval when no frame rate is configured (~60fps)
pub const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Convert a duration to fractional milliseconds
///
/// Goes through microseconds so whole-millisecond durations convert exactly.
#[inline]
pub fn millis_f64(duration: Duration) -> f64 {
    duration.as_micros() as f64 / 1000.0
}

/// Milliseconds from `earlier` to `later`, zero if `later` is before `earlier`
#[inline]
pub fn elapsed_ms(earlier: Instant, later: Instant) -> f64 {
    millis_f64(later.saturating_duration_since(earlier))
}

/// Frame interval for a target frame rate
#[inline]
pub fn frame_interval(fps: u32) -> Duration {
    if fps == 0 {
        DEFAULT_FRAME_INTERVAL
    } else {
        Duration::from_millis(1000 / fps as u64)
    }
}

/// Calculate animation progress (0.0 to 1.0) from elapsed and total milliseconds
#[inline]
pub fn progress(elapsed_ms: f64, duration_ms: f64) -> f64 {
    if duration_ms <= 0.0 {
        return 1.0;
    }
    (elapsed_ms / duration_ms).clamp(0.0, 1.0)
}

/// Linear interpolation between two values
#[inline]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp() {
        assert!((lerp(0.0, 100.0, 0.0) - 0.0).abs() < 0.001);
        assert!((lerp(0.0, 100.0, 0.5) - 50.0).abs() < 0.001);
        assert!((lerp(0.0, 100.0, 1.0) - 100.0).abs() < 0.001);
    }

    #[test]
    fn test_millis_f64_whole_values_are_exact() {
        assert_eq!(millis_f64(Duration::from_millis(800)), 800.0);
        assert_eq!(millis_f64(Duration::from_micros(1500)), 1.5);
    }

    #[test]
    fn test_elapsed_ms_saturates() {
        let base = Instant::now();
        let later = base + Duration::from_millis(40);
        assert_eq!(elapsed_ms(base, later), 40.0);
        assert_eq!(elapsed_ms(later, base), 0.0);
    }

    #[test]
    fn test_frame_interval() {
        assert_eq!(frame_interval(60), Duration::from_millis(16));
        assert_eq!(frame_interval(0), DEFAULT_FRAME_INTERVAL);
        assert_eq!(frame_interval(120), Duration::from_millis(8));
    }

    #[test]
    fn test_progress_zero_duration() {
        assert!((progress(0.0, 0.0) - 1.0).abs() < 0.001);
        assert_eq!(progress(50.0, 100.0), 0.5);
        assert_eq!(progress(150.0, 100.0), 1.0);
    }
}
