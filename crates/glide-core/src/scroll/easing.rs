//! Pure easing functions for scroll animations
//!
//! `ease_in_out_cubic` is the offset-space curve used for anchor scrolling.
//! The other curves map progress in [0, 1] to eased progress in [0, 1].

pub use crate::config::EasingType;

/// Cubic ease-in-out in offset space.
///
/// `elapsed` and `duration` share a time unit; the result travels from
/// `start` to `start + distance`. Time is normalized to `u = elapsed / (duration / 2)`:
/// the first half accelerates with `u³`, the second half mirrors it around `u = 2`.
#[inline]
pub fn ease_in_out_cubic(elapsed: f64, start: f64, distance: f64, duration: f64) -> f64 {
    let mut u = elapsed / (duration / 2.0);
    if u < 1.0 {
        return distance / 2.0 * u * u * u + start;
    }
    u -= 2.0;
    distance / 2.0 * (u * u * u + 2.0) + start
}

impl EasingType {
    /// Apply the easing function to a progress value
    ///
    /// # Arguments
    /// * `t` - Progress value in range [0, 1]
    ///
    /// # Returns
    /// Eased value in range [0, 1]
    #[inline]
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            EasingType::None => if t < 1.0 { 0.0 } else { 1.0 },
            EasingType::Linear => t,
            EasingType::CubicInOut => ease_in_out_cubic(t, 0.0, 1.0, 1.0),
            EasingType::Cubic => cubic_ease_out(t),
            EasingType::Quintic => quintic_ease_out(t),
            EasingType::EaseOut => exponential_ease_out(t),
        }
    }
}

/// Cubic ease-out: f(t) = 1 - (1-t)³
#[inline]
fn cubic_ease_out(t: f64) -> f64 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

/// Quintic ease-out: f(t) = 1 - (1-t)⁵
#[inline]
fn quintic_ease_out(t: f64) -> f64 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv * inv * inv
}

/// Exponential ease-out: f(t) = 1 - 2^(-10t)
#[inline]
fn exponential_ease_out(t: f64) -> f64 {
    if t >= 1.0 {
        1.0
    } else {
        1.0 - 2.0_f64.powf(-10.0 * t)
    }
}
