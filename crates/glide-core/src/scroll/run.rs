//! A single scroll interpolation and its frame-driven driver
//!
//! `ScrollRun` is the stepping engine: it is fed frame timestamps by whatever
//! scheduler the host has and answers with the offset to apply. The
//! `animate_scroll_to` driver uses a tokio interval as that scheduler.

use std::time::Duration;

use tokio::time::{Instant, MissedTickBehavior};
use tracing::debug;

use super::easing::{ease_in_out_cubic, EasingType};
use super::timing::{lerp, millis_f64, progress};

/// Result of applying one frame to a run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    /// Scroll offset to write for this frame
    pub offset: f64,
    /// True when this was the final frame of the run
    pub done: bool,
}

/// One in-progress scroll interpolation
///
/// The start timestamp is latched by the first `step` call and never moved
/// afterwards, so the curve is anchored to the first frame the host delivers
/// rather than to the moment the run was created.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollRun {
    start: f64,
    distance: f64,
    duration_ms: f64,
    easing: EasingType,
    start_time: Option<f64>,
    finished: bool,
}

impl ScrollRun {
    /// Create a run from `start` to `target` over `duration_ms`
    pub fn new(start: f64, target: f64, duration_ms: f64) -> Self {
        Self {
            start,
            distance: target - start,
            duration_ms,
            easing: EasingType::CubicInOut,
            start_time: None,
            finished: false,
        }
    }

    /// Use a different easing curve
    pub fn with_easing(mut self, easing: EasingType) -> Self {
        self.easing = easing;
        self
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn target(&self) -> f64 {
        self.start + self.distance
    }

    pub fn duration_ms(&self) -> f64 {
        self.duration_ms
    }

    /// Timestamp of the first frame, once one has been applied
    pub fn start_time(&self) -> Option<f64> {
        self.start_time
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Offset on the curve after `elapsed_ms`, clamped to the run's duration
    pub fn offset_at(&self, elapsed_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return self.target();
        }
        let elapsed = elapsed_ms.clamp(0.0, self.duration_ms);
        match self.easing {
            EasingType::CubicInOut => {
                ease_in_out_cubic(elapsed, self.start, self.distance, self.duration_ms)
            }
            easing => lerp(
                self.start,
                self.target(),
                easing.apply(progress(elapsed, self.duration_ms)),
            ),
        }
    }

    /// Apply one frame with the given monotonic timestamp (milliseconds)
    pub fn step(&mut self, timestamp_ms: f64) -> Step {
        let start_time = *self.start_time.get_or_insert(timestamp_ms);
        let elapsed = timestamp_ms - start_time;
        let offset = self.offset_at(elapsed);
        let done = elapsed >= self.duration_ms;
        self.finished = done;
        Step { offset, done }
    }
}

/// Animate from `start` to `target`, calling `on_step` once per frame
///
/// Frames come from a tokio interval ticking every `frame`, so control returns
/// to the runtime between steps. The first frame applies `start`, the last one
/// applies `target`. Returns the final offset.
///
/// Nothing stops two of these from running at once; callers that need a
/// single active animation should go through `ScrollAnimator`.
pub async fn animate_scroll_to<F>(
    target: f64,
    start: f64,
    duration: Duration,
    frame: Duration,
    mut on_step: F,
) -> f64
where
    F: FnMut(f64),
{
    let mut run = ScrollRun::new(start, target, millis_f64(duration));
    let mut ticker = tokio::time::interval(frame.max(Duration::from_millis(1)));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let epoch = Instant::now();

    debug!(start, target, duration_ms = run.duration_ms(), "Scroll animation started");

    loop {
        let now = ticker.tick().await;
        let step = run.step(millis_f64(now.saturating_duration_since(epoch)));
        on_step(step.offset);
        if step.done {
            debug!(offset = step.offset, "Scroll animation finished");
            return step.offset;
        }
    }
}
