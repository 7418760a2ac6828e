//! Linear progress transitions.

use std::time::{Duration, Instant};

/// A linear transition from `base` to `base + delta`.
///
/// The clock starts on the first tick, so a transition created between
/// frames does not skip ahead.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct ProgressAnimation {
    base: i32,
    delta: i32,
    duration: Duration,
    started_at: Option<Instant>,
}

impl ProgressAnimation {
    pub(crate) fn new(base: i32, delta: i32, duration: Duration) -> Self {
        Self {
            base,
            delta,
            duration,
            started_at: None,
        }
    }

    pub(crate) fn target(&self) -> i32 {
        self.base + self.delta
    }

    /// Moves both ends of the transition into `[0, total]`.
    pub(crate) fn clamp_to(&mut self, total: i32) {
        let base = self.base.clamp(0, total);
        let target = self.target().clamp(0, total);
        self.base = base;
        self.delta = target - base;
    }

    /// Elapsed fraction at `now`, starting the clock if this is the first tick.
    pub(crate) fn fraction_at(&mut self, now: Instant) -> f32 {
        let started_at = *self.started_at.get_or_insert(now);
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(started_at);
        elapsed.as_secs_f32() / self.duration.as_secs_f32()
    }

    /// Progress value at `fraction`.
    ///
    /// The partial step truncates toward zero; at or past the end the exact
    /// target is returned.
    pub(crate) fn value_at(&self, fraction: f32) -> i32 {
        if fraction < 1.0 {
            let fraction = fraction.max(0.0);
            self.base + (self.delta as f32 * fraction) as i32
        } else {
            self.target()
        }
    }
}
