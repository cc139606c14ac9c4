//! Velocity tracking over a pointer sequence.
//!
//! The scroll controller only needs two operations from a tracker: feed it
//! samples during a gesture and ask for a velocity at release. Hosts that
//! already have a platform tracker implement [`VelocityTracker`] over it;
//! [`WindowVelocityTracker`] is a self-contained default.

use super::PointerEvent;
use std::collections::VecDeque;

/// Host seam for tracked-velocity computation.
pub trait VelocityTracker {
    /// Record one pointer sample.
    fn add_sample(&mut self, event: &PointerEvent);

    /// Velocity in pixels per `unit_ms` milliseconds, as `(x, y)`.
    fn velocity(&self, unit_ms: f32) -> (f32, f32);

    /// Drop all samples; called at the start of each gesture session.
    fn clear(&mut self);
}

/// Sliding-window tracker: velocity over the samples of the last 100 ms.
#[derive(Debug, Default)]
pub struct WindowVelocityTracker {
    samples: VecDeque<(u64, f32, f32)>,
}

impl WindowVelocityTracker {
    /// Samples older than this are irrelevant to the release velocity.
    const WINDOW_MS: u64 = 100;

    pub fn new() -> Self {
        Self::default()
    }
}

impl VelocityTracker for WindowVelocityTracker {
    fn add_sample(&mut self, event: &PointerEvent) {
        let now = event.timestamp_ms;
        while let Some(&(t, _, _)) = self.samples.front() {
            if now.saturating_sub(t) > Self::WINDOW_MS {
                self.samples.pop_front();
            } else {
                break;
            }
        }
        self.samples.push_back((now, event.x, event.y));
    }

    fn velocity(&self, unit_ms: f32) -> (f32, f32) {
        let (Some(&(t0, x0, y0)), Some(&(t1, x1, y1))) =
            (self.samples.front(), self.samples.back())
        else {
            return (0.0, 0.0);
        };
        let dt = t1.saturating_sub(t0) as f32;
        if dt <= 0.0 {
            return (0.0, 0.0);
        }
        ((x1 - x0) / dt * unit_ms, (y1 - y0) / dt * unit_ms)
    }

    fn clear(&mut self) {
        self.samples.clear();
    }
}
