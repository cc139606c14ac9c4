//! Scroll offset ownership and the gesture-to-animation state machine.

pub mod scroller;

pub use scroller::{Scroller, StepResult};

use crate::gesture::velocity::VelocityTracker;
use crate::gesture::{PointerEvent, PointerPhase};
use crate::host::FlowHost;

/// The scroll position and the extents it is bounded by.
///
/// Persists across measurement passes; only the extents are refreshed per
/// pass, so the scroll position survives relayout.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollState {
    pub offset: f32,
    pub content_height: f32,
    pub viewport_height: f32,
}

impl ScrollState {
    pub fn max_scroll(&self) -> f32 {
        (self.content_height - self.viewport_height).max(0.0)
    }

    /// Scrolling is enabled only when content is taller than the viewport.
    pub fn enabled(&self) -> bool {
        self.content_height > self.viewport_height
    }

    pub fn in_bounds(&self) -> bool {
        self.offset >= 0.0 && self.offset <= self.max_scroll()
    }

    pub fn clamp_offset(&mut self) {
        self.offset = self.offset.clamp(0.0, self.max_scroll());
    }
}

/// Owns the scroll offset and converts claimed gestures into offset
/// animations: drag deltas while the finger is down, a fling or a
/// spring-back on release.
///
/// When scrolling is disabled every event passes straight through.
pub struct ScrollController {
    state: ScrollState,
    scroller: Scroller,
    min_fling_velocity: f32,
    max_fling_velocity: f32,
    drag_duration: f32,
    last_y: f32,
    pressed: bool,
}

impl ScrollController {
    pub fn new(min_fling_velocity: f32, max_fling_velocity: f32, drag_duration: f32) -> Self {
        Self {
            state: ScrollState::default(),
            scroller: Scroller::new(),
            min_fling_velocity: min_fling_velocity.max(0.0),
            max_fling_velocity: max_fling_velocity.max(0.0),
            drag_duration: drag_duration.max(0.0),
            last_y: 0.0,
            pressed: false,
        }
    }

    pub fn state(&self) -> ScrollState {
        self.state
    }

    pub fn offset(&self) -> f32 {
        self.state.offset
    }

    pub fn enabled(&self) -> bool {
        self.state.enabled()
    }

    pub fn is_animating(&self) -> bool {
        !self.scroller.is_finished()
    }

    /// Refresh the cached extents after a measurement pass. A settled offset
    /// that no longer fits the new extents is clamped in place; an in-flight
    /// animation is left to finish and spring back on its own.
    pub fn set_extents(&mut self, content_height: f32, viewport_height: f32) {
        self.state.content_height = content_height.max(0.0);
        self.state.viewport_height = viewport_height.max(0.0);
        if self.scroller.is_finished() {
            self.state.clamp_offset();
            self.scroller.jump_to(self.state.offset);
        }
    }

    /// Stop any in-flight animation, keeping the current offset.
    pub fn abort_animation(&mut self) {
        if !self.scroller.is_finished() {
            self.scroller.abort();
            self.state.offset = self.scroller.current_offset();
        }
    }

    /// Feed one claimed pointer event. Returns whether the controller
    /// consumed it; always false while scrolling is disabled, so gestures
    /// pass through to children untouched.
    pub fn handle_event(
        &mut self,
        event: &PointerEvent,
        tracker: &mut dyn VelocityTracker,
        host: &mut dyn FlowHost,
    ) -> bool {
        if !self.state.enabled() {
            return false;
        }

        match event.phase {
            PointerPhase::Down => {
                self.press(event, tracker);
            }
            PointerPhase::Move => {
                if !self.pressed {
                    // Out-of-order move: degrade to a fresh press here.
                    self.press(event, tracker);
                    return true;
                }
                tracker.add_sample(event);
                let dy = self.last_y - event.y;
                log::trace!("drag dy = {dy:.1}");
                // Drags accumulate onto the in-flight target but never leave
                // the valid range; only a fling may overscroll.
                let from = self.scroller.final_offset();
                let target = (from + dy).clamp(0.0, self.state.max_scroll());
                self.scroller.start_scroll(from, target - from, self.drag_duration);
                host.request_frame();
                self.last_y = event.y;
            }
            PointerPhase::Up => {
                tracker.add_sample(event);
                self.pressed = false;
                self.release(tracker, host);
            }
            PointerPhase::Cancel => {
                self.pressed = false;
            }
        }
        true
    }

    /// Advance the active animation by `dt` seconds. Writes the new offset,
    /// hands it to the host, and re-arms the frame loop until settled.
    /// Returns whether an animation is still running.
    pub fn on_frame(&mut self, dt: f32, host: &mut dyn FlowHost) -> bool {
        if self.scroller.is_finished() {
            return false;
        }
        let step = self.scroller.advance(dt);
        self.state.offset = step.offset;
        host.scroll_to(0.0, step.offset);
        if step.settled {
            false
        } else {
            host.request_frame();
            true
        }
    }

    fn press(&mut self, event: &PointerEvent, tracker: &mut dyn VelocityTracker) {
        self.abort_animation();
        tracker.clear();
        tracker.add_sample(event);
        self.last_y = event.y;
        self.pressed = true;
    }

    fn release(&mut self, tracker: &mut dyn VelocityTracker, host: &mut dyn FlowHost) {
        let (_, vy) = tracker.velocity(1000.0);
        let vy = vy.clamp(-self.max_fling_velocity, self.max_fling_velocity);

        if vy.abs() > self.min_fling_velocity {
            // Positive finger movement downward maps to negative content
            // movement, so the fling velocity is inverted.
            log::debug!(
                "fling: velocity {:.1}, bounds 0..{:.1}",
                -vy,
                self.state.max_scroll()
            );
            self.scroller.fling(
                self.state.offset,
                -vy,
                0.0,
                self.state.max_scroll(),
                self.state.viewport_height / 2.0,
            );
            host.request_frame();
        } else if self
            .scroller
            .spring_back(self.state.offset, 0.0, self.state.max_scroll())
        {
            host.request_frame();
        }
    }
}
