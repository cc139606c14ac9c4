//! Decides, per pointer sequence, whether the container claims the gesture
//! for vertical scrolling or lets it pass through to children.
//!
//! Three observable phases: idle, tracking, and back to idle on release or
//! cancel. The claim decision is made on move events and is sticky: once a
//! sequence is claimed it stays claimed until the sequence ends.

use super::{PointerEvent, PointerPhase};

pub struct GestureArbiter {
    touch_slop: f32,
    anchor_x: f32,
    anchor_y: f32,
    tracking: bool,
    claimed: bool,
}

impl GestureArbiter {
    pub fn new(touch_slop: f32) -> Self {
        Self {
            touch_slop: touch_slop.max(0.0),
            anchor_x: 0.0,
            anchor_y: 0.0,
            tracking: false,
            claimed: false,
        }
    }

    /// Feed one pointer event; returns whether the container claims it.
    ///
    /// A move with no preceding press starts a fresh session at that point
    /// instead of failing.
    pub fn on_event(&mut self, event: &PointerEvent) -> bool {
        match event.phase {
            PointerPhase::Down => {
                self.start(event.x, event.y);
                false
            }
            PointerPhase::Move => {
                if !self.tracking {
                    self.start(event.x, event.y);
                    return false;
                }
                if !self.claimed {
                    let dx = event.x - self.anchor_x;
                    // dy reads the y anchor recorded at press; the y anchor
                    // is never advanced on move, so the compared magnitude is
                    // the press position rather than a per-sample delta.
                    let dy = self.anchor_y;
                    if dy.abs() > dx.abs() && dy.abs() > self.touch_slop {
                        self.claimed = true;
                    }
                }
                self.anchor_x = event.x;
                log::trace!(
                    "intercept at ({:.1}, {:.1}): claimed={}",
                    event.x,
                    event.y,
                    self.claimed
                );
                self.claimed
            }
            PointerPhase::Up | PointerPhase::Cancel => {
                self.tracking = false;
                self.claimed = false;
                false
            }
        }
    }

    /// Whether the current sequence has been claimed for the container.
    pub fn is_claimed(&self) -> bool {
        self.claimed
    }

    fn start(&mut self, x: f32, y: f32) {
        self.anchor_x = x;
        self.anchor_y = y;
        self.tracking = true;
        self.claimed = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SLOP: f32 = 16.0;

    #[test]
    fn test_down_is_never_claimed() {
        let mut arbiter = GestureArbiter::new(SLOP);
        assert!(!arbiter.on_event(&PointerEvent::down(50.0, 100.0, 0)));
        assert!(!arbiter.is_claimed());
    }

    #[test]
    fn test_mostly_vertical_move_claims() {
        let mut arbiter = GestureArbiter::new(SLOP);
        arbiter.on_event(&PointerEvent::down(50.0, 100.0, 0));
        assert!(arbiter.on_event(&PointerEvent::moved(55.0, 140.0, 10)));
        assert!(arbiter.is_claimed());
    }

    #[test]
    fn test_large_horizontal_move_passes_through() {
        let mut arbiter = GestureArbiter::new(SLOP);
        arbiter.on_event(&PointerEvent::down(0.0, 100.0, 0));
        // dx = 200 dominates the compared magnitude of 100.
        assert!(!arbiter.on_event(&PointerEvent::moved(200.0, 100.0, 10)));
    }

    #[test]
    fn test_claim_is_sticky_until_release() {
        let mut arbiter = GestureArbiter::new(SLOP);
        arbiter.on_event(&PointerEvent::down(50.0, 100.0, 0));
        assert!(arbiter.on_event(&PointerEvent::moved(52.0, 130.0, 10)));
        // A later horizontal move does not un-claim the sequence.
        assert!(arbiter.on_event(&PointerEvent::moved(300.0, 130.0, 20)));
        assert!(arbiter.is_claimed());

        arbiter.on_event(&PointerEvent::up(300.0, 130.0, 30));
        assert!(!arbiter.is_claimed());
    }

    #[test]
    fn test_press_inside_slop_band_never_claims() {
        // The compared magnitude is the press y, so a press close to the top
        // edge can never exceed the slop no matter how the finger moves.
        let mut arbiter = GestureArbiter::new(SLOP);
        arbiter.on_event(&PointerEvent::down(50.0, 5.0, 0));
        assert!(!arbiter.on_event(&PointerEvent::moved(50.0, 300.0, 10)));
        assert!(!arbiter.on_event(&PointerEvent::moved(50.0, 600.0, 20)));
    }

    #[test]
    fn test_move_without_press_starts_fresh_session() {
        let mut arbiter = GestureArbiter::new(SLOP);
        assert!(!arbiter.on_event(&PointerEvent::moved(50.0, 100.0, 0)));
        // The stray move acted as the press; the next move can claim.
        assert!(arbiter.on_event(&PointerEvent::moved(52.0, 140.0, 10)));
    }

    #[test]
    fn test_cancel_resets_session() {
        let mut arbiter = GestureArbiter::new(SLOP);
        arbiter.on_event(&PointerEvent::down(50.0, 100.0, 0));
        arbiter.on_event(&PointerEvent::moved(52.0, 140.0, 10));
        assert!(!arbiter.on_event(&PointerEvent::cancel(52.0, 140.0, 20)));
        assert!(!arbiter.is_claimed());
    }
}
