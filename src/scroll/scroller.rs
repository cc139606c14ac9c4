//! Resumable offset animations: drag easing, fling deceleration, and
//! boundary spring-back.
//!
//! The scroller is a step function, not a callback loop: the host's frame
//! driver calls [`Scroller::advance`] with the elapsed time and applies the
//! returned offset. Nothing here schedules frames or touches host state.

/// Output of one animation step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepResult {
    pub offset: f32,
    pub settled: bool,
}

/// Exponential decay rate of fling velocity, per second.
const FLING_FRICTION: f32 = 5.0;
/// A fling below this speed (px/s) has come to rest.
const REST_VELOCITY: f32 = 1.0;
/// Duration of the boundary spring-back animation, seconds.
const SPRING_BACK_DURATION: f32 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Idle,
    Eased {
        start: f32,
        delta: f32,
        duration: f32,
        elapsed: f32,
    },
    Fling {
        velocity: f32,
        min: f32,
        max: f32,
        overshoot: f32,
    },
}

/// One offset-producing animation at a time: a drag segment, a fling, or a
/// spring-back. Drags and flings share this type so that manual scrolling
/// and inertial scrolling are the same mechanism at different time-scales.
#[derive(Debug)]
pub struct Scroller {
    phase: Phase,
    current: f32,
    target: f32,
}

impl Scroller {
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            current: 0.0,
            target: 0.0,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Idle
    }

    pub fn current_offset(&self) -> f32 {
        self.current
    }

    /// Where the in-flight animation will end up; equals the current offset
    /// when idle. Drag deltas accumulate onto this so that successive move
    /// events extend the animation instead of fighting it.
    pub fn final_offset(&self) -> f32 {
        self.target
    }

    /// Stop in place, keeping the current offset.
    pub fn abort(&mut self) {
        self.phase = Phase::Idle;
        self.target = self.current;
    }

    /// Move to an offset immediately, with no animation.
    pub fn jump_to(&mut self, offset: f32) {
        self.phase = Phase::Idle;
        self.current = offset;
        self.target = offset;
    }

    /// Animate from `start` by `delta` over `duration` seconds, ease-out.
    pub fn start_scroll(&mut self, start: f32, delta: f32, duration: f32) {
        self.current = start;
        self.target = start + delta;
        if duration <= 0.0 {
            self.current = self.target;
            self.phase = Phase::Idle;
        } else {
            self.phase = Phase::Eased {
                start,
                delta,
                duration,
                elapsed: 0.0,
            };
        }
    }

    /// Start an inertial fling from `start` with the given initial velocity
    /// (px/s), decelerating to rest. The offset may travel up to `overshoot`
    /// past `[min, max]`; a fling resting outside the bounds springs back.
    pub fn fling(&mut self, start: f32, velocity: f32, min: f32, max: f32, overshoot: f32) {
        self.current = start;
        // Predicted rest position under exponential decay.
        self.target = (start + velocity / FLING_FRICTION).clamp(min, max);
        self.phase = Phase::Fling {
            velocity,
            min,
            max,
            overshoot: overshoot.max(0.0),
        };
    }

    /// Ease back to the nearest bound if `start` lies outside `[min, max]`.
    /// Returns whether an animation was started.
    pub fn spring_back(&mut self, start: f32, min: f32, max: f32) -> bool {
        let bound = if start < min {
            min
        } else if start > max {
            max
        } else {
            return false;
        };
        self.start_scroll(start, bound - start, SPRING_BACK_DURATION);
        true
    }

    /// Advance by `dt` seconds and report the new offset.
    pub fn advance(&mut self, dt: f32) -> StepResult {
        let dt = dt.max(0.0);
        match self.phase {
            Phase::Idle => StepResult {
                offset: self.current,
                settled: true,
            },
            Phase::Eased {
                start,
                delta,
                duration,
                elapsed,
            } => {
                let elapsed = elapsed + dt;
                let t = (elapsed / duration).min(1.0);
                self.current = start + delta * ease_out(t);
                if t >= 1.0 {
                    self.phase = Phase::Idle;
                } else {
                    self.phase = Phase::Eased {
                        start,
                        delta,
                        duration,
                        elapsed,
                    };
                }
                StepResult {
                    offset: self.current,
                    settled: self.phase == Phase::Idle,
                }
            }
            Phase::Fling {
                velocity,
                min,
                max,
                overshoot,
            } => {
                self.current += velocity * dt;
                let mut velocity = velocity * (-FLING_FRICTION * dt).exp();

                // The overscroll window is a hard edge; the fling cannot
                // carry past it.
                let lo = min - overshoot;
                let hi = max + overshoot;
                if self.current <= lo {
                    self.current = lo;
                    velocity = 0.0;
                } else if self.current >= hi {
                    self.current = hi;
                    velocity = 0.0;
                }

                if velocity.abs() < REST_VELOCITY {
                    if self.spring_back(self.current, min, max) {
                        StepResult {
                            offset: self.current,
                            settled: false,
                        }
                    } else {
                        self.phase = Phase::Idle;
                        self.target = self.current;
                        StepResult {
                            offset: self.current,
                            settled: true,
                        }
                    }
                } else {
                    self.phase = Phase::Fling {
                        velocity,
                        min,
                        max,
                        overshoot,
                    };
                    StepResult {
                        offset: self.current,
                        settled: false,
                    }
                }
            }
        }
    }
}

impl Default for Scroller {
    fn default() -> Self {
        Self::new()
    }
}

fn ease_out(t: f32) -> f32 {
    t * (2.0 - t)
}
