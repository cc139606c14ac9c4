//! Pointer input model and gesture disambiguation.

pub mod arbiter;
pub mod velocity;

pub use arbiter::GestureArbiter;

/// Phase of a pointer sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    Down,
    Move,
    Up,
    Cancel,
}

/// One pointer sample delivered by the host's input dispatch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub phase: PointerPhase,
    pub x: f32,
    pub y: f32,
    /// Host clock timestamp in milliseconds; only deltas are meaningful.
    pub timestamp_ms: u64,
}

impl PointerEvent {
    pub fn down(x: f32, y: f32, timestamp_ms: u64) -> Self {
        Self {
            phase: PointerPhase::Down,
            x,
            y,
            timestamp_ms,
        }
    }

    pub fn moved(x: f32, y: f32, timestamp_ms: u64) -> Self {
        Self {
            phase: PointerPhase::Move,
            x,
            y,
            timestamp_ms,
        }
    }

    pub fn up(x: f32, y: f32, timestamp_ms: u64) -> Self {
        Self {
            phase: PointerPhase::Up,
            x,
            y,
            timestamp_ms,
        }
    }

    pub fn cancel(x: f32, y: f32, timestamp_ms: u64) -> Self {
        Self {
            phase: PointerPhase::Cancel,
            x,
            y,
            timestamp_ms,
        }
    }
}
