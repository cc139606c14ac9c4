//! A flow layout and touch-scroll engine for embedding in UI toolkits.
//!
//! `flowpane` arranges a sequence of rectangular children left-to-right,
//! wrapping to a new row whenever the accumulated row width would exceed the
//! container's width constraint. When the wrapped content is taller than the
//! viewport, a touch gesture can scroll and fling through the overflow, with
//! spring-back at the boundaries.
//!
//! The crate owns the non-trivial logic only: row packing, placement, gesture
//! disambiguation, and the scroll/fling state machine. Everything that belongs
//! to a host toolkit — the element tree, child measurement, pointer dispatch,
//! redraw scheduling — is reached through the narrow traits in [`host`] and
//! [`gesture::velocity`].
//!
//! # Example
//! ```ignore
//! use flowpane::prelude::*;
//!
//! let mut container = FlowContainer::new(FlowConfig::default());
//! let size = container.measure(
//!     &mut children,
//!     MeasureSpec::exact(250.0),
//!     MeasureSpec::exact(400.0),
//! );
//! container.place_children(&mut children);
//!
//! // Per input event:
//! if container.intercept(&event) {
//!     container.handle_event(&event, &mut tracker, &mut host);
//! }
//!
//! // Per frame while animating:
//! container.on_frame(dt_seconds, &mut host);
//! ```

pub mod container;
pub mod gesture;
pub mod host;
pub mod invalidation;
pub mod layout;
pub mod scroll;

pub mod prelude {
    pub use crate::container::{FlowConfig, FlowContainer};
    pub use crate::gesture::velocity::{VelocityTracker, WindowVelocityTracker};
    pub use crate::gesture::{GestureArbiter, PointerEvent, PointerPhase};
    pub use crate::host::{ChildHost, FlowHost, HeightPolicy};
    pub use crate::invalidation::ChangeFlags;
    pub use crate::layout::{FlowLayout, MeasureSpec, Rect, Size, SpecMode};
    pub use crate::scroll::{ScrollController, ScrollState};
}
