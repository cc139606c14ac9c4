//! The narrow interfaces a host toolkit implements to drive the engine.
//!
//! The container never inspects child content; it only asks the host for
//! measured sizes and tells it where each child goes, when to apply a scroll
//! offset, and when another animation frame is needed.

use crate::layout::{MeasureSpec, Rect, Size};

/// How a child wants its height resolved within a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeightPolicy {
    /// The child keeps its own measured height.
    #[default]
    Intrinsic,
    /// The child asks to fill the remaining row height.
    FillRow,
}

/// Host-side access to the container's children.
///
/// Children are addressed by their position in the host's child list; the
/// engine treats them as opaque rectangles.
pub trait ChildHost {
    fn child_count(&self) -> usize;

    /// The layout-parameter flag for one child.
    fn height_policy(&self, index: usize) -> HeightPolicy;

    /// Measure one child under the given constraints and return its size.
    fn measure(&mut self, index: usize, width: MeasureSpec, height: MeasureSpec) -> Size;

    /// Assign one child its final rectangle for this layout pass.
    fn place(&mut self, index: usize, rect: Rect);
}

/// Host services for applying scroll output and scheduling frames.
pub trait FlowHost {
    /// Apply the current scroll offset to the visible content.
    fn scroll_to(&mut self, x: f32, y: f32);

    /// Request one more animation frame; the host should call
    /// [`FlowContainer::on_frame`](crate::container::FlowContainer::on_frame)
    /// on its next redraw tick.
    fn request_frame(&mut self);
}
