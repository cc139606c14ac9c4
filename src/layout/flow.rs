//! The flow measurement engine: greedy row packing in a single pass.
//!
//! Children are taken in order and appended to the current row; when the row
//! width would overflow the container's width budget the row is closed and a
//! new one begins. The result is an immutable [`FlowLayout`] value that the
//! placement pass and the scroll controller both read.

use crate::host::{ChildHost, HeightPolicy};
use crate::layout::{MeasureSpec, Size, SpecMode};

/// The outcome of one measurement pass.
///
/// Rows are stored as boundary indices into a flat child list rather than
/// nested containers: `row_ends[i]` is the exclusive end of row `i`, and
/// `row_heights[i]` is that row's height. Both vectors are parallel and are
/// fully rebuilt on every pass.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FlowLayout {
    child_sizes: Vec<Size>,
    row_ends: Vec<usize>,
    row_heights: Vec<f32>,
    content: Size,
    measured: Size,
    viewport_height: f32,
}

impl FlowLayout {
    /// Number of rows produced by the pass. Rows are never empty: a child
    /// wider than the width budget occupies its own row rather than
    /// leaving a zero-height row above it.
    pub fn row_count(&self) -> usize {
        self.row_ends.len()
    }

    pub fn child_count(&self) -> usize {
        self.child_sizes.len()
    }

    /// The range of child indices belonging to row `row`.
    pub fn row(&self, row: usize) -> std::ops::Range<usize> {
        let start = if row == 0 { 0 } else { self.row_ends[row - 1] };
        start..self.row_ends[row]
    }

    pub fn row_height(&self, row: usize) -> f32 {
        self.row_heights[row]
    }

    /// Iterate rows as `(child index range, row height)` top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = (std::ops::Range<usize>, f32)> + '_ {
        (0..self.row_count()).map(|i| (self.row(i), self.row_heights[i]))
    }

    /// The measured size of one child, as of this pass.
    pub fn child_size(&self, index: usize) -> Size {
        self.child_sizes[index]
    }

    /// Union bounding box of all rows after wrapping.
    pub fn content_size(&self) -> Size {
        self.content
    }

    /// The `(width, height)` the container reports to the host.
    pub fn measured_size(&self) -> Size {
        self.measured
    }

    /// The container's own resolved height, cached from the height constraint.
    pub fn viewport_height(&self) -> f32 {
        self.viewport_height
    }

    /// Largest valid scroll offset for this content/viewport pair.
    pub fn max_scroll(&self) -> f32 {
        (self.content.height - self.viewport_height).max(0.0)
    }

    /// Whether the content overflows the viewport vertically.
    pub fn scroll_enabled(&self) -> bool {
        self.content.height > self.viewport_height
    }
}

/// Run one measurement pass over `children`.
///
/// Each child is measured by the host against the container's constraints.
/// A child whose [`HeightPolicy`] is `FillRow` is immediately re-measured
/// against its own width and an unbounded height, and that height feeds the
/// row maximum; the row's final height is not known at that point, so the
/// re-measure sees an unresolved height on purpose.
pub fn measure(
    children: &mut dyn ChildHost,
    width_spec: MeasureSpec,
    height_spec: MeasureSpec,
) -> FlowLayout {
    let width_limit = width_spec.limit();
    let count = children.child_count();

    let mut child_sizes = Vec::with_capacity(count);
    let mut row_ends = Vec::new();
    let mut row_heights = Vec::new();

    let mut line_width = 0.0f32;
    let mut line_height = 0.0f32;
    let mut row_start = 0usize;
    let mut content_width = 0.0f32;
    let mut content_height = 0.0f32;

    for i in 0..count {
        let mut size = children.measure(i, width_spec, height_spec);

        // Close the current row before an overflowing child, unless the row
        // is still empty: a single child wider than the budget keeps its own
        // row rather than leaving an empty one above it.
        if i > row_start && line_width + size.width > width_limit {
            row_ends.push(i);
            row_heights.push(line_height);
            content_height += line_height;
            content_width = content_width.max(line_width);
            line_width = 0.0;
            line_height = 0.0;
            row_start = i;
        }

        line_width += size.width;
        match children.height_policy(i) {
            HeightPolicy::Intrinsic => {
                line_height = line_height.max(size.height);
            }
            HeightPolicy::FillRow => {
                size = children.measure(i, MeasureSpec::exact(size.width), MeasureSpec::unbounded());
                line_height = line_height.max(size.height);
            }
        }
        child_sizes.push(size);
    }

    // Flush the last row.
    if count > 0 {
        row_ends.push(count);
        row_heights.push(line_height);
        content_height += line_height;
        content_width = content_width.max(line_width);
    }

    // An exact height constraint is a floor: the container never reports
    // less than what the host demanded, even for short content.
    if height_spec.mode() == SpecMode::Exact {
        content_height = content_height.max(height_spec.size());
    }

    let measured_width = match width_spec.mode() {
        SpecMode::Exact => width_spec.size(),
        SpecMode::AtMost | SpecMode::Unbounded => content_width,
    };

    let layout = FlowLayout {
        child_sizes,
        row_ends,
        row_heights,
        content: Size::new(content_width, content_height),
        measured: Size::new(measured_width, content_height),
        viewport_height: height_spec.size(),
    };

    log::debug!(
        "flow measure: {} children in {} rows, content {:.1}x{:.1}, viewport {:.1}",
        layout.child_count(),
        layout.row_count(),
        layout.content.width,
        layout.content.height,
        layout.viewport_height,
    );

    layout
}
