//! The placement engine: assigns each child its rectangle from a
//! [`FlowLayout`].
//!
//! Rows are walked top to bottom, children within a row left to right. Each
//! child is placed at the running cursor using its own measured size; the
//! cursor advances by child width within a row and by row height between
//! rows. Remaining space at the end of a row stays unfilled.

use crate::host::ChildHost;
use crate::layout::{FlowLayout, Rect};

pub fn place(layout: &FlowLayout, children: &mut dyn ChildHost) {
    let mut y = 0.0f32;
    for (range, row_height) in layout.rows() {
        let mut x = 0.0f32;
        for index in range {
            let size = layout.child_size(index);
            children.place(index, Rect::new(x, y, size.width, size.height));
            x += size.width;
        }
        y += row_height;
    }
}
