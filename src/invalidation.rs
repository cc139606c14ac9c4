use bitflags::bitflags;

bitflags! {
    /// What the host needs to refresh after feeding the container events or
    /// frames. Accumulated by [`FlowContainer`](crate::container::FlowContainer)
    /// and drained by the host once per redraw cycle.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
    pub struct ChangeFlags: u8 {
        /// Sizes or row membership may have changed; re-run measure/place.
        const NEEDS_LAYOUT = 0b01;
        /// The scroll offset moved; repaint with the new translation.
        const NEEDS_PAINT  = 0b10;
    }
}
