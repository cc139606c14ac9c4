//! The flow container facade: one object implementing the measurable,
//! placeable, and touch-target capabilities over the layout and scroll
//! subsystems.

use crate::gesture::velocity::VelocityTracker;
use crate::gesture::{GestureArbiter, PointerEvent};
use crate::host::{ChildHost, FlowHost};
use crate::invalidation::ChangeFlags;
use crate::layout::{flow, placement, FlowLayout, MeasureSpec, Size};
use crate::scroll::ScrollController;

/// Tunables for gesture disambiguation and fling behavior.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowConfig {
    /// Drag distance (px) a move must exceed before the container claims
    /// the gesture.
    pub touch_slop: f32,
    /// Release velocities (px/s) below this never start a fling.
    pub min_fling_velocity: f32,
    /// Release velocities (px/s) are clamped to this before flinging.
    pub max_fling_velocity: f32,
    /// Duration (s) over which each drag delta eases to its target.
    pub drag_duration: f32,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            touch_slop: 16.0,
            min_fling_velocity: 50.0,
            max_fling_velocity: 8000.0,
            drag_duration: 0.25,
        }
    }
}

impl FlowConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn touch_slop(mut self, touch_slop: f32) -> Self {
        self.touch_slop = touch_slop;
        self
    }

    pub fn min_fling_velocity(mut self, velocity: f32) -> Self {
        self.min_fling_velocity = velocity;
        self
    }

    pub fn max_fling_velocity(mut self, velocity: f32) -> Self {
        self.max_fling_velocity = velocity;
        self
    }

    pub fn drag_duration(mut self, seconds: f32) -> Self {
        self.drag_duration = seconds;
        self
    }
}

/// A flow container: wraps children into rows and scrolls vertical overflow.
///
/// The host drives it in three strands, all on one thread:
/// - layout passes: [`measure`](Self::measure) then
///   [`place_children`](Self::place_children);
/// - input events: [`intercept`](Self::intercept) first — if it returns
///   true, or if no child consumed the event, feed the event to
///   [`handle_event`](Self::handle_event);
/// - animation: [`on_frame`](Self::on_frame) from the host's redraw clock
///   whenever a frame was requested through [`FlowHost`].
pub struct FlowContainer {
    layout: FlowLayout,
    arbiter: GestureArbiter,
    scroll: ScrollController,
    changes: ChangeFlags,
}

impl FlowContainer {
    pub fn new(config: FlowConfig) -> Self {
        Self {
            layout: FlowLayout::default(),
            arbiter: GestureArbiter::new(config.touch_slop),
            scroll: ScrollController::new(
                config.min_fling_velocity,
                config.max_fling_velocity,
                config.drag_duration,
            ),
            changes: ChangeFlags::NEEDS_LAYOUT | ChangeFlags::NEEDS_PAINT,
        }
    }

    /// Run a measurement pass and return the container's chosen size.
    ///
    /// The rows and heights computed here are retained for the following
    /// [`place_children`](Self::place_children) call. The scroll position
    /// persists across passes; only the extents are refreshed.
    pub fn measure(
        &mut self,
        children: &mut dyn ChildHost,
        width: MeasureSpec,
        height: MeasureSpec,
    ) -> Size {
        self.layout = flow::measure(children, width, height);
        self.scroll.set_extents(
            self.layout.content_size().height,
            self.layout.viewport_height(),
        );
        self.changes.remove(ChangeFlags::NEEDS_LAYOUT);
        self.changes |= ChangeFlags::NEEDS_PAINT;
        self.layout.measured_size()
    }

    /// Emit one placement rectangle per child from the last measurement.
    pub fn place_children(&self, children: &mut dyn ChildHost) {
        placement::place(&self.layout, children);
    }

    /// The intercept decision: whether the container claims this event for
    /// its own scrolling rather than forwarding it to children.
    pub fn intercept(&mut self, event: &PointerEvent) -> bool {
        self.arbiter.on_event(event)
    }

    /// Feed one container-owned pointer event. Returns whether it was
    /// consumed; a no-op (returning false) whenever scrolling is disabled.
    pub fn handle_event(
        &mut self,
        event: &PointerEvent,
        tracker: &mut dyn VelocityTracker,
        host: &mut dyn FlowHost,
    ) -> bool {
        let consumed = self.scroll.handle_event(event, tracker, host);
        if consumed {
            self.changes |= ChangeFlags::NEEDS_PAINT;
        }
        consumed
    }

    /// Advance the scroll animation by `dt` seconds; returns whether it is
    /// still running. The controller re-requests frames through the host
    /// until the animation reports settled.
    pub fn on_frame(&mut self, dt: f32, host: &mut dyn FlowHost) -> bool {
        let animating = self.scroll.on_frame(dt, host);
        if animating {
            self.changes |= ChangeFlags::NEEDS_PAINT;
        }
        animating
    }

    /// Stop any in-flight scroll animation, keeping the current offset.
    pub fn abort_animation(&mut self) {
        self.scroll.abort_animation();
    }

    /// The current vertical scroll offset.
    pub fn scroll_offset(&self) -> f32 {
        self.scroll.offset()
    }

    /// Whether the last measurement produced scrollable overflow.
    pub fn scroll_enabled(&self) -> bool {
        self.scroll.enabled()
    }

    /// The result of the last measurement pass.
    pub fn layout(&self) -> &FlowLayout {
        &self.layout
    }

    /// Note that children or constraints changed; the host should run
    /// [`measure`](Self::measure) again before the next paint. Raises
    /// [`ChangeFlags::NEEDS_LAYOUT`] until the next measurement pass.
    pub fn mark_needs_layout(&mut self) {
        self.changes |= ChangeFlags::NEEDS_LAYOUT;
    }

    /// Drain the accumulated invalidation flags.
    pub fn take_changes(&mut self) -> ChangeFlags {
        std::mem::take(&mut self.changes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gesture::velocity::WindowVelocityTracker;
    use crate::host::HeightPolicy;
    use crate::layout::Rect;

    const DT: f32 = 1.0 / 60.0;

    struct TestChildren {
        sizes: Vec<Size>,
        placed: Vec<Option<Rect>>,
    }

    impl TestChildren {
        fn new(sizes: Vec<(f32, f32)>) -> Self {
            let placed = vec![None; sizes.len()];
            Self {
                sizes: sizes.iter().map(|&(w, h)| Size::new(w, h)).collect(),
                placed,
            }
        }
    }

    impl ChildHost for TestChildren {
        fn child_count(&self) -> usize {
            self.sizes.len()
        }

        fn height_policy(&self, _index: usize) -> HeightPolicy {
            HeightPolicy::Intrinsic
        }

        fn measure(&mut self, index: usize, _width: MeasureSpec, _height: MeasureSpec) -> Size {
            self.sizes[index]
        }

        fn place(&mut self, index: usize, rect: Rect) {
            self.placed[index] = Some(rect);
        }
    }

    #[derive(Default)]
    struct TestHost {
        scrolled_to: Vec<(f32, f32)>,
        frames_requested: usize,
    }

    impl FlowHost for TestHost {
        fn scroll_to(&mut self, x: f32, y: f32) {
            self.scrolled_to.push((x, y));
        }

        fn request_frame(&mut self) {
            self.frames_requested += 1;
        }
    }

    /// Ten 200x100 children under a 250px-wide, 400px-tall container:
    /// ten rows, 1000px of content, 600px of overflow.
    fn overflowing_children() -> TestChildren {
        TestChildren::new(vec![(200.0, 100.0); 10])
    }

    fn measured_container(children: &mut TestChildren) -> FlowContainer {
        let mut container = FlowContainer::new(FlowConfig::default());
        container.measure(
            children,
            MeasureSpec::exact(250.0),
            MeasureSpec::exact(400.0),
        );
        container
    }

    #[test]
    fn test_measure_then_place() {
        let mut children = TestChildren::new(vec![(100.0, 20.0), (100.0, 30.0), (100.0, 10.0)]);
        let mut container = FlowContainer::new(FlowConfig::default());

        let size = container.measure(
            &mut children,
            MeasureSpec::exact(250.0),
            MeasureSpec::unbounded(),
        );
        assert_eq!(size, Size::new(250.0, 40.0));

        container.place_children(&mut children);
        assert_eq!(children.placed[2], Some(Rect::new(0.0, 30.0, 100.0, 10.0)));
    }

    #[test]
    fn test_scroll_disabled_for_short_content() {
        let mut children = TestChildren::new(vec![(100.0, 20.0)]);
        let container = measured_container(&mut children);
        assert!(!container.scroll_enabled());
    }

    #[test]
    fn test_full_gesture_lifecycle() {
        let mut children = overflowing_children();
        let mut container = measured_container(&mut children);
        assert!(container.scroll_enabled());

        let mut tracker = WindowVelocityTracker::new();
        let mut host = TestHost::default();

        // Press is never claimed; a vertical move is.
        assert!(!container.intercept(&PointerEvent::down(100.0, 300.0, 0)));
        assert!(container.intercept(&PointerEvent::moved(100.0, 250.0, 16)));

        container.handle_event(&PointerEvent::down(100.0, 300.0, 0), &mut tracker, &mut host);
        container.handle_event(&PointerEvent::moved(100.0, 250.0, 16), &mut tracker, &mut host);
        container.handle_event(&PointerEvent::up(100.0, 250.0, 32), &mut tracker, &mut host);

        for _ in 0..1000 {
            if !container.on_frame(DT, &mut host) {
                break;
            }
        }

        assert!(container.scroll_offset() > 0.0);
        assert!(container.scroll_offset() <= container.layout().max_scroll());
        assert!(host.scrolled_to.len() > 1);
    }

    #[test]
    fn test_events_pass_through_when_scroll_disabled() {
        let mut children = TestChildren::new(vec![(100.0, 20.0)]);
        let mut container = measured_container(&mut children);

        let mut tracker = WindowVelocityTracker::new();
        let mut host = TestHost::default();
        let consumed = container.handle_event(
            &PointerEvent::down(50.0, 10.0, 0),
            &mut tracker,
            &mut host,
        );
        assert!(!consumed);
        assert_eq!(host.frames_requested, 0);
    }

    #[test]
    fn test_scroll_offset_survives_relayout() {
        let mut children = overflowing_children();
        let mut container = measured_container(&mut children);

        let mut tracker = WindowVelocityTracker::new();
        let mut host = TestHost::default();
        container.handle_event(&PointerEvent::down(100.0, 300.0, 0), &mut tracker, &mut host);
        container.handle_event(&PointerEvent::moved(100.0, 250.0, 16), &mut tracker, &mut host);
        while container.on_frame(DT, &mut host) {}
        let offset = container.scroll_offset();
        assert!(offset > 0.0);

        container.measure(
            &mut children,
            MeasureSpec::exact(250.0),
            MeasureSpec::exact(400.0),
        );
        assert_eq!(container.scroll_offset(), offset);
    }

    #[test]
    fn test_change_flags_drain() {
        let mut children = overflowing_children();
        let mut container = measured_container(&mut children);

        let taken = container.take_changes();
        assert!(taken.contains(ChangeFlags::NEEDS_PAINT));
        assert!(container.take_changes().is_empty());

        let mut tracker = WindowVelocityTracker::new();
        let mut host = TestHost::default();
        container.handle_event(&PointerEvent::down(100.0, 300.0, 0), &mut tracker, &mut host);
        assert!(container.take_changes().contains(ChangeFlags::NEEDS_PAINT));
    }

    #[test]
    fn test_mark_needs_layout_raises_flag_until_measured() {
        let mut children = overflowing_children();
        let mut container = measured_container(&mut children);
        container.take_changes();

        container.mark_needs_layout();
        assert!(container
            .take_changes()
            .contains(ChangeFlags::NEEDS_LAYOUT));

        // A measurement pass satisfies the request and lowers the flag.
        container.mark_needs_layout();
        container.measure(
            &mut children,
            MeasureSpec::exact(250.0),
            MeasureSpec::exact(400.0),
        );
        let taken = container.take_changes();
        assert!(!taken.contains(ChangeFlags::NEEDS_LAYOUT));
        assert!(taken.contains(ChangeFlags::NEEDS_PAINT));
    }
}
