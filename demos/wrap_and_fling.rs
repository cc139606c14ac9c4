//! Wires a toy host through the full engine: measure a batch of chips into
//! rows, place them, then simulate a drag-and-release gesture and step the
//! fling until it settles.
//!
//! Run with `RUST_LOG=debug cargo run --example wrap_and_fling`.

use flowpane::prelude::*;

struct Chips {
    sizes: Vec<Size>,
}

impl ChildHost for Chips {
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
        println!(
            "chip {index:>2} -> ({:>5.1}, {:>5.1}) {}x{}",
            rect.x, rect.y, rect.width, rect.height
        );
    }
}

#[derive(Default)]
struct ConsoleHost {
    frame_pending: bool,
}

impl FlowHost for ConsoleHost {
    fn scroll_to(&mut self, _x: f32, y: f32) {
        println!("scroll_to y = {y:.1}");
    }

    fn request_frame(&mut self) {
        self.frame_pending = true;
    }
}

fn main() {
    env_logger::init();

    // A ragged batch of chips: widths cycle, heights vary a little.
    let mut chips = Chips {
        sizes: (0..24)
            .map(|i| Size::new(60.0 + (i % 5) as f32 * 25.0, 28.0 + (i % 3) as f32 * 8.0))
            .collect(),
    };

    let mut container = FlowContainer::new(FlowConfig::default());
    let size = container.measure(
        &mut chips,
        MeasureSpec::exact(320.0),
        MeasureSpec::exact(180.0),
    );
    println!(
        "measured {}x{} ({} rows, scrollable: {})",
        size.width,
        size.height,
        container.layout().row_count(),
        container.scroll_enabled()
    );
    container.place_children(&mut chips);

    // Simulate a quick upward swipe.
    let mut tracker = WindowVelocityTracker::new();
    let mut host = ConsoleHost::default();
    let gesture = [
        PointerEvent::down(160.0, 150.0, 0),
        PointerEvent::moved(160.0, 130.0, 16),
        PointerEvent::moved(162.0, 105.0, 32),
        PointerEvent::moved(163.0, 75.0, 48),
        PointerEvent::up(163.0, 75.0, 64),
    ];
    for event in &gesture {
        let claimed = container.intercept(event);
        println!("{:?} at y = {:.0}: claimed = {claimed}", event.phase, event.y);
        container.handle_event(event, &mut tracker, &mut host);
    }

    // The host's frame loop: 60 fps until the animation settles.
    let mut frames = 0;
    while host.frame_pending {
        host.frame_pending = false;
        container.on_frame(1.0 / 60.0, &mut host);
        frames += 1;
    }
    println!(
        "settled after {frames} frames at offset {:.1} (max {:.1})",
        container.scroll_offset(),
        container.layout().max_scroll()
    );
}
