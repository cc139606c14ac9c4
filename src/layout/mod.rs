pub mod flow;
pub mod placement;

pub use flow::FlowLayout;

/// How a sizing constraint bounds an axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecMode {
    /// The axis must resolve to exactly the given size.
    Exact,
    /// The axis may be any size up to the given size.
    AtMost,
    /// No bound on this axis.
    Unbounded,
}

/// A host-imposed sizing directive for one axis.
///
/// Invalid sizes (negative, NaN, infinite) are clamped to zero at
/// construction; a measurement pass never fails on bad input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeasureSpec {
    mode: SpecMode,
    size: f32,
}

impl MeasureSpec {
    /// An exact-size constraint.
    pub fn exact(size: f32) -> Self {
        Self {
            mode: SpecMode::Exact,
            size: sanitize(size),
        }
    }

    /// An upper-bound constraint.
    pub fn at_most(size: f32) -> Self {
        Self {
            mode: SpecMode::AtMost,
            size: sanitize(size),
        }
    }

    /// An unbounded constraint.
    pub fn unbounded() -> Self {
        Self {
            mode: SpecMode::Unbounded,
            size: 0.0,
        }
    }

    pub fn mode(&self) -> SpecMode {
        self.mode
    }

    /// The raw size value carried by the spec (zero for unbounded).
    pub fn size(&self) -> f32 {
        self.size
    }

    /// The size budget this spec imposes: the carried size for `Exact` and
    /// `AtMost`, infinity for `Unbounded`.
    pub fn limit(&self) -> f32 {
        match self.mode {
            SpecMode::Exact | SpecMode::AtMost => self.size,
            SpecMode::Unbounded => f32::INFINITY,
        }
    }
}

fn sanitize(size: f32) -> f32 {
    if size.is_finite() {
        size.max(0.0)
    } else {
        0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub const fn zero() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

impl Default for Size {
    fn default() -> Self {
        Self::zero()
    }
}

/// A placed child rectangle in container coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_exact() {
        let spec = MeasureSpec::exact(250.0);
        assert_eq!(spec.mode(), SpecMode::Exact);
        assert_eq!(spec.size(), 250.0);
        assert_eq!(spec.limit(), 250.0);
    }

    #[test]
    fn test_spec_unbounded_limit() {
        let spec = MeasureSpec::unbounded();
        assert_eq!(spec.size(), 0.0);
        assert_eq!(spec.limit(), f32::INFINITY);
    }

    #[test]
    fn test_spec_clamps_negative() {
        assert_eq!(MeasureSpec::exact(-40.0).size(), 0.0);
        assert_eq!(MeasureSpec::at_most(-1.0).limit(), 0.0);
    }

    #[test]
    fn test_spec_clamps_non_finite() {
        assert_eq!(MeasureSpec::exact(f32::NAN).size(), 0.0);
        assert_eq!(MeasureSpec::at_most(f32::INFINITY).size(), 0.0);
    }

    #[test]
    fn test_size_is_empty() {
        assert!(Size::zero().is_empty());
        assert!(Size::new(0.0, 10.0).is_empty());
        assert!(!Size::new(10.0, 10.0).is_empty());
    }

    #[test]
    fn test_rect_edges() {
        let rect = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert_eq!(rect.right(), 110.0);
        assert_eq!(rect.bottom(), 70.0);
        assert_eq!(rect.size(), Size::new(100.0, 50.0));
    }
}
