// File: crates/dash-core/src/geometry.rs
// Summary: Data-space points, segments and the visible clip window.

/// A point in data-space (axis units, not pixels).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Swap the roles of x and y.
    #[inline]
    pub const fn transpose(self) -> Self {
        Self { x: self.y, y: self.x }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Ordered pair of consecutive points. Order matters: on ties the clipper
/// replaces `start` before `end`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    #[inline]
    pub const fn transpose(self) -> Self {
        Self { start: self.start.transpose(), end: self.end.transpose() }
    }
}

/// Visible data-space rectangle, bounds inclusive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClipWindow {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl ClipWindow {
    pub const fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self { x_min, x_max, y_min, y_max }
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x_min && p.x <= self.x_max && p.y >= self.y_min && p.y <= self.y_max
    }
}

/// Pixel translation added to every mapped coordinate of a stroke pass.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PixelOffset {
    pub dx: f64,
    pub dy: f64,
}

impl PixelOffset {
    pub const ZERO: Self = Self { dx: 0.0, dy: 0.0 };

    pub const fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }
}

#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v < lo { lo } else if v > hi { hi } else { v }
}
