// File: crates/dash-core/src/axis.rs
// Summary: Axis model with ranges, and its pixel mapping for one draw.

use crate::geometry::{ClipWindow, Point};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScaleKind {
    Linear,
    Log10,
}

#[derive(Clone, Debug)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub kind: ScaleKind,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max, kind: ScaleKind::Linear }
    }

    pub fn log10(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max, kind: ScaleKind::Log10 }
    }

    pub fn default_x() -> Self {
        Self::new("X", 0.0, 10.0)
    }

    pub fn default_y() -> Self {
        Self::new("Y", 0.0, 100.0)
    }
}

/// Read-only view of an axis as the renderer needs it: the visible data range
/// and the data-to-pixel mapping relative to the plot origin.
pub trait AxisMap {
    fn min(&self) -> f64;
    fn max(&self) -> f64;
    fn p2c(&self, v: f64) -> f64;
}

/// An [`Axis`] laid out over `extent_px` pixels. Vertical axes are inverted so
/// that `max` lands at pixel 0 (top of the plot).
#[derive(Clone, Copy, Debug)]
pub struct AxisScale<'a> {
    pub axis: &'a Axis,
    pub extent_px: f64,
    pub inverted: bool,
}

impl<'a> AxisScale<'a> {
    pub fn horizontal(axis: &'a Axis, extent_px: f64) -> Self {
        Self { axis, extent_px, inverted: false }
    }

    pub fn vertical(axis: &'a Axis, extent_px: f64) -> Self {
        Self { axis, extent_px, inverted: true }
    }

    /// Fraction of the axis range covered up to `v`, 0 at `min`, 1 at `max`.
    fn fraction(&self, v: f64) -> f64 {
        match self.axis.kind {
            ScaleKind::Linear => {
                let span = (self.axis.max - self.axis.min).max(1e-12);
                (v - self.axis.min) / span
            }
            ScaleKind::Log10 => {
                // Ensure strictly positive range for log scale
                let eps = 1e-12;
                let lo = self.axis.min.max(eps).log10();
                let hi = self.axis.max.max(eps).log10();
                let span = (hi - lo).max(1e-12);
                (v.max(eps).log10() - lo) / span
            }
        }
    }
}

impl AxisMap for AxisScale<'_> {
    fn min(&self) -> f64 { self.axis.min }
    fn max(&self) -> f64 { self.axis.max }

    #[inline]
    fn p2c(&self, v: f64) -> f64 {
        let px = self.fraction(v) * self.extent_px;
        if self.inverted { self.extent_px - px } else { px }
    }
}

/// Maps a data-space point into plot-relative pixels.
pub trait PixelMapper {
    fn to_pixel(&self, p: Point) -> (f64, f64);
}

/// The x/y axis pair a series is plotted against.
#[derive(Clone, Copy)]
pub struct AxisPair<'a> {
    pub x: &'a dyn AxisMap,
    pub y: &'a dyn AxisMap,
}

impl<'a> AxisPair<'a> {
    pub fn new(x: &'a dyn AxisMap, y: &'a dyn AxisMap) -> Self {
        Self { x, y }
    }

    /// The currently visible data-space rectangle.
    pub fn window(&self) -> ClipWindow {
        ClipWindow::new(self.x.min(), self.x.max(), self.y.min(), self.y.max())
    }
}

impl PixelMapper for AxisPair<'_> {
    #[inline]
    fn to_pixel(&self, p: Point) -> (f64, f64) {
        (self.x.p2c(p.x), self.y.p2c(p.y))
    }
}
