// File: crates/dash-core/src/series.rs
// Summary: Series model: flat datapoint buffer with missing values, color,
//          shadow size and the dashes option block.
// Notes:
// - The buffer mirrors what a chart host hands to drawing hooks: a flat list of
//   numbers with a stride. Channels after x and y are carried but ignored.

use serde::{Deserialize, Serialize};

use crate::dash::DashSpec;
use crate::error::{Error, Result};
use crate::geometry::Point;
use crate::surface::Rgba;

/// Default shadow thickness in pixels.
pub const DEFAULT_SHADOW_SIZE: f64 = 3.0;
/// Default dashed line width in pixels.
pub const DEFAULT_LINE_WIDTH: f64 = 2.0;

/// Flat numeric buffer, `pointsize` values per point. `None` (or NaN) in the
/// x or y channel marks a missing point.
#[derive(Clone, Debug, PartialEq)]
pub struct Datapoints {
    points: Vec<Option<f64>>,
    pointsize: usize,
}

impl Datapoints {
    pub fn new(points: Vec<Option<f64>>, pointsize: usize) -> Result<Self> {
        if pointsize < 2 {
            return Err(Error::PointSize(pointsize));
        }
        if points.len() % pointsize != 0 {
            return Err(Error::RaggedBuffer { len: points.len(), pointsize });
        }
        Ok(Self { points, pointsize })
    }

    /// Buffer of fully present (x, y) pairs.
    pub fn from_xy(data: &[(f64, f64)]) -> Self {
        let points = data.iter().flat_map(|&(x, y)| [Some(x), Some(y)]).collect();
        Self { points, pointsize: 2 }
    }

    /// Buffer of (x, y) pairs where `None` is a gap in the line.
    pub fn from_optional_xy(data: &[Option<(f64, f64)>]) -> Self {
        let points = data
            .iter()
            .flat_map(|p| match *p {
                Some((x, y)) => [Some(x), Some(y)],
                None => [None, None],
            })
            .collect();
        Self { points, pointsize: 2 }
    }

    pub fn pointsize(&self) -> usize { self.pointsize }

    pub fn len(&self) -> usize { self.points.len() / self.pointsize }

    pub fn is_empty(&self) -> bool { self.points.len() < self.pointsize }

    /// The `i`th point, or `None` if it is missing or out of range.
    pub fn point(&self, i: usize) -> Option<Point> {
        let base = i.checked_mul(self.pointsize)?;
        let x = (*self.points.get(base)?)?;
        let y = (*self.points.get(base + 1)?)?;
        if x.is_nan() || y.is_nan() {
            return None;
        }
        Some(Point::new(x, y))
    }

    /// All points in order, missing ones as `None`.
    pub fn iter(&self) -> impl Iterator<Item = Option<Point>> + '_ {
        (0..self.len()).map(move |i| self.point(i))
    }

    /// Consecutive point pairs `(p[i-1], p[i])`.
    pub fn pairs(&self) -> impl Iterator<Item = (Option<Point>, Option<Point>)> + '_ {
        (1..self.len()).map(move |i| (self.point(i - 1), self.point(i)))
    }
}

impl Default for Datapoints {
    fn default() -> Self {
        Self { points: Vec::new(), pointsize: 2 }
    }
}

/// The `dashes` option block of a series. Missing keys take the defaults
/// (`show: false`, `lineWidth: 2`, `dashLength: 10`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashOptions {
    pub show: bool,
    pub line_width: f64,
    pub dash_length: DashSpec,
}

impl Default for DashOptions {
    fn default() -> Self {
        Self { show: false, line_width: DEFAULT_LINE_WIDTH, dash_length: DashSpec::default() }
    }
}

impl DashOptions {
    /// Shown, with the given dash spec and default line width.
    pub fn shown(dash_length: impl Into<DashSpec>) -> Self {
        Self { show: true, dash_length: dash_length.into(), ..Self::default() }
    }

    pub fn with_line_width(mut self, line_width: f64) -> Self {
        self.line_width = line_width;
        self
    }

    /// Parse an option block such as `{"show": true, "dashLength": [8, 4]}`.
    pub fn from_json(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }
}

#[derive(Clone, Debug)]
pub struct Series {
    pub label: String,
    pub datapoints: Datapoints,
    pub color: Rgba,
    pub shadow_size: f64,
    pub dashes: DashOptions,
}

impl Series {
    pub fn new(datapoints: Datapoints) -> Self {
        Self {
            label: String::new(),
            datapoints,
            color: Rgba::default(),
            shadow_size: DEFAULT_SHADOW_SIZE,
            dashes: DashOptions::default(),
        }
    }

    pub fn with_data(data: Vec<(f64, f64)>) -> Self {
        Self::new(Datapoints::from_xy(&data))
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_color(mut self, color: Rgba) -> Self {
        self.color = color;
        self
    }

    pub fn with_shadow_size(mut self, shadow_size: f64) -> Self {
        self.shadow_size = shadow_size;
        self
    }

    pub fn dashed(mut self, dashes: DashOptions) -> Self {
        self.dashes = dashes;
        self
    }
}
