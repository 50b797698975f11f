// File: crates/dash-core/src/lib.rs
// Summary: Core library entry point; clipped dashed-line rendering for chart series.

pub mod axis;
pub mod chart;
pub mod clip;
pub mod dash;
pub mod error;
pub mod geometry;
pub mod plugin;
pub mod render;
pub mod series;
pub mod surface;
pub mod types;
pub mod view;

pub use axis::{Axis, AxisMap, AxisPair, AxisScale, PixelMapper, ScaleKind};
pub use chart::{Chart, PlotFrame};
pub use clip::clip;
pub use dash::{DashPattern, DashSpec};
pub use error::{Error, Result};
pub use geometry::{ClipWindow, PixelOffset, Point, Segment};
pub use plugin::{DashesPlugin, PlotHost, SeriesHook};
pub use render::{draw_dashed_series, stroke_dashed_path, stroke_passes, StrokeStyle};
pub use series::{Datapoints, DashOptions, Series};
pub use surface::{LineJoin, RecordingSurface, Rgba, Surface};
pub use types::{Insets, PlotOffset};
pub use view::ViewState;
