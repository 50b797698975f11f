// File: crates/dash-core/src/chart.rs
// Summary: Chart host: axes, series and drawing hooks; lays out a plot frame per
//          draw and runs every hook over every series.

use tracing::debug;

use crate::axis::{Axis, AxisPair, AxisScale};
use crate::plugin::{DashesPlugin, PlotHost, SeriesHook};
use crate::series::Series;
use crate::surface::Surface;
use crate::types::{Insets, PlotOffset};
use crate::view::ViewState;

pub struct Chart {
    pub series: Vec<Series>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    hooks: Vec<Box<dyn SeriesHook>>,
}

impl Default for Chart {
    fn default() -> Self { Self::new() }
}

impl Chart {
    /// Empty chart with default axes and the dashes plugin registered.
    pub fn new() -> Self {
        Self {
            series: Vec::new(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
            hooks: vec![Box::new(DashesPlugin)],
        }
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    pub fn add_hook(&mut self, hook: Box<dyn SeriesHook>) {
        self.hooks.push(hook);
    }

    pub fn hook_names(&self) -> Vec<&'static str> {
        self.hooks.iter().map(|h| h.name()).collect()
    }

    /// Fit both axes to the data, with a small vertical margin.
    pub fn autoscale_axes(&mut self) {
        ViewState::from_chart(self).apply_to_chart(self);
    }

    /// Axis layout for a `width` x `height` surface with `insets` around the plot.
    pub fn frame(&self, width: i32, height: i32, insets: &Insets) -> PlotFrame<'_> {
        let plot_w = (width as f64 - insets.hsum() as f64).max(1.0);
        let plot_h = (height as f64 - insets.vsum() as f64).max(1.0);
        PlotFrame {
            offset: PlotOffset::from(*insets),
            x: AxisScale::horizontal(&self.x_axis, plot_w),
            y: AxisScale::vertical(&self.y_axis, plot_h),
        }
    }

    /// Run every registered hook over every series.
    pub fn draw(&self, surface: &mut dyn Surface, width: i32, height: i32, insets: &Insets) {
        let frame = self.frame(width, height, insets);
        debug!(
            series = self.series.len(),
            hooks = self.hooks.len(),
            plot_w = frame.x.extent_px,
            plot_h = frame.y.extent_px,
            "drawing chart"
        );
        for s in &self.series {
            for hook in &self.hooks {
                hook.draw_series(&frame, surface, s);
            }
        }
    }
}

/// Per-draw layout of the plot area.
#[derive(Clone, Copy, Debug)]
pub struct PlotFrame<'a> {
    pub offset: PlotOffset,
    pub x: AxisScale<'a>,
    pub y: AxisScale<'a>,
}

impl PlotHost for PlotFrame<'_> {
    fn plot_offset(&self) -> PlotOffset { self.offset }

    fn axes(&self, _series: &Series) -> AxisPair<'_> {
        AxisPair::new(&self.x, &self.y)
    }
}
