// File: crates/dash-core/src/plugin.rs
// Summary: Series drawing hook trait, the read-only host interface it draws
//          against, and the dashes plugin.

use crate::axis::AxisPair;
use crate::render::draw_dashed_series;
use crate::series::{DashOptions, Series};
use crate::surface::Surface;
use crate::types::PlotOffset;

/// What a drawing hook may ask of the chart during a draw.
pub trait PlotHost {
    /// Translation from surface origin to the plot area's top-left corner.
    fn plot_offset(&self) -> PlotOffset;
    /// Axes the series is plotted against, laid out for the current draw.
    fn axes(&self, series: &Series) -> AxisPair<'_>;
}

/// Hook run once per series on every redraw, after the host has laid out axes.
pub trait SeriesHook {
    fn name(&self) -> &'static str;
    fn version(&self) -> &'static str { "0.1" }
    fn draw_series(&self, host: &dyn PlotHost, surface: &mut dyn Surface, series: &Series);
}

/// Draws series as clipped dashed lines with an optional soft shadow.
#[derive(Clone, Copy, Debug, Default)]
pub struct DashesPlugin;

impl DashesPlugin {
    /// Option block a series gets when it does not configure dashes.
    pub fn default_options() -> DashOptions { DashOptions::default() }
}

impl SeriesHook for DashesPlugin {
    fn name(&self) -> &'static str { "dashes" }

    fn draw_series(&self, host: &dyn PlotHost, surface: &mut dyn Surface, series: &Series) {
        draw_dashed_series(host, surface, series);
    }
}
