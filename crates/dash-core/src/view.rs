// File: crates/dash-core/src/view.rs
// Summary: Visible data ranges as a value. Autoscale, pan and zoom edit the
//          ranges; applied to the chart they become the next draw's clip window.

use crate::geometry::{clamp, ClipWindow};
use crate::types::Insets;
use crate::Chart;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl ViewState {
    /// Bounds of every present point across all series. Missing points are ignored.
    pub fn from_chart(chart: &Chart) -> Self {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        for s in &chart.series {
            for p in s.datapoints.iter().flatten() {
                x_min = x_min.min(p.x);
                x_max = x_max.max(p.x);
                y_min = y_min.min(p.y);
                y_max = y_max.max(p.y);
            }
        }
        if !x_min.is_finite() || !x_max.is_finite() || !y_min.is_finite() || !y_max.is_finite() {
            return Self { x_min: 0.0, x_max: 1.0, y_min: 0.0, y_max: 1.0 };
        }
        if (x_max - x_min).abs() < 1e-9 { x_max = x_min + 1.0; }
        if (y_max - y_min).abs() < 1e-9 { y_max = y_min + 1.0; }
        let ym = (y_max - y_min) * 0.02;
        Self { x_min, x_max, y_min: y_min - ym, y_max: y_max + ym }
    }

    pub fn from_window(w: &ClipWindow) -> Self {
        Self { x_min: w.x_min, x_max: w.x_max, y_min: w.y_min, y_max: w.y_max }
    }

    pub fn window(&self) -> ClipWindow {
        ClipWindow::new(self.x_min, self.x_max, self.y_min, self.y_max)
    }

    pub fn apply_to_chart(&self, chart: &mut Chart) {
        chart.x_axis.min = self.x_min;
        chart.x_axis.max = self.x_max;
        chart.y_axis.min = self.y_min;
        chart.y_axis.max = self.y_max;
    }

    fn x_span(&self) -> f64 { self.x_max - self.x_min }

    fn y_span(&self) -> f64 { self.y_max - self.y_min }

    /// Shift the clip window by a drag of `(dx, dy)` pixels inside the plot.
    /// Data follows the cursor: dragging right reveals smaller x, dragging
    /// down reveals larger y.
    pub fn pan_by_pixels(&mut self, dx: f64, dy: f64, width: i32, height: i32, insets: &Insets) {
        let (plot_w, plot_h) = plot_size(width, height, insets);
        let shift_x = -dx / plot_w * self.x_span();
        let shift_y = dy / plot_h * self.y_span();
        self.x_min += shift_x;
        self.x_max += shift_x;
        self.y_min += shift_y;
        self.y_max += shift_y;
    }

    /// Scale the clip window by `1 - scroll` (limited to 0.1..=10) around the
    /// data point under the cursor, which keeps its pixel position. Positive
    /// `scroll` shrinks the window, so more segments get clipped on the next draw.
    pub fn zoom_at_pixel(&mut self, scroll: f64, cursor_x: f64, cursor_y: f64, width: i32, height: i32, insets: &Insets) {
        let (plot_w, plot_h) = plot_size(width, height, insets);
        // Cursor position as a fraction of the plot, from the left and from the top.
        let fx = clamp(cursor_x - insets.left as f64, 0.0, plot_w) / plot_w;
        let fy = clamp(cursor_y - insets.top as f64, 0.0, plot_h) / plot_h;
        let anchor_x = self.x_min + fx * self.x_span();
        let anchor_y = self.y_max - fy * self.y_span();

        let factor = clamp(1.0 - scroll, 0.1, 10.0);
        let x_span = self.x_span() * factor;
        let y_span = self.y_span() * factor;
        self.x_min = anchor_x - fx * x_span;
        self.x_max = self.x_min + x_span;
        self.y_max = anchor_y + fy * y_span;
        self.y_min = self.y_max - y_span;
    }
}

fn plot_size(width: i32, height: i32, insets: &Insets) -> (f64, f64) {
    (
        (width as f64 - insets.hsum() as f64).max(1.0),
        (height as f64 - insets.vsum() as f64).max(1.0),
    )
}
