// File: crates/dash-render-skia/src/surface.rs
// Summary: `Surface` implementation over a Skia canvas with canvas-style sticky
//          stroke state and a save/restore stack mirroring the canvas one.
// Notes:
// - Skia keeps the transform on the canvas; pen state (width, color, join,
//   dash) lives here and is pushed/popped alongside `canvas.save()/restore()`.
// - Dash lists follow HTML canvas rules: odd lengths are repeated to even
//   length, and a list with negative or non-finite entries is ignored.

use dash_core::{LineJoin, Rgba, Surface};
use skia_safe as skia;

#[derive(Clone, Debug)]
struct PenState {
    line_width: f32,
    color: skia::Color,
    join: skia::paint::Join,
    dash: Vec<f32>,
}

impl Default for PenState {
    fn default() -> Self {
        Self {
            line_width: 1.0,
            color: skia::Color::BLACK,
            join: skia::paint::Join::Miter,
            dash: Vec::new(),
        }
    }
}

pub struct SkiaSurface<'a> {
    canvas: &'a skia::Canvas,
    path: skia::Path,
    pen: PenState,
    saved: Vec<PenState>,
}

impl<'a> SkiaSurface<'a> {
    pub fn new(canvas: &'a skia::Canvas) -> Self {
        Self { canvas, path: skia::Path::new(), pen: PenState::default(), saved: Vec::new() }
    }

    fn stroke_paint(&self) -> skia::Paint {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Stroke);
        paint.set_stroke_width(self.pen.line_width);
        paint.set_color(self.pen.color);
        paint.set_stroke_join(self.pen.join);
        if !self.pen.dash.is_empty() && self.pen.dash.iter().sum::<f32>() > 0.0 {
            paint.set_path_effect(skia::PathEffect::dash(&self.pen.dash, 0.0));
        }
        paint
    }
}

pub fn to_skia_color(c: Rgba) -> skia::Color {
    skia::Color::from_argb(c.alpha_u8(), c.r, c.g, c.b)
}

/// Canvas `setLineDash` rules: `None` if the list must be ignored.
pub fn canvas_dash_intervals(pattern: &[f64]) -> Option<Vec<f32>> {
    if pattern.iter().any(|v| !v.is_finite() || *v < 0.0) {
        return None;
    }
    let mut out: Vec<f32> = pattern.iter().map(|&v| v as f32).collect();
    if out.len() % 2 == 1 {
        out.extend_from_within(..);
    }
    Some(out)
}

impl Surface for SkiaSurface<'_> {
    fn save(&mut self) {
        self.canvas.save();
        self.saved.push(self.pen.clone());
    }

    fn restore(&mut self) {
        if let Some(pen) = self.saved.pop() {
            self.canvas.restore();
            self.pen = pen;
        }
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.canvas.translate((dx as f32, dy as f32));
    }

    fn set_line_join(&mut self, join: LineJoin) {
        self.pen.join = match join {
            LineJoin::Miter => skia::paint::Join::Miter,
            LineJoin::Round => skia::paint::Join::Round,
            LineJoin::Bevel => skia::paint::Join::Bevel,
        };
    }

    fn set_line_width(&mut self, width: f64) {
        self.pen.line_width = width as f32;
    }

    fn set_stroke_color(&mut self, color: Rgba) {
        self.pen.color = to_skia_color(color);
    }

    fn set_line_dash(&mut self, pattern: &[f64]) {
        if let Some(dash) = canvas_dash_intervals(pattern) {
            self.pen.dash = dash;
        }
    }

    fn begin_path(&mut self) {
        self.path = skia::Path::new();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.path.move_to((x as f32, y as f32));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.path.line_to((x as f32, y as f32));
    }

    fn stroke(&mut self) {
        let paint = self.stroke_paint();
        self.canvas.draw_path(&self.path, &paint);
    }
}
