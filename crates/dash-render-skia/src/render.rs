// File: crates/dash-render-skia/src/render.rs
// Summary: Headless PNG rendering pipeline using Skia CPU raster surfaces: plot
//          frame (grid, axes, labels) plus every chart hook over the series.

use anyhow::Result;
use dash_core::types::{HEIGHT, WIDTH};
use dash_core::{Axis, Chart, Insets};
use skia_safe as skia;
use tracing::debug;

use crate::surface::SkiaSurface;

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub background: skia::Color,
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            background: skia::Color::from_argb(255, 250, 250, 252),
            draw_labels: true,
        }
    }
}

/// Draw the full chart onto `canvas`, which must be `opts.width` x `opts.height`.
pub fn draw_chart(canvas: &skia::Canvas, chart: &Chart, opts: &RenderOptions) {
    canvas.clear(opts.background);

    let plot_left = opts.insets.left as i32;
    let plot_right = opts.width - opts.insets.right as i32;
    let plot_top = opts.insets.top as i32;
    let plot_bottom = opts.height - opts.insets.bottom as i32;

    draw_grid(canvas, plot_left, plot_top, plot_right, plot_bottom);
    draw_axes(
        canvas,
        plot_left,
        plot_top,
        plot_right,
        plot_bottom,
        &chart.x_axis,
        &chart.y_axis,
        opts.draw_labels,
    );

    let mut surface = SkiaSurface::new(canvas);
    chart.draw(&mut surface, opts.width, opts.height, &opts.insets);
}

/// Render the chart to PNG bytes.
pub fn render_to_png_bytes(chart: &Chart, opts: &RenderOptions) -> Result<Vec<u8>> {
    let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
        .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
    draw_chart(surface.canvas(), chart, opts);

    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
    debug!(width = opts.width, height = opts.height, bytes = data.len(), "encoded PNG");
    Ok(data.as_bytes().to_vec())
}

/// Render the chart to a PNG at `output_png_path` using a CPU raster surface.
pub fn render_to_png(
    chart: &Chart,
    opts: &RenderOptions,
    output_png_path: impl AsRef<std::path::Path>,
) -> Result<()> {
    let bytes = render_to_png_bytes(chart, opts)?;
    if let Some(parent) = output_png_path.as_ref().parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(output_png_path, bytes)?;
    Ok(())
}

// ---- helpers ----------------------------------------------------------------

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

fn draw_grid(canvas: &skia::Canvas, l: i32, t: i32, r: i32, b: i32) {
    let mut paint = skia::Paint::default();
    paint.set_color(skia::Color::from_argb(255, 230, 230, 235));
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);

    // verticals
    for x in linspace(l as f64, r as f64, 10) {
        canvas.draw_line((x as f32, t as f32), (x as f32, b as f32), &paint);
    }
    // horizontals
    for y in linspace(t as f64, b as f64, 6) {
        canvas.draw_line((l as f32, y as f32), (r as f32, y as f32), &paint);
    }
}

#[allow(clippy::too_many_arguments)]
fn draw_axes(
    canvas: &skia::Canvas,
    l: i32,
    t: i32,
    r: i32,
    b: i32,
    x: &Axis,
    y: &Axis,
    draw_labels: bool,
) {
    let mut axis_paint = skia::Paint::default();
    axis_paint.set_color(skia::Color::from_argb(255, 60, 60, 70));
    axis_paint.set_anti_alias(true);
    axis_paint.set_stroke_width(1.5);

    // X and Y axis lines
    canvas.draw_line((l as f32, b as f32), (r as f32, b as f32), &axis_paint);
    canvas.draw_line((l as f32, t as f32), (l as f32, b as f32), &axis_paint);

    if !draw_labels {
        return;
    }

    let mut paint_text = skia::Paint::default();
    paint_text.set_color(skia::Color::from_argb(255, 20, 20, 30));
    let mut font = skia::Font::default();
    font.set_size(14.0);

    canvas.draw_str(&x.label, (r as f32 - 80.0, b as f32 + 24.0), &font, &paint_text);
    canvas.draw_str(&y.label, (l as f32 - 56.0, t as f32 + 14.0), &font, &paint_text);

    // Range ends
    font.set_size(11.0);
    let fmt = |v: f64| format!("{v:.2}");
    canvas.draw_str(fmt(x.min), (l as f32, b as f32 + 40.0), &font, &paint_text);
    canvas.draw_str(fmt(x.max), (r as f32 - 40.0, b as f32 + 40.0), &font, &paint_text);
    canvas.draw_str(fmt(y.max), (l as f32 - 64.0, t as f32 + 34.0), &font, &paint_text);
    canvas.draw_str(fmt(y.min), (l as f32 - 64.0, b as f32), &font, &paint_text);
}
