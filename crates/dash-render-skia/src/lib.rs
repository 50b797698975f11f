// File: crates/dash-render-skia/src/lib.rs
// Summary: Skia renderer crate: CPU raster surfaces for dashed chart series.

pub mod render;
pub mod surface;

pub use render::{draw_chart, render_to_png, render_to_png_bytes, RenderOptions};
pub use surface::SkiaSurface;
