// File: crates/dash-examples/src/bin/dashes.rs
// Summary: Renders dashed series (with shadow and gaps) to PNG, full view and
//          zoomed view, from an optional x,y CSV and an optional dashes JSON block.
// Usage: example-dashes [data.csv] ['{"show": true, "dashLength": [12, 4]}']

use anyhow::{Context, Result};
use dash_core::{Chart, DashOptions, Datapoints, Rgba, Series, ViewState};
use dash_render_skia::{render_to_png, RenderOptions};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = std::env::args().skip(1);
    let csv_path = args.next();
    let dashes = match args.next() {
        Some(json) => DashOptions::from_json(&json).context("parsing dashes option block")?,
        None => DashOptions::shown(vec![12.0, 4.0]).with_line_width(2.5),
    };

    let (label, points) = match csv_path {
        Some(raw) => {
            let path = PathBuf::from(&raw);
            let points = load_xy_csv(&path)
                .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
            if points.iter().all(Option::is_none) {
                anyhow::bail!("no usable rows in {}; expected x,y columns", path.display());
            }
            (stem(&path), points)
        }
        None => ("sine".to_string(), synthetic(240)),
    };
    let gaps = points.iter().filter(|p| p.is_none()).count();
    info!(points = points.len(), gaps, series = %label, "loaded data");

    let mut chart = Chart::new();
    chart.add_series(
        Series::new(Datapoints::from_optional_xy(&points))
            .with_label(label.clone())
            .with_color(Rgba::rgb(32, 120, 200))
            .dashed(dashes),
    );
    // Same data, shifted down and drawn with a plain length and no shadow.
    let shifted: Vec<_> = points.iter().map(|p| p.map(|(x, y)| (x, y * 0.5 - 1.0))).collect();
    chart.add_series(
        Series::new(Datapoints::from_optional_xy(&shifted))
            .with_label(format!("{label}-half"))
            .with_color(Rgba::rgb(220, 80, 80))
            .with_shadow_size(0.0)
            .dashed(DashOptions::shown(6.0).with_line_width(1.5)),
    );
    chart.autoscale_axes();

    let opts = RenderOptions::default();
    let out_full = out_name(&label, "full");
    render_to_png(&chart, &opts, &out_full)?;
    info!(path = %out_full.display(), "wrote full view");

    // Zoom in around the plot center; segments leaving the view get clipped.
    let mut view = ViewState::from_chart(&chart);
    let cx = (opts.width as f64 + opts.insets.left as f64 - opts.insets.right as f64) / 2.0;
    let cy = (opts.height as f64 + opts.insets.top as f64 - opts.insets.bottom as f64) / 2.0;
    view.zoom_at_pixel(0.6, cx, cy, opts.width, opts.height, &opts.insets);
    view.apply_to_chart(&mut chart);

    let out_zoom = out_name(&label, "zoom");
    render_to_png(&chart, &opts, &out_zoom)?;
    info!(path = %out_zoom.display(), x_min = view.x_min, x_max = view.x_max, "wrote zoomed view");

    Ok(())
}

/// Sine wave with a gap every 60 samples.
fn synthetic(n: usize) -> Vec<Option<(f64, f64)>> {
    (0..n)
        .map(|i| {
            if i % 60 == 59 {
                return None;
            }
            let x = i as f64 * 0.1;
            Some((x, (x * 0.7).sin() * 3.0 + (x * 2.3).cos() * 0.6))
        })
        .collect()
}

/// Load an x,y CSV. Rows with an empty or unparseable y become gaps; rows
/// without a usable x fall back to the row index.
fn load_xy_csv(path: &Path) -> Result<Vec<Option<(f64, f64)>>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect::<Vec<_>>();

    let idx = |names: &[&str]| headers.iter().position(|h| names.contains(&h.as_str()));
    let i_x = idx(&["x", "time", "timestamp", "index", "t"]);
    let i_y = idx(&["y", "value", "close", "v"]).unwrap_or(if i_x == Some(1) { 0 } else { 1 });
    if i_x.is_none() {
        warn!(?headers, "no x column found; using row index");
    }

    let mut out = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let parse = |i: usize| rec.get(i).and_then(|s| s.trim().parse::<f64>().ok());
        let x = i_x.and_then(parse).unwrap_or(row as f64);
        out.push(parse(i_y).map(|y| (x, y)));
    }
    Ok(out)
}

fn stem(path: &Path) -> String {
    path.file_stem().and_then(|s| s.to_str()).unwrap_or("series").to_string()
}

/// Output file name like target/out/dashes_<label>_<suffix>.png
fn out_name(label: &str, suffix: &str) -> PathBuf {
    let mut out = PathBuf::from("target/out");
    out.push(format!("dashes_{}_{}.png", label, suffix));
    out
}
