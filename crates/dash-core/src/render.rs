// File: crates/dash-core/src/render.rs
// Summary: Dashed path emission for one series, plus the shadow/main stroke passes.
// Notes:
// - A pass walks every consecutive point pair, clips it, and emits `move_to`
//   only where the clipped start differs from the previous clipped end.
// - Continuity is compared in data-space with exact equality, so the pixel
//   offset of a shadow pass never introduces extra moves.

use std::f64::consts::PI;

use tracing::{debug, trace};

use crate::axis::PixelMapper;
use crate::clip::clip;
use crate::dash::DashPattern;
use crate::geometry::{ClipWindow, PixelOffset, Point};
use crate::plugin::PlotHost;
use crate::series::{Datapoints, Series};
use crate::surface::{LineJoin, Rgba, SavedState, Surface};

/// Angle of the shadow offset, measured from the vertical.
pub const SHADOW_ANGLE: f64 = PI / 18.0;
/// Shadow stroke color: black at 10% opacity.
pub const SHADOW_COLOR: Rgba = Rgba::rgba(0, 0, 0, 0.1);

/// Width, color and pixel offset of one stroke pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeStyle {
    pub line_width: f64,
    pub color: Rgba,
    pub offset: PixelOffset,
}

impl StrokeStyle {
    pub const fn new(line_width: f64, color: Rgba) -> Self {
        Self { line_width, color, offset: PixelOffset::ZERO }
    }

    pub const fn with_offset(mut self, offset: PixelOffset) -> Self {
        self.offset = offset;
        self
    }
}

/// Counts from one pass, for logging and tests.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PassSummary {
    pub segments: usize,
    pub moves: usize,
    pub skipped: usize,
}

/// Offset of a shadow stroke sitting `distance` pixels from the line's center.
pub fn shadow_offset(distance: f64) -> PixelOffset {
    PixelOffset::new(SHADOW_ANGLE.sin() * distance, SHADOW_ANGLE.cos() * distance)
}

/// Stroke passes in drawing order: two shadow passes (when `shadow_size > 0`)
/// then the main line. Nothing at all is drawn when `line_width <= 0`.
pub fn stroke_passes(line_width: f64, shadow_size: f64, color: Rgba) -> Vec<StrokeStyle> {
    let mut passes = Vec::with_capacity(3);
    if line_width <= 0.0 {
        return passes;
    }
    if shadow_size > 0.0 {
        // A thick and a thin line with transparency.
        let half = line_width / 2.0;
        passes.push(
            StrokeStyle::new(shadow_size, SHADOW_COLOR)
                .with_offset(shadow_offset(half + shadow_size / 2.0)),
        );
        passes.push(
            StrokeStyle::new(shadow_size / 2.0, SHADOW_COLOR)
                .with_offset(shadow_offset(half + shadow_size / 4.0)),
        );
    }
    passes.push(StrokeStyle::new(line_width, color));
    passes
}

/// One pass: set the dash pattern and stroke style, build the clipped path for
/// the whole series, and stroke it once.
pub fn stroke_dashed_path<S, M>(
    surface: &mut S,
    datapoints: &Datapoints,
    window: &ClipWindow,
    mapper: &M,
    pattern: &DashPattern,
    style: &StrokeStyle,
) -> PassSummary
where
    S: Surface + ?Sized,
    M: PixelMapper + ?Sized,
{
    let PixelOffset { dx, dy } = style.offset;
    let mut summary = PassSummary::default();
    let mut prev: Option<Point> = None;

    surface.set_line_width(style.line_width);
    surface.set_stroke_color(style.color);
    surface.set_line_dash(pattern.as_slice());
    surface.begin_path();

    // A missing point or a discarded segment breaks the line: the next drawn
    // segment starts with a move even if it resumes at the last drawn end.
    for (p1, p2) in datapoints.pairs() {
        let (Some(p1), Some(p2)) = (p1, p2) else {
            prev = None;
            summary.skipped += 1;
            continue;
        };
        let Some(seg) = clip(p1, p2, window) else {
            trace!(?p1, ?p2, "segment outside clip window");
            prev = None;
            summary.skipped += 1;
            continue;
        };

        if prev != Some(seg.start) {
            let (x, y) = mapper.to_pixel(seg.start);
            surface.move_to(x + dx, y + dy);
            summary.moves += 1;
        }
        let (x, y) = mapper.to_pixel(seg.end);
        surface.line_to(x + dx, y + dy);
        summary.segments += 1;

        prev = Some(seg.end);
    }

    surface.stroke();
    summary
}

/// Draw a series' dashed line with its shadow, inside one saved surface scope
/// translated to the plot origin.
pub fn draw_dashed_series<S>(host: &dyn PlotHost, surface: &mut S, series: &Series)
where
    S: Surface + ?Sized,
{
    if !series.dashes.show {
        return;
    }

    let passes = stroke_passes(series.dashes.line_width, series.shadow_size, series.color);
    let pattern = series.dashes.dash_length.normalize();
    let axes = host.axes(series);
    let window = axes.window();
    let origin = host.plot_offset();

    let mut scope = SavedState::new(surface);
    scope.translate(origin.left, origin.top);
    scope.set_line_join(LineJoin::Round);

    for style in &passes {
        let summary =
            stroke_dashed_path(&mut *scope, &series.datapoints, &window, &axes, &pattern, style);
        debug!(
            series = %series.label,
            line_width = style.line_width,
            segments = summary.segments,
            moves = summary.moves,
            skipped = summary.skipped,
            "stroked dashed pass"
        );
    }
}
