// File: crates/dash-core/src/clip.rs
// Summary: Segment clipping against the visible window, one half-plane at a time.
// Notes:
// - The four bound passes run in a fixed order (ymin, ymax, xmin, xmax) and each
//   works on the output of the previous one. Reordering changes which endpoint
//   receives an interpolated value for corner-cutting segments.
// - The x passes reuse the y passes on a transposed segment; the interpolation
//   arithmetic is identical term for term.

use crate::geometry::{ClipWindow, Point, Segment};

/// Clip one segment to `window`. `None` means the segment lies entirely
/// outside on at least one axis and must not be drawn.
pub fn clip(p1: Point, p2: Point, window: &ClipWindow) -> Option<Segment> {
    let seg = Segment::new(p1, p2);
    let seg = clip_ymin(seg, window.y_min)?;
    let seg = clip_ymax(seg, window.y_max)?;
    let seg = clip_xmin(seg, window.x_min)?;
    clip_xmax(seg, window.x_max)
}

/// Lower y bound.
pub fn clip_ymin(seg: Segment, y_min: f64) -> Option<Segment> {
    let Segment { mut start, mut end } = seg;
    let (a, b) = (start, end);
    if a.y <= b.y && a.y < y_min {
        if b.y < y_min {
            return None;
        }
        start = Point::new(interpolate_x(a, b, y_min), y_min);
    } else if b.y <= a.y && b.y < y_min {
        if a.y < y_min {
            return None;
        }
        end = Point::new(interpolate_x(a, b, y_min), y_min);
    }
    Some(Segment { start, end })
}

/// Upper y bound.
pub fn clip_ymax(seg: Segment, y_max: f64) -> Option<Segment> {
    let Segment { mut start, mut end } = seg;
    let (a, b) = (start, end);
    if a.y >= b.y && a.y > y_max {
        if b.y > y_max {
            return None;
        }
        start = Point::new(interpolate_x(a, b, y_max), y_max);
    } else if b.y >= a.y && b.y > y_max {
        if a.y > y_max {
            return None;
        }
        end = Point::new(interpolate_x(a, b, y_max), y_max);
    }
    Some(Segment { start, end })
}

/// Lower x bound.
pub fn clip_xmin(seg: Segment, x_min: f64) -> Option<Segment> {
    clip_ymin(seg.transpose(), x_min).map(Segment::transpose)
}

/// Upper x bound.
pub fn clip_xmax(seg: Segment, x_max: f64) -> Option<Segment> {
    clip_ymax(seg.transpose(), x_max).map(Segment::transpose)
}

/// x where the line through `a` and `b` crosses the horizontal line `y`.
/// Always measured from `a`, whichever endpoint is being replaced.
#[inline]
fn interpolate_x(a: Point, b: Point, y: f64) -> f64 {
    (y - a.y) / (b.y - a.y) * (b.x - a.x) + a.x
}
