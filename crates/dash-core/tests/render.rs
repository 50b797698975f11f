// File: crates/dash-core/tests/render.rs
// Purpose: Path emission protocol: move/continue decisions, dash setup, stroke
//          passes and shadow offsets, checked on a recording surface.

use std::panic::{catch_unwind, AssertUnwindSafe};

use dash_core::render::{shadow_offset, SHADOW_ANGLE, SHADOW_COLOR};
use dash_core::surface::DrawCommand;
use dash_core::{
    draw_dashed_series, stroke_dashed_path, stroke_passes, Axis, Chart, ClipWindow, DashOptions,
    DashSpec, Datapoints, Insets, LineJoin, PixelMapper, PixelOffset, Point, RecordingSurface,
    Rgba, Series, StrokeStyle, Surface,
};

/// Data-space equals pixel-space.
struct Identity;

impl PixelMapper for Identity {
    fn to_pixel(&self, p: Point) -> (f64, f64) {
        (p.x, p.y)
    }
}

fn path_commands(surface: &RecordingSurface) -> Vec<DrawCommand> {
    surface
        .commands()
        .iter()
        .filter(|c| matches!(c, DrawCommand::MoveTo { .. } | DrawCommand::LineTo { .. }))
        .cloned()
        .collect()
}

fn single_pass(points: &[Option<(f64, f64)>], window: ClipWindow) -> RecordingSurface {
    let mut surface = RecordingSurface::new();
    let pattern = DashSpec::Length(4.0).normalize();
    stroke_dashed_path(
        &mut surface,
        &Datapoints::from_optional_xy(points),
        &window,
        &Identity,
        &pattern,
        &StrokeStyle::new(1.0, Rgba::BLACK),
    );
    surface
}

/// 100x100 plot at the surface origin over [0,10]x[0,10].
fn square_chart(series: Series) -> Chart {
    let mut chart = Chart::new();
    chart.x_axis = Axis::new("X", 0.0, 10.0);
    chart.y_axis = Axis::new("Y", 0.0, 10.0);
    chart.add_series(series);
    chart
}

fn draw(chart: &Chart) -> RecordingSurface {
    let mut surface = RecordingSurface::new();
    chart.draw(&mut surface, 100, 100, &Insets::new(0, 0, 0, 0));
    surface
}

#[test]
fn end_to_end_single_segment() {
    let series = Series::with_data(vec![(0.0, 0.0), (10.0, 10.0)])
        .with_shadow_size(0.0)
        .with_color(Rgba::rgb(200, 40, 40))
        .dashed(DashOptions::shown(5.0).with_line_width(2.0));
    let surface = draw(&square_chart(series));

    assert_eq!(
        surface.commands(),
        &[
            DrawCommand::Save,
            DrawCommand::Translate { dx: 0.0, dy: 0.0 },
            DrawCommand::LineJoin(LineJoin::Round),
            DrawCommand::LineWidth(2.0),
            DrawCommand::StrokeColor(Rgba::rgb(200, 40, 40)),
            DrawCommand::LineDash(vec![5.0, 5.0]),
            DrawCommand::BeginPath,
            // y grows downwards in pixels
            DrawCommand::MoveTo { x: 0.0, y: 100.0 },
            DrawCommand::LineTo { x: 100.0, y: 0.0 },
            DrawCommand::Stroke(dash_core::surface::StrokeState {
                line_width: 2.0,
                color: Rgba::rgb(200, 40, 40),
                line_join: LineJoin::Round,
                dash: vec![5.0, 5.0],
                translate: (0.0, 0.0),
            }),
            DrawCommand::Restore,
        ][..]
    );
    assert_eq!(surface.depth(), 0);
}

#[test]
fn missing_point_starts_a_new_subpath() {
    let window = ClipWindow::new(-10.0, 10.0, -10.0, 10.0);
    let surface = single_pass(
        &[Some((0.0, 0.0)), Some((1.0, 1.0)), None, Some((2.0, 2.0)), Some((3.0, 3.0))],
        window,
    );
    assert_eq!(
        path_commands(&surface),
        vec![
            DrawCommand::MoveTo { x: 0.0, y: 0.0 },
            DrawCommand::LineTo { x: 1.0, y: 1.0 },
            DrawCommand::MoveTo { x: 2.0, y: 2.0 },
            DrawCommand::LineTo { x: 3.0, y: 3.0 },
        ]
    );
    assert_eq!(surface.strokes().len(), 1);
}

#[test]
fn gap_restarts_the_subpath_at_the_same_point() {
    let window = ClipWindow::new(-10.0, 10.0, -10.0, 10.0);
    let surface = single_pass(
        &[Some((0.0, 0.0)), Some((1.0, 1.0)), None, Some((1.0, 1.0)), Some((2.0, 2.0))],
        window,
    );
    assert_eq!(
        path_commands(&surface),
        vec![
            DrawCommand::MoveTo { x: 0.0, y: 0.0 },
            DrawCommand::LineTo { x: 1.0, y: 1.0 },
            DrawCommand::MoveTo { x: 1.0, y: 1.0 },
            DrawCommand::LineTo { x: 2.0, y: 2.0 },
        ]
    );
}

#[test]
fn connected_points_share_one_subpath() {
    let surface = single_pass(
        &[Some((0.0, 0.0)), Some((1.0, 1.0)), Some((2.0, 0.5)), Some((3.0, 3.0))],
        ClipWindow::new(0.0, 5.0, 0.0, 5.0),
    );
    assert_eq!(surface.count_moves(), 1);
    assert_eq!(surface.count_lines(), 3);
}

#[test]
fn path_continues_through_a_clipped_excursion() {
    // Goes above ymax and comes back: both clipped points land on (5, 10).
    let surface = single_pass(
        &[Some((0.0, 0.0)), Some((5.0, 5.0)), Some((5.0, 20.0)), Some((5.0, 6.0))],
        ClipWindow::new(0.0, 10.0, 0.0, 10.0),
    );
    assert_eq!(
        path_commands(&surface),
        vec![
            DrawCommand::MoveTo { x: 0.0, y: 0.0 },
            DrawCommand::LineTo { x: 5.0, y: 5.0 },
            DrawCommand::LineTo { x: 5.0, y: 10.0 },
            DrawCommand::LineTo { x: 5.0, y: 6.0 },
        ]
    );
}

#[test]
fn discarded_segment_breaks_continuity() {
    let surface = single_pass(
        &[
            Some((0.0, 0.0)),
            Some((1.0, 1.0)),
            Some((20.0, 20.0)),
            Some((21.0, 21.0)),
            Some((2.0, 2.0)),
            Some((3.0, 3.0)),
        ],
        ClipWindow::new(0.0, 10.0, 0.0, 10.0),
    );
    assert_eq!(surface.count_moves(), 2);
    assert_eq!(surface.count_lines(), 4);
    assert!(!path_commands(&surface)
        .iter()
        .any(|c| matches!(c, DrawCommand::LineTo { x, .. } if *x > 10.0)));
}

#[test]
fn fully_hidden_series_strokes_an_empty_path() {
    let surface = single_pass(
        &[Some((20.0, 20.0)), Some((30.0, 25.0))],
        ClipWindow::new(0.0, 10.0, 0.0, 10.0),
    );
    assert_eq!(surface.count_moves(), 0);
    assert_eq!(surface.count_lines(), 0);
    assert_eq!(surface.strokes().len(), 1);
}

#[test]
fn pass_offset_translates_every_vertex() {
    let mut surface = RecordingSurface::new();
    let style = StrokeStyle::new(3.0, SHADOW_COLOR).with_offset(PixelOffset::new(0.5, 2.0));
    let summary = stroke_dashed_path(
        &mut surface,
        &Datapoints::from_xy(&[(1.0, 1.0), (2.0, 3.0), (4.0, 4.0)]),
        &ClipWindow::new(0.0, 10.0, 0.0, 10.0),
        &Identity,
        &DashSpec::Pattern(vec![3.0, 1.0]).normalize(),
        &style,
    );
    assert_eq!(summary.moves, 1);
    assert_eq!(summary.segments, 2);
    assert_eq!(
        path_commands(&surface),
        vec![
            DrawCommand::MoveTo { x: 1.5, y: 3.0 },
            DrawCommand::LineTo { x: 2.5, y: 5.0 },
            DrawCommand::LineTo { x: 4.5, y: 6.0 },
        ]
    );
    let strokes = surface.strokes();
    assert_eq!(strokes[0].line_width, 3.0);
    assert_eq!(strokes[0].dash, vec![3.0, 1.0]);
}

#[test]
fn zero_line_width_draws_nothing() {
    assert!(stroke_passes(0.0, 3.0, Rgba::BLACK).is_empty());
    assert!(stroke_passes(-1.0, 0.0, Rgba::BLACK).is_empty());

    let series = Series::with_data(vec![(1.0, 1.0), (2.0, 2.0)])
        .with_shadow_size(3.0)
        .dashed(DashOptions::shown(5.0).with_line_width(0.0));
    let surface = draw(&square_chart(series));
    assert!(surface.strokes().is_empty());
    assert_eq!(surface.depth(), 0);
}

#[test]
fn no_shadow_means_one_stroke() {
    let series = Series::with_data(vec![(1.0, 1.0), (2.0, 2.0)])
        .with_shadow_size(0.0)
        .dashed(DashOptions::shown(5.0));
    let surface = draw(&square_chart(series));
    assert_eq!(surface.strokes().len(), 1);
}

#[test]
fn shadow_passes_precede_main_line() {
    let color = Rgba::rgb(10, 20, 30);
    let passes = stroke_passes(2.0, 4.0, color);
    assert_eq!(passes.len(), 3);

    assert_eq!(passes[0].line_width, 4.0);
    assert_eq!(passes[0].color, SHADOW_COLOR);
    assert_eq!(passes[0].offset, shadow_offset(3.0));

    assert_eq!(passes[1].line_width, 2.0);
    assert_eq!(passes[1].color, SHADOW_COLOR);
    assert_eq!(passes[1].offset, shadow_offset(2.0));

    assert_eq!(passes[2], StrokeStyle::new(2.0, color));

    let off = shadow_offset(3.0);
    assert!((off.dx - SHADOW_ANGLE.sin() * 3.0).abs() < 1e-12);
    assert!((off.dy - SHADOW_ANGLE.cos() * 3.0).abs() < 1e-12);
    assert!(off.dy > off.dx && off.dx > 0.0);
}

#[test]
fn shadow_passes_keep_the_same_subpaths() {
    let series = Series::new(Datapoints::from_optional_xy(&[
        Some((1.0, 1.0)),
        Some((2.0, 5.0)),
        None,
        Some((3.0, 2.0)),
        Some((4.0, 8.0)),
        Some((5.0, 3.0)),
    ]))
    .with_shadow_size(3.0)
    .dashed(DashOptions::shown(vec![6.0, 2.0]));
    let surface = draw(&square_chart(series));

    let strokes = surface.strokes();
    assert_eq!(strokes.len(), 3);
    assert_eq!(
        strokes.iter().map(|s| s.line_width).collect::<Vec<_>>(),
        vec![3.0, 1.5, 2.0]
    );
    assert!(strokes.iter().all(|s| s.line_join == LineJoin::Round));
    assert!(strokes.iter().all(|s| s.dash == vec![6.0, 2.0]));
    // Three passes, two subpaths each.
    assert_eq!(surface.count_moves(), 6);
    assert_eq!(surface.count_lines(), 9);
}

#[test]
fn hidden_series_is_not_drawn() {
    let series = Series::with_data(vec![(1.0, 1.0), (2.0, 2.0)]);
    let surface = draw(&square_chart(series));
    assert!(surface.commands().is_empty());
}

#[test]
fn plot_offset_scopes_the_translation() {
    let series = Series::with_data(vec![(1.0, 1.0), (2.0, 2.0)]).dashed(DashOptions::shown(5.0));
    let chart = square_chart(series);
    let mut surface = RecordingSurface::new();
    chart.draw(&mut surface, 200, 150, &Insets::new(40, 10, 20, 30));

    let strokes = surface.strokes();
    assert!(strokes.iter().all(|s| s.translate == (40.0, 20.0)));
    assert_eq!(surface.state().translate, (0.0, 0.0));
    assert_eq!(surface.state().line_join, LineJoin::Miter);
    assert_eq!(surface.depth(), 0);
}

#[test]
fn direct_call_uses_host_axes() {
    let series = Series::with_data(vec![(-5.0, -5.0), (5.0, 5.0)])
        .with_shadow_size(0.0)
        .dashed(DashOptions::shown(5.0));
    let chart = square_chart(series);
    let frame = chart.frame(100, 100, &Insets::new(0, 0, 0, 0));
    let mut surface = RecordingSurface::new();
    draw_dashed_series(&frame, &mut surface, &chart.series[0]);
    assert_eq!(
        path_commands(&surface),
        vec![
            DrawCommand::MoveTo { x: 0.0, y: 100.0 },
            DrawCommand::LineTo { x: 50.0, y: 50.0 },
        ]
    );
}

/// Recording surface whose backend fails on the first stroke.
struct FailingStroke(RecordingSurface);

impl Surface for FailingStroke {
    fn save(&mut self) { self.0.save() }
    fn restore(&mut self) { self.0.restore() }
    fn translate(&mut self, dx: f64, dy: f64) { self.0.translate(dx, dy) }
    fn set_line_join(&mut self, join: LineJoin) { self.0.set_line_join(join) }
    fn set_line_width(&mut self, width: f64) { self.0.set_line_width(width) }
    fn set_stroke_color(&mut self, color: Rgba) { self.0.set_stroke_color(color) }
    fn set_line_dash(&mut self, pattern: &[f64]) { self.0.set_line_dash(pattern) }
    fn begin_path(&mut self) { self.0.begin_path() }
    fn move_to(&mut self, x: f64, y: f64) { self.0.move_to(x, y) }
    fn line_to(&mut self, x: f64, y: f64) { self.0.line_to(x, y) }
    fn stroke(&mut self) { panic!("stroke failed") }
}

#[test]
fn state_is_restored_when_a_pass_panics() {
    let series = Series::with_data(vec![(1.0, 1.0), (2.0, 2.0)]).dashed(DashOptions::shown(5.0));
    let chart = square_chart(series);
    let mut surface = FailingStroke(RecordingSurface::new());

    let result = catch_unwind(AssertUnwindSafe(|| {
        chart.draw(&mut surface, 110, 100, &Insets::new(5, 5, 5, 5));
    }));
    assert!(result.is_err());

    let inner = &surface.0;
    assert_eq!(inner.depth(), 0);
    assert_eq!(inner.state().translate, (0.0, 0.0));
    assert_eq!(inner.state().line_join, LineJoin::Miter);
    assert!(inner.state().dash.is_empty());
    assert!(inner.commands().contains(&DrawCommand::Translate { dx: 5.0, dy: 5.0 }));
    assert_eq!(inner.commands().last(), Some(&DrawCommand::Restore));
}
