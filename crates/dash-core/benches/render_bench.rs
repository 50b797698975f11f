// File: crates/dash-core/benches/render_bench.rs
// Summary: Path emission cost for a long series with shadow passes, on a recording surface.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dash_core::{Axis, Chart, DashOptions, Datapoints, Insets, RecordingSurface, Series};

fn build_chart(n: usize) -> Chart {
    let mut ch = Chart::new();
    let data: Vec<Option<(f64, f64)>> = (0..n)
        .map(|i| {
            // A gap every 500 points.
            if i % 500 == 499 {
                return None;
            }
            let x = i as f64;
            Some((x, (x * 0.01).sin() * 14.0))
        })
        .collect();
    ch.x_axis = Axis::new("X", 0.0, (n - 1) as f64);
    // Narrower than the data so a share of segments gets clipped.
    ch.y_axis = Axis::new("Y", -10.0, 10.0);
    ch.add_series(Series::new(Datapoints::from_optional_xy(&data)).dashed(DashOptions::shown(vec![8.0, 3.0])));
    ch
}

fn bench_draw(c: &mut Criterion) {
    let mut group = c.benchmark_group("draw_dashed");
    for &n in &[10_000usize, 50_000usize] {
        let ch = build_chart(n);
        group.bench_function(format!("xy_{n}"), |b| {
            b.iter(|| {
                let mut surface = RecordingSurface::new();
                ch.draw(&mut surface, 800, 500, &Insets::default());
                black_box(surface.commands().len())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_draw);
criterion_main!(benches);
