use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use plotkit::core::{
    create_tick_values, filter_redundant_minor_ticks, Axis, AxisPosition, DataPoint, ScreenPoint,
};
use plotkit::extensions::reduce_line_points;
use plotkit::model::PlotModel;
use plotkit::render::RecordingContext;
use plotkit::series::{find_window_start_index, LineSeries};

fn resolved_axis(minimum: f64, maximum: f64, screen_min: f64, screen_max: f64) -> Axis {
    let mut axis = Axis::linear(AxisPosition::Bottom).with_range(minimum, maximum);
    axis.update_actual_max_min();
    axis.update_transform(screen_min, screen_max).expect("transform");
    axis
}

fn bench_transform_round_trip(c: &mut Criterion) {
    let axis = resolved_axis(0.0, 10_000.0, 0.0, 1920.0);

    c.bench_function("axis_transform_round_trip", |b| {
        b.iter(|| {
            let px = axis.transform(black_box(4_321.123));
            black_box(axis.inverse_transform(px));
        })
    });
}

fn bench_tick_generation(c: &mut Criterion) {
    c.bench_function("create_and_filter_ticks", |b| {
        b.iter(|| {
            let major = create_tick_values(black_box(0.0), black_box(1000.0), 50.0)
                .expect("major ticks");
            let minor =
                create_tick_values(black_box(0.0), black_box(1000.0), 10.0).expect("minor ticks");
            black_box(filter_redundant_minor_ticks(&major, &minor));
        })
    });
}

fn bench_line_reduction_10k(c: &mut Criterion) {
    let points: Vec<ScreenPoint> = (0..10_000)
        .map(|i| {
            let t = f64::from(i) * 0.2;
            ScreenPoint::new(t, (t * 0.05).sin() * 300.0)
        })
        .collect();

    c.bench_function("line_reduction_10k", |b| {
        b.iter(|| black_box(reduce_line_points(black_box(&points), 4.0)))
    });
}

fn bench_window_search_100k(c: &mut Criterion) {
    let points: Vec<DataPoint> = (0..100_000)
        .map(|i| DataPoint::new(f64::from(i), 1.0))
        .collect();

    c.bench_function("window_search_100k_incremental", |b| {
        let mut guess = 0;
        let mut target = 0.0;
        b.iter(|| {
            target += 13.0;
            if target >= 99_000.0 {
                target = 0.0;
                guess = 0;
            }
            guess = find_window_start_index(black_box(&points), black_box(target), guess);
            black_box(guess);
        })
    });
}

fn bench_full_render_pass_10k(c: &mut Criterion) {
    let points: Vec<DataPoint> = (0..10_000)
        .map(|i| {
            let t = f64::from(i) * 0.1;
            DataPoint::new(t, (t * 0.02).sin() * 50.0 + 100.0)
        })
        .collect();

    let mut model = PlotModel::new();
    model.add_series(LineSeries::new().with_points(points));
    model.update(true).expect("update");

    c.bench_function("full_render_pass_10k", |b| {
        b.iter(|| {
            let mut backend = RecordingContext::new();
            model
                .render(black_box(&mut backend), 1920.0, 1080.0)
                .expect("render");
            black_box(backend.take_commands());
        })
    });
}

criterion_group!(
    benches,
    bench_transform_round_trip,
    bench_tick_generation,
    bench_line_reduction_10k,
    bench_window_search_100k,
    bench_full_render_pass_10k
);
criterion_main!(benches);
