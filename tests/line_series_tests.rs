use plotkit::core::{Axis, AxisPosition, Color, DataPoint};
use plotkit::extensions::MarkerKind;
use plotkit::render::{ClippingContext, DrawCommand, RecordingContext};
use plotkit::series::LineSeries;

fn resolved_axis(minimum: f64, maximum: f64, screen_min: f64, screen_max: f64) -> Axis {
    let mut axis = Axis::linear(AxisPosition::Bottom).with_range(minimum, maximum);
    axis.update_actual_max_min();
    axis.update_transform(screen_min, screen_max).expect("transform");
    axis
}

fn render_series(series: &mut LineSeries, x_axis: &Axis, y_axis: &Axis) -> Vec<DrawCommand> {
    series.core.update_data();
    series.core.update_max_min();

    let mut backend = RecordingContext::new();
    let mut rc = ClippingContext::new(&mut backend);
    series
        .render(&mut rc, x_axis, y_axis, Color::BLACK)
        .expect("render");
    backend.take_commands()
}

#[test]
fn nan_gap_splits_into_marker_only_chunks() {
    let x_axis = resolved_axis(0.0, 2.0, 0.0, 200.0);
    let y_axis = resolved_axis(0.0, 2.0, 200.0, 0.0);

    let mut series = LineSeries::new().with_points(vec![
        DataPoint::new(0.0, 0.0),
        DataPoint::new(1.0, f64::NAN),
        DataPoint::new(2.0, 2.0),
    ]);
    series.marker_kind = MarkerKind::Circle;

    let commands = render_series(&mut series, &x_axis, &y_axis);

    // Two degenerate one-point chunks: no connecting line, markers only.
    let lines = commands
        .iter()
        .filter(|c| matches!(c, DrawCommand::Line { .. }))
        .count();
    let markers = commands
        .iter()
        .filter(|c| matches!(c, DrawCommand::Ellipse { .. }))
        .count();
    assert_eq!(lines, 0);
    assert_eq!(markers, 2);
}

#[test]
fn contiguous_points_draw_one_polyline() {
    let x_axis = resolved_axis(0.0, 3.0, 0.0, 300.0);
    let y_axis = resolved_axis(0.0, 3.0, 300.0, 0.0);

    let mut series = LineSeries::new().with_points(vec![
        DataPoint::new(0.0, 0.0),
        DataPoint::new(1.0, 1.0),
        DataPoint::new(2.0, 2.0),
        DataPoint::new(3.0, 3.0),
    ]);
    let commands = render_series(&mut series, &x_axis, &y_axis);

    let lines: Vec<_> = commands
        .iter()
        .filter_map(|c| match c {
            DrawCommand::Line { points, .. } => Some(points.clone()),
            _ => None,
        })
        .collect();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].len(), 4);
    assert_eq!(lines[0][0].x, 0.0);
    assert_eq!(lines[0][3].x, 300.0);
}

#[test]
fn gap_in_middle_produces_two_polylines() {
    let x_axis = resolved_axis(0.0, 5.0, 0.0, 500.0);
    let y_axis = resolved_axis(0.0, 5.0, 500.0, 0.0);

    let mut series = LineSeries::new().with_points(vec![
        DataPoint::new(0.0, 1.0),
        DataPoint::new(1.0, 2.0),
        DataPoint::UNDEFINED,
        DataPoint::new(3.0, 2.0),
        DataPoint::new(4.0, 1.0),
    ]);
    let commands = render_series(&mut series, &x_axis, &y_axis);

    let lines = commands
        .iter()
        .filter(|c| matches!(c, DrawCommand::Line { .. }))
        .count();
    assert_eq!(lines, 2);
}

#[test]
fn segment_reduction_preserves_run_endpoints() {
    let x_axis = resolved_axis(0.0, 100.0, 0.0, 100.0);
    let y_axis = resolved_axis(0.0, 100.0, 100.0, 0.0);

    // 101 points one pixel apart; a 10 px minimum segment length must thin
    // them out but keep the exact first and last point.
    let points: Vec<DataPoint> = (0..=100)
        .map(|i| DataPoint::new(f64::from(i), 50.0))
        .collect();
    let mut series = LineSeries::new().with_points(points);
    series.minimum_segment_length = 10.0;

    let commands = render_series(&mut series, &x_axis, &y_axis);
    let DrawCommand::Line { points, .. } = &commands[0] else {
        panic!("expected a polyline");
    };
    assert!(points.len() < 20);
    assert_eq!(points.first().expect("first").x, 0.0);
    assert_eq!(points.last().expect("last").x, 100.0);
}

#[test]
fn window_start_index_advances_and_persists_across_renders() {
    let points: Vec<DataPoint> = (0..1000)
        .map(|i| DataPoint::new(f64::from(i), 1.0))
        .collect();
    let mut series = LineSeries::new().with_points(points);

    // Zoomed view over [500, 510].
    let x_axis = resolved_axis(500.0, 510.0, 0.0, 100.0);
    let y_axis = resolved_axis(0.0, 2.0, 100.0, 0.0);

    let _ = render_series(&mut series, &x_axis, &y_axis);
    assert_eq!(series.core.window_start_index(), 500);

    // Panning forward advances the cache instead of rescanning from zero.
    let panned_x = resolved_axis(600.0, 610.0, 0.0, 100.0);
    let mut backend = RecordingContext::new();
    let mut rc = ClippingContext::new(&mut backend);
    series
        .render(&mut rc, &panned_x, &y_axis, Color::BLACK)
        .expect("render");
    assert_eq!(series.core.window_start_index(), 600);
}

#[test]
fn rendering_stops_beyond_visible_range() {
    let points: Vec<DataPoint> = (0..1000)
        .map(|i| DataPoint::new(f64::from(i), 1.0))
        .collect();
    let mut series = LineSeries::new().with_points(points);

    let x_axis = resolved_axis(0.0, 10.0, 0.0, 100.0);
    let y_axis = resolved_axis(0.0, 2.0, 100.0, 0.0);

    let commands = render_series(&mut series, &x_axis, &y_axis);
    let DrawCommand::Line { points, .. } = &commands[0] else {
        panic!("expected a polyline");
    };
    // One point past the clip maximum is kept for segment continuity; the
    // iteration stops once two consecutive points fall outside.
    assert!(points.len() <= 13);
}

#[test]
fn items_source_projection_feeds_the_point_list() {
    struct Sample {
        at: f64,
        level: f64,
    }

    let samples = vec![
        Sample { at: 0.0, level: 1.0 },
        Sample { at: 1.0, level: 4.0 },
        Sample { at: 2.0, level: 9.0 },
    ];

    let mut series = LineSeries::new();
    series
        .core
        .set_items(&samples, |s| DataPoint::new(s.at, s.level));
    series.core.update_data();
    series.core.update_max_min();

    assert_eq!(series.core.points.len(), 3);
    let (min_x, max_x, min_y, max_y) = series.core.bounds();
    assert_eq!((min_x, max_x), (0.0, 2.0));
    assert_eq!((min_y, max_y), (1.0, 9.0));
}

#[test]
fn smoothing_passes_through_input_vertices() {
    let x_axis = resolved_axis(0.0, 2.0, 0.0, 200.0);
    let y_axis = resolved_axis(0.0, 2.0, 200.0, 0.0);

    let mut series = LineSeries::new().with_points(vec![
        DataPoint::new(0.0, 0.0),
        DataPoint::new(1.0, 2.0),
        DataPoint::new(2.0, 0.0),
    ]);
    series.smooth = Some(plotkit::series::SplineOptions::default());

    let commands = render_series(&mut series, &x_axis, &y_axis);
    let DrawCommand::Line { points, .. } = &commands[0] else {
        panic!("expected a polyline");
    };
    assert!(points.len() > 3);
    assert_eq!(points.first().expect("first").x, 0.0);
    assert_eq!(points.last().expect("last").x, 200.0);
}
