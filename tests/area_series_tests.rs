use plotkit::core::{Axis, AxisPosition, Color, DataPoint};
use plotkit::render::{ClippingContext, DrawCommand, RecordingContext};
use plotkit::series::AreaSeries;

fn resolved_axis(minimum: f64, maximum: f64, screen_min: f64, screen_max: f64) -> Axis {
    let mut axis = Axis::linear(AxisPosition::Bottom).with_range(minimum, maximum);
    axis.update_actual_max_min();
    axis.update_transform(screen_min, screen_max).expect("transform");
    axis
}

fn render_series(series: &mut AreaSeries, x_axis: &Axis, y_axis: &Axis) -> Vec<DrawCommand> {
    series.update_data();
    series.update_max_min();

    let mut backend = RecordingContext::new();
    let mut rc = ClippingContext::new(&mut backend);
    series
        .render(&mut rc, x_axis, y_axis, Color::BLACK)
        .expect("render");
    backend.take_commands()
}

#[test]
fn constant_baseline_fill_closes_against_y2() {
    let x_axis = resolved_axis(0.0, 2.0, 0.0, 200.0);
    let y_axis = resolved_axis(0.0, 2.0, 200.0, 0.0);

    let mut series = AreaSeries::new().with_points(vec![
        DataPoint::new(0.0, 1.0),
        DataPoint::new(1.0, 2.0),
        DataPoint::new(2.0, 1.0),
    ]);
    let commands = render_series(&mut series, &x_axis, &y_axis);

    let polygons: Vec<_> = commands
        .iter()
        .filter_map(|c| match c {
            DrawCommand::Polygon { points, .. } => Some(points.clone()),
            _ => None,
        })
        .collect();
    assert_eq!(polygons.len(), 1);
    // Three boundary points plus the reversed three-point baseline.
    assert_eq!(polygons[0].len(), 6);
    // Baseline vertices sit at y2 = 0, i.e. screen y = 200.
    assert_eq!(polygons[0][3].y, 200.0);
    assert_eq!(polygons[0][5].y, 200.0);
}

#[test]
fn gaps_chunk_fill_and_boundary_together() {
    let x_axis = resolved_axis(0.0, 5.0, 0.0, 500.0);
    let y_axis = resolved_axis(0.0, 5.0, 500.0, 0.0);

    let mut series = AreaSeries::new().with_points(vec![
        DataPoint::new(0.0, 1.0),
        DataPoint::new(1.0, 2.0),
        DataPoint::UNDEFINED,
        DataPoint::new(3.0, 2.0),
        DataPoint::new(4.0, 1.0),
    ]);
    let commands = render_series(&mut series, &x_axis, &y_axis);

    let polygons = commands
        .iter()
        .filter(|c| matches!(c, DrawCommand::Polygon { .. }))
        .count();
    let lines = commands
        .iter()
        .filter(|c| matches!(c, DrawCommand::Line { .. }))
        .count();
    assert_eq!(polygons, 2);
    assert_eq!(lines, 2);
}

#[test]
fn mismatched_chunk_counts_skip_fill_but_keep_boundaries() {
    let x_axis = resolved_axis(0.0, 4.0, 0.0, 400.0);
    let y_axis = resolved_axis(-2.0, 4.0, 400.0, 0.0);

    let mut series = AreaSeries::new().with_points(vec![
        DataPoint::new(0.0, 1.0),
        DataPoint::new(1.0, 2.0),
        DataPoint::UNDEFINED,
        DataPoint::new(3.0, 2.0),
        DataPoint::new(4.0, 1.0),
    ]);
    // Explicit gap-free baseline: one chunk against the primary's two.
    series.points2 = vec![DataPoint::new(0.0, 0.0), DataPoint::new(4.0, 0.0)];
    series.color2 = Color::from_rgb(10, 10, 10);

    let commands = render_series(&mut series, &x_axis, &y_axis);

    let polygons = commands
        .iter()
        .filter(|c| matches!(c, DrawCommand::Polygon { .. }))
        .count();
    let lines = commands
        .iter()
        .filter(|c| matches!(c, DrawCommand::Line { .. }))
        .count();
    assert_eq!(polygons, 0, "mismatched chunk counts must skip the fill");
    // Two primary boundary chunks plus one secondary boundary line.
    assert_eq!(lines, 3);
}

#[test]
fn secondary_stream_contributes_to_axis_range() {
    let mut series = AreaSeries::new().with_points(vec![
        DataPoint::new(0.0, 5.0),
        DataPoint::new(1.0, 6.0),
    ]);
    series.points2 = vec![DataPoint::new(0.0, -3.0), DataPoint::new(1.0, -2.0)];
    series.update_data();
    series.update_max_min();

    let mut x_axis = Axis::linear(AxisPosition::Bottom);
    let mut y_axis = Axis::linear(AxisPosition::Left);
    series.update_axis_max_min(&mut x_axis, &mut y_axis);

    let (y_min, y_max) = y_axis.data_range();
    assert_eq!(y_min, -3.0);
    assert_eq!(y_max, 6.0);
}
