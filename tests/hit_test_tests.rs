use plotkit::core::{Axis, AxisPosition, DataPoint, ScreenPoint};
use plotkit::series::{LineSeries, ScatterSeries};

fn resolved_axis(minimum: f64, maximum: f64, screen_min: f64, screen_max: f64) -> Axis {
    let mut axis = Axis::linear(AxisPosition::Bottom).with_range(minimum, maximum);
    axis.update_actual_max_min();
    axis.update_transform(screen_min, screen_max).expect("transform");
    axis
}

fn diagonal_series() -> LineSeries {
    let mut series = LineSeries::new().with_points(vec![
        DataPoint::new(0.0, 0.0),
        DataPoint::new(1.0, 1.0),
        DataPoint::new(2.0, 2.0),
    ]);
    series.core.update_data();
    series.core.update_max_min();
    series
}

#[test]
fn exact_mode_returns_the_nearest_vertex() {
    let x_axis = resolved_axis(0.0, 2.0, 0.0, 200.0);
    let y_axis = resolved_axis(0.0, 2.0, 200.0, 0.0);
    let series = diagonal_series();

    let hit = series
        .nearest_point(&x_axis, &y_axis, ScreenPoint::new(140.0, 60.0), false)
        .expect("hit");
    assert_eq!(hit.index, 1.0);
    assert_eq!(hit.data_point, DataPoint::new(1.0, 1.0));
    assert_eq!(hit.screen_point, ScreenPoint::new(100.0, 100.0));
}

#[test]
fn interpolating_mode_returns_fractional_index_on_segment() {
    let x_axis = resolved_axis(0.0, 2.0, 0.0, 200.0);
    let y_axis = resolved_axis(0.0, 2.0, 200.0, 0.0);
    let series = diagonal_series();

    // Screen position of data (1.5, 1.5) sits halfway along segment 1 to 2.
    let target = x_axis.transform_point(1.5, 1.5, &y_axis);
    let hit = series
        .nearest_point(&x_axis, &y_axis, target, true)
        .expect("hit");

    assert!((hit.index - 1.5).abs() <= 1e-9);
    assert!((hit.data_point.x - 1.5).abs() <= 1e-9);
    assert!((hit.data_point.y - 1.5).abs() <= 1e-9);
}

#[test]
fn interpolation_clamps_beyond_segment_ends() {
    let x_axis = resolved_axis(0.0, 2.0, 0.0, 200.0);
    let y_axis = resolved_axis(0.0, 2.0, 200.0, 0.0);
    let series = diagonal_series();

    // Far past the last point: u clamps to 1 on the final segment.
    let hit = series
        .nearest_point(&x_axis, &y_axis, ScreenPoint::new(500.0, -100.0), true)
        .expect("hit");
    assert_eq!(hit.index, 2.0);
    assert_eq!(hit.data_point, DataPoint::new(2.0, 2.0));
}

#[test]
fn invalid_points_never_match() {
    let x_axis = resolved_axis(0.0, 2.0, 0.0, 200.0);
    let y_axis = resolved_axis(0.0, 2.0, 200.0, 0.0);

    let mut series = ScatterSeries::new().with_points(vec![
        DataPoint::new(0.0, 0.0),
        DataPoint::new(1.0, f64::NAN),
        DataPoint::new(2.0, 2.0),
    ]);
    series.core.update_data();
    series.core.update_max_min();

    // Closest to where the NaN point would sit, but it must be skipped.
    let hit = series
        .nearest_point(&x_axis, &y_axis, ScreenPoint::new(100.0, 100.0))
        .expect("hit");
    assert!(hit.index == 0.0 || hit.index == 2.0);
}

#[test]
fn all_invalid_series_yields_no_hit() {
    let x_axis = resolved_axis(0.0, 2.0, 0.0, 200.0);
    let y_axis = resolved_axis(0.0, 2.0, 200.0, 0.0);

    let mut series = LineSeries::new().with_points(vec![
        DataPoint::UNDEFINED,
        DataPoint::new(f64::NAN, 1.0),
    ]);
    series.core.update_data();
    series.core.update_max_min();

    assert!(series
        .nearest_point(&x_axis, &y_axis, ScreenPoint::new(0.0, 0.0), false)
        .is_none());
    assert!(series
        .nearest_point(&x_axis, &y_axis, ScreenPoint::new(0.0, 0.0), true)
        .is_none());
}
