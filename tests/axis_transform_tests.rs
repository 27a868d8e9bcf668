use approx::assert_relative_eq;
use plotkit::core::{Axis, AxisPosition, ScreenPoint};

fn resolved_axis(minimum: f64, maximum: f64, screen_min: f64, screen_max: f64) -> Axis {
    let mut axis = Axis::linear(AxisPosition::Bottom).with_range(minimum, maximum);
    axis.update_actual_max_min();
    axis.update_transform(screen_min, screen_max).expect("transform");
    axis
}

#[test]
fn inverted_vertical_screen_range_maps_endpoints() {
    // Top-to-bottom screen range [400, 0]: the axis minimum sits at pixel 400.
    let axis = resolved_axis(0.0, 10.0, 400.0, 0.0);

    assert_eq!(axis.transform(0.0), 400.0);
    assert_eq!(axis.transform(10.0), 0.0);
    assert_eq!(axis.transform(5.0), 200.0);
}

#[test]
fn transform_round_trip_within_tolerance() {
    let axis = resolved_axis(10.0, 110.0, 0.0, 1000.0);

    let original = 42.5;
    let px = axis.transform(original);
    let recovered = axis.inverse_transform(px);
    assert_relative_eq!(recovered, original, max_relative = 1e-12);
}

#[test]
fn reversed_axis_swaps_screen_endpoints() {
    let mut axis = Axis::linear(AxisPosition::Bottom)
        .with_range(0.0, 10.0)
        .with_reversed(true);
    axis.update_actual_max_min();
    axis.update_transform(0.0, 100.0).expect("transform");

    assert_eq!(axis.transform(0.0), 100.0);
    assert_eq!(axis.transform(10.0), 0.0);
}

#[test]
fn logarithmic_round_trip_within_tolerance() {
    let mut axis = Axis::logarithmic(AxisPosition::Left).with_range(1.0, 1000.0);
    axis.update_actual_max_min();
    axis.update_transform(300.0, 0.0).expect("transform");

    // Log mapping places decades evenly.
    assert!((axis.transform(1.0) - 300.0).abs() <= 1e-9);
    assert!((axis.transform(10.0) - 200.0).abs() <= 1e-9);
    assert!((axis.transform(100.0) - 100.0).abs() <= 1e-9);
    assert!((axis.transform(1000.0) - 0.0).abs() <= 1e-9);

    let recovered = axis.inverse_transform(axis.transform(42.0));
    assert!((recovered - 42.0).abs() <= 1e-9);
}

#[test]
fn transform_point_composes_both_axes() {
    let x_axis = resolved_axis(0.0, 10.0, 0.0, 100.0);
    let y_axis = resolved_axis(0.0, 20.0, 200.0, 0.0);

    let screen = x_axis.transform_point(5.0, 10.0, &y_axis);
    assert_eq!(screen, ScreenPoint::new(50.0, 100.0));

    let data = x_axis.inverse_transform_point(screen, &y_axis);
    assert!((data.x - 5.0).abs() <= 1e-9);
    assert!((data.y - 10.0).abs() <= 1e-9);
}

#[test]
fn update_transform_rejects_unresolved_range() {
    let mut axis = Axis::linear(AxisPosition::Bottom);
    // No data included and no user range resolved yet.
    let result = axis.update_transform(0.0, 100.0);
    assert!(result.is_err());
}

#[test]
fn update_transform_rejects_empty_screen_range() {
    let mut axis = Axis::linear(AxisPosition::Bottom).with_range(0.0, 1.0);
    axis.update_actual_max_min();
    assert!(axis.update_transform(50.0, 50.0).is_err());
}
