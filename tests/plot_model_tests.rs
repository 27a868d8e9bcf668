use plotkit::core::{Axis, AxisPosition, DataPoint, ScreenPoint};
use plotkit::model::PlotModel;
use plotkit::render::{DrawCommand, RecordingContext};
use plotkit::series::{LineSeries, PlotSeries};
use plotkit::PlotError;

fn sample_model() -> PlotModel {
    let mut model = PlotModel::new();
    model.add_axis(
        Axis::linear(AxisPosition::Bottom)
            .with_key("x")
            .with_range(0.0, 10.0),
    );
    model.add_axis(Axis::linear(AxisPosition::Left).with_key("y"));
    model.add_series(LineSeries::new().with_title("wave").with_points(vec![
        DataPoint::new(0.0, 1.0),
        DataPoint::new(5.0, 3.0),
        DataPoint::new(10.0, 2.0),
    ]));
    model
}

#[test]
fn update_resolves_axis_ranges_from_series() {
    let mut model = sample_model();
    model.update(true).expect("update");

    let x_axis = &model.axes[0];
    let y_axis = &model.axes[1];
    assert_eq!(x_axis.actual_minimum(), 0.0);
    assert_eq!(x_axis.actual_maximum(), 10.0);
    // Data-derived y range spans 1..3 plus default padding.
    assert!(y_axis.actual_minimum() < 1.0);
    assert!(y_axis.actual_maximum() > 3.0);
}

#[test]
fn default_axes_are_created_when_missing() {
    let mut model = PlotModel::new();
    model.add_series(
        LineSeries::new().with_points(vec![DataPoint::new(0.0, 1.0), DataPoint::new(1.0, 2.0)]),
    );
    model.update(true).expect("update");

    assert_eq!(model.axes.len(), 2);
    assert!(model.axes.iter().any(|a| a.position == AxisPosition::Bottom));
    assert!(model.axes.iter().any(|a| a.position == AxisPosition::Left));
}

#[test]
fn unknown_axis_key_fails_the_update() {
    let mut model = PlotModel::new();
    let mut series = LineSeries::new().with_points(vec![DataPoint::new(0.0, 1.0)]);
    series.core.x_axis_key = Some("nope".to_owned());
    model.add_series(series);

    match model.update(true) {
        Err(PlotError::UnknownAxisKey(key)) => assert_eq!(key, "nope"),
        other => panic!("expected UnknownAxisKey, got {other:?}"),
    }
}

#[test]
fn render_is_idempotent_for_equal_state() {
    let mut model = sample_model();
    model.update(true).expect("update");

    let mut first = RecordingContext::new();
    model.render(&mut first, 640.0, 480.0).expect("first render");
    let mut second = RecordingContext::new();
    model.render(&mut second, 640.0, 480.0).expect("second render");

    assert_eq!(first.commands(), second.commands());
    assert!(!first.commands().is_empty());
}

#[test]
fn series_render_inside_clip_before_axes() {
    let mut model = sample_model();
    model.update(true).expect("update");

    let mut backend = RecordingContext::new();
    model.render(&mut backend, 640.0, 480.0).expect("render");
    let commands = backend.commands();

    let set_clip = commands
        .iter()
        .position(|c| matches!(c, DrawCommand::SetClip(_)))
        .expect("clip push");
    let reset_clip = commands
        .iter()
        .position(|c| matches!(c, DrawCommand::ResetClip))
        .expect("clip pop");
    let series_line = commands
        .iter()
        .position(|c| matches!(c, DrawCommand::Line { points, .. } if points.len() == 3))
        .expect("series polyline");
    let label = commands
        .iter()
        .position(|c| matches!(c, DrawCommand::Text { .. }))
        .expect("axis label");

    assert!(set_clip < series_line);
    assert!(series_line < reset_clip);
    assert!(reset_clip < label);
}

#[test]
fn render_rejects_empty_viewport() {
    let mut model = sample_model();
    model.update(true).expect("update");

    let mut backend = RecordingContext::new();
    assert!(model.render(&mut backend, 0.0, 480.0).is_err());
    assert!(model.render(&mut backend, 640.0, f64::NAN).is_err());
}

#[test]
fn serde_round_trip_reproduces_ranges_and_bounds() {
    let mut model = sample_model();
    model.update(true).expect("update");

    let json = serde_json::to_string(&model).expect("serialize");
    let restored: PlotModel = serde_json::from_str(&json).expect("deserialize");

    assert_eq!(
        restored.axes[0].actual_minimum(),
        model.axes[0].actual_minimum()
    );
    assert_eq!(
        restored.axes[1].actual_maximum(),
        model.axes[1].actual_maximum()
    );

    let PlotSeries::Line(original) = &model.series[0] else {
        panic!("expected line series");
    };
    let PlotSeries::Line(restored_series) = &restored.series[0] else {
        panic!("expected line series");
    };
    assert_eq!(restored_series.core.bounds(), original.core.bounds());
    assert_eq!(restored_series.core.points, original.core.points);
}

#[test]
fn serde_round_trip_keeps_gap_points() {
    let mut model = PlotModel::new();
    model.add_series(LineSeries::new().with_points(vec![
        DataPoint::new(0.0, 1.0),
        DataPoint::UNDEFINED,
        DataPoint::new(2.0, 3.0),
    ]));
    model.update(true).expect("update");

    let json = serde_json::to_string(&model).expect("serialize");
    let restored: PlotModel = serde_json::from_str(&json).expect("deserialize");

    let PlotSeries::Line(series) = &restored.series[0] else {
        panic!("expected line series");
    };
    assert!(series.core.points[1].x.is_nan());
    assert!(series.core.points[1].y.is_nan());
}

#[test]
fn tracker_hits_the_nearest_series() {
    let mut model = sample_model();
    model.update(true).expect("update");
    let mut backend = RecordingContext::new();
    model.render(&mut backend, 640.0, 480.0).expect("render");

    let x_axis = &model.axes[0];
    let y_axis = &model.axes[1];
    let target = x_axis.transform_point(5.0, 3.0, y_axis);

    let hit = model.nearest_point(target, false).expect("hit");
    assert_eq!(hit.series_title.as_deref(), Some("wave"));
    assert_eq!(hit.index, 1.0);
    assert_eq!(hit.data_point, DataPoint::new(5.0, 3.0));
}

#[test]
fn all_nan_series_leaves_axes_at_fallback_range() {
    let mut model = PlotModel::new();
    model.add_series(LineSeries::new().with_points(vec![
        DataPoint::UNDEFINED,
        DataPoint::UNDEFINED,
    ]));
    model.update(true).expect("update");

    let x_axis = model
        .axes
        .iter()
        .find(|a| a.position == AxisPosition::Bottom)
        .expect("x axis");
    assert_eq!(x_axis.actual_minimum(), 0.0);
    assert_eq!(x_axis.actual_maximum(), 100.0);

    let PlotSeries::Line(series) = &model.series[0] else {
        panic!("expected line series");
    };
    let (min_x, max_x, min_y, max_y) = series.core.bounds();
    assert!(min_x.is_nan() && max_x.is_nan() && min_y.is_nan() && max_y.is_nan());
}

#[test]
fn heat_map_without_color_axis_fails_render() {
    use plotkit::series::HeatMapSeries;

    let mut model = PlotModel::new();
    model.add_series(HeatMapSeries::new().with_grid(0.0, 1.0, 0.0, 1.0, vec![vec![1.0]; 2]));
    model.update(true).expect("update");

    let mut backend = RecordingContext::new();
    match model.render(&mut backend, 640.0, 480.0) {
        Err(PlotError::AxisNotAssigned { role, .. }) => assert_eq!(role, "color"),
        other => panic!("expected AxisNotAssigned, got {other:?}"),
    }
}

#[test]
fn pan_and_zoom_emit_axis_changed_events() {
    use plotkit::core::AxisChangeType;

    let mut model = sample_model();
    model.update(true).expect("update");
    let mut backend = RecordingContext::new();
    model.render(&mut backend, 640.0, 480.0).expect("render");

    model.pan_all(ScreenPoint::new(100.0, 100.0), ScreenPoint::new(120.0, 90.0));
    model.zoom_all_at(2.0, ScreenPoint::new(320.0, 240.0));
    model.reset_all_axes();

    let events = model.take_axis_events();
    assert!(events.len() >= 6);
    assert!(events
        .iter()
        .any(|e| e.change_type == AxisChangeType::Pan && e.axis_key.as_deref() == Some("x")));
    assert!(events.iter().any(|e| e.change_type == AxisChangeType::Zoom));
    assert!(events.iter().any(|e| e.change_type == AxisChangeType::Reset));
    assert!(model.take_axis_events().is_empty());
}
