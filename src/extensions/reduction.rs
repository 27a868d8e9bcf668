//! Point-density reduction applied before stroking long polylines.

use crate::core::ScreenPoint;

/// Drops successive points closer than `sqrt(minimum_segment_length_squared)`
/// to the previously kept point.
///
/// The first and last point of the run are always preserved, so reduction
/// never changes where a polyline starts or ends.
#[must_use]
pub fn reduce_line_points(
    points: &[ScreenPoint],
    minimum_segment_length_squared: f64,
) -> Vec<ScreenPoint> {
    if points.len() <= 2 || minimum_segment_length_squared <= 0.0 {
        return points.to_vec();
    }

    let mut reduced = Vec::with_capacity(points.len());
    reduced.push(points[0]);
    let mut last_kept = points[0];

    for &point in &points[1..points.len() - 1] {
        if point.distance_to_squared(last_kept) >= minimum_segment_length_squared {
            reduced.push(point);
            last_kept = point;
        }
    }

    reduced.push(points[points.len() - 1]);
    reduced
}

/// Reduces a point run to roughly `spacing` pixel intervals.
///
/// Used ahead of spline interpolation so smoothing cost is bounded by screen
/// size rather than input size.
#[must_use]
pub fn resample_points(points: &[ScreenPoint], spacing: f64) -> Vec<ScreenPoint> {
    reduce_line_points(points, spacing * spacing)
}
