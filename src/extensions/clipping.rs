//! Geometric clipping of polylines against the plot area.

use crate::core::{PlotRect, ScreenPoint};

/// Clips one segment to a rectangle (Liang-Barsky).
///
/// Returns the clipped endpoints, or `None` when the segment lies entirely
/// outside.
#[must_use]
pub fn clip_segment(rect: PlotRect, a: ScreenPoint, b: ScreenPoint) -> Option<(ScreenPoint, ScreenPoint)> {
    let dx = b.x - a.x;
    let dy = b.y - a.y;

    let mut t0 = 0.0f64;
    let mut t1 = 1.0f64;

    let checks = [
        (-dx, a.x - rect.left),
        (dx, rect.right() - a.x),
        (-dy, a.y - rect.top),
        (dy, rect.bottom() - a.y),
    ];
    for (p, q) in checks {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            if r > t1 {
                return None;
            }
            if r > t0 {
                t0 = r;
            }
        } else {
            if r < t0 {
                return None;
            }
            if r < t1 {
                t1 = r;
            }
        }
    }

    Some((
        ScreenPoint::new(a.x + t0 * dx, a.y + t0 * dy),
        ScreenPoint::new(a.x + t1 * dx, a.y + t1 * dy),
    ))
}

/// Clips a polyline to a rectangle, splitting it into contiguous runs where
/// it leaves and re-enters the clip region.
#[must_use]
pub fn clip_polyline(rect: PlotRect, points: &[ScreenPoint]) -> Vec<Vec<ScreenPoint>> {
    let mut runs: Vec<Vec<ScreenPoint>> = Vec::new();
    let mut current: Vec<ScreenPoint> = Vec::new();

    for pair in points.windows(2) {
        match clip_segment(rect, pair[0], pair[1]) {
            Some((start, end)) => {
                match current.last() {
                    Some(last) if last.distance_to_squared(start) < 1e-12 => {}
                    Some(_) => {
                        runs.push(std::mem::take(&mut current));
                        current.push(start);
                    }
                    None => current.push(start),
                }
                current.push(end);
            }
            None => {
                if !current.is_empty() {
                    runs.push(std::mem::take(&mut current));
                }
            }
        }
    }

    if !current.is_empty() {
        runs.push(current);
    }
    runs
}
