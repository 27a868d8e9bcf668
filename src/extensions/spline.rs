//! Canonical spline interpolation for smoothed line series.

use crate::core::ScreenPoint;

/// Expands a polyline into a smooth canonical (cardinal) spline.
///
/// `tension` 0.5 reproduces a Catmull-Rom curve; 0 degenerates to the input
/// polyline. Each segment is subdivided so that emitted points are roughly
/// `tolerance` pixels apart. Endpoint tangents are clamped, so the curve
/// passes through every input point including the first and last.
#[must_use]
pub fn canonical_spline(points: &[ScreenPoint], tension: f64, tolerance: f64) -> Vec<ScreenPoint> {
    if points.len() < 3 || tension == 0.0 {
        return points.to_vec();
    }
    let tolerance = if tolerance > 0.0 { tolerance } else { 1.0 };

    let mut out = Vec::with_capacity(points.len() * 4);
    out.push(points[0]);

    for i in 0..points.len() - 1 {
        let p1 = points[i];
        let p2 = points[i + 1];
        let p0 = if i == 0 { p1 } else { points[i - 1] };
        let p3 = if i + 2 < points.len() { points[i + 2] } else { p2 };

        let m1x = tension * (p2.x - p0.x);
        let m1y = tension * (p2.y - p0.y);
        let m2x = tension * (p3.x - p1.x);
        let m2y = tension * (p3.y - p1.y);

        let segment_length = p1.distance_to(p2);
        let steps = (segment_length / tolerance).ceil().max(1.0) as usize;

        for step in 1..=steps {
            let t = step as f64 / steps as f64;
            let t2 = t * t;
            let t3 = t2 * t;

            // Hermite basis.
            let h00 = 2.0 * t3 - 3.0 * t2 + 1.0;
            let h10 = t3 - 2.0 * t2 + t;
            let h01 = -2.0 * t3 + 3.0 * t2;
            let h11 = t3 - t2;

            out.push(ScreenPoint::new(
                h00 * p1.x + h10 * m1x + h01 * p2.x + h11 * m2x,
                h00 * p1.y + h10 * m1y + h01 * p2.y + h11 * m2y,
            ));
        }
    }

    out
}
