//! Marker drawing shared by scatter and line series.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Color, PlotRect, ScreenPoint};
use crate::error::PlotResult;
use crate::render::{RenderContext, Stroke};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum MarkerKind {
    #[default]
    None,
    Circle,
    Square,
    Diamond,
    Triangle,
    Cross,
    Plus,
}

/// Draws one marker per screen point.
///
/// `size` is the marker radius in pixels. Filled kinds use `fill` with the
/// outline `stroke`; stroke-only kinds (`Cross`, `Plus`) use `stroke` alone.
pub fn draw_markers(
    rc: &mut dyn RenderContext,
    points: &[ScreenPoint],
    kind: MarkerKind,
    size: f64,
    fill: Color,
    stroke: &Stroke,
) -> PlotResult<()> {
    if kind == MarkerKind::None || size <= 0.0 {
        return Ok(());
    }

    for &point in points {
        match kind {
            MarkerKind::None => {}
            MarkerKind::Circle => {
                let rect = PlotRect::new(point.x - size, point.y - size, size * 2.0, size * 2.0);
                rc.draw_ellipse(rect, fill, stroke)?;
            }
            MarkerKind::Square => {
                let rect = PlotRect::new(point.x - size, point.y - size, size * 2.0, size * 2.0);
                rc.draw_rectangle(rect, fill, stroke)?;
            }
            MarkerKind::Diamond => {
                let outline: SmallVec<[ScreenPoint; 4]> = SmallVec::from_buf([
                    ScreenPoint::new(point.x, point.y - size),
                    ScreenPoint::new(point.x + size, point.y),
                    ScreenPoint::new(point.x, point.y + size),
                    ScreenPoint::new(point.x - size, point.y),
                ]);
                rc.draw_polygon(&outline, fill, stroke)?;
            }
            MarkerKind::Triangle => {
                let outline: SmallVec<[ScreenPoint; 3]> = SmallVec::from_buf([
                    ScreenPoint::new(point.x, point.y - size),
                    ScreenPoint::new(point.x + size, point.y + size),
                    ScreenPoint::new(point.x - size, point.y + size),
                ]);
                rc.draw_polygon(&outline, fill, stroke)?;
            }
            MarkerKind::Cross => {
                let segments: SmallVec<[ScreenPoint; 4]> = SmallVec::from_buf([
                    ScreenPoint::new(point.x - size, point.y - size),
                    ScreenPoint::new(point.x + size, point.y + size),
                    ScreenPoint::new(point.x - size, point.y + size),
                    ScreenPoint::new(point.x + size, point.y - size),
                ]);
                rc.draw_line_segments(&segments, stroke)?;
            }
            MarkerKind::Plus => {
                let segments: SmallVec<[ScreenPoint; 4]> = SmallVec::from_buf([
                    ScreenPoint::new(point.x - size, point.y),
                    ScreenPoint::new(point.x + size, point.y),
                    ScreenPoint::new(point.x, point.y - size),
                    ScreenPoint::new(point.x, point.y + size),
                ]);
                rc.draw_line_segments(&segments, stroke)?;
            }
        }
    }
    Ok(())
}
