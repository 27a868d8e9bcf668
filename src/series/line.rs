use serde::{Deserialize, Serialize};

use crate::core::{Axis, Color, DataPoint, ScreenPoint};
use crate::error::PlotResult;
use crate::extensions::{canonical_spline, draw_markers, reduce_line_points, resample_points, MarkerKind};
use crate::render::{ClippingContext, LineStyle, RenderContext, Stroke};
use crate::series::data::{project_chunk, split_valid_chunks, DataSeriesCore};
use crate::series::{visible_slice, TrackerHit};

/// Spline smoothing settings for a line series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SplineOptions {
    /// 0.5 reproduces a Catmull-Rom curve.
    pub tension: f64,
    /// Target pixel spacing of emitted spline points.
    pub tolerance: f64,
}

impl Default for SplineOptions {
    fn default() -> Self {
        Self {
            tension: 0.5,
            tolerance: 1.0,
        }
    }
}

/// Polyline series over XY data points.
///
/// Gaps are encoded as NaN coordinates: the point stream splits into
/// independent chunks at each invalid point, and one-point chunks draw
/// markers only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineSeries {
    pub core: DataSeriesCore,
    pub color: Color,
    pub stroke_width: f64,
    pub line_style: LineStyle,
    /// Successive screen points closer than this are merged before stroking.
    pub minimum_segment_length: f64,
    pub marker_kind: MarkerKind,
    pub marker_size: f64,
    pub marker_fill: Color,
    pub marker_stroke: Color,
    pub smooth: Option<SplineOptions>,
}

impl LineSeries {
    #[must_use]
    pub fn new() -> Self {
        Self {
            core: DataSeriesCore::new(),
            color: Color::AUTOMATIC,
            stroke_width: 2.0,
            line_style: LineStyle::Solid,
            minimum_segment_length: 2.0,
            marker_kind: MarkerKind::None,
            marker_size: 3.0,
            marker_fill: Color::AUTOMATIC,
            marker_stroke: Color::AUTOMATIC,
            smooth: None,
        }
    }

    #[must_use]
    pub fn with_points(mut self, points: Vec<DataPoint>) -> Self {
        self.core.set_points(points);
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.core.title = Some(title.into());
        self
    }

    fn stroke(&self, default_color: Color) -> Stroke {
        Stroke::styled(
            self.color.get_actual(default_color),
            self.stroke_width,
            self.line_style,
        )
    }

    fn marker_stroke(&self, default_color: Color) -> Stroke {
        Stroke::new(self.marker_stroke.get_actual(default_color), 1.0)
    }

    pub fn render(
        &mut self,
        rc: &mut ClippingContext<'_>,
        x_axis: &Axis,
        y_axis: &Axis,
        default_color: Color,
    ) -> PlotResult<()> {
        let visible = visible_slice(&mut self.core, x_axis);
        if visible.is_empty() {
            return Ok(());
        }

        let stroke = self.stroke(default_color);
        let marker_stroke = self.marker_stroke(default_color);
        let min_length_squared = self.minimum_segment_length * self.minimum_segment_length;

        for chunk in split_valid_chunks(&visible) {
            let screen = project_chunk(&chunk, x_axis, y_axis);
            if screen.len() < 2 {
                // Degenerate one-point chunk: markers only, no connecting line.
                self.draw_chunk_markers(rc, &screen, default_color, &marker_stroke)?;
                continue;
            }

            let reduced = reduce_line_points(&screen, min_length_squared);
            if stroke.is_visible() {
                match self.smooth {
                    Some(options) => {
                        let resampled = resample_points(&reduced, self.minimum_segment_length);
                        let smoothed =
                            canonical_spline(&resampled, options.tension, options.tolerance);
                        rc.draw_line(&smoothed, &stroke)?;
                    }
                    None => rc.draw_line(&reduced, &stroke)?,
                }
            }
            self.draw_chunk_markers(rc, &screen, default_color, &marker_stroke)?;
        }
        Ok(())
    }

    fn draw_chunk_markers(
        &self,
        rc: &mut ClippingContext<'_>,
        screen: &[ScreenPoint],
        default_color: Color,
        marker_stroke: &Stroke,
    ) -> PlotResult<()> {
        draw_markers(
            rc,
            screen,
            self.marker_kind,
            self.marker_size,
            self.marker_fill.get_actual(default_color),
            marker_stroke,
        )
    }

    #[must_use]
    pub fn nearest_point(
        &self,
        x_axis: &Axis,
        y_axis: &Axis,
        target: ScreenPoint,
        interpolate: bool,
    ) -> Option<TrackerHit> {
        let points = self.core.actual_points();
        if interpolate {
            crate::series::data::nearest_on_segments(points, x_axis, y_axis, target).map(
                |(index, data_point, screen_point, _)| TrackerHit {
                    series_title: self.core.title.clone(),
                    data_point,
                    screen_point,
                    index,
                },
            )
        } else {
            crate::series::data::nearest_vertex(points, x_axis, y_axis, target).map(
                |(index, data_point, screen_point, _)| TrackerHit {
                    series_title: self.core.title.clone(),
                    data_point,
                    screen_point,
                    index: index as f64,
                },
            )
        }
    }
}

impl Default for LineSeries {
    fn default() -> Self {
        Self::new()
    }
}
