use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::{Axis, Color, DataPoint, ScreenPoint};
use crate::error::PlotResult;
use crate::render::{ClippingContext, LineStyle, RenderContext, Stroke};
use crate::series::data::{project_chunk, split_valid_chunks, DataSeriesCore};
use crate::series::TrackerHit;

/// Filled region between a primary point stream and a secondary baseline.
///
/// When no secondary points are set, the baseline is a constant-Y mirror of
/// the primary X positions. Both streams chunk independently at NaN gaps; the
/// fill is drawn per chunk pair, and a chunk-count mismatch skips the fill
/// for that pass without failing the render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaSeries {
    pub core: DataSeriesCore,
    pub points2: Vec<DataPoint>,
    /// Baseline Y used when `points2` is empty.
    pub constant_y2: f64,
    pub fill: Color,
    pub color: Color,
    pub color2: Color,
    pub stroke_width: f64,
    pub line_style: LineStyle,

    #[serde(skip)]
    actual_points2: Vec<DataPoint>,
}

impl AreaSeries {
    #[must_use]
    pub fn new() -> Self {
        Self {
            core: DataSeriesCore::new(),
            points2: Vec::new(),
            constant_y2: 0.0,
            fill: Color::AUTOMATIC,
            color: Color::AUTOMATIC,
            color2: Color::UNDEFINED,
            stroke_width: 2.0,
            line_style: LineStyle::Solid,
            actual_points2: Vec::new(),
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

    /// Secondary baseline stream actually used for this pass.
    fn resolve_points2(&mut self) {
        if self.points2.is_empty() {
            self.actual_points2 = self
                .core
                .actual_points()
                .iter()
                .map(|point| {
                    if point.is_valid() {
                        DataPoint::new(point.x, self.constant_y2)
                    } else {
                        // Mirror gaps so chunking stays aligned with the
                        // primary stream.
                        DataPoint::UNDEFINED
                    }
                })
                .collect();
        } else {
            self.actual_points2 = self.points2.clone();
        }
    }

    pub fn update_data(&mut self) {
        self.core.update_data();
        self.resolve_points2();
    }

    pub fn update_max_min(&mut self) {
        self.core.update_max_min();
    }

    pub fn update_axis_max_min(&self, x_axis: &mut Axis, y_axis: &mut Axis) {
        self.core.update_axis_max_min(x_axis, y_axis);
        for point in &self.actual_points2 {
            x_axis.include(point.x);
            y_axis.include(point.y);
        }
    }

    pub fn render(
        &mut self,
        rc: &mut ClippingContext<'_>,
        x_axis: &Axis,
        y_axis: &Axis,
        default_color: Color,
    ) -> PlotResult<()> {
        let chunks1 = split_valid_chunks(self.core.actual_points());
        let chunks2 = split_valid_chunks(&self.actual_points2);
        if chunks1.is_empty() {
            return Ok(());
        }

        let screen1: Vec<Vec<ScreenPoint>> = chunks1
            .iter()
            .map(|chunk| project_chunk(chunk, x_axis, y_axis))
            .collect();
        let screen2: Vec<Vec<ScreenPoint>> = chunks2
            .iter()
            .map(|chunk| project_chunk(chunk, x_axis, y_axis))
            .collect();

        let fill = self.fill.get_actual(default_color);
        if screen1.len() == screen2.len() {
            if fill.is_visible() {
                for (upper, lower) in screen1.iter().zip(&screen2) {
                    let mut polygon = Vec::with_capacity(upper.len() + lower.len());
                    polygon.extend_from_slice(upper);
                    polygon.extend(lower.iter().rev().copied());
                    if polygon.len() >= 3 {
                        rc.draw_polygon(&polygon, fill, &Stroke::none())?;
                    }
                }
            }
        } else {
            warn!(
                series = self.core.title.as_deref().unwrap_or("<untitled>"),
                primary_chunks = screen1.len(),
                secondary_chunks = screen2.len(),
                "chunk count mismatch, skipping area fill this pass"
            );
        }

        let stroke = Stroke::styled(
            self.color.get_actual(default_color),
            self.stroke_width,
            self.line_style,
        );
        if stroke.is_visible() {
            for chunk in &screen1 {
                if chunk.len() >= 2 {
                    rc.draw_line(chunk, &stroke)?;
                }
            }
        }
        if self.color2.is_visible() {
            let stroke2 = Stroke::styled(self.color2, self.stroke_width, self.line_style);
            for chunk in &screen2 {
                if chunk.len() >= 2 {
                    rc.draw_line(chunk, &stroke2)?;
                }
            }
        }
        Ok(())
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

impl Default for AreaSeries {
    fn default() -> Self {
        Self::new()
    }
}
