use serde::{Deserialize, Serialize};

use crate::core::{Axis, Color, DataPoint, ScreenPoint};
use crate::error::PlotResult;
use crate::render::{ClippingContext, RenderContext, Stroke};
use crate::series::data::nearest_vertex;
use crate::series::TrackerHit;

/// Closed data-space outlines rendered as filled polygons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolygonSeries {
    pub title: Option<String>,
    pub x_axis_key: Option<String>,
    pub y_axis_key: Option<String>,
    pub outlines: Vec<Vec<DataPoint>>,
    pub fill: Color,
    pub stroke_color: Color,
    pub stroke_width: f64,

    #[serde(with = "crate::core::primitives::serde_nan")]
    min_x: f64,
    #[serde(with = "crate::core::primitives::serde_nan")]
    max_x: f64,
    #[serde(with = "crate::core::primitives::serde_nan")]
    min_y: f64,
    #[serde(with = "crate::core::primitives::serde_nan")]
    max_y: f64,
}

impl PolygonSeries {
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: None,
            x_axis_key: None,
            y_axis_key: None,
            outlines: Vec::new(),
            fill: Color::AUTOMATIC,
            stroke_color: Color::BLACK,
            stroke_width: 1.0,
            min_x: f64::NAN,
            max_x: f64::NAN,
            min_y: f64::NAN,
            max_y: f64::NAN,
        }
    }

    #[must_use]
    pub fn with_outlines(mut self, outlines: Vec<Vec<DataPoint>>) -> Self {
        self.outlines = outlines;
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn update_max_min(&mut self) {
        let mut min_x = f64::NAN;
        let mut max_x = f64::NAN;
        let mut min_y = f64::NAN;
        let mut max_y = f64::NAN;

        for point in self.outlines.iter().flatten() {
            if point.x.is_finite() {
                if min_x.is_nan() || point.x < min_x {
                    min_x = point.x;
                }
                if max_x.is_nan() || point.x > max_x {
                    max_x = point.x;
                }
            }
            if point.y.is_finite() {
                if min_y.is_nan() || point.y < min_y {
                    min_y = point.y;
                }
                if max_y.is_nan() || point.y > max_y {
                    max_y = point.y;
                }
            }
        }

        self.min_x = min_x;
        self.max_x = max_x;
        self.min_y = min_y;
        self.max_y = max_y;
    }

    pub fn update_axis_max_min(&self, x_axis: &mut Axis, y_axis: &mut Axis) {
        x_axis.include(self.min_x);
        x_axis.include(self.max_x);
        y_axis.include(self.min_y);
        y_axis.include(self.max_y);
    }

    pub fn render(
        &mut self,
        rc: &mut ClippingContext<'_>,
        x_axis: &Axis,
        y_axis: &Axis,
        default_color: Color,
    ) -> PlotResult<()> {
        let fill = self.fill.get_actual(default_color);
        let stroke = Stroke::new(self.stroke_color, self.stroke_width);

        for outline in &self.outlines {
            let screen: Vec<ScreenPoint> = outline
                .iter()
                .filter(|point| point.is_valid())
                .map(|point| x_axis.transform_point(point.x, point.y, y_axis))
                .collect();
            if screen.len() >= 3 {
                rc.draw_polygon(&screen, fill, &stroke)?;
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
    ) -> Option<TrackerHit> {
        let mut offset = 0usize;
        let mut best: Option<TrackerHit> = None;
        let mut best_distance = f64::INFINITY;

        for outline in &self.outlines {
            if let Some((index, data_point, screen_point, distance_squared)) =
                nearest_vertex(outline, x_axis, y_axis, target)
            {
                if distance_squared < best_distance {
                    best_distance = distance_squared;
                    best = Some(TrackerHit {
                        series_title: self.title.clone(),
                        data_point,
                        screen_point,
                        index: (offset + index) as f64,
                    });
                }
            }
            offset += outline.len();
        }
        best
    }
}

impl Default for PolygonSeries {
    fn default() -> Self {
        Self::new()
    }
}
