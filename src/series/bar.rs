use serde::{Deserialize, Serialize};

use crate::core::{Axis, Color, DataPoint, PlotRect, ScreenPoint};
use crate::error::PlotResult;
use crate::render::{ClippingContext, RenderContext, Stroke};
use crate::series::data::{nearest_vertex, DataSeriesCore};
use crate::series::TrackerHit;

/// Vertical bars anchored at a base value.
///
/// X is typically a category index (half-open slots around integers) but any
/// numeric X works; `bar_width` is expressed in data units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarSeries {
    pub core: DataSeriesCore,
    pub base_value: f64,
    pub bar_width: f64,
    pub fill: Color,
    pub stroke_color: Color,
    pub stroke_width: f64,
}

impl BarSeries {
    #[must_use]
    pub fn new() -> Self {
        Self {
            core: DataSeriesCore::new(),
            base_value: 0.0,
            bar_width: 0.5,
            fill: Color::AUTOMATIC,
            stroke_color: Color::UNDEFINED,
            stroke_width: 1.0,
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

    pub fn update_max_min(&mut self) {
        self.core.update_max_min();
    }

    pub fn update_axis_max_min(&self, x_axis: &mut Axis, y_axis: &mut Axis) {
        self.core.update_axis_max_min(x_axis, y_axis);
        // Bars grow from the base line, so it is always part of the extent.
        y_axis.include(self.base_value);
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
        let half_width = self.bar_width / 2.0;

        for point in self.core.actual_points() {
            if !point.is_valid() {
                continue;
            }
            let corner_a = x_axis.transform_point(point.x - half_width, self.base_value, y_axis);
            let corner_b = x_axis.transform_point(point.x + half_width, point.y, y_axis);
            rc.draw_rectangle(PlotRect::from_screen_points(corner_a, corner_b), fill, &stroke)?;
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
        nearest_vertex(self.core.actual_points(), x_axis, y_axis, target).map(
            |(index, data_point, screen_point, _)| TrackerHit {
                series_title: self.core.title.clone(),
                data_point,
                screen_point,
                index: index as f64,
            },
        )
    }
}

impl Default for BarSeries {
    fn default() -> Self {
        Self::new()
    }
}
