use serde::{Deserialize, Serialize};

use crate::core::{Axis, Color, DataPoint, ScreenPoint};
use crate::error::PlotResult;
use crate::extensions::{draw_markers, MarkerKind};
use crate::render::{ClippingContext, Stroke};
use crate::series::data::{nearest_vertex, DataSeriesCore};
use crate::series::{visible_slice, TrackerHit};

/// Marker-only series over XY data points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterSeries {
    pub core: DataSeriesCore,
    pub marker_kind: MarkerKind,
    pub marker_size: f64,
    pub marker_fill: Color,
    pub marker_stroke: Color,
}

impl ScatterSeries {
    #[must_use]
    pub fn new() -> Self {
        Self {
            core: DataSeriesCore::new(),
            marker_kind: MarkerKind::Circle,
            marker_size: 3.0,
            marker_fill: Color::AUTOMATIC,
            marker_stroke: Color::UNDEFINED,
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

    pub fn render(
        &mut self,
        rc: &mut ClippingContext<'_>,
        x_axis: &Axis,
        y_axis: &Axis,
        default_color: Color,
    ) -> PlotResult<()> {
        let visible = visible_slice(&mut self.core, x_axis);
        let screen: Vec<ScreenPoint> = visible
            .iter()
            .filter(|point| point.is_valid())
            .map(|point| x_axis.transform_point(point.x, point.y, y_axis))
            .collect();

        draw_markers(
            rc,
            &screen,
            self.marker_kind,
            self.marker_size,
            self.marker_fill.get_actual(default_color),
            &Stroke::new(self.marker_stroke.get_actual(default_color), 1.0),
        )
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

impl Default for ScatterSeries {
    fn default() -> Self {
        Self::new()
    }
}
