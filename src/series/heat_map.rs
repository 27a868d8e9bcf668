use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;

use crate::core::{Axis, Color, DataPoint, LinearColorAxis, PlotRect, ScreenPoint};
use crate::error::{PlotError, PlotResult};
use crate::render::{ClippingContext, RenderContext, Stroke};
use crate::series::TrackerHit;

/// Rectangular cell grid colored through a linear color axis.
///
/// `data[i][j]` is the value of the cell at X slot `i` and Y slot `j`;
/// `x0`/`x1` and `y0`/`y1` are the centers of the first and last slots, so
/// the rendered surface extends half a cell beyond them on each side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatMapSeries {
    pub title: Option<String>,
    pub x_axis_key: Option<String>,
    pub y_axis_key: Option<String>,
    pub color_axis_key: Option<String>,
    pub x0: f64,
    pub x1: f64,
    pub y0: f64,
    pub y1: f64,
    /// Cell values; NaN cells resolve to the color axis invalid color.
    #[serde(with = "crate::core::primitives::serde_nan_grid")]
    pub data: Vec<Vec<f64>>,
}

impl HeatMapSeries {
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: None,
            x_axis_key: None,
            y_axis_key: None,
            color_axis_key: None,
            x0: 0.0,
            x1: 0.0,
            y0: 0.0,
            y1: 0.0,
            data: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_grid(mut self, x0: f64, x1: f64, y0: f64, y1: f64, data: Vec<Vec<f64>>) -> Self {
        self.x0 = x0;
        self.x1 = x1;
        self.y0 = y0;
        self.y1 = y1;
        self.data = data;
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    fn columns(&self) -> usize {
        self.data.len()
    }

    fn rows(&self) -> usize {
        self.data.first().map_or(0, Vec::len)
    }

    fn cell_width(&self) -> f64 {
        let columns = self.columns();
        if columns > 1 {
            (self.x1 - self.x0) / (columns - 1) as f64
        } else {
            1.0
        }
    }

    fn cell_height(&self) -> f64 {
        let rows = self.rows();
        if rows > 1 {
            (self.y1 - self.y0) / (rows - 1) as f64
        } else {
            1.0
        }
    }

    /// Validates that all rows have equal length.
    pub fn validate(&self) -> PlotResult<()> {
        let rows = self.rows();
        if self.data.iter().any(|column| column.len() != rows) {
            return Err(PlotError::InvalidData(
                "heat map columns must all have the same length".to_owned(),
            ));
        }
        Ok(())
    }

    pub fn update_axis_max_min(&self, x_axis: &mut Axis, y_axis: &mut Axis) {
        if self.data.is_empty() {
            return;
        }
        let half_width = self.cell_width() / 2.0;
        let half_height = self.cell_height() / 2.0;
        x_axis.include(self.x0.min(self.x1) - half_width);
        x_axis.include(self.x0.max(self.x1) + half_width);
        y_axis.include(self.y0.min(self.y1) - half_height);
        y_axis.include(self.y0.max(self.y1) + half_height);
    }

    /// Folds all cell values into the color axis range.
    pub fn update_color_axis_max_min(&self, color_axis: &mut LinearColorAxis) {
        for value in self.data.iter().flatten() {
            color_axis.axis.include(*value);
        }
    }

    pub fn render(
        &mut self,
        rc: &mut ClippingContext<'_>,
        x_axis: &Axis,
        y_axis: &Axis,
        color_axis: &LinearColorAxis,
    ) -> PlotResult<()> {
        self.validate()?;

        let cells = self.project_cells(x_axis, y_axis, color_axis);
        // Projection may fan out; drawing stays strictly ordered.
        for (rect, color) in cells {
            if color.is_visible() {
                rc.draw_rectangle(rect, color, &Stroke::none())?;
            }
        }
        Ok(())
    }

    fn project_cells(
        &self,
        x_axis: &Axis,
        y_axis: &Axis,
        color_axis: &LinearColorAxis,
    ) -> Vec<(PlotRect, Color)> {
        let half_width = self.cell_width() / 2.0;
        let half_height = self.cell_height() / 2.0;
        let columns = self.columns();
        let rows = self.rows();

        let project_column = |(i, column): (usize, &Vec<f64>)| -> Vec<(PlotRect, Color)> {
            let x = self.slot_center(self.x0, self.x1, i, columns);
            column
                .iter()
                .enumerate()
                .map(|(j, &value)| {
                    let y = self.slot_center(self.y0, self.y1, j, rows);
                    let a = x_axis.transform_point(x - half_width, y - half_height, y_axis);
                    let b = x_axis.transform_point(x + half_width, y + half_height, y_axis);
                    (
                        PlotRect::from_screen_points(a, b),
                        color_axis.color_for_value(value),
                    )
                })
                .collect()
        };

        #[cfg(feature = "parallel-projection")]
        {
            self.data
                .par_iter()
                .enumerate()
                .flat_map_iter(project_column)
                .collect()
        }

        #[cfg(not(feature = "parallel-projection"))]
        {
            self.data
                .iter()
                .enumerate()
                .flat_map(project_column)
                .collect()
        }
    }

    fn slot_center(&self, start: f64, end: f64, index: usize, count: usize) -> f64 {
        if count > 1 {
            start + (end - start) * index as f64 / (count - 1) as f64
        } else {
            start
        }
    }

    #[must_use]
    pub fn nearest_point(
        &self,
        x_axis: &Axis,
        y_axis: &Axis,
        target: ScreenPoint,
    ) -> Option<TrackerHit> {
        let columns = self.columns();
        let rows = self.rows();
        let mut best: Option<TrackerHit> = None;
        let mut best_distance = f64::INFINITY;

        for i in 0..columns {
            let x = self.slot_center(self.x0, self.x1, i, columns);
            for j in 0..rows {
                let y = self.slot_center(self.y0, self.y1, j, rows);
                let screen = x_axis.transform_point(x, y, y_axis);
                let distance_squared = screen.distance_to_squared(target);
                if distance_squared < best_distance {
                    best_distance = distance_squared;
                    best = Some(TrackerHit {
                        series_title: self.title.clone(),
                        data_point: DataPoint::new(x, y),
                        screen_point: screen,
                        index: (i * rows + j) as f64,
                    });
                }
            }
        }
        best
    }
}

impl Default for HeatMapSeries {
    fn default() -> Self {
        Self::new()
    }
}
