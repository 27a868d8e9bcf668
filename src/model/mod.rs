use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::{
    Axis, AxisChangedEvent, AxisPosition, Color, LinearColorAxis, PlotRect, ScreenPoint, Thickness,
};
use crate::error::{PlotError, PlotResult};
use crate::render::{
    ClippingContext, FontSpec, HorizontalAlignment, RenderContext, Stroke, VerticalAlignment,
};
use crate::series::{PlotSeries, TrackerHit};

/// Series colors used to resolve `Color::AUTOMATIC`, cycled by series index.
pub const DEFAULT_SERIES_COLORS: [Color; 8] = [
    Color::from_rgb(0x4e, 0x9a, 0xde),
    Color::from_rgb(0xe6, 0x55, 0x4d),
    Color::from_rgb(0x5c, 0xb8, 0x5c),
    Color::from_rgb(0xf0, 0xad, 0x4e),
    Color::from_rgb(0x8e, 0x6c, 0xb8),
    Color::from_rgb(0x46, 0xb8, 0xda),
    Color::from_rgb(0xd8, 0x6a, 0xa5),
    Color::from_rgb(0x77, 0x77, 0x77),
];

/// Resolved axis indices for one series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ResolvedAxes {
    x: usize,
    y: usize,
    color: Option<usize>,
}

/// The chart model: axes, color axes and series in z-order.
///
/// A full update cycle walks the axes and series in a fixed order
/// (`update_data`, `update_max_min`, `update_axis_max_min`, then
/// `update_actual_max_min`); rendering then walks series in z-order against
/// the injected render context, so identical model state always produces an
/// identical draw-call sequence.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct PlotModel {
    pub axes: Vec<Axis>,
    pub color_axes: Vec<LinearColorAxis>,
    pub series: Vec<PlotSeries>,
    pub padding: Thickness,
    pub axis_font: FontSpec,

    #[serde(skip)]
    plot_area: Option<PlotRect>,
    #[serde(skip)]
    events: Vec<AxisChangedEvent>,
}

impl PlotModel {
    #[must_use]
    pub fn new() -> Self {
        Self {
            axes: Vec::new(),
            color_axes: Vec::new(),
            series: Vec::new(),
            padding: Thickness::uniform(8.0),
            axis_font: FontSpec::default(),
            plot_area: None,
            events: Vec::new(),
        }
    }

    pub fn add_axis(&mut self, axis: Axis) {
        self.axes.push(axis);
    }

    pub fn add_color_axis(&mut self, axis: LinearColorAxis) {
        self.color_axes.push(axis);
    }

    pub fn add_series(&mut self, series: impl Into<PlotSeries>) {
        self.series.push(series.into());
    }

    /// Plot area of the most recent render pass.
    #[must_use]
    pub fn plot_area(&self) -> Option<PlotRect> {
        self.plot_area
    }

    /// Drains the pan/zoom/reset notifications accumulated since the last call.
    #[must_use]
    pub fn take_axis_events(&mut self) -> Vec<AxisChangedEvent> {
        std::mem::take(&mut self.events)
    }

    fn find_axis(&self, key: &str) -> Option<usize> {
        self.axes
            .iter()
            .position(|axis| axis.key.as_deref() == Some(key))
    }

    fn find_color_axis(&self, key: &str) -> Option<usize> {
        self.color_axes
            .iter()
            .position(|axis| axis.axis.key.as_deref() == Some(key))
    }

    fn default_axis(&self, horizontal: bool) -> Option<usize> {
        self.axes.iter().position(|axis| {
            if horizontal {
                axis.position.is_horizontal()
            } else {
                axis.position.is_vertical()
            }
        })
    }

    /// Creates default bottom/left linear axes when series need them and no
    /// positioned axis exists yet.
    fn ensure_axes(&mut self) {
        if self.series.is_empty() {
            return;
        }
        if self.default_axis(true).is_none()
            && self.series.iter().any(|s| s.x_axis_key().is_none())
        {
            self.axes.push(Axis::linear(AxisPosition::Bottom));
        }
        if self.default_axis(false).is_none()
            && self.series.iter().any(|s| s.y_axis_key().is_none())
        {
            self.axes.push(Axis::linear(AxisPosition::Left));
        }
    }

    fn resolve_axes(&self, series: &PlotSeries) -> PlotResult<ResolvedAxes> {
        let series_title = series.title().unwrap_or("<untitled>").to_owned();
        let x = match series.x_axis_key() {
            Some(key) => self
                .find_axis(key)
                .ok_or_else(|| PlotError::UnknownAxisKey(key.to_owned()))?,
            None => self
                .default_axis(true)
                .ok_or(PlotError::AxisNotAssigned {
                    series: series_title.clone(),
                    role: "x",
                })?,
        };
        let y = match series.y_axis_key() {
            Some(key) => self
                .find_axis(key)
                .ok_or_else(|| PlotError::UnknownAxisKey(key.to_owned()))?,
            None => self
                .default_axis(false)
                .ok_or(PlotError::AxisNotAssigned {
                    series: series_title.clone(),
                    role: "y",
                })?,
        };
        let color = match series.color_axis_key() {
            Some(key) => Some(
                self.find_color_axis(key)
                    .ok_or_else(|| PlotError::UnknownAxisKey(key.to_owned()))?,
            ),
            None => match series {
                PlotSeries::HeatMap(_) if !self.color_axes.is_empty() => Some(0),
                _ => None,
            },
        };
        if x == y {
            return Err(PlotError::InvalidData(format!(
                "series `{series_title}` resolved the same axis for x and y"
            )));
        }
        Ok(ResolvedAxes { x, y, color })
    }

    /// Runs a full update cycle.
    ///
    /// With `update_data` every series first rebuilds its cached arrays from
    /// its source; pan/zoom alone re-renders without re-running aggregation.
    pub fn update(&mut self, update_data: bool) -> PlotResult<()> {
        self.ensure_axes();

        if update_data {
            for series in &mut self.series {
                series.update_data();
            }
        }

        for axis in &mut self.axes {
            axis.reset_data_bounds();
        }
        for color_axis in &mut self.color_axes {
            color_axis.axis.reset_data_bounds();
        }

        for series in &mut self.series {
            series.update_max_min();
        }

        for index in 0..self.series.len() {
            let resolved = self.resolve_axes(&self.series[index])?;
            let (x_axis, y_axis) = two_axes_mut(&mut self.axes, resolved.x, resolved.y)?;
            self.series[index].update_axis_max_min(x_axis, y_axis);
            if let (PlotSeries::HeatMap(heat_map), Some(color_index)) =
                (&self.series[index], resolved.color)
            {
                heat_map.update_color_axis_max_min(&mut self.color_axes[color_index]);
            }
        }

        for axis in &mut self.axes {
            axis.update_actual_max_min();
        }
        for color_axis in &mut self.color_axes {
            color_axis.axis.update_actual_max_min();
        }

        debug!(
            axes = self.axes.len(),
            series = self.series.len(),
            update_data,
            "plot model updated"
        );
        Ok(())
    }

    /// Renders the model into `rc` at the given pixel size.
    ///
    /// Draw order is fixed: series in z-order inside the plot-area clip, then
    /// axes. Backend failures propagate unchanged.
    pub fn render(&mut self, rc: &mut dyn RenderContext, width: f64, height: f64) -> PlotResult<()> {
        if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
            return Err(PlotError::InvalidPlotArea { width, height });
        }

        let plot_area = PlotRect::new(0.0, 0.0, width, height).deflate(self.padding);
        if plot_area.is_empty() {
            return Err(PlotError::InvalidPlotArea { width, height });
        }
        self.plot_area = Some(plot_area);

        for axis in &mut self.axes {
            let (screen_min, screen_max) = axis_screen_range(axis.position, plot_area);
            axis.update_transform(screen_min, screen_max)?;
        }

        trace!(width, height, "render pass");
        let mut clip = ClippingContext::new(rc);

        clip.push_clip(plot_area)?;
        for index in 0..self.series.len() {
            let resolved = self.resolve_axes(&self.series[index])?;
            let default_color = DEFAULT_SERIES_COLORS[index % DEFAULT_SERIES_COLORS.len()];
            // Axes are read-only during rendering; only the series' window
            // cache mutates.
            let x_axis = &self.axes[resolved.x];
            let y_axis = &self.axes[resolved.y];
            let color_axis = resolved.color.map(|i| &self.color_axes[i]);
            self.series[index].render(&mut clip, x_axis, y_axis, color_axis, default_color)?;
        }
        clip.pop_clip()?;

        self.render_axes(&mut clip, plot_area)?;
        Ok(())
    }

    fn render_axes(&self, rc: &mut ClippingContext<'_>, plot_area: PlotRect) -> PlotResult<()> {
        let stroke = Stroke::new(Color::BLACK, 1.0);
        for axis in &self.axes {
            if axis.position == AxisPosition::None {
                continue;
            }
            let available = if axis.position.is_horizontal() {
                plot_area.width
            } else {
                plot_area.height
            };
            let ticks = axis.tick_values(available)?;

            let edge = axis_edge(axis.position, plot_area);
            rc.draw_line(&edge, &stroke)?;

            for &value in &ticks.minor {
                if value < axis.clip_minimum() || value > axis.clip_maximum() {
                    continue;
                }
                let mark = tick_mark(axis, value, plot_area, 2.5);
                rc.draw_line(&mark, &stroke)?;
            }
            for &value in &ticks.major {
                if value < axis.clip_minimum() || value > axis.clip_maximum() {
                    continue;
                }
                let mark = tick_mark(axis, value, plot_area, 5.0);
                rc.draw_line(&mark, &stroke)?;

                let label = axis.format_value(value);
                if !label.is_empty() {
                    let (position, h_align, v_align) = label_anchor(axis, value, plot_area);
                    rc.draw_text(position, &label, Color::BLACK, &self.axis_font, h_align, v_align)?;
                }
            }
        }
        Ok(())
    }

    /// Nearest tracker hit over all series.
    #[must_use]
    pub fn nearest_point(&self, target: ScreenPoint, interpolate: bool) -> Option<TrackerHit> {
        let mut best: Option<TrackerHit> = None;
        let mut best_distance = f64::INFINITY;
        for series in &self.series {
            let Ok(resolved) = self.resolve_axes(series) else {
                continue;
            };
            let x_axis = &self.axes[resolved.x];
            let y_axis = &self.axes[resolved.y];
            if let Some(hit) = series.nearest_point(x_axis, y_axis, target, interpolate) {
                let distance = hit.screen_point.distance_to_squared(target);
                if distance < best_distance {
                    best_distance = distance;
                    best = Some(hit);
                }
            }
        }
        best
    }

    // ----- interaction entry points -----

    /// Pans every pan-enabled axis by a pointer movement.
    pub fn pan_all(&mut self, previous: ScreenPoint, current: ScreenPoint) {
        for axis in &mut self.axes {
            let event = if axis.position.is_horizontal() {
                axis.pan(previous.x, current.x)
            } else if axis.position.is_vertical() {
                axis.pan(previous.y, current.y)
            } else {
                None
            };
            self.events.extend(event);
        }
    }

    /// Zooms every zoom-enabled axis around a screen-space center.
    pub fn zoom_all_at(&mut self, factor: f64, center: ScreenPoint) {
        for axis in &mut self.axes {
            let center_screen = if axis.position.is_horizontal() {
                center.x
            } else if axis.position.is_vertical() {
                center.y
            } else {
                continue;
            };
            let center_value = axis.inverse_transform(center_screen);
            let event = axis.zoom_at(factor, center_value);
            self.events.extend(event);
        }
    }

    /// Resets every axis to its data-derived range.
    pub fn reset_all_axes(&mut self) {
        for axis in &mut self.axes {
            let event = axis.reset();
            self.events.push(event);
        }
    }
}

fn axis_screen_range(position: AxisPosition, plot_area: PlotRect) -> (f64, f64) {
    if position.is_vertical() {
        // Screen Y grows downward; the axis minimum sits at the bottom edge.
        (plot_area.bottom(), plot_area.top)
    } else {
        (plot_area.left, plot_area.right())
    }
}

fn axis_edge(position: AxisPosition, plot_area: PlotRect) -> [ScreenPoint; 2] {
    match position {
        AxisPosition::Left => [plot_area.top_left(), plot_area.bottom_left()],
        AxisPosition::Right => [plot_area.top_right(), plot_area.bottom_right()],
        AxisPosition::Top => [plot_area.top_left(), plot_area.top_right()],
        AxisPosition::Bottom | AxisPosition::None => {
            [plot_area.bottom_left(), plot_area.bottom_right()]
        }
    }
}

fn tick_mark(axis: &Axis, value: f64, plot_area: PlotRect, length: f64) -> [ScreenPoint; 2] {
    let at = axis.transform(value);
    match axis.position {
        AxisPosition::Left => [
            ScreenPoint::new(plot_area.left - length, at),
            ScreenPoint::new(plot_area.left, at),
        ],
        AxisPosition::Right => [
            ScreenPoint::new(plot_area.right(), at),
            ScreenPoint::new(plot_area.right() + length, at),
        ],
        AxisPosition::Top => [
            ScreenPoint::new(at, plot_area.top - length),
            ScreenPoint::new(at, plot_area.top),
        ],
        AxisPosition::Bottom | AxisPosition::None => [
            ScreenPoint::new(at, plot_area.bottom()),
            ScreenPoint::new(at, plot_area.bottom() + length),
        ],
    }
}

fn label_anchor(
    axis: &Axis,
    value: f64,
    plot_area: PlotRect,
) -> (ScreenPoint, HorizontalAlignment, VerticalAlignment) {
    let at = axis.transform(value);
    match axis.position {
        AxisPosition::Left => (
            ScreenPoint::new(plot_area.left - 7.0, at),
            HorizontalAlignment::Right,
            VerticalAlignment::Middle,
        ),
        AxisPosition::Right => (
            ScreenPoint::new(plot_area.right() + 7.0, at),
            HorizontalAlignment::Left,
            VerticalAlignment::Middle,
        ),
        AxisPosition::Top => (
            ScreenPoint::new(at, plot_area.top - 7.0),
            HorizontalAlignment::Center,
            VerticalAlignment::Bottom,
        ),
        AxisPosition::Bottom | AxisPosition::None => (
            ScreenPoint::new(at, plot_area.bottom() + 7.0),
            HorizontalAlignment::Center,
            VerticalAlignment::Top,
        ),
    }
}

fn two_axes_mut<'a>(
    axes: &'a mut [Axis],
    x: usize,
    y: usize,
) -> PlotResult<(&'a mut Axis, &'a mut Axis)> {
    if x == y {
        return Err(PlotError::InvalidData(
            "series x and y axis must be distinct".to_owned(),
        ));
    }
    if x < y {
        let (head, tail) = axes.split_at_mut(y);
        Ok((&mut head[x], &mut tail[0]))
    } else {
        let (head, tail) = axes.split_at_mut(x);
        Ok((&mut tail[0], &mut head[y]))
    }
}
