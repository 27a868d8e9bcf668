pub mod area;
pub mod bar;
pub mod candlestick;
pub mod data;
pub mod heat_map;
pub mod line;
pub mod polygon;
pub mod scatter;

pub use area::AreaSeries;
pub use bar::BarSeries;
pub use candlestick::{CandlestickSeries, OhlcItem};
pub use data::{find_window_start_index, DataSeriesCore};
pub use heat_map::HeatMapSeries;
pub use line::{LineSeries, SplineOptions};
pub use polygon::PolygonSeries;
pub use scatter::ScatterSeries;

use serde::{Deserialize, Serialize};

use crate::core::{Axis, Color, DataPoint, LinearColorAxis, ScreenPoint};
use crate::error::{PlotError, PlotResult};
use crate::render::ClippingContext;

/// Hit-test result consumed by tracker/tooltip layers.
///
/// `index` may be fractional when interpolation matched a point between two
/// vertices (`1.5` means halfway between point 1 and point 2).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackerHit {
    pub series_title: Option<String>,
    pub data_point: DataPoint,
    pub screen_point: ScreenPoint,
    pub index: f64,
}

/// Closed set of chart types the engine renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeriesKind {
    Line,
    Scatter,
    Area,
    Bar,
    Candlestick,
    Polygon,
    HeatMap,
}

/// One series of the plot, dispatched exhaustively by kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlotSeries {
    Line(LineSeries),
    Scatter(ScatterSeries),
    Area(AreaSeries),
    Bar(BarSeries),
    Candlestick(CandlestickSeries),
    Polygon(PolygonSeries),
    HeatMap(HeatMapSeries),
}

impl PlotSeries {
    #[must_use]
    pub fn kind(&self) -> SeriesKind {
        match self {
            Self::Line(_) => SeriesKind::Line,
            Self::Scatter(_) => SeriesKind::Scatter,
            Self::Area(_) => SeriesKind::Area,
            Self::Bar(_) => SeriesKind::Bar,
            Self::Candlestick(_) => SeriesKind::Candlestick,
            Self::Polygon(_) => SeriesKind::Polygon,
            Self::HeatMap(_) => SeriesKind::HeatMap,
        }
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        match self {
            Self::Line(series) => series.core.title.as_deref(),
            Self::Scatter(series) => series.core.title.as_deref(),
            Self::Area(series) => series.core.title.as_deref(),
            Self::Bar(series) => series.core.title.as_deref(),
            Self::Candlestick(series) => series.title.as_deref(),
            Self::Polygon(series) => series.title.as_deref(),
            Self::HeatMap(series) => series.title.as_deref(),
        }
    }

    #[must_use]
    pub fn x_axis_key(&self) -> Option<&str> {
        match self {
            Self::Line(series) => series.core.x_axis_key.as_deref(),
            Self::Scatter(series) => series.core.x_axis_key.as_deref(),
            Self::Area(series) => series.core.x_axis_key.as_deref(),
            Self::Bar(series) => series.core.x_axis_key.as_deref(),
            Self::Candlestick(series) => series.x_axis_key.as_deref(),
            Self::Polygon(series) => series.x_axis_key.as_deref(),
            Self::HeatMap(series) => series.x_axis_key.as_deref(),
        }
    }

    #[must_use]
    pub fn y_axis_key(&self) -> Option<&str> {
        match self {
            Self::Line(series) => series.core.y_axis_key.as_deref(),
            Self::Scatter(series) => series.core.y_axis_key.as_deref(),
            Self::Area(series) => series.core.y_axis_key.as_deref(),
            Self::Bar(series) => series.core.y_axis_key.as_deref(),
            Self::Candlestick(series) => series.y_axis_key.as_deref(),
            Self::Polygon(series) => series.y_axis_key.as_deref(),
            Self::HeatMap(series) => series.y_axis_key.as_deref(),
        }
    }

    #[must_use]
    pub fn color_axis_key(&self) -> Option<&str> {
        match self {
            Self::HeatMap(series) => series.color_axis_key.as_deref(),
            _ => None,
        }
    }

    /// Rebuilds cached point arrays from the series' source data.
    pub fn update_data(&mut self) {
        match self {
            Self::Line(series) => series.core.update_data(),
            Self::Scatter(series) => series.core.update_data(),
            Self::Area(series) => series.update_data(),
            Self::Bar(series) => series.core.update_data(),
            Self::Candlestick(_) | Self::Polygon(_) | Self::HeatMap(_) => {}
        }
    }

    /// Recomputes the series' finite data bounds.
    pub fn update_max_min(&mut self) {
        match self {
            Self::Line(series) => series.core.update_max_min(),
            Self::Scatter(series) => series.core.update_max_min(),
            Self::Area(series) => series.update_max_min(),
            Self::Bar(series) => series.update_max_min(),
            Self::Candlestick(series) => series.update_max_min(),
            Self::Polygon(series) => series.update_max_min(),
            Self::HeatMap(_) => {}
        }
    }

    /// Folds the series bounds into its axes.
    pub fn update_axis_max_min(&self, x_axis: &mut Axis, y_axis: &mut Axis) {
        match self {
            Self::Line(series) => series.core.update_axis_max_min(x_axis, y_axis),
            Self::Scatter(series) => series.core.update_axis_max_min(x_axis, y_axis),
            Self::Area(series) => series.update_axis_max_min(x_axis, y_axis),
            Self::Bar(series) => series.update_axis_max_min(x_axis, y_axis),
            Self::Candlestick(series) => series.update_axis_max_min(x_axis, y_axis),
            Self::Polygon(series) => series.update_axis_max_min(x_axis, y_axis),
            Self::HeatMap(series) => series.update_axis_max_min(x_axis, y_axis),
        }
    }

    /// Issues the series' draw calls in screen space.
    pub fn render(
        &mut self,
        rc: &mut ClippingContext<'_>,
        x_axis: &Axis,
        y_axis: &Axis,
        color_axis: Option<&LinearColorAxis>,
        default_color: Color,
    ) -> PlotResult<()> {
        match self {
            Self::Line(series) => series.render(rc, x_axis, y_axis, default_color),
            Self::Scatter(series) => series.render(rc, x_axis, y_axis, default_color),
            Self::Area(series) => series.render(rc, x_axis, y_axis, default_color),
            Self::Bar(series) => series.render(rc, x_axis, y_axis, default_color),
            Self::Candlestick(series) => series.render(rc, x_axis, y_axis),
            Self::Polygon(series) => series.render(rc, x_axis, y_axis, default_color),
            Self::HeatMap(series) => {
                let color_axis = color_axis.ok_or_else(|| PlotError::AxisNotAssigned {
                    series: series.title.clone().unwrap_or_default(),
                    role: "color",
                })?;
                series.render(rc, x_axis, y_axis, color_axis)
            }
        }
    }

    /// Nearest rendered point for tracker display.
    #[must_use]
    pub fn nearest_point(
        &self,
        x_axis: &Axis,
        y_axis: &Axis,
        target: ScreenPoint,
        interpolate: bool,
    ) -> Option<TrackerHit> {
        match self {
            Self::Line(series) => series.nearest_point(x_axis, y_axis, target, interpolate),
            Self::Scatter(series) => series.nearest_point(x_axis, y_axis, target),
            Self::Area(series) => series.nearest_point(x_axis, y_axis, target, interpolate),
            Self::Bar(series) => series.nearest_point(x_axis, y_axis, target),
            Self::Candlestick(series) => series.nearest_point(x_axis, y_axis, target),
            Self::Polygon(series) => series.nearest_point(x_axis, y_axis, target),
            Self::HeatMap(series) => series.nearest_point(x_axis, y_axis, target),
        }
    }
}

macro_rules! impl_from_series {
    ($($variant:ident => $series:ty),* $(,)?) => {
        $(impl From<$series> for PlotSeries {
            fn from(series: $series) -> Self {
                Self::$variant(series)
            }
        })*
    };
}

impl_from_series!(
    Line => LineSeries,
    Scatter => ScatterSeries,
    Area => AreaSeries,
    Bar => BarSeries,
    Candlestick => CandlestickSeries,
    Polygon => PolygonSeries,
    HeatMap => HeatMapSeries,
);

/// Windowed view of a monotonic series: starts at the persisted window index
/// and stops early once two consecutive points pass the clip maximum.
pub(crate) fn visible_slice(core: &mut DataSeriesCore, x_axis: &Axis) -> Vec<DataPoint> {
    let clip_minimum = x_axis.clip_minimum();
    let clip_maximum = x_axis.clip_maximum();
    let start = core.advance_window(clip_minimum);

    let points = core.actual_points();
    if points.is_empty() {
        return Vec::new();
    }
    if !core.is_x_monotonic() {
        return points.to_vec();
    }

    let mut visible = Vec::with_capacity(points.len() - start);
    let mut beyond_count = 0;
    for &point in &points[start..] {
        visible.push(point);
        if point.x > clip_maximum {
            beyond_count += 1;
            if beyond_count >= 2 {
                break;
            }
        } else {
            beyond_count = 0;
        }
    }
    visible
}
