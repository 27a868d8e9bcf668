use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Axis, Color, DataPoint, PlotRect, ScreenPoint};
use crate::error::{PlotError, PlotResult};
use crate::render::{ClippingContext, RenderContext, Stroke};
use crate::series::TrackerHit;

/// One high/low item with open/close body bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OhlcItem {
    pub x: f64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl OhlcItem {
    /// Builds a validated item.
    ///
    /// Invariants: all values finite, `low <= high`, `open` and `close`
    /// within `[low, high]`.
    pub fn new(x: f64, open: f64, high: f64, low: f64, close: f64) -> PlotResult<Self> {
        if !x.is_finite()
            || !open.is_finite()
            || !high.is_finite()
            || !low.is_finite()
            || !close.is_finite()
        {
            return Err(PlotError::InvalidData(
                "ohlc values must be finite".to_owned(),
            ));
        }
        if low > high {
            return Err(PlotError::InvalidData(
                "ohlc low must be <= high".to_owned(),
            ));
        }
        if open < low || open > high || close < low || close > high {
            return Err(PlotError::InvalidData(
                "ohlc open/close must be within low/high range".to_owned(),
            ));
        }
        Ok(Self {
            x,
            open,
            high,
            low,
            close,
        })
    }

    #[must_use]
    pub fn is_rising(self) -> bool {
        self.close >= self.open
    }
}

/// Candlestick series: a high/low wick with an open/close body per item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandlestickSeries {
    pub title: Option<String>,
    pub x_axis_key: Option<String>,
    pub y_axis_key: Option<String>,
    pub items: Vec<OhlcItem>,
    /// Body width in data units.
    pub candle_width: f64,
    pub rising_fill: Color,
    pub falling_fill: Color,
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

impl CandlestickSeries {
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: None,
            x_axis_key: None,
            y_axis_key: None,
            items: Vec::new(),
            candle_width: 0.5,
            rising_fill: Color::from_rgb(38, 166, 91),
            falling_fill: Color::from_rgb(214, 69, 65),
            stroke_color: Color::BLACK,
            stroke_width: 1.0,
            min_x: f64::NAN,
            max_x: f64::NAN,
            min_y: f64::NAN,
            max_y: f64::NAN,
        }
    }

    #[must_use]
    pub fn with_items(mut self, items: Vec<OhlcItem>) -> Self {
        self.items = items;
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Scans the items and records finite bounds; the Y extent spans the
    /// full low/high envelope.
    pub fn update_max_min(&mut self) {
        let mut min_x = f64::NAN;
        let mut max_x = f64::NAN;
        let mut min_y = f64::NAN;
        let mut max_y = f64::NAN;

        for item in &self.items {
            if item.x.is_finite() {
                if min_x.is_nan() || item.x < min_x {
                    min_x = item.x;
                }
                if max_x.is_nan() || item.x > max_x {
                    max_x = item.x;
                }
            }
            if item.low.is_finite() && (min_y.is_nan() || item.low < min_y) {
                min_y = item.low;
            }
            if item.high.is_finite() && (max_y.is_nan() || item.high > max_y) {
                max_y = item.high;
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
    ) -> PlotResult<()> {
        let stroke = Stroke::new(self.stroke_color, self.stroke_width);
        let half_width = self.candle_width / 2.0;
        let clip_min = x_axis.clip_minimum();
        let clip_max = x_axis.clip_maximum();

        for item in &self.items {
            if item.x + half_width < clip_min || item.x - half_width > clip_max {
                continue;
            }

            let center_x = x_axis.transform(item.x);
            let wick: SmallVec<[ScreenPoint; 2]> = SmallVec::from_buf([
                ScreenPoint::new(center_x, y_axis.transform(item.high)),
                ScreenPoint::new(center_x, y_axis.transform(item.low)),
            ]);
            rc.draw_line(&wick, &stroke)?;

            let body_a = x_axis.transform_point(item.x - half_width, item.open, y_axis);
            let body_b = x_axis.transform_point(item.x + half_width, item.close, y_axis);
            let fill = if item.is_rising() {
                self.rising_fill
            } else {
                self.falling_fill
            };
            rc.draw_rectangle(PlotRect::from_screen_points(body_a, body_b), fill, &stroke)?;
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
        let mut best: Option<(usize, DataPoint, ScreenPoint, f64)> = None;
        for (index, item) in self.items.iter().enumerate() {
            let mid = (item.high + item.low) / 2.0;
            let screen = x_axis.transform_point(item.x, mid, y_axis);
            let distance_squared = screen.distance_to_squared(target);
            if best.is_none_or(|(_, _, _, best_distance)| distance_squared < best_distance) {
                best = Some((index, DataPoint::new(item.x, mid), screen, distance_squared));
            }
        }
        best.map(|(index, data_point, screen_point, _)| TrackerHit {
            series_title: self.title.clone(),
            data_point,
            screen_point,
            index: index as f64,
        })
    }
}

impl Default for CandlestickSeries {
    fn default() -> Self {
        Self::new()
    }
}
