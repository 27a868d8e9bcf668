use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::category::CategoryRegistry;
use crate::core::primitives::unix_seconds_to_datetime;
use crate::core::ticks::{
    calculate_major_interval, calculate_minor_interval, create_tick_values,
    filter_redundant_minor_ticks,
};
use crate::core::{DataPoint, ScreenPoint};
use crate::error::{PlotError, PlotResult};

/// Edge of the plot area an axis is rendered against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum AxisPosition {
    #[default]
    None,
    Left,
    Right,
    Top,
    Bottom,
}

impl AxisPosition {
    #[must_use]
    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::Top | Self::Bottom)
    }

    #[must_use]
    pub fn is_vertical(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }
}

/// Mapping family of an axis.
///
/// Kinds are a closed set; behavior differences are matched exhaustively
/// instead of dispatched through a class hierarchy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AxisKind {
    Linear,
    /// Uniform spacing in `log(value)`; all included values must be > 0.
    Logarithmic { log_base: f64 },
    /// Data coordinate is the registration index of a label.
    Category(CategoryRegistry),
    /// Data coordinate is unix seconds; labels format through `chrono`.
    DateTime,
}

impl Default for AxisKind {
    fn default() -> Self {
        Self::Linear
    }
}

/// What a range-changing operation did to an axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxisChangeType {
    Pan,
    Zoom,
    Reset,
}

/// Notification emitted after any pan/zoom/reset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisChangedEvent {
    pub axis_key: Option<String>,
    pub change_type: AxisChangeType,
    pub delta_minimum: f64,
    pub delta_maximum: f64,
}

/// Tick positions computed for one render pass.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AxisTicks {
    pub major: Vec<f64>,
    pub minor: Vec<f64>,
    pub major_step: f64,
    pub minor_step: f64,
}

/// One axis of the plot: owns the data-to-screen transform, the
/// tick cadence, and the pan/zoom view state.
///
/// The transform is the affine map `screen = offset + pre(value) * scale`
/// where `pre` is the identity for linear axes and `log` for logarithmic
/// axes. `scale` and `offset` are only valid after `update_transform` has run
/// following a range update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    pub key: Option<String>,
    pub title: Option<String>,
    pub position: AxisPosition,
    pub kind: AxisKind,

    /// User-set range; NaN means "derive from data".
    #[serde(with = "crate::core::primitives::serde_nan")]
    pub minimum: f64,
    #[serde(with = "crate::core::primitives::serde_nan")]
    pub maximum: f64,
    /// Hard bounds pan/zoom may never escape; NaN means unbounded.
    #[serde(with = "crate::core::primitives::serde_nan")]
    pub absolute_minimum: f64,
    #[serde(with = "crate::core::primitives::serde_nan")]
    pub absolute_maximum: f64,
    /// Relative margins applied to data-derived bounds.
    pub minimum_padding: f64,
    pub maximum_padding: f64,

    pub is_reversed: bool,
    pub is_pan_enabled: bool,
    pub is_zoom_enabled: bool,

    /// Explicit tick steps; NaN means "auto-compute".
    #[serde(with = "crate::core::primitives::serde_nan")]
    pub major_step: f64,
    #[serde(with = "crate::core::primitives::serde_nan")]
    pub minor_step: f64,
    /// Fixed label precision; `None` formats with shortest round-trip.
    pub label_precision: Option<usize>,

    // Resolved per update cycle.
    #[serde(with = "crate::core::primitives::serde_nan")]
    actual_minimum: f64,
    #[serde(with = "crate::core::primitives::serde_nan")]
    actual_maximum: f64,
    #[serde(with = "crate::core::primitives::serde_nan")]
    clip_minimum: f64,
    #[serde(with = "crate::core::primitives::serde_nan")]
    clip_maximum: f64,
    // Pan/zoom view override; NaN when the view follows the data.
    #[serde(with = "crate::core::primitives::serde_nan")]
    view_minimum: f64,
    #[serde(with = "crate::core::primitives::serde_nan")]
    view_maximum: f64,
    // Accumulated via include().
    #[serde(with = "crate::core::primitives::serde_nan")]
    data_minimum: f64,
    #[serde(with = "crate::core::primitives::serde_nan")]
    data_maximum: f64,

    #[serde(skip, default = "default_nan")]
    scale: f64,
    #[serde(skip, default = "default_nan")]
    offset: f64,
    #[serde(skip, default = "default_nan")]
    screen_minimum: f64,
    #[serde(skip, default = "default_nan")]
    screen_maximum: f64,
}

fn default_nan() -> f64 {
    f64::NAN
}

impl Axis {
    #[must_use]
    pub fn new(position: AxisPosition, kind: AxisKind) -> Self {
        Self {
            key: None,
            title: None,
            position,
            kind,
            minimum: f64::NAN,
            maximum: f64::NAN,
            absolute_minimum: f64::NAN,
            absolute_maximum: f64::NAN,
            minimum_padding: 0.01,
            maximum_padding: 0.01,
            is_reversed: false,
            is_pan_enabled: true,
            is_zoom_enabled: true,
            major_step: f64::NAN,
            minor_step: f64::NAN,
            label_precision: None,
            actual_minimum: f64::NAN,
            actual_maximum: f64::NAN,
            clip_minimum: f64::NAN,
            clip_maximum: f64::NAN,
            view_minimum: f64::NAN,
            view_maximum: f64::NAN,
            data_minimum: f64::NAN,
            data_maximum: f64::NAN,
            scale: f64::NAN,
            offset: f64::NAN,
            screen_minimum: f64::NAN,
            screen_maximum: f64::NAN,
        }
    }

    #[must_use]
    pub fn linear(position: AxisPosition) -> Self {
        Self::new(position, AxisKind::Linear)
    }

    #[must_use]
    pub fn logarithmic(position: AxisPosition) -> Self {
        let mut axis = Self::new(position, AxisKind::Logarithmic { log_base: 10.0 });
        axis.minimum_padding = 0.0;
        axis.maximum_padding = 0.0;
        axis
    }

    #[must_use]
    pub fn category(position: AxisPosition, registry: CategoryRegistry) -> Self {
        let mut axis = Self::new(position, AxisKind::Category(registry));
        axis.major_step = 1.0;
        axis.minor_step = 1.0;
        axis
    }

    #[must_use]
    pub fn date_time(position: AxisPosition) -> Self {
        Self::new(position, AxisKind::DateTime)
    }

    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_range(mut self, minimum: f64, maximum: f64) -> Self {
        self.minimum = minimum;
        self.maximum = maximum;
        self
    }

    #[must_use]
    pub fn with_reversed(mut self, reversed: bool) -> Self {
        self.is_reversed = reversed;
        self
    }

    #[must_use]
    pub fn actual_minimum(&self) -> f64 {
        self.actual_minimum
    }

    #[must_use]
    pub fn actual_maximum(&self) -> f64 {
        self.actual_maximum
    }

    #[must_use]
    pub fn clip_minimum(&self) -> f64 {
        self.clip_minimum
    }

    #[must_use]
    pub fn clip_maximum(&self) -> f64 {
        self.clip_maximum
    }

    #[must_use]
    pub fn data_range(&self) -> (f64, f64) {
        (self.data_minimum, self.data_maximum)
    }

    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    #[must_use]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    #[must_use]
    pub fn screen_range(&self) -> (f64, f64) {
        (self.screen_minimum, self.screen_maximum)
    }

    /// Returns `true` when a value may contribute to ranges and geometry.
    #[must_use]
    pub fn is_valid_value(&self, value: f64) -> bool {
        if !value.is_finite() {
            return false;
        }
        match self.kind {
            AxisKind::Logarithmic { .. } => value > 0.0,
            _ => true,
        }
    }

    fn pre_transform(&self, value: f64) -> f64 {
        match self.kind {
            AxisKind::Logarithmic { log_base } => value.log(log_base),
            _ => value,
        }
    }

    fn post_inverse_transform(&self, value: f64) -> f64 {
        match self.kind {
            AxisKind::Logarithmic { log_base } => log_base.powf(value),
            _ => value,
        }
    }

    // ----- data bounds -----

    /// Clears accumulated data bounds ahead of a new update cycle.
    pub fn reset_data_bounds(&mut self) {
        self.data_minimum = f64::NAN;
        self.data_maximum = f64::NAN;
    }

    /// Folds one value into the data extent. Invalid values are ignored.
    pub fn include(&mut self, value: f64) {
        if !self.is_valid_value(value) {
            return;
        }
        if self.data_minimum.is_nan() || value < self.data_minimum {
            self.data_minimum = value;
        }
        if self.data_maximum.is_nan() || value > self.data_maximum {
            self.data_maximum = value;
        }
    }

    fn default_range(&self) -> (f64, f64) {
        match self.kind {
            AxisKind::Logarithmic { .. } => (1.0, 100.0),
            _ => (0.0, 100.0),
        }
    }

    /// Resolves `actual_minimum`/`actual_maximum` from user settings and the
    /// accumulated data bounds, then derives the clip range from the current
    /// view state.
    ///
    /// User-set `minimum`/`maximum` win when finite. Data-derived sides get
    /// the padding margins (applied in the transformed domain so logarithmic
    /// padding stays visually even); degenerate single-value ranges are
    /// widened to a synthesized span.
    pub fn update_actual_max_min(&mut self) {
        let (fallback_min, fallback_max) = self.default_range();

        let (mut data_min, mut data_max) = (self.data_minimum, self.data_maximum);
        if matches!(self.kind, AxisKind::Category(_)) && data_min.is_finite() {
            // Half-slot gap at each end so bars at the first and last index
            // do not touch the plot border.
            data_min -= 0.5;
            data_max += 0.5;
        }

        let padded = if data_min.is_finite() && data_max.is_finite() {
            let pre_min = self.pre_transform(data_min);
            let pre_max = self.pre_transform(data_max);
            let span = pre_max - pre_min;
            (
                self.post_inverse_transform(pre_min - self.minimum_padding * span),
                self.post_inverse_transform(pre_max + self.maximum_padding * span),
            )
        } else {
            (fallback_min, fallback_max)
        };

        let mut min = if self.minimum.is_finite() {
            self.minimum
        } else {
            padded.0
        };
        let mut max = if self.maximum.is_finite() {
            self.maximum
        } else {
            padded.1
        };

        if min > max {
            std::mem::swap(&mut min, &mut max);
        }
        if min == max {
            let center = min;
            let half = f64::max(0.5, center.abs() * 0.05);
            min = center - half;
            max = center + half;
            if let AxisKind::Logarithmic { .. } = self.kind {
                min = min.max(center / 10.0).max(f64::MIN_POSITIVE);
            }
        }

        min = min.max(self.absolute_minimum);
        max = max.min(self.absolute_maximum);

        self.actual_minimum = min;
        self.actual_maximum = max;

        // The clip range tracks the current view after pan/zoom; otherwise it
        // follows the resolved data extent.
        if self.view_minimum.is_finite() && self.view_maximum.is_finite() {
            self.actual_minimum = self.view_minimum;
            self.actual_maximum = self.view_maximum;
        }
        self.clip_minimum = self.actual_minimum;
        self.clip_maximum = self.actual_maximum;
    }

    // ----- transform -----

    /// Recomputes `scale`/`offset` so that `clip_minimum` maps to
    /// `screen_min` and `clip_maximum` maps to `screen_max` (swapped when the
    /// axis is reversed).
    pub fn update_transform(&mut self, screen_min: f64, screen_max: f64) -> PlotResult<()> {
        if !self.clip_minimum.is_finite()
            || !self.clip_maximum.is_finite()
            || self.clip_minimum == self.clip_maximum
        {
            return Err(PlotError::InvalidData(
                "axis range must be resolved before update_transform".to_owned(),
            ));
        }
        if !screen_min.is_finite() || !screen_max.is_finite() || screen_min == screen_max {
            return Err(PlotError::InvalidData(
                "screen range must be finite and non-empty".to_owned(),
            ));
        }

        let (s0, s1) = if self.is_reversed {
            (screen_max, screen_min)
        } else {
            (screen_min, screen_max)
        };

        let pre_min = self.pre_transform(self.clip_minimum);
        let pre_max = self.pre_transform(self.clip_maximum);
        self.scale = (s1 - s0) / (pre_max - pre_min);
        self.offset = s0 - pre_min * self.scale;
        self.screen_minimum = screen_min;
        self.screen_maximum = screen_max;
        Ok(())
    }

    /// Maps a data value to a screen coordinate along this axis's direction.
    #[must_use]
    pub fn transform(&self, value: f64) -> f64 {
        self.offset + self.pre_transform(value) * self.scale
    }

    /// Exact inverse of `transform`.
    #[must_use]
    pub fn inverse_transform(&self, screen: f64) -> f64 {
        self.post_inverse_transform((screen - self.offset) / self.scale)
    }

    /// Composes this (x) axis with a y axis into a screen point.
    #[must_use]
    pub fn transform_point(&self, x: f64, y: f64, y_axis: &Axis) -> ScreenPoint {
        ScreenPoint::new(self.transform(x), y_axis.transform(y))
    }

    /// Exact inverse of `transform_point`.
    #[must_use]
    pub fn inverse_transform_point(&self, point: ScreenPoint, y_axis: &Axis) -> DataPoint {
        DataPoint::new(
            self.inverse_transform(point.x),
            y_axis.inverse_transform(point.y),
        )
    }

    // ----- ticks -----

    /// Computes major/minor tick values for the current clip range.
    ///
    /// `available_size_px` drives auto step selection when `major_step` /
    /// `minor_step` are NaN. Minor ticks coinciding with a major tick are
    /// filtered out.
    pub fn tick_values(&self, available_size_px: f64) -> PlotResult<AxisTicks> {
        let pre_min = self.pre_transform(self.clip_minimum);
        let pre_max = self.pre_transform(self.clip_maximum);
        let span = pre_max - pre_min;

        let major_step = if self.major_step.is_finite() && self.major_step > 0.0 {
            self.major_step
        } else {
            calculate_major_interval(span, available_size_px, 60.0)
        };
        let minor_step = if self.minor_step.is_finite() && self.minor_step > 0.0 {
            self.minor_step
        } else {
            calculate_minor_interval(major_step)
        };

        let major = create_tick_values(pre_min, pre_max, major_step)?;
        let minor = create_tick_values(pre_min, pre_max, minor_step)?;
        let minor = filter_redundant_minor_ticks(&major, &minor);

        let back = |values: Vec<f64>| -> Vec<f64> {
            values
                .into_iter()
                .map(|v| self.post_inverse_transform(v))
                .collect()
        };
        Ok(AxisTicks {
            major: back(major),
            minor: back(minor),
            major_step,
            minor_step,
        })
    }

    /// Formats a tick value the way this axis kind labels it.
    #[must_use]
    pub fn format_value(&self, value: f64) -> String {
        match &self.kind {
            AxisKind::Category(registry) => {
                let index = value.round();
                if index >= 0.0 && (index - value).abs() < 1e-6 {
                    if let Some(label) = registry.label_at(index as usize) {
                        return label.to_owned();
                    }
                }
                String::new()
            }
            AxisKind::DateTime => unix_seconds_to_datetime(value)
                .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
                .unwrap_or_default(),
            _ => match self.label_precision {
                Some(digits) => format!("{value:.digits$}"),
                None => format!("{value}"),
            },
        }
    }

    // ----- pan/zoom -----

    fn apply_view(
        &mut self,
        new_minimum: f64,
        new_maximum: f64,
        change_type: AxisChangeType,
    ) -> AxisChangedEvent {
        let old_minimum = self.actual_minimum;
        let old_maximum = self.actual_maximum;

        self.view_minimum = new_minimum;
        self.view_maximum = new_maximum;
        self.actual_minimum = new_minimum;
        self.actual_maximum = new_maximum;
        self.clip_minimum = new_minimum;
        self.clip_maximum = new_maximum;

        // Keep the transform in sync so consecutive manipulator deltas use
        // the mutated range without waiting for the next full update.
        if self.screen_minimum.is_finite() && self.screen_maximum.is_finite() {
            let _ = self.update_transform(self.screen_minimum, self.screen_maximum);
        }

        trace!(
            axis = self.key.as_deref().unwrap_or("<unkeyed>"),
            ?change_type,
            new_minimum,
            new_maximum,
            "axis view changed"
        );
        AxisChangedEvent {
            axis_key: self.key.clone(),
            change_type,
            delta_minimum: new_minimum - old_minimum,
            delta_maximum: new_maximum - old_maximum,
        }
    }

    /// Shifts the view by a pointer movement from `previous_screen` to
    /// `current_screen`. Returns `None` when panning is disabled.
    pub fn pan(&mut self, previous_screen: f64, current_screen: f64) -> Option<AxisChangedEvent> {
        self.pan_delta((previous_screen - current_screen) / self.scale)
    }

    /// Shifts the view by a delta expressed in the transformed data domain.
    pub fn pan_delta(&mut self, data_delta: f64) -> Option<AxisChangedEvent> {
        if !self.is_pan_enabled || !data_delta.is_finite() {
            return None;
        }

        let pre_min = self.pre_transform(self.clip_minimum) + data_delta;
        let pre_max = self.pre_transform(self.clip_maximum) + data_delta;
        let mut new_minimum = self.post_inverse_transform(pre_min);
        let mut new_maximum = self.post_inverse_transform(pre_max);

        // Slide the window back inside the absolute bounds without resizing it.
        if new_minimum < self.absolute_minimum {
            let shift = self.absolute_minimum - new_minimum;
            new_minimum += shift;
            new_maximum += shift;
        }
        if new_maximum > self.absolute_maximum {
            let shift = new_maximum - self.absolute_maximum;
            new_minimum -= shift;
            new_maximum -= shift;
        }

        Some(self.apply_view(new_minimum, new_maximum, AxisChangeType::Pan))
    }

    /// Scales the view around a data-space center value. `factor > 1` zooms
    /// in. Returns `None` when zooming is disabled.
    pub fn zoom_at(&mut self, factor: f64, center_value: f64) -> Option<AxisChangedEvent> {
        if !self.is_zoom_enabled || !factor.is_finite() || factor <= 0.0 {
            return None;
        }

        let pre_center = self.pre_transform(center_value);
        let pre_min = pre_center + (self.pre_transform(self.clip_minimum) - pre_center) / factor;
        let pre_max = pre_center + (self.pre_transform(self.clip_maximum) - pre_center) / factor;
        let new_minimum = self
            .post_inverse_transform(pre_min)
            .max(self.absolute_minimum);
        let new_maximum = self
            .post_inverse_transform(pre_max)
            .min(self.absolute_maximum);
        if new_minimum >= new_maximum {
            return None;
        }

        Some(self.apply_view(new_minimum, new_maximum, AxisChangeType::Zoom))
    }

    /// Sets the view range directly (marquee zoom).
    pub fn zoom_range(&mut self, new_minimum: f64, new_maximum: f64) -> Option<AxisChangedEvent> {
        if !self.is_zoom_enabled {
            return None;
        }
        let (mut lo, mut hi) = if new_minimum <= new_maximum {
            (new_minimum, new_maximum)
        } else {
            (new_maximum, new_minimum)
        };
        lo = lo.max(self.absolute_minimum);
        hi = hi.min(self.absolute_maximum);
        if !lo.is_finite() || !hi.is_finite() || lo >= hi {
            return None;
        }
        Some(self.apply_view(lo, hi, AxisChangeType::Zoom))
    }

    /// Drops the pan/zoom view override and re-resolves the data range.
    pub fn reset(&mut self) -> AxisChangedEvent {
        let old_minimum = self.actual_minimum;
        let old_maximum = self.actual_maximum;
        self.view_minimum = f64::NAN;
        self.view_maximum = f64::NAN;
        self.update_actual_max_min();
        if self.screen_minimum.is_finite() && self.screen_maximum.is_finite() {
            let _ = self.update_transform(self.screen_minimum, self.screen_maximum);
        }
        AxisChangedEvent {
            axis_key: self.key.clone(),
            change_type: AxisChangeType::Reset,
            delta_minimum: self.actual_minimum - old_minimum,
            delta_maximum: self.actual_maximum - old_maximum,
        }
    }
}
