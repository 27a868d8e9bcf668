use serde::{Deserialize, Serialize};

use crate::core::{Axis, AxisPosition, Color, Palette};

/// Palette slot a data value maps to on a color axis.
///
/// A tagged result replaces the numeric sentinel the slot formula would
/// otherwise need for NaN input; `slot_number` preserves the numeric contract
/// (`0` below range, `count + 1` above range, `1..=count` in range) for
/// call sites that index color tables directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaletteSlot {
    /// Below `clip_minimum`, with a dedicated low color configured.
    Below,
    /// In-range 1-based palette slot.
    Index(usize),
    /// Above `clip_maximum`, with a dedicated high color configured.
    Above,
    /// NaN input; resolves to the invalid-number color.
    Invalid,
}

impl PaletteSlot {
    /// Numeric slot value; `None` for `Invalid`.
    #[must_use]
    pub fn slot_number(self, palette_len: usize) -> Option<usize> {
        match self {
            Self::Below => Some(0),
            Self::Index(index) => Some(index),
            Self::Above => Some(palette_len + 1),
            Self::Invalid => None,
        }
    }
}

/// Color axis mapping a linear data range onto a palette.
///
/// Composes a plain linear `Axis` for range resolution with the palette
/// lookup; series reference it by key the same way they reference
/// positional axes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearColorAxis {
    pub axis: Axis,
    pub palette: Palette,
    /// Color for values below the range; `UNDEFINED` clamps into slot 1.
    pub low_color: Color,
    /// Color for values above the range; `UNDEFINED` clamps into the last slot.
    pub high_color: Color,
    /// Color for NaN values.
    pub invalid_color: Color,
}

impl LinearColorAxis {
    #[must_use]
    pub fn new(palette: Palette) -> Self {
        Self {
            axis: Axis::linear(AxisPosition::None),
            palette,
            low_color: Color::UNDEFINED,
            high_color: Color::UNDEFINED,
            invalid_color: Color::UNDEFINED,
        }
    }

    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.axis.key = Some(key.into());
        self
    }

    #[must_use]
    pub fn with_range(mut self, minimum: f64, maximum: f64) -> Self {
        self.axis.minimum = minimum;
        self.axis.maximum = maximum;
        self
    }

    #[must_use]
    pub fn with_low_color(mut self, color: Color) -> Self {
        self.low_color = color;
        self
    }

    #[must_use]
    pub fn with_high_color(mut self, color: Color) -> Self {
        self.high_color = color;
        self
    }

    /// Maps a data value to its palette slot against the current clip range.
    ///
    /// Slot formula: `1 + floor((value - clip_min) / (clip_max - clip_min)
    /// * count)`, clamped to `[1, count]`. Out-of-range values fall into
    /// `Below`/`Above` only when the corresponding edge color is defined.
    #[must_use]
    pub fn palette_index(&self, value: f64) -> PaletteSlot {
        if value.is_nan() {
            return PaletteSlot::Invalid;
        }

        let clip_min = self.axis.clip_minimum();
        let clip_max = self.axis.clip_maximum();
        if value < clip_min && !self.low_color.is_undefined() {
            return PaletteSlot::Below;
        }
        if value > clip_max && !self.high_color.is_undefined() {
            return PaletteSlot::Above;
        }

        let count = self.palette.len();
        let normalized = (value - clip_min) / (clip_max - clip_min);
        let raw = 1 + (normalized * count as f64).floor() as i64;
        PaletteSlot::Index(raw.clamp(1, count as i64) as usize)
    }

    /// Resolves a slot to its drawing color.
    #[must_use]
    pub fn color_for_slot(&self, slot: PaletteSlot) -> Color {
        match slot {
            PaletteSlot::Below => self.low_color,
            PaletteSlot::Above => self.high_color,
            PaletteSlot::Invalid => self.invalid_color,
            PaletteSlot::Index(index) => self
                .palette
                .colors
                .get(index - 1)
                .copied()
                .unwrap_or(Color::UNDEFINED),
        }
    }

    /// Convenience combining `palette_index` and `color_for_slot`.
    #[must_use]
    pub fn color_for_value(&self, value: f64) -> Color {
        self.color_for_slot(self.palette_index(value))
    }
}
