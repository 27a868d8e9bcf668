use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PlotError, PlotResult};

/// ARGB color with 8-bit channels.
///
/// Two sentinel bit patterns exist alongside ordinary colors: `UNDEFINED`
/// (treated as "no color", suppressing the draw) and `AUTOMATIC` (resolved to
/// a context-provided default at draw time). Both must be checked with
/// `is_undefined`/`is_automatic` rather than channel inspection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub a: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Fully transparent flag value meaning "do not draw".
    pub const UNDEFINED: Self = Self::from_argb(0, 0, 0, 0);

    /// Sentinel meaning "defer to the context default".
    pub const AUTOMATIC: Self = Self::from_argb(0, 0, 0, 1);

    pub const TRANSPARENT: Self = Self::from_argb(0, 255, 255, 255);
    pub const BLACK: Self = Self::from_rgb(0, 0, 0);
    pub const WHITE: Self = Self::from_rgb(255, 255, 255);

    #[must_use]
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { a, r, g, b }
    }

    #[must_use]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_argb(255, r, g, b)
    }

    #[must_use]
    pub fn is_undefined(self) -> bool {
        self == Self::UNDEFINED
    }

    #[must_use]
    pub fn is_automatic(self) -> bool {
        self == Self::AUTOMATIC
    }

    /// Returns `true` when the color participates in drawing.
    #[must_use]
    pub fn is_visible(self) -> bool {
        !self.is_undefined() && self.a > 0
    }

    /// Resolves the `AUTOMATIC` sentinel against a context default.
    #[must_use]
    pub fn get_actual(self, default: Self) -> Self {
        if self.is_automatic() { default } else { self }
    }

    #[must_use]
    pub fn with_alpha(self, a: u8) -> Self {
        Self::from_argb(a, self.r, self.g, self.b)
    }

    /// Linear per-channel interpolation, `t` clamped to `[0, 1]`.
    #[must_use]
    pub fn interpolate(self, other: Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        let lerp = |a: u8, b: u8| -> u8 { (f64::from(a) + (f64::from(b) - f64::from(a)) * t).round() as u8 };
        Self::from_argb(
            lerp(self.a, other.a),
            lerp(self.r, other.r),
            lerp(self.g, other.g),
            lerp(self.b, other.b),
        )
    }

    /// Parses `#RRGGBB`, `#RRGGBBAA`, `#RGB` or `"r,g,b[,a]"`.
    pub fn parse(text: &str) -> PlotResult<Self> {
        let text = text.trim();
        if let Some(hex) = text.strip_prefix('#') {
            return Self::parse_hex(hex);
        }
        Self::parse_components(text)
    }

    fn parse_hex(hex: &str) -> PlotResult<Self> {
        let channel = |s: &str| -> PlotResult<u8> {
            u8::from_str_radix(s, 16)
                .map_err(|_| PlotError::InvalidData(format!("invalid hex color component `{s}`")))
        };
        match hex.len() {
            3 => {
                // Shorthand: each digit doubles, `#fa0` == `#ffaa00`.
                let expand = |s: &str| -> PlotResult<u8> {
                    let v = channel(s)?;
                    Ok(v * 16 + v)
                };
                Ok(Self::from_rgb(
                    expand(&hex[0..1])?,
                    expand(&hex[1..2])?,
                    expand(&hex[2..3])?,
                ))
            }
            6 => Ok(Self::from_rgb(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            8 => Ok(Self::from_argb(
                channel(&hex[6..8])?,
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            _ => Err(PlotError::InvalidData(format!(
                "hex color must have 3, 6 or 8 digits, got `{hex}`"
            ))),
        }
    }

    fn parse_components(text: &str) -> PlotResult<Self> {
        let parts: Vec<&str> = text.split(',').map(str::trim).collect();
        let channel = |s: &str| -> PlotResult<u8> {
            s.parse::<u8>()
                .map_err(|_| PlotError::InvalidData(format!("invalid color component `{s}`")))
        };
        match parts.as_slice() {
            [r, g, b] => Ok(Self::from_rgb(channel(r)?, channel(g)?, channel(b)?)),
            [r, g, b, a] => Ok(Self::from_argb(
                channel(a)?,
                channel(r)?,
                channel(g)?,
                channel(b)?,
            )),
            _ => Err(PlotError::InvalidData(format!(
                "color must be `r,g,b` or `r,g,b,a`, got `{text}`"
            ))),
        }
    }
}

impl FromStr for Color {
    type Err = PlotError;

    fn from_str(s: &str) -> PlotResult<Self> {
        Self::parse(s)
    }
}

/// Ordered color list used by color axes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Palette {
    pub colors: Vec<Color>,
}

impl Palette {
    #[must_use]
    pub fn new(colors: Vec<Color>) -> Self {
        Self { colors }
    }

    /// Builds a palette of `count` colors interpolated through `stops`.
    pub fn interpolated(count: usize, stops: &[Color]) -> PlotResult<Self> {
        if stops.len() < 2 {
            return Err(PlotError::InvalidData(
                "interpolated palette needs at least two stops".to_owned(),
            ));
        }
        if count < 2 {
            return Err(PlotError::InvalidData(
                "interpolated palette needs at least two colors".to_owned(),
            ));
        }

        let mut colors = Vec::with_capacity(count);
        let segments = (stops.len() - 1) as f64;
        for i in 0..count {
            let position = i as f64 / (count - 1) as f64 * segments;
            let index = (position.floor() as usize).min(stops.len() - 2);
            let t = position - index as f64;
            colors.push(stops[index].interpolate(stops[index + 1], t));
        }
        Ok(Self { colors })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}
