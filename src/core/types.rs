use std::ops::{Add, Mul, Neg, Sub};

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::primitives::{datetime_to_unix_seconds, decimal_to_f64};
use crate::error::PlotResult;

/// Point in data space.
///
/// Coordinates may be NaN; an undefined point marks a gap in a series and is
/// excluded from range computation and geometry output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    #[serde(with = "crate::core::primitives::serde_nan")]
    pub x: f64,
    #[serde(with = "crate::core::primitives::serde_nan")]
    pub y: f64,
}

impl DataPoint {
    /// Sentinel point used to encode gaps.
    pub const UNDEFINED: Self = Self {
        x: f64::NAN,
        y: f64::NAN,
    };

    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn from_decimal_time(time: DateTime<Utc>, value: Decimal) -> PlotResult<Self> {
        Ok(Self {
            x: datetime_to_unix_seconds(time),
            y: decimal_to_f64(value, "value")?,
        })
    }

    /// Returns `true` when both coordinates are non-NaN.
    #[must_use]
    pub fn is_defined(self) -> bool {
        !self.x.is_nan() && !self.y.is_nan()
    }

    /// Returns `true` when both coordinates are finite.
    #[must_use]
    pub fn is_valid(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Sub for DataPoint {
    type Output = DataVector;

    fn sub(self, rhs: Self) -> DataVector {
        DataVector::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Add<DataVector> for DataPoint {
    type Output = DataPoint;

    fn add(self, rhs: DataVector) -> DataPoint {
        DataPoint::new(self.x + rhs.x, self.y + rhs.y)
    }
}

/// Directional offset in data space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataVector {
    pub x: f64,
    pub y: f64,
}

impl DataVector {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn length(self) -> f64 {
        self.length_squared().sqrt()
    }

    #[must_use]
    pub fn length_squared(self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// Returns a unit-length copy, or the zero vector unchanged.
    #[must_use]
    pub fn normalized(self) -> Self {
        let len = self.length();
        if len > 0.0 {
            Self::new(self.x / len, self.y / len)
        } else {
            self
        }
    }
}

impl Neg for DataVector {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

/// Point in device/screen space (pixels).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn distance_to(self, other: Self) -> f64 {
        self.distance_to_squared(other).sqrt()
    }

    #[must_use]
    pub fn distance_to_squared(self, other: Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Sub for ScreenPoint {
    type Output = ScreenVector;

    fn sub(self, rhs: Self) -> ScreenVector {
        ScreenVector::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Add<ScreenVector> for ScreenPoint {
    type Output = ScreenPoint;

    fn add(self, rhs: ScreenVector) -> ScreenPoint {
        ScreenPoint::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub<ScreenVector> for ScreenPoint {
    type Output = ScreenPoint;

    fn sub(self, rhs: ScreenVector) -> ScreenPoint {
        ScreenPoint::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Directional offset in screen space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenVector {
    pub x: f64,
    pub y: f64,
}

impl ScreenVector {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn length(self) -> f64 {
        self.length_squared().sqrt()
    }

    #[must_use]
    pub fn length_squared(self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// Returns a unit-length copy, or the zero vector unchanged.
    #[must_use]
    pub fn normalized(self) -> Self {
        let len = self.length();
        if len > 0.0 {
            Self::new(self.x / len, self.y / len)
        } else {
            self
        }
    }
}

impl Mul<f64> for ScreenVector {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl Neg for ScreenVector {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

/// Edge widths used to inflate or deflate rectangles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Thickness {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Thickness {
    #[must_use]
    pub const fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    #[must_use]
    pub const fn uniform(width: f64) -> Self {
        Self::new(width, width, width, width)
    }
}
