use serde::{Deserialize, Serialize};

use crate::core::{ScreenPoint, Thickness};

/// Axis-aligned rectangle in screen space.
///
/// Width and height are kept non-negative by every constructor; callers can
/// therefore rely on `left <= right` and `top <= bottom`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotRect {
    #[must_use]
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        let (left, width) = if width < 0.0 {
            (left + width, -width)
        } else {
            (left, width)
        };
        let (top, height) = if height < 0.0 {
            (top + height, -height)
        } else {
            (top, height)
        };
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Builds a normalized rectangle from two arbitrary corner points.
    #[must_use]
    pub fn from_screen_points(a: ScreenPoint, b: ScreenPoint) -> Self {
        Self::new(a.x.min(b.x), a.y.min(b.y), (b.x - a.x).abs(), (b.y - a.y).abs())
    }

    #[must_use]
    pub fn right(self) -> f64 {
        self.left + self.width
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        self.top + self.height
    }

    #[must_use]
    pub fn center(self) -> ScreenPoint {
        ScreenPoint::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    #[must_use]
    pub fn top_left(self) -> ScreenPoint {
        ScreenPoint::new(self.left, self.top)
    }

    #[must_use]
    pub fn top_right(self) -> ScreenPoint {
        ScreenPoint::new(self.right(), self.top)
    }

    #[must_use]
    pub fn bottom_left(self) -> ScreenPoint {
        ScreenPoint::new(self.left, self.bottom())
    }

    #[must_use]
    pub fn bottom_right(self) -> ScreenPoint {
        ScreenPoint::new(self.right(), self.bottom())
    }

    #[must_use]
    pub fn contains_point(self, point: ScreenPoint) -> bool {
        point.x >= self.left
            && point.x <= self.right()
            && point.y >= self.top
            && point.y <= self.bottom()
    }

    /// Returns the overlapping region with `other`, or `None` when disjoint.
    #[must_use]
    pub fn intersect(self, other: Self) -> Option<Self> {
        let left = self.left.max(other.left);
        let top = self.top.max(other.top);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        if right < left || bottom < top {
            return None;
        }
        Some(Self::new(left, top, right - left, bottom - top))
    }

    /// Clamps a point to the rectangle bounds.
    #[must_use]
    pub fn clip_point(self, point: ScreenPoint) -> ScreenPoint {
        ScreenPoint::new(
            point.x.clamp(self.left, self.right()),
            point.y.clamp(self.top, self.bottom()),
        )
    }

    /// Grows the rectangle outward by the given edge widths.
    #[must_use]
    pub fn inflate(self, thickness: Thickness) -> Self {
        Self::new(
            self.left - thickness.left,
            self.top - thickness.top,
            self.width + thickness.left + thickness.right,
            self.height + thickness.top + thickness.bottom,
        )
    }

    /// Shrinks the rectangle inward by the given edge widths.
    #[must_use]
    pub fn deflate(self, thickness: Thickness) -> Self {
        Self::new(
            self.left + thickness.left,
            self.top + thickness.top,
            (self.width - thickness.left - thickness.right).max(0.0),
            (self.height - thickness.top - thickness.bottom).max(0.0),
        )
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}
