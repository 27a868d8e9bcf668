use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{Axis, DataPoint, ScreenPoint};

/// Shared point storage and derived state for XY series.
///
/// `points` is the raw source list (set directly or projected from an items
/// source); `actual_points` is the cached rendering copy rebuilt by
/// `update_data`. Between renders the core retains `window_start_index` so
/// repeated pans over a large sorted dataset never rescan from index 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct DataSeriesCore {
    pub title: Option<String>,
    pub x_axis_key: Option<String>,
    pub y_axis_key: Option<String>,
    pub points: Vec<DataPoint>,

    #[serde(skip)]
    actual_points: Vec<DataPoint>,
    #[serde(skip)]
    is_x_monotonic: bool,
    #[serde(skip)]
    window_start_index: usize,

    #[serde(with = "crate::core::primitives::serde_nan")]
    min_x: f64,
    #[serde(with = "crate::core::primitives::serde_nan")]
    max_x: f64,
    #[serde(with = "crate::core::primitives::serde_nan")]
    min_y: f64,
    #[serde(with = "crate::core::primitives::serde_nan")]
    max_y: f64,
}

impl DataSeriesCore {
    #[must_use]
    pub fn new() -> Self {
        Self {
            min_x: f64::NAN,
            max_x: f64::NAN,
            min_y: f64::NAN,
            max_y: f64::NAN,
            ..Self::default()
        }
    }

    /// Replaces the source points directly.
    pub fn set_points(&mut self, points: Vec<DataPoint>) {
        self.points = points;
    }

    /// Projects arbitrary items through a mapping into the source points.
    ///
    /// The projection is resolved eagerly at call time; `update_data` then
    /// refreshes the cached arrays from the projected list.
    pub fn set_items<T, F>(&mut self, items: &[T], mapping: F)
    where
        F: Fn(&T) -> DataPoint,
    {
        self.points = items.iter().map(mapping).collect();
    }

    /// Rebuilds the cached point array and monotonicity flag from the source
    /// list. Resets the window cache when the data shape changed.
    pub fn update_data(&mut self) {
        self.actual_points.clear();
        self.actual_points.extend_from_slice(&self.points);

        self.is_x_monotonic = self
            .actual_points
            .windows(2)
            .all(|pair| !(pair[0].x > pair[1].x));
        if self.window_start_index >= self.actual_points.len() {
            self.window_start_index = 0;
        }
        trace!(
            series = self.title.as_deref().unwrap_or("<untitled>"),
            count = self.actual_points.len(),
            monotonic = self.is_x_monotonic,
            "series data updated"
        );
    }

    /// Scans the cached points and records the finite coordinate bounds.
    ///
    /// NaN and non-finite entries are skipped; an all-invalid series keeps
    /// NaN bounds and contributes nothing to axis ranges.
    pub fn update_max_min(&mut self) {
        let mut min_x = f64::NAN;
        let mut max_x = f64::NAN;
        let mut min_y = f64::NAN;
        let mut max_y = f64::NAN;

        for point in &self.actual_points {
            if point.x.is_finite() {
                if min_x.is_nan() || point.x < min_x {
                    min_x = point.x;
                }
                if max_x.is_nan() || point.x > max_x {
                    max_x = point.x;
                }
            }
            if point.y.is_finite() {
                if min_y.is_nan() || point.y < min_y {
                    min_y = point.y;
                }
                if max_y.is_nan() || point.y > max_y {
                    max_y = point.y;
                }
            }
        }

        self.min_x = min_x;
        self.max_x = max_x;
        self.min_y = min_y;
        self.max_y = max_y;
    }

    /// Folds this series' bounds into its axes.
    pub fn update_axis_max_min(&self, x_axis: &mut Axis, y_axis: &mut Axis) {
        x_axis.include(self.min_x);
        x_axis.include(self.max_x);
        y_axis.include(self.min_y);
        y_axis.include(self.max_y);
    }

    #[must_use]
    pub fn actual_points(&self) -> &[DataPoint] {
        &self.actual_points
    }

    #[must_use]
    pub fn bounds(&self) -> (f64, f64, f64, f64) {
        (self.min_x, self.max_x, self.min_y, self.max_y)
    }

    #[must_use]
    pub fn is_x_monotonic(&self) -> bool {
        self.is_x_monotonic
    }

    #[must_use]
    pub fn window_start_index(&self) -> usize {
        self.window_start_index
    }

    /// Advances the persisted window cache to the current clip minimum and
    /// returns the index rendering should start from.
    pub fn advance_window(&mut self, clip_minimum: f64) -> usize {
        if !self.is_x_monotonic {
            return 0;
        }
        self.window_start_index =
            find_window_start_index(&self.actual_points, clip_minimum, self.window_start_index);
        self.window_start_index
    }
}

/// Finds the last index whose X is at or before `target_x`, starting from a
/// cached guess.
///
/// Walks backward linearly when the guess overshoots, then gallops forward,
/// so successive calls with nearby targets cost O(distance moved) rather
/// than O(n).
#[must_use]
pub fn find_window_start_index(points: &[DataPoint], target_x: f64, initial_guess: usize) -> usize {
    if points.is_empty() {
        return 0;
    }

    let mut index = initial_guess.min(points.len() - 1);
    while index > 0 && points[index].x > target_x {
        index -= 1;
    }

    let mut step = 1;
    loop {
        while index + step < points.len() && points[index + step].x <= target_x {
            index += step;
            step *= 2;
        }
        step /= 2;
        if step == 0 {
            break;
        }
    }
    index
}

/// Splits a point run into contiguous valid chunks at each invalid point.
#[must_use]
pub fn split_valid_chunks(points: &[DataPoint]) -> Vec<Vec<DataPoint>> {
    let mut chunks: Vec<Vec<DataPoint>> = Vec::new();
    let mut current: Vec<DataPoint> = Vec::new();
    for &point in points {
        if point.is_valid() {
            current.push(point);
        } else if !current.is_empty() {
            chunks.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}

/// Transforms a data chunk into screen space.
#[must_use]
pub fn project_chunk(chunk: &[DataPoint], x_axis: &Axis, y_axis: &Axis) -> Vec<ScreenPoint> {
    chunk
        .iter()
        .map(|point| x_axis.transform_point(point.x, point.y, y_axis))
        .collect()
}

/// Nearest rendered vertex to a screen point.
///
/// Returns `(index, data point, screen point, squared distance)`.
#[must_use]
pub fn nearest_vertex(
    points: &[DataPoint],
    x_axis: &Axis,
    y_axis: &Axis,
    target: ScreenPoint,
) -> Option<(usize, DataPoint, ScreenPoint, f64)> {
    points
        .iter()
        .enumerate()
        .filter(|(_, point)| point.is_valid())
        .map(|(index, &point)| {
            let screen = x_axis.transform_point(point.x, point.y, y_axis);
            (index, point, screen, screen.distance_to_squared(target))
        })
        .min_by_key(|&(_, _, _, distance_squared)| OrderedFloat(distance_squared))
}

/// Nearest point on any rendered segment, parametrized by `u` in `[0, 1]`
/// and clamped, so the returned index may be fractional (e.g. `1.5` means
/// "halfway between point 1 and point 2").
#[must_use]
pub fn nearest_on_segments(
    points: &[DataPoint],
    x_axis: &Axis,
    y_axis: &Axis,
    target: ScreenPoint,
) -> Option<(f64, DataPoint, ScreenPoint, f64)> {
    let mut best: Option<(f64, DataPoint, ScreenPoint, f64)> = None;

    for (index, pair) in points.windows(2).enumerate() {
        let (p1, p2) = (pair[0], pair[1]);
        if !p1.is_valid() || !p2.is_valid() {
            continue;
        }

        let s1 = x_axis.transform_point(p1.x, p1.y, y_axis);
        let s2 = x_axis.transform_point(p2.x, p2.y, y_axis);
        let segment = s2 - s1;
        let length_squared = segment.length_squared();
        let u = if length_squared > 0.0 {
            (((target - s1).x * segment.x + (target - s1).y * segment.y) / length_squared)
                .clamp(0.0, 1.0)
        } else {
            0.0
        };

        let screen = s1 + segment * u;
        let distance_squared = screen.distance_to_squared(target);
        if best.is_none_or(|(_, _, _, best_distance)| distance_squared < best_distance) {
            let data = DataPoint::new(p1.x + (p2.x - p1.x) * u, p1.y + (p2.y - p1.y) * u);
            best = Some((index as f64 + u, data, screen, distance_squared));
        }
    }
    best
}
