//! Tick interval and tick value computation shared by all axis kinds.

use crate::error::{PlotError, PlotResult};

/// Safety bound against pathological tiny steps.
pub const DEFAULT_MAX_TICKS: usize = 1000;

/// Produces tick values between `from` and `to` at multiples of `step`.
///
/// The sequence is ascending when `to >= from` and descending otherwise. The
/// first value is the smallest (largest, when descending) multiple of `step`
/// inside the range, with an epsilon fudge of `step * 1e-3` so floating-point
/// boundary values are not missed. `to` is included when within epsilon.
/// Values within `f64::EPSILON` of zero snap to exactly `0.0`.
pub fn create_tick_values(from: f64, to: f64, step: f64) -> PlotResult<Vec<f64>> {
    create_tick_values_capped(from, to, step, DEFAULT_MAX_TICKS)
}

/// As `create_tick_values` with an explicit cap on the number of ticks.
pub fn create_tick_values_capped(
    from: f64,
    to: f64,
    step: f64,
    max_ticks: usize,
) -> PlotResult<Vec<f64>> {
    if !step.is_finite() || step <= 0.0 {
        return Err(PlotError::InvalidTickStep(step));
    }

    let (lo, hi) = if from <= to { (from, to) } else { (to, from) };
    let epsilon = step * 1e-3;

    let mut values = Vec::new();
    let start_index = ((lo - epsilon) / step).ceil();
    let mut index = start_index;
    while values.len() < max_ticks {
        let mut value = index * step;
        if value > hi + epsilon {
            break;
        }
        if value.abs() < f64::EPSILON {
            value = 0.0;
        }
        values.push(value);
        index += 1.0;
    }

    if to < from {
        values.reverse();
    }
    Ok(values)
}

/// Chooses a "nice" major interval (`1`, `2` or `5` times a power of ten) so
/// that ticks land roughly every `interval_size_px` pixels.
#[must_use]
pub fn calculate_major_interval(span: f64, available_size_px: f64, interval_size_px: f64) -> f64 {
    if !span.is_finite() || span <= 0.0 {
        return 1.0;
    }
    let max_count = (available_size_px / interval_size_px).max(2.0);
    let raw = span / max_count;
    let magnitude = 10f64.powf(raw.log10().floor());
    for multiple in [1.0, 2.0, 5.0] {
        if magnitude * multiple >= raw {
            return magnitude * multiple;
        }
    }
    magnitude * 10.0
}

/// Minor interval heuristic keeping 4 or 5 minor divisions per major division.
///
/// Major intervals of the form `2 * 10^k` split into quarters; everything
/// else splits into fifths.
#[must_use]
pub fn calculate_minor_interval(major_interval: f64) -> f64 {
    let log_mod = major_interval.log10().rem_euclid(1.0);
    if (log_mod - 2f64.log10()).abs() < 1e-10 {
        major_interval / 4.0
    } else {
        major_interval / 5.0
    }
}

/// Removes minor ticks that coincide with a major tick.
///
/// Both arrays must share the same direction (ascending or descending).
/// Coincidence uses a local per-pair epsilon, `|minor[i] - minor[i-1]| * 1e-3`,
/// because floating-point tick spacing can vary slightly across the range.
/// Single forward sweep with a moving pointer into the major array.
#[must_use]
pub fn filter_redundant_minor_ticks(major_ticks: &[f64], minor_ticks: &[f64]) -> Vec<f64> {
    if major_ticks.is_empty() || minor_ticks.is_empty() {
        return minor_ticks.to_vec();
    }

    let sign = if minor_ticks.len() > 1 && minor_ticks[1] < minor_ticks[0] {
        -1.0
    } else {
        1.0
    };

    let mut result = Vec::with_capacity(minor_ticks.len());
    let mut major_index = 0;
    for (i, &tick) in minor_ticks.iter().enumerate() {
        let epsilon = if i > 0 {
            (tick - minor_ticks[i - 1]).abs() * 1e-3
        } else if minor_ticks.len() > 1 {
            (minor_ticks[1] - minor_ticks[0]).abs() * 1e-3
        } else {
            tick.abs() * 1e-3
        };

        while major_index < major_ticks.len()
            && sign * (major_ticks[major_index] - tick) < -epsilon
        {
            major_index += 1;
        }
        if major_index < major_ticks.len() && (major_ticks[major_index] - tick).abs() <= epsilon {
            continue;
        }
        result.push(tick);
    }
    result
}
