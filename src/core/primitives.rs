use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{PlotError, PlotResult};

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> PlotResult<f64> {
    value
        .to_f64()
        .ok_or_else(|| PlotError::InvalidData(format!("{field_name} cannot be represented as f64")))
}

#[must_use]
pub fn datetime_to_unix_seconds(time: DateTime<Utc>) -> f64 {
    time.timestamp_millis() as f64 / 1000.0
}

#[must_use]
pub fn unix_seconds_to_datetime(seconds: f64) -> Option<DateTime<Utc>> {
    if !seconds.is_finite() {
        return None;
    }
    DateTime::from_timestamp_millis((seconds * 1000.0).round() as i64)
}

/// JSON-safe (de)serialization of NaN-capable coordinates.
///
/// JSON has no NaN literal; sentinel NaN values (auto ranges, gap points)
/// round-trip as `null` instead of failing the write.
pub mod serde_nan {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_finite() {
            serializer.serialize_some(value)
        } else {
            serializer.serialize_none()
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
    }
}

/// As `serde_nan`, for heat-map cell grids.
pub mod serde_nan_grid {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(grid: &[Vec<f64>], serializer: S) -> Result<S::Ok, S::Error> {
        let shadow: Vec<Vec<Option<f64>>> = grid
            .iter()
            .map(|column| {
                column
                    .iter()
                    .map(|&value| value.is_finite().then_some(value))
                    .collect()
            })
            .collect();
        shadow.serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Vec<Vec<f64>>, D::Error> {
        let shadow = Vec::<Vec<Option<f64>>>::deserialize(deserializer)?;
        Ok(shadow
            .into_iter()
            .map(|column| {
                column
                    .into_iter()
                    .map(|value| value.unwrap_or(f64::NAN))
                    .collect()
            })
            .collect())
    }
}
