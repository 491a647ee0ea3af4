//! Custom serde helpers for CoinGecko wire formats.

/// Deserializes `null` as the type's default.
///
/// CoinGecko sends `null` for numbers it has no data for (delisted coins,
/// fresh listings), which should not fail the whole response.
pub mod null_default {
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: Default + Deserialize<'de>,
    {
        Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
    }
}

/// Deserializes a `[timestamp_ms, value]` pair.
///
/// Timestamps arrive as JSON numbers that may carry a fractional part, so they
/// are read as `f64` and truncated to whole milliseconds.
pub mod timestamp_pair {
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<(i64, f64), D::Error>
    where
        D: Deserializer<'de>,
    {
        let (t, v) = <(f64, Option<f64>)>::deserialize(deserializer)?;
        if !t.is_finite() {
            return Err(serde::de::Error::custom(format!("Invalid timestamp: {}", t)));
        }
        Ok((t as i64, v.unwrap_or_default()))
    }
}
