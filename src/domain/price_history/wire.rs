//! Wire types for `/coins/{id}/market_chart` responses (REST).

use crate::shared::serde_util::timestamp_pair;
use serde::{Deserialize, Deserializer};

/// One `[timestamp_ms, price]` pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceSample {
    pub timestamp_ms: i64,
    pub price: f64,
}

impl<'de> Deserialize<'de> for PriceSample {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let (timestamp_ms, price) = timestamp_pair::deserialize(deserializer)?;
        Ok(Self { timestamp_ms, price })
    }
}

/// `/market_chart` response. Market caps and volumes are not read.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct MarketChartResponse {
    #[serde(default)]
    pub prices: Vec<PriceSample>,
}
