//! Wire types for `/coins/{id}` responses (REST).

use crate::shared::serde_util::null_default;
use crate::shared::CoinId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ImageResponse {
    #[serde(default)]
    pub thumb: Option<String>,
    #[serde(default)]
    pub small: Option<String>,
    #[serde(default)]
    pub large: Option<String>,
}

/// Localized descriptions. Only English is read.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DescriptionResponse {
    #[serde(default)]
    pub en: Option<String>,
}

/// Per-currency figures, keyed by lower-case currency code.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MarketDataResponse {
    #[serde(default, deserialize_with = "null_default::deserialize")]
    pub current_price: HashMap<String, Option<f64>>,
    #[serde(default, deserialize_with = "null_default::deserialize")]
    pub market_cap: HashMap<String, Option<f64>>,
    #[serde(default)]
    pub price_change_percentage_24h: Option<f64>,
}

/// Full `/coins/{id}` response (fields the dashboard does not read are skipped).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CoinResponse {
    pub id: CoinId,
    pub symbol: String,
    pub name: String,
    #[serde(default, deserialize_with = "null_default::deserialize")]
    pub image: ImageResponse,
    #[serde(default, deserialize_with = "null_default::deserialize")]
    pub description: DescriptionResponse,
    #[serde(default)]
    pub market_cap_rank: Option<u32>,
    #[serde(default, deserialize_with = "null_default::deserialize")]
    pub market_data: MarketDataResponse,
}
