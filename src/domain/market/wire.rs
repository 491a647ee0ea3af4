//! Wire types for `/coins/markets` responses (REST).

use crate::shared::serde_util::null_default;
use crate::shared::CoinId;
use serde::{Deserialize, Serialize};

/// One row of `/coins/markets`.
///
/// Numeric fields are `null` for coins CoinGecko has no market data for.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CoinMarketResponse {
    pub id: CoinId,
    pub symbol: String,
    pub name: String,
    #[serde(default, deserialize_with = "null_default::deserialize")]
    pub image: String,
    #[serde(default)]
    pub current_price: Option<f64>,
    #[serde(default)]
    pub price_change_percentage_24h: Option<f64>,
    #[serde(default)]
    pub market_cap: Option<f64>,
    #[serde(default)]
    pub market_cap_rank: Option<u32>,
}

/// Full `/coins/markets` response body.
pub type CoinMarketsResponse = Vec<CoinMarketResponse>;
