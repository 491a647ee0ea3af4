//! Coin domain — single-coin detail and its derived figures.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod state;
pub mod wire;

use crate::currency::CurrencySelection;
use crate::shared::CoinId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub use state::{CoinDetailViewModel, DetailFigures};

/// Shown when a coin has no English description.
pub const NO_DESCRIPTION: &str = "Description not available";

/// Detail for one coin. Prices are kept for every currency CoinGecko returns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinDetail {
    pub id: CoinId,
    pub symbol: String,
    pub name: String,
    /// Large image URL, empty when absent.
    pub image: String,
    /// English description, may contain inline HTML.
    pub description: String,
    pub market_cap_rank: Option<u32>,
    pub price_change_percentage_24h: f64,
    /// Keyed by lower-case currency code.
    pub current_price: HashMap<String, f64>,
    /// Keyed by lower-case currency code.
    pub market_cap: HashMap<String, f64>,
}

impl CoinDetail {
    /// Price in `currency`, `0` when CoinGecko has none.
    pub fn current_price_in(&self, currency: &CurrencySelection) -> f64 {
        self.current_price
            .get(&currency.api_code())
            .copied()
            .unwrap_or_default()
    }

    /// Market cap in `currency`, `0` when CoinGecko has none.
    pub fn market_cap_in(&self, currency: &CurrencySelection) -> f64 {
        self.market_cap
            .get(&currency.api_code())
            .copied()
            .unwrap_or_default()
    }

    /// First sentence of the description.
    pub fn summary(&self) -> &str {
        let first = self.description.split(". ").next().unwrap_or_default();
        if first.trim().is_empty() {
            NO_DESCRIPTION
        } else {
            first
        }
    }
}
