//! Market domain — the ranked coin list, its search/pagination state and row display.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod state;
pub mod wire;

use crate::currency::CurrencySelection;
use crate::shared::fmt;
use crate::shared::CoinId;
use serde::{Deserialize, Serialize};

pub use state::{page_count, paginate, search, CoinListViewModel, PAGE_SIZE};

// ─── CoinSummary ─────────────────────────────────────────────────────────────

/// One coin as listed in the market table, priced in the requested currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinSummary {
    pub id: CoinId,
    pub symbol: String,
    pub name: String,
    pub image: String,
    pub current_price: f64,
    pub price_change_percentage_24h: f64,
    pub market_cap: f64,
    pub market_cap_rank: Option<u32>,
}

impl CoinSummary {
    /// Case-insensitive substring match on name or ticker symbol.
    ///
    /// `needle` must already be lower-case.
    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.symbol.to_lowercase().contains(needle)
    }

    /// Display values for one table row.
    pub fn row(&self, currency: &CurrencySelection) -> CoinRow {
        CoinRow {
            id: self.id.clone(),
            symbol: self.symbol.to_uppercase(),
            name: self.name.clone(),
            image: self.image.clone(),
            price: format!(
                "{} {}",
                currency.symbol(),
                fmt::number_with_commas(&fmt::fixed(self.current_price, 2))
            ),
            change_24h: fmt::signed_percent(self.price_change_percentage_24h),
            is_gain: self.price_change_percentage_24h > 0.0,
            market_cap: format!(
                "{} {}M",
                currency.symbol(),
                fmt::number_with_commas(&fmt::truncate_millions(self.market_cap))
            ),
        }
    }
}

// ─── CoinRow ─────────────────────────────────────────────────────────────────

/// Formatted table row. Market cap is in truncated millions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoinRow {
    pub id: CoinId,
    pub symbol: String,
    pub name: String,
    pub image: String,
    pub price: String,
    pub change_24h: String,
    pub is_gain: bool,
    pub market_cap: String,
}
