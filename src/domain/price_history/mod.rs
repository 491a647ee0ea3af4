//! Price history domain — chart queries, price points, axis labels.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod label;
pub mod state;
pub mod wire;

use crate::currency::CurrencySelection;
use crate::shared::{CoinId, DayRange};
use serde::{Deserialize, Serialize};

pub use label::{label, LabelZone};
pub use state::ChartViewModel;

/// A single point on the price chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Unix timestamp in milliseconds.
    pub timestamp_ms: i64,
    pub price: f64,
}

/// Identifies exactly one price series.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChartQuery {
    pub coin_id: CoinId,
    pub days: DayRange,
    pub currency: CurrencySelection,
}

impl ChartQuery {
    /// Dataset caption, e.g. `"Price (Past 30 Days) in USD"`.
    pub fn legend(&self) -> String {
        format!("Price (Past {} Days) in {}", self.days, self.currency.code())
    }
}

/// Ready-to-plot series. `labels` and `prices` always have the same length.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub prices: Vec<f64>,
    pub legend: String,
}
