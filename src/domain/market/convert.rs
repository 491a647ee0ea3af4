//! Conversion: CoinMarketResponse → CoinSummary.

use super::wire::CoinMarketResponse;
use super::CoinSummary;

impl From<CoinMarketResponse> for CoinSummary {
    fn from(r: CoinMarketResponse) -> Self {
        Self {
            id: r.id,
            symbol: r.symbol,
            name: r.name,
            image: r.image,
            current_price: r.current_price.unwrap_or_default(),
            price_change_percentage_24h: r.price_change_percentage_24h.unwrap_or_default(),
            market_cap: r.market_cap.unwrap_or_default(),
            market_cap_rank: r.market_cap_rank,
        }
    }
}
