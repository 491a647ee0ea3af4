//! Conversion: CoinResponse → CoinDetail.

use super::wire::CoinResponse;
use super::CoinDetail;
use std::collections::HashMap;

fn known(figures: HashMap<String, Option<f64>>) -> HashMap<String, f64> {
    figures
        .into_iter()
        .filter_map(|(code, v)| v.map(|v| (code.to_ascii_lowercase(), v)))
        .collect()
}

impl From<CoinResponse> for CoinDetail {
    fn from(r: CoinResponse) -> Self {
        Self {
            id: r.id,
            symbol: r.symbol,
            name: r.name,
            image: r.image.large.unwrap_or_default(),
            description: r.description.en.unwrap_or_default(),
            market_cap_rank: r.market_cap_rank,
            price_change_percentage_24h: r
                .market_data
                .price_change_percentage_24h
                .unwrap_or_default(),
            current_price: known(r.market_data.current_price),
            market_cap: known(r.market_data.market_cap),
        }
    }
}
