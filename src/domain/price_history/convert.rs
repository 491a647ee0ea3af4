//! Conversion: MarketChartResponse → ordered PricePoints.

use super::wire::{MarketChartResponse, PriceSample};
use super::PricePoint;

impl From<PriceSample> for PricePoint {
    fn from(s: PriceSample) -> Self {
        Self {
            timestamp_ms: s.timestamp_ms,
            price: s.price,
        }
    }
}

impl MarketChartResponse {
    /// Points ordered by non-decreasing timestamp.
    ///
    /// The sort is stable, so equal timestamps keep their server order.
    pub fn into_points(self) -> Vec<PricePoint> {
        let mut points: Vec<PricePoint> = self.prices.into_iter().map(PricePoint::from).collect();
        if !points.windows(2).all(|w| w[0].timestamp_ms <= w[1].timestamp_ms) {
            points.sort_by_key(|p| p.timestamp_ms);
        }
        points
    }
}
