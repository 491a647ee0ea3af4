//! Price history sub-client — market chart queries.

use crate::client::CoinboardClient;
use crate::currency::CurrencyChanges;
use crate::domain::price_history::wire::MarketChartResponse;
use crate::domain::price_history::{ChartQuery, ChartViewModel, PricePoint};
use crate::error::{LoadError, SdkError};
use crate::shared::{CoinId, DayRange};
use async_lock::Mutex;
use futures_util::StreamExt;

/// Sub-client for price history operations.
pub struct PriceHistoryClient<'a> {
    pub(crate) client: &'a CoinboardClient,
}

impl<'a> PriceHistoryClient<'a> {
    /// Points for `query`, ordered by timestamp. An empty series is
    /// [`SdkError::EmptyResult`].
    pub async fn get(&self, query: &ChartQuery) -> Result<Vec<PricePoint>, SdkError> {
        let request = self
            .client
            .gateway
            .get_history(&query.coin_id, query.days, &query.currency);
        let resp: MarketChartResponse = self.client.fetch(&request).await?;
        let points = resp.into_points();
        if points.is_empty() {
            return Err(SdkError::EmptyResult(format!(
                "no price history for {} over {} days",
                query.coin_id, query.days
            )));
        }
        Ok(points)
    }

    /// Load `days` of history for `coin_id` into `vm`.
    ///
    /// Returns `false` when a newer load superseded this one before it
    /// finished; its points are then discarded.
    pub async fn load(&self, vm: &Mutex<ChartViewModel>, coin_id: CoinId, days: DayRange) -> bool {
        let pending = vm.lock().await.begin_load(coin_id, days);
        let result = self
            .get(&pending.query)
            .await
            .map_err(LoadError::from)
            .inspect_err(|e| {
                tracing::warn!(
                    coin = %pending.query.coin_id,
                    days = pending.query.days.days(),
                    error = %e,
                    "Price history load failed"
                )
            });
        vm.lock().await.complete_load(pending.ticket, result)
    }

    /// Reload the chart's current coin and range on every currency change
    /// until `changes` ends.
    pub async fn follow(&self, vm: &Mutex<ChartViewModel>, mut changes: CurrencyChanges) {
        while changes.next().await.is_some() {
            changes.latest();
            let stale = {
                let vm = vm.lock().await;
                vm.requested_query()
                    .filter(|q| vm.needs_reload(&q.coin_id, q.days))
                    .map(|q| (q.coin_id.clone(), q.days))
            };
            if let Some((coin_id, days)) = stale {
                self.load(vm, coin_id, days).await;
            }
        }
    }
}
