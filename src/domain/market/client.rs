//! Markets sub-client — coin lists and the list view-model driver.

use crate::client::CoinboardClient;
use crate::currency::{CurrencyChanges, CurrencySelection};
use crate::domain::market::wire::CoinMarketsResponse;
use crate::domain::market::{CoinListViewModel, CoinSummary};
use crate::error::{LoadError, SdkError};
use async_lock::Mutex;
use futures_util::StreamExt;

/// Sub-client for market list operations.
pub struct Markets<'a> {
    pub(crate) client: &'a CoinboardClient,
}

impl<'a> Markets<'a> {
    /// Top coins by market cap, in server order.
    ///
    /// An empty body is [`SdkError::EmptyResult`].
    pub async fn list(&self, currency: &CurrencySelection) -> Result<Vec<CoinSummary>, SdkError> {
        let request = self.client.gateway.list_coins(currency);
        let resp: CoinMarketsResponse = self.client.fetch(&request).await?;
        if resp.is_empty() {
            return Err(SdkError::EmptyResult(format!(
                "no coins listed in {}",
                currency.code()
            )));
        }
        Ok(resp.into_iter().map(CoinSummary::from).collect())
    }

    /// Trending coins with their 24h change.
    pub async fn trending(
        &self,
        currency: &CurrencySelection,
    ) -> Result<Vec<CoinSummary>, SdkError> {
        let request = self.client.gateway.trending_coins(currency);
        let resp: CoinMarketsResponse = self.client.fetch(&request).await?;
        Ok(resp.into_iter().map(CoinSummary::from).collect())
    }

    /// Refresh `vm` for its currently selected currency.
    ///
    /// The lock is held only to begin and complete, never across the fetch.
    /// Returns whether the result was applied (`false` when a newer refresh
    /// started meanwhile).
    pub async fn refresh(&self, vm: &Mutex<CoinListViewModel>) -> bool {
        let pending = vm.lock().await.begin_refresh();
        let result = self
            .list(&pending.query)
            .await
            .map_err(LoadError::from)
            .inspect_err(|e| {
                tracing::warn!(currency = pending.query.code(), error = %e, "Coin list load failed")
            });
        vm.lock().await.complete_refresh(pending.ticket, result)
    }

    /// Refresh only if the selected currency changed since the last refresh.
    pub async fn refresh_if_stale(&self, vm: &Mutex<CoinListViewModel>) -> bool {
        if !vm.lock().await.needs_refresh() {
            return false;
        }
        self.refresh(vm).await
    }

    /// Refetch `vm` on every currency change until `changes` ends.
    ///
    /// Bursts of changes are coalesced into one refresh for the latest
    /// selection.
    pub async fn follow(&self, vm: &Mutex<CoinListViewModel>, mut changes: CurrencyChanges) {
        while changes.next().await.is_some() {
            changes.latest();
            self.refresh_if_stale(vm).await;
        }
    }
}
