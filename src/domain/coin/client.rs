//! Coins sub-client — single coin detail and the detail view-model driver.

use crate::client::CoinboardClient;
use crate::currency::CurrencyChanges;
use crate::domain::coin::wire::CoinResponse;
use crate::domain::coin::{CoinDetail, CoinDetailViewModel};
use crate::error::{LoadError, SdkError};
use crate::shared::CoinId;
use async_lock::Mutex;
use futures_util::StreamExt;

/// Sub-client for coin detail operations.
pub struct Coins<'a> {
    pub(crate) client: &'a CoinboardClient,
}

impl<'a> Coins<'a> {
    pub async fn get(&self, id: &CoinId) -> Result<CoinDetail, SdkError> {
        let request = self.client.gateway.get_coin(id);
        let resp: CoinResponse = self.client.fetch(&request).await?;
        Ok(resp.into())
    }

    /// Load `id` into `vm`. Failures end in `Failed`, never in `Loading`.
    pub async fn load(&self, vm: &Mutex<CoinDetailViewModel>, id: CoinId) -> bool {
        let pending = vm.lock().await.begin_load(id);
        let result = self
            .get(&pending.query)
            .await
            .map_err(LoadError::from)
            .inspect_err(|e| {
                tracing::warn!(coin = %pending.query, error = %e, "Coin detail load failed")
            });
        vm.lock().await.complete_load(pending.ticket, result)
    }

    /// Reload the coin shown in `vm` on every currency change until
    /// `changes` ends. Does nothing while no coin has been requested.
    pub async fn follow(&self, vm: &Mutex<CoinDetailViewModel>, mut changes: CurrencyChanges) {
        while changes.next().await.is_some() {
            changes.latest();
            let stale = {
                let vm = vm.lock().await;
                vm.requested_id()
                    .filter(|id| vm.needs_reload(id))
                    .cloned()
            };
            if let Some(id) = stale {
                self.load(vm, id).await;
            }
        }
    }
}
