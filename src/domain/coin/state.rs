//! Coin detail view-model — app-owned, SDK-provided update logic.

use super::CoinDetail;
use crate::currency::{CurrencySelection, CurrencyWatch};
use crate::error::LoadError;
use crate::shared::fmt;
use crate::shared::{CoinId, LoadStatus, Pending, RequestSeq, RequestTicket};
use serde::Serialize;

/// Formatted figures for the detail panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailFigures {
    /// Rank with separators, `"N/A"` when unranked.
    pub rank: String,
    pub current_price: String,
    /// Truncated millions, suffixed `" M"`.
    pub market_cap: String,
}

/// State behind the coin detail panel.
#[derive(Debug, Clone)]
pub struct CoinDetailViewModel {
    currency: CurrencyWatch,
    detail: Option<CoinDetail>,
    /// Coin and currency of the most recent load, finished or not.
    requested: Option<(CoinId, CurrencySelection)>,
    status: LoadStatus,
    seq: RequestSeq,
}

impl CoinDetailViewModel {
    pub fn new(currency: CurrencyWatch) -> Self {
        Self {
            currency,
            detail: None,
            requested: None,
            status: LoadStatus::Idle,
            seq: RequestSeq::new(),
        }
    }

    /// Start loading `id`. Detail for a different coin is dropped right away.
    pub fn begin_load(&mut self, id: CoinId) -> Pending<CoinId> {
        if self.detail.as_ref().is_some_and(|d| d.id != id) {
            self.detail = None;
        }
        self.requested = Some((id.clone(), self.currency.get()));
        self.status = LoadStatus::Loading;
        Pending {
            ticket: self.seq.issue(),
            query: id,
        }
    }

    /// Apply a load result. Returns `false` if `ticket` is stale.
    pub fn complete_load(
        &mut self,
        ticket: RequestTicket,
        result: Result<CoinDetail, LoadError>,
    ) -> bool {
        if !self.seq.is_current(ticket) {
            tracing::debug!(ticket = ticket.seq(), "Discarding stale coin detail response");
            return false;
        }

        match result {
            Ok(detail) => {
                self.detail = Some(detail);
                self.status = LoadStatus::Ready;
            }
            Err(err) => {
                self.status = LoadStatus::Failed(err);
            }
        }
        true
    }

    /// Whether `id` or the selected currency differ from the last load.
    pub fn needs_reload(&self, id: &CoinId) -> bool {
        match &self.requested {
            Some((requested_id, currency)) => {
                requested_id != id || *currency != self.currency.get()
            }
            None => true,
        }
    }

    /// Coin of the most recent load, finished or not.
    pub fn requested_id(&self) -> Option<&CoinId> {
        self.requested.as_ref().map(|(id, _)| id)
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    pub fn detail(&self) -> Option<&CoinDetail> {
        self.detail.as_ref()
    }

    /// Price in the selected currency, `0` when missing or not loaded.
    pub fn current_price(&self) -> f64 {
        self.detail
            .as_ref()
            .map(|d| d.current_price_in(&self.currency.get()))
            .unwrap_or_default()
    }

    /// Market cap in the selected currency, `0` when missing or not loaded.
    pub fn market_cap(&self) -> f64 {
        self.detail
            .as_ref()
            .map(|d| d.market_cap_in(&self.currency.get()))
            .unwrap_or_default()
    }

    /// Display strings for the panel, `None` until a detail is loaded.
    pub fn figures(&self) -> Option<DetailFigures> {
        let detail = self.detail.as_ref()?;
        let currency = self.currency.get();

        let rank = detail
            .market_cap_rank
            .map(|r| fmt::number_with_commas(&r.to_string()))
            .unwrap_or_else(|| "N/A".to_string());

        let price = fmt::number_with_commas(&detail.current_price_in(&currency).to_string());
        let cap = fmt::number_with_commas(&fmt::truncate_millions(detail.market_cap_in(&currency)));

        Some(DetailFigures {
            rank,
            current_price: format!("{} {}", currency.symbol(), or_zero(price)),
            market_cap: format!("{} {} M", currency.symbol(), or_zero(cap)),
        })
    }
}

fn or_zero(s: String) -> String {
    if s.is_empty() {
        "0".to_string()
    } else {
        s
    }
}
