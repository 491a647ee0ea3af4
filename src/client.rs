//! High-level client — `CoinboardClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder, the shared currency context, and the
//! accessor methods.

use crate::currency::{CurrencyContext, CurrencySelection};
use crate::domain::coin::client::Coins;
use crate::domain::coin::CoinDetailViewModel;
use crate::domain::market::client::Markets;
use crate::domain::market::CoinListViewModel;
use crate::domain::price_history::client::PriceHistoryClient;
use crate::domain::price_history::{ChartViewModel, LabelZone};
use crate::error::SdkError;
use crate::http::{Gateway, MarketHttp, Request, RetryPolicy, Transport};
use crate::network;

use chrono::FixedOffset;
use serde::de::DeserializeOwned;
use std::sync::Arc;

// Re-export sub-client types for convenience.
pub use crate::domain::coin::client::Coins as CoinsClient;
pub use crate::domain::market::client::Markets as MarketsClient;
pub use crate::domain::price_history::client::PriceHistoryClient as PriceHistorySubClient;

/// The primary entry point.
///
/// Provides nested sub-client accessors for each domain:
/// `client.markets()`, `client.coins()`, `client.price_history()`.
#[derive(Clone)]
pub struct CoinboardClient {
    pub(crate) transport: Arc<dyn Transport>,
    pub(crate) gateway: Gateway,
    currency: CurrencyContext,
    label_zone: LabelZone,
}

impl CoinboardClient {
    pub fn builder() -> CoinboardClientBuilder {
        CoinboardClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn markets(&self) -> Markets<'_> {
        Markets { client: self }
    }

    pub fn coins(&self) -> Coins<'_> {
        Coins { client: self }
    }

    pub fn price_history(&self) -> PriceHistoryClient<'_> {
        PriceHistoryClient { client: self }
    }

    // ── Currency ─────────────────────────────────────────────────────────

    /// The shared currency selection. Changing it here is observed by every
    /// view-model created from this client.
    pub fn currency(&self) -> &CurrencyContext {
        &self.currency
    }

    pub fn selected_currency(&self) -> CurrencySelection {
        self.currency.get()
    }

    // ── View-models ──────────────────────────────────────────────────────

    pub fn list_view_model(&self) -> CoinListViewModel {
        CoinListViewModel::new(self.currency.watch())
    }

    pub fn detail_view_model(&self) -> CoinDetailViewModel {
        CoinDetailViewModel::new(self.currency.watch())
    }

    pub fn chart_view_model(&self) -> ChartViewModel {
        ChartViewModel::with_zone(self.currency.watch(), self.label_zone)
    }

    // ── Internal ─────────────────────────────────────────────────────────

    pub(crate) async fn fetch<T: DeserializeOwned>(&self, request: &Request) -> Result<T, SdkError> {
        let body = self.transport.execute(request).await?;
        Ok(serde_json::from_str(&body)?)
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct CoinboardClientBuilder {
    base_url: String,
    currency: String,
    retry_policy: RetryPolicy,
    transport: Option<Arc<dyn Transport>>,
    label_zone: LabelZone,
}

impl Default for CoinboardClientBuilder {
    fn default() -> Self {
        Self {
            base_url: network::DEFAULT_API_URL.to_string(),
            currency: network::DEFAULT_CURRENCY.to_string(),
            retry_policy: RetryPolicy::default(),
            transport: None,
            label_zone: LabelZone::Local,
        }
    }
}

impl CoinboardClientBuilder {
    /// Start from `COINBOARD_API_URL` / `COINBOARD_CURRENCY`, falling back
    /// to the defaults for unset or empty variables.
    pub fn from_env() -> Self {
        let mut builder = Self::default();
        if let Some(url) = env_var(network::API_URL_ENV) {
            builder.base_url = url;
        }
        if let Some(code) = env_var(network::CURRENCY_ENV) {
            builder.currency = code;
        }
        builder
    }

    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// Initial currency code. Validated by [`build`](Self::build).
    pub fn currency(mut self, code: &str) -> Self {
        self.currency = code.to_string();
        self
    }

    /// Ignored when a custom transport is supplied.
    pub fn retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.retry_policy = policy;
        self
    }

    /// Replace the reqwest transport, e.g. with a fake in tests.
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Time zone chart labels are rendered in. Defaults to local time.
    pub fn label_zone(mut self, zone: LabelZone) -> Self {
        self.label_zone = zone;
        self
    }

    /// Render chart labels at a fixed UTC offset.
    pub fn label_offset(self, offset: FixedOffset) -> Self {
        self.label_zone(LabelZone::Fixed(offset))
    }

    pub fn build(self) -> Result<CoinboardClient, SdkError> {
        let currency = CurrencyContext::new(&self.currency)?;
        let transport: Arc<dyn Transport> = match self.transport {
            Some(t) => t,
            None => Arc::new(MarketHttp::new(self.retry_policy)?),
        };
        Ok(CoinboardClient {
            transport,
            gateway: Gateway::new(&self.base_url),
            currency,
            label_zone: self.label_zone,
        })
    }
}

fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
