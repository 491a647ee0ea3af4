//! Endpoint builders for the CoinGecko v3 REST API.
//!
//! Pure URL construction, no I/O. Each builder returns a [`Request`] that a
//! [`Transport`](crate::http::Transport) executes.

use crate::currency::CurrencySelection;
use crate::network::{LIST_PAGE_SIZE, TRENDING_PAGE_SIZE};
use crate::shared::{CoinId, DayRange};

/// HTTP method. The market API is read-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
}

/// A fully-built request.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Request {
    pub method: Method,
    pub url: String,
}

impl Request {
    pub fn get(url: String) -> Self {
        Self {
            method: Method::Get,
            url,
        }
    }
}

/// Builds requests against one API base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gateway {
    base_url: String,
}

impl Gateway {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ── Markets ──────────────────────────────────────────────────────────

    /// Top coins by market cap, priced in `currency`.
    pub fn list_coins(&self, currency: &CurrencySelection) -> Request {
        Request::get(format!(
            "{}/coins/markets?vs_currency={}&order=market_cap_desc&per_page={}&page=1&sparkline=false",
            self.base_url,
            currency.api_code(),
            LIST_PAGE_SIZE
        ))
    }

    /// Trending coins for the banner carousel.
    pub fn trending_coins(&self, currency: &CurrencySelection) -> Request {
        Request::get(format!(
            "{}/coins/markets?vs_currency={}&order=gecko_desc&per_page={}&page=1&sparkline=false&price_change_percentage=24h",
            self.base_url,
            currency.api_code(),
            TRENDING_PAGE_SIZE
        ))
    }

    // ── Coins ────────────────────────────────────────────────────────────

    pub fn get_coin(&self, id: &CoinId) -> Request {
        Request::get(format!(
            "{}/coins/{}",
            self.base_url,
            urlencoding::encode(id.as_str())
        ))
    }

    // ── Price History ────────────────────────────────────────────────────

    pub fn get_history(&self, id: &CoinId, days: DayRange, currency: &CurrencySelection) -> Request {
        Request::get(format!(
            "{}/coins/{}/market_chart?vs_currency={}&days={}",
            self.base_url,
            urlencoding::encode(id.as_str()),
            currency.api_code(),
            days.days()
        ))
    }
}

impl Default for Gateway {
    fn default() -> Self {
        Self::new(crate::network::DEFAULT_API_URL)
    }
}
