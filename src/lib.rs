//! # Coinboard
//!
//! View-model layer for a cryptocurrency market dashboard backed by the
//! CoinGecko v3 REST API, for both native and WASM targets.
//!
//! ## Architecture
//!
//! The crate is organized in layers:
//!
//! 1. **Core** — Currency context, domain models, formatting and the
//!    view-models (always available, WASM-safe, no I/O)
//! 2. **HTTP API** — Endpoint builders, the `Transport` seam and `MarketHttp`
//!    with retry policies
//! 3. **High-Level Client** — `CoinboardClient` with nested sub-clients that
//!    drive the view-models
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use coinboard::prelude::*;
//! use async_lock::Mutex;
//!
//! let client = CoinboardClient::builder().currency("INR").build()?;
//!
//! let list = Mutex::new(client.list_view_model());
//! client.markets().refresh(&list).await;
//! list.lock().await.set_search("bit");
//! let rows = list.lock().await.visible_rows();
//!
//! let chart = Mutex::new(client.chart_view_model());
//! client.price_history().load(&chart, "bitcoin".into(), DayRange::MONTH).await;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes, formatting helpers and request sequencing.
pub mod shared;

/// Selected display currency and its change notifications.
pub mod currency;

/// Domain modules (vertical slices): types, wire types, conversions, view-models.
pub mod domain;

/// Unified error types.
pub mod error;

/// API URL and paging constants.
pub mod network;

// ── Layer 2: HTTP API ────────────────────────────────────────────────────────

/// Endpoint builders, transport seam, HTTP client with retry policies.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `CoinboardClient` — the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{CoinId, DayRange, LoadStatus, Pending, RequestTicket};

    // Currency
    pub use crate::currency::{
        symbol_of, CurrencyChanges, CurrencyContext, CurrencySelection, CurrencyWatch,
    };

    // Domain types — market list
    pub use crate::domain::market::{CoinListViewModel, CoinRow, CoinSummary, PAGE_SIZE};

    // Domain types — coin detail
    pub use crate::domain::coin::{CoinDetail, CoinDetailViewModel, DetailFigures};

    // Domain types — price history
    pub use crate::domain::price_history::{
        ChartQuery, ChartSeries, ChartViewModel, LabelZone, PricePoint,
    };

    // Errors
    pub use crate::error::{CurrencyError, HttpError, LoadError, SdkError};

    // Network
    pub use crate::network::{DEFAULT_API_URL, DEFAULT_CURRENCY};

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{
        CoinboardClient, CoinboardClientBuilder, CoinsClient, MarketsClient,
        PriceHistorySubClient,
    };
    #[cfg(feature = "http")]
    pub use crate::http::{Gateway, MarketHttp, Request, RetryConfig, RetryPolicy, Transport};
}
