//! Network and endpoint constants for the CoinGecko v3 API.

/// Default REST API base URL.
pub const DEFAULT_API_URL: &str = "https://api.coingecko.com/api/v3";

/// Currency selected when nothing else is configured.
pub const DEFAULT_CURRENCY: &str = "USD";

/// Page size requested from `/coins/markets` for the full coin list.
pub const LIST_PAGE_SIZE: u32 = 250;

/// Page size requested from `/coins/markets` for the trending carousel.
pub const TRENDING_PAGE_SIZE: u32 = 10;

/// Env var overriding the API base URL (see `CoinboardClientBuilder::from_env`).
pub const API_URL_ENV: &str = "COINBOARD_API_URL";

/// Env var overriding the initial currency code.
pub const CURRENCY_ENV: &str = "COINBOARD_CURRENCY";
