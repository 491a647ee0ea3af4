//! Currency selection — the fixed symbol table and the shared context.
//!
//! There is exactly one active [`CurrencySelection`] per [`CurrencyContext`].
//! View-models never hold the context itself; they receive a read-only
//! [`CurrencyWatch`] at construction and re-fetch when it changes.

pub mod context;

pub use context::{CurrencyChanges, CurrencyContext, CurrencyWatch};

use crate::error::CurrencyError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported currency codes and their display symbols.
pub const SYMBOLS: &[(&str, &str)] = &[
    ("USD", "$"),
    ("INR", "₹"),
    ("EUR", "€"),
    ("GBP", "£"),
    ("JPY", "¥"),
    ("AUD", "A$"),
    ("CAD", "C$"),
];

/// Display symbol for a currency code (case-insensitive).
pub fn symbol_of(code: &str) -> Option<&'static str> {
    SYMBOLS
        .iter()
        .find(|(c, _)| c.eq_ignore_ascii_case(code))
        .map(|(_, s)| *s)
}

/// The active currency: an upper-case code and the symbol derived from it.
///
/// Only constructible through the symbol table, so `symbol` always matches
/// `code`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct CurrencySelection {
    code: &'static str,
    symbol: &'static str,
}

impl CurrencySelection {
    pub fn new(code: &str) -> Result<Self, CurrencyError> {
        SYMBOLS
            .iter()
            .find(|(c, _)| c.eq_ignore_ascii_case(code))
            .map(|&(code, symbol)| Self { code, symbol })
            .ok_or_else(|| CurrencyError::InvalidCurrency(code.to_string()))
    }

    /// Upper-case code, e.g. `"USD"`.
    pub fn code(&self) -> &'static str {
        self.code
    }

    pub fn symbol(&self) -> &'static str {
        self.symbol
    }

    /// Lower-case code, as used in query strings and CoinGecko price maps.
    pub fn api_code(&self) -> String {
        self.code.to_ascii_lowercase()
    }
}

impl Default for CurrencySelection {
    fn default() -> Self {
        // USD is the first table entry.
        Self {
            code: SYMBOLS[0].0,
            symbol: SYMBOLS[0].1,
        }
    }
}

impl fmt::Display for CurrencySelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code)
    }
}

impl<'de> Deserialize<'de> for CurrencySelection {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            code: String,
        }
        let raw = Raw::deserialize(deserializer)?;
        CurrencySelection::new(&raw.code).map_err(serde::de::Error::custom)
    }
}
