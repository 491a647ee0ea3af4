//! Shared newtypes and utilities used across all domain modules.
//!
//! These types are serialization-transparent: they serialize/deserialize identically
//! to the raw format the backend sends, so they can be used directly in wire types
//! without conversion overhead.

pub mod fmt;
pub mod load;
pub mod serde_util;

pub use load::{LoadStatus, Pending, RequestSeq, RequestTicket};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

// ─── CoinId ──────────────────────────────────────────────────────────────────

/// Newtype for CoinGecko coin identifiers (e.g. `"bitcoin"`, `"wrapped-steth"`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct CoinId(String);

impl CoinId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CoinId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CoinId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for CoinId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl FromStr for CoinId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(CoinId(s.to_string()))
    }
}

impl Serialize for CoinId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for CoinId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(CoinId(s))
    }
}

// ─── DayRange ────────────────────────────────────────────────────────────────

/// Trailing window, in days, for a historical price series.
///
/// Always at least one day. Serializes as the bare integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct DayRange(u32);

impl DayRange {
    pub const DAY: DayRange = DayRange(1);
    pub const MONTH: DayRange = DayRange(30);
    pub const QUARTER: DayRange = DayRange(90);
    pub const YEAR: DayRange = DayRange(365);

    /// The ranges offered as chart buttons, in display order.
    pub const PRESETS: [DayRange; 4] = [Self::DAY, Self::MONTH, Self::QUARTER, Self::YEAR];

    /// Returns `None` for zero.
    pub fn new(days: u32) -> Option<Self> {
        if days == 0 {
            None
        } else {
            Some(Self(days))
        }
    }

    pub fn days(&self) -> u32 {
        self.0
    }

    /// Whether the series covers a single day (labels are times, not dates).
    pub fn is_intraday(&self) -> bool {
        self.0 == 1
    }

    /// Button caption for the preset ranges; other ranges read "`N` Days".
    pub fn label(&self) -> String {
        match self.0 {
            1 => "24 Hours".to_string(),
            90 => "3 Months".to_string(),
            365 => "1 Year".to_string(),
            n => format!("{} Days", n),
        }
    }
}

impl Default for DayRange {
    fn default() -> Self {
        Self::DAY
    }
}

impl std::fmt::Display for DayRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u32> for DayRange {
    type Error = String;

    fn try_from(days: u32) -> Result<Self, Self::Error> {
        DayRange::new(days).ok_or_else(|| "day range must be at least 1".to_string())
    }
}

impl From<DayRange> for u32 {
    fn from(range: DayRange) -> Self {
        range.0
    }
}
