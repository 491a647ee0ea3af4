//! Human-readable number formatting for prices, market caps and ranks.

pub mod num;

pub use num::{fixed, number_with_commas, signed_percent, truncate_millions};
