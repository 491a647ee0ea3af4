//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs` — Rich domain types and display formatting
//! - `wire.rs` — Raw serde structs matching API responses
//! - `convert.rs` — `From` conversions from wire types
//! - `state.rs` — View-models with begin/complete update methods
//! - `client.rs` — Sub-client with HTTP methods and async load drivers

pub mod coin;
pub mod market;
pub mod price_history;
