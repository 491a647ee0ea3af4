//! The seam between request building and the network.

use crate::error::HttpError;
use crate::http::gateway::Request;
use async_trait::async_trait;

/// Executes a [`Request`] and returns the raw response body.
///
/// [`MarketHttp`](crate::http::MarketHttp) is the reqwest-backed
/// implementation. Tests and embedders can substitute their own.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: &Request) -> Result<String, HttpError>;
}
