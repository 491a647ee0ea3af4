//! HTTP layer — endpoint builders, the `Transport` seam, and `MarketHttp`
//! with retry policies.

pub mod client;
pub mod gateway;
pub mod retry;
pub mod transport;

pub use client::MarketHttp;
pub use gateway::{Gateway, Method, Request};
pub use retry::{RetryConfig, RetryPolicy};
pub use transport::Transport;
