//! Low-level HTTP client — `MarketHttp`.
//!
//! Executes gateway requests with reqwest under the configured retry policy,
//! returning the raw body. Parsing into wire types happens in the
//! high-level client.

use crate::error::HttpError;
use crate::http::gateway::{Method, Request};
use crate::http::retry::RetryPolicy;
use crate::http::transport::Transport;

use async_trait::async_trait;
use reqwest::Client;

/// Reqwest-backed [`Transport`] for the market REST API.
#[derive(Debug, Clone)]
pub struct MarketHttp {
    client: Client,
    retry: RetryPolicy,
}

impl MarketHttp {
    pub fn new(retry: RetryPolicy) -> Result<Self, HttpError> {
        let mut builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        {
            builder = builder
                .timeout(std::time::Duration::from_secs(30))
                .pool_max_idle_per_host(10);
        }

        Ok(Self {
            client: builder.build()?,
            retry,
        })
    }

    pub fn retry_policy(&self) -> &RetryPolicy {
        &self.retry
    }

    async fn do_request(&self, request: &Request) -> Result<String, HttpError> {
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
        };
        tracing::debug!(url = %request.url, "GET");

        let resp = self
            .client
            .request(method, &request.url)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    HttpError::Timeout
                } else {
                    HttpError::Reqwest(e)
                }
            })?;
        let status = resp.status();

        if status.is_success() {
            return Ok(resp.text().await?);
        }

        let retry_after_ms = resp
            .headers()
            .get(reqwest::header::RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(parse_retry_after);
        let status_code = status.as_u16();
        let body_text = resp.text().await.unwrap_or_default();

        Err(status_error(status_code, body_text, retry_after_ms))
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl Transport for MarketHttp {
    async fn execute(&self, request: &Request) -> Result<String, HttpError> {
        self.retry
            .run(&request.url, || self.do_request(request))
            .await
    }
}

/// Map a non-success status to an error.
fn status_error(status: u16, body: String, retry_after_ms: Option<u64>) -> HttpError {
    match status {
        404 => HttpError::NotFound(body),
        429 => HttpError::RateLimited { retry_after_ms },
        400..=499 => HttpError::BadRequest(body),
        _ => HttpError::ServerError { status, body },
    }
}

/// `Retry-After` in delta-seconds. HTTP-date values are ignored.
fn parse_retry_after(value: &str) -> Option<u64> {
    value.trim().parse::<u64>().ok().map(|s| s * 1000)
}
