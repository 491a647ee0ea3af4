//! Unified SDK error types.

use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Currency error: {0}")]
    Currency(#[from] CurrencyError),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Empty result: {0}")]
    EmptyResult(String),
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Server error {status}: {body}")]
    ServerError { status: u16, body: String },

    #[error("Rate limited (retry after {retry_after_ms:?}ms)")]
    RateLimited { retry_after_ms: Option<u64> },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Timeout")]
    Timeout,

    #[error("Max retries exceeded after {attempts} attempts: {last_error}")]
    MaxRetriesExceeded { attempts: u32, last_error: String },
}

/// Currency selection errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CurrencyError {
    #[error("Unknown currency code: {0}")]
    InvalidCurrency(String),
}

/// Failure recorded in a view-model's `Failed` status.
///
/// Unlike [`SdkError`] this is `Clone + PartialEq` so it can live inside
/// app-owned state and be compared in tests.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// The request did not complete (transport, status or retry failure).
    #[error("Network failure: {0}")]
    NetworkFailure(String),

    /// The response parsed but carried nothing to show.
    #[error("Empty result")]
    EmptyResult,

    #[error("Invalid currency: {0}")]
    InvalidCurrency(String),

    /// The response body did not match the expected shape.
    #[error("Malformed response: {0}")]
    Malformed(String),
}

impl From<SdkError> for LoadError {
    fn from(err: SdkError) -> Self {
        match err {
            SdkError::Http(e) => LoadError::NetworkFailure(e.to_string()),
            SdkError::Currency(CurrencyError::InvalidCurrency(code)) => {
                LoadError::InvalidCurrency(code)
            }
            SdkError::EmptyResult(_) => LoadError::EmptyResult,
            SdkError::Serde(e) => LoadError::Malformed(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_error_from_http() {
        let err: LoadError = SdkError::Http(HttpError::Timeout).into();
        assert_eq!(err, LoadError::NetworkFailure("Timeout".to_string()));
    }

    #[test]
    fn test_load_error_from_currency() {
        let err: LoadError =
            SdkError::Currency(CurrencyError::InvalidCurrency("XYZ".into())).into();
        assert_eq!(err, LoadError::InvalidCurrency("XYZ".to_string()));
    }

    #[test]
    fn test_load_error_from_serde() {
        let serde_err = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        let err: LoadError = SdkError::Serde(serde_err).into();
        assert!(matches!(err, LoadError::Malformed(_)));
    }
}
