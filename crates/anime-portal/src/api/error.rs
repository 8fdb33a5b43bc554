//! Errors raised while talking to the remote catalog.

use reqwest::StatusCode;
use thiserror::Error;

/// A failed catalog request.
///
/// Callers treat every variant the same way: log it and fall back to an empty
/// listing or an error panel. The variants only sharpen the log line.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid endpoint URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("request failed with status {0}")]
    Status(StatusCode),

    #[error("failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid API response: missing data")]
    MissingData,
}
