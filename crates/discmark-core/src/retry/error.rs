//! Per-item fetch error.

use thiserror::Error;

/// Failure fetching one catalog item. All variants are absorbed at the
/// batch-item boundary; none aborts an export.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport failed (connect, DNS, reset) and the retry budget is spent.
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),
    /// Final response had a non-2xx status.
    #[error("HTTP {status}")]
    Http { status: u16 },
    /// 2xx response whose body was not the expected JSON.
    #[error("decode response: {0}")]
    Decode(#[source] reqwest::Error),
    /// URL is not a catalog release/master link.
    #[error("unsupported URL: {0}")]
    Unsupported(String),
}

impl FetchError {
    /// Status of the final HTTP response, if the error came from one.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Http { status } => Some(*status),
            _ => None,
        }
    }
}
