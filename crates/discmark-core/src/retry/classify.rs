//! Classify HTTP status and transport errors into retry policy error kinds.

use super::error::FetchError;
use super::policy::ErrorKind;

/// Classify an HTTP status code for retry decisions.
pub fn classify_http_status(code: u16) -> ErrorKind {
    match code {
        429 => ErrorKind::Throttled,
        500..=599 => ErrorKind::Http5xx(code),
        _ => ErrorKind::Other,
    }
}

/// Classify a transport error for retry decisions.
pub fn classify_transport_error(e: &reqwest::Error) -> ErrorKind {
    if e.is_connect() || e.is_timeout() || e.is_request() {
        return ErrorKind::Connection;
    }
    ErrorKind::Other
}

/// Classify a fetch error into an ErrorKind.
pub fn classify(e: &FetchError) -> ErrorKind {
    match e {
        FetchError::Network(re) => classify_transport_error(re),
        FetchError::Http { status } => classify_http_status(*status),
        FetchError::Decode(_) | FetchError::Unsupported(_) => ErrorKind::Other,
    }
}
