//! Retry and backoff policy.
//!
//! This module encapsulates error classification (throttling, server errors,
//! connection failures) and exponential backoff decisions so the catalog
//! client and any future callers share a consistent policy.

mod classify;
mod error;
mod policy;
mod run;

pub use classify::{classify, classify_http_status, classify_transport_error};
pub use error::FetchError;
pub use policy::{ErrorKind, RetryDecision, RetryPolicy};
pub use run::run_with_retry;
