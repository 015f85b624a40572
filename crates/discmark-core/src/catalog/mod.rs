//! Discogs catalog client: fetches release/master metadata and maps it to
//! the common record shape used for export.

mod client;
mod model;

pub use client::{CatalogClient, ClientOptions, DEFAULT_API_BASE, DEFAULT_USER_AGENT};
pub use model::{CatalogPayload, CatalogRecord, ExportRow, CSV_HEADER};
