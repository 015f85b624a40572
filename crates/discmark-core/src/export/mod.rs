//! Folder export pipeline: collect qualifying URLs, fetch metadata with a
//! bounded worker pool, encode the successful rows as CSV, save the blob.

mod encode;

pub use encode::{encode_csv, CSV_MEDIA_TYPE, UTF8_BOM};

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::batch::{run_bounded, CATALOG_CONCURRENCY};
use crate::bookmarks::{collect_qualifying_urls, BookmarkNode};
use crate::catalog::{CatalogClient, ExportRow};

/// Base filename when neither a user name nor a folder title is usable.
const DEFAULT_BASENAME: &str = "discogs_records";

/// Result of exporting one folder.
#[derive(Debug, Clone)]
pub struct ExportOutcome {
    /// Encoded CSV blob (BOM + header + rows).
    pub csv: Vec<u8>,
    /// Distinct qualifying URLs found in the folder.
    pub qualifying: usize,
    /// Rows actually written (successful fetches).
    pub exported: usize,
}

impl ExportOutcome {
    /// Items that qualified but could not be fetched.
    pub fn failed(&self) -> usize {
        self.qualifying - self.exported
    }
}

/// Exports `folder` (recursively or direct children only) to CSV bytes.
///
/// Per-item fetch failures are dropped from the output; the export itself
/// only fails if encoding does.
pub async fn export_folder(
    client: &CatalogClient,
    folder: &BookmarkNode,
    recursive: bool,
) -> Result<ExportOutcome> {
    let urls = collect_qualifying_urls(folder, recursive);
    let qualifying = urls.len();
    tracing::info!(
        folder = folder.title(),
        recursive,
        qualifying,
        "exporting folder"
    );

    let client = client.clone();
    let results = run_bounded(urls, CATALOG_CONCURRENCY, move |url: String| {
        let client = client.clone();
        async move {
            let record = client.fetch_url(&url).await.map_err(|e| {
                tracing::warn!(url = %url, "fetch failed: {}", e);
                e
            })?;
            Ok::<_, crate::retry::FetchError>(ExportRow::from(record))
        }
    })
    .await;

    let rows: Vec<ExportRow> = results.into_iter().flatten().collect();
    let exported = rows.len();
    let csv = encode_csv(&rows)?;
    tracing::info!(qualifying, exported, "export finished");

    Ok(ExportOutcome {
        csv,
        qualifying,
        exported,
    })
}

/// Filename for the saved CSV: the trimmed user name if non-empty, else the
/// folder title, else a default; `.csv` appended unless already present.
pub fn suggest_filename(user_name: Option<&str>, folder_title: &str) -> String {
    let base = user_name
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .or_else(|| Some(folder_title.trim()).filter(|s| !s.is_empty()))
        .unwrap_or(DEFAULT_BASENAME);
    if base.ends_with(".csv") {
        base.to_string()
    } else {
        format!("{}.csv", base)
    }
}

/// Writes `bytes` to `dir/filename`, creating `dir` if needed.
///
/// Only the last component of `filename` is used, so the file always lands
/// directly inside `dir`.
pub fn save_csv(dir: &Path, filename: &str, bytes: &[u8]) -> Result<PathBuf> {
    let name = Path::new(filename)
        .file_name()
        .with_context(|| format!("invalid output file name: {filename:?}"))?;
    std::fs::create_dir_all(dir)
        .with_context(|| format!("create output dir: {}", dir.display()))?;
    let path = dir.join(name);
    std::fs::write(&path, bytes).with_context(|| format!("write CSV: {}", path.display()))?;
    tracing::info!("saved {} bytes to {}", bytes.len(), path.display());
    Ok(path)
}
