//! Bookmark tree: model, loader for Chromium-style `Bookmarks` files, and
//! collection of qualifying catalog URLs.

mod collect;
mod node;
mod parse;

pub use collect::{collect_qualifying_urls, count_qualifying_urls};
pub use node::{BookmarkNode, UNTITLED_FOLDER};

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use parse::ChromeBookmarks;

/// Reads a Chromium-family `Bookmarks` JSON file into a single root folder
/// whose children are the browser's roots (bookmark bar, other, synced).
pub fn load_bookmarks(path: &Path) -> Result<BookmarkNode> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("read bookmarks file: {}", path.display()))?;
    let parsed: ChromeBookmarks = serde_json::from_slice(&bytes)
        .with_context(|| format!("parse bookmarks JSON: {}", path.display()))?;
    let root = parsed.into_tree();
    tracing::debug!(
        path = %path.display(),
        roots = root.children().len(),
        "loaded bookmarks"
    );
    Ok(root)
}

/// Default Chrome profile bookmarks file under the XDG config home.
pub fn default_bookmarks_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::new()?;
    Ok(xdg_dirs
        .get_config_home()
        .join("google-chrome")
        .join("Default")
        .join("Bookmarks"))
}
