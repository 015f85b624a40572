//! CLI command handlers, one per file.

mod completions;
mod export;
mod lookup;
mod tree;

pub use completions::run_completions;
pub use export::run_export;
pub use lookup::run_lookup;
pub use tree::run_tree;

use anyhow::Result;
use discmark_core::bookmarks::{self, BookmarkNode};
use discmark_core::config::DiscmarkConfig;
use std::path::{Path, PathBuf};

/// Bookmarks file: flag, then config, then the Chrome default profile.
fn bookmarks_path(cfg: &DiscmarkConfig, flag: Option<&Path>) -> Result<PathBuf> {
    match flag.map(Path::to_path_buf).or_else(|| cfg.bookmarks_file.clone()) {
        Some(p) => Ok(p),
        None => bookmarks::default_bookmarks_path(),
    }
}

fn load_tree(cfg: &DiscmarkConfig, flag: Option<&Path>) -> Result<BookmarkNode> {
    let path = bookmarks_path(cfg, flag)?;
    bookmarks::load_bookmarks(&path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_overrides_config() {
        let cfg = DiscmarkConfig {
            bookmarks_file: Some(PathBuf::from("/cfg/Bookmarks")),
            ..DiscmarkConfig::default()
        };
        assert_eq!(
            bookmarks_path(&cfg, Some(Path::new("/flag/Bookmarks"))).unwrap(),
            PathBuf::from("/flag/Bookmarks")
        );
        assert_eq!(
            bookmarks_path(&cfg, None).unwrap(),
            PathBuf::from("/cfg/Bookmarks")
        );
    }
}
