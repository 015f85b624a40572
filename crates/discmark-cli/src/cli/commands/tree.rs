//! `discmark tree` – list folders with Discogs item counts.

use anyhow::Result;
use discmark_core::bookmarks::{count_qualifying_urls, BookmarkNode};
use discmark_core::config::DiscmarkConfig;
use std::path::Path;

pub fn run_tree(cfg: &DiscmarkConfig, bookmarks: Option<&Path>) -> Result<()> {
    let root = super::load_tree(cfg, bookmarks)?;
    for line in render_tree(&root) {
        println!("{line}");
    }
    Ok(())
}

/// One line per folder below the synthetic root, indented by depth.
pub(crate) fn render_tree(root: &BookmarkNode) -> Vec<String> {
    root.folders()
        .into_iter()
        .filter(|(depth, _)| *depth > 0)
        .map(|(depth, folder)| {
            format!(
                "{}📁 {} ({} discogs items)",
                "  ".repeat(depth - 1),
                folder.display_title(),
                count_qualifying_urls(folder, true)
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_nested_folders_with_counts() {
        let root = BookmarkNode::folder(
            "",
            vec![BookmarkNode::folder(
                "Bar",
                vec![
                    BookmarkNode::link("a", "https://www.discogs.com/release/1"),
                    BookmarkNode::folder(
                        "",
                        vec![BookmarkNode::link("b", "https://www.discogs.com/master/2")],
                    ),
                    BookmarkNode::link("c", "https://example.com/"),
                ],
            )],
        );
        assert_eq!(
            render_tree(&root),
            vec![
                "📁 Bar (2 discogs items)".to_string(),
                "  📁 (untitled folder) (1 discogs items)".to_string(),
            ]
        );
    }
}
