//! Minimal structures for Chromium-family `Bookmarks` JSON files.

use serde::Deserialize;

use super::node::BookmarkNode;

#[derive(Debug, Deserialize)]
pub struct ChromeBookmarks {
    pub roots: ChromeRoots,
}

#[derive(Debug, Deserialize)]
pub struct ChromeRoots {
    #[serde(default)]
    pub bookmark_bar: Option<ChromeNode>,
    #[serde(default)]
    pub other: Option<ChromeNode>,
    #[serde(default)]
    pub synced: Option<ChromeNode>,
}

#[derive(Debug, Deserialize)]
pub struct ChromeNode {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub children: Vec<ChromeNode>,
}

impl ChromeBookmarks {
    /// Synthetic untitled root folder holding the browser roots in file order.
    pub fn into_tree(self) -> BookmarkNode {
        let roots = [self.roots.bookmark_bar, self.roots.other, self.roots.synced];
        let children = roots
            .into_iter()
            .flatten()
            .filter_map(ChromeNode::into_node)
            .collect();
        BookmarkNode::folder("", children)
    }
}

impl ChromeNode {
    fn into_node(self) -> Option<BookmarkNode> {
        match self.kind.as_str() {
            "url" => Some(BookmarkNode::link(self.name, self.url?)),
            "folder" => Some(BookmarkNode::folder(
                self.name,
                self.children
                    .into_iter()
                    .filter_map(ChromeNode::into_node)
                    .collect(),
            )),
            other => {
                tracing::debug!(kind = other, "skipping unknown bookmark node type");
                None
            }
        }
    }
}
