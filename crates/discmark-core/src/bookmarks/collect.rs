//! Counting and collecting qualifying catalog URLs from a bookmark subtree.

use std::collections::HashSet;

use crate::url_model::is_qualifying;

use super::node::BookmarkNode;

fn qualifying_link(node: &BookmarkNode) -> Option<&str> {
    node.url().filter(|url| is_qualifying(url))
}

/// Number of qualifying links under `node`.
///
/// A link counts itself. For a folder, `recursive == false` counts only
/// direct link children; `true` sums over the whole subtree. Duplicates are
/// counted, matching what the folder listing shows.
pub fn count_qualifying_urls(node: &BookmarkNode, recursive: bool) -> usize {
    match node {
        BookmarkNode::Link { .. } => usize::from(qualifying_link(node).is_some()),
        BookmarkNode::Folder { children, .. } if !recursive => children
            .iter()
            .filter(|c| qualifying_link(c).is_some())
            .count(),
        BookmarkNode::Folder { children, .. } => children
            .iter()
            .map(|c| count_qualifying_urls(c, true))
            .sum(),
    }
}

/// Qualifying URLs under `node` in depth-first, children-in-order order.
///
/// Each URL appears once; the first occurrence wins even across branches.
/// Non-recursive mode only inspects direct children.
pub fn collect_qualifying_urls(node: &BookmarkNode, recursive: bool) -> Vec<String> {
    let mut urls = Vec::new();
    let mut seen = HashSet::new();
    match node {
        BookmarkNode::Link { .. } => push_unique(node, &mut urls, &mut seen),
        BookmarkNode::Folder { children, .. } if !recursive => {
            for child in children {
                push_unique(child, &mut urls, &mut seen);
            }
        }
        BookmarkNode::Folder { .. } => walk(node, &mut urls, &mut seen),
    }
    urls
}

fn walk(node: &BookmarkNode, urls: &mut Vec<String>, seen: &mut HashSet<String>) {
    match node {
        BookmarkNode::Link { .. } => push_unique(node, urls, seen),
        BookmarkNode::Folder { children, .. } => {
            for child in children {
                walk(child, urls, seen);
            }
        }
    }
}

fn push_unique(node: &BookmarkNode, urls: &mut Vec<String>, seen: &mut HashSet<String>) {
    if let Some(url) = qualifying_link(node) {
        if seen.insert(url.to_string()) {
            urls.push(url.to_string());
        }
    }
}
