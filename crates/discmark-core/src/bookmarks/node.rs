//! In-memory bookmark tree.

/// Label used when displaying a folder with an empty title.
pub const UNTITLED_FOLDER: &str = "(untitled folder)";

/// A bookmark is either a link or a folder of ordered children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookmarkNode {
    Link { title: String, url: String },
    Folder { title: String, children: Vec<BookmarkNode> },
}

impl BookmarkNode {
    pub fn link(title: impl Into<String>, url: impl Into<String>) -> Self {
        BookmarkNode::Link {
            title: title.into(),
            url: url.into(),
        }
    }

    pub fn folder(title: impl Into<String>, children: Vec<BookmarkNode>) -> Self {
        BookmarkNode::Folder {
            title: title.into(),
            children,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            BookmarkNode::Link { title, .. } | BookmarkNode::Folder { title, .. } => title,
        }
    }

    /// Title for display; empty folder titles get a placeholder.
    pub fn display_title(&self) -> &str {
        let title = self.title();
        if title.trim().is_empty() {
            UNTITLED_FOLDER
        } else {
            title
        }
    }

    pub fn url(&self) -> Option<&str> {
        match self {
            BookmarkNode::Link { url, .. } => Some(url),
            BookmarkNode::Folder { .. } => None,
        }
    }

    /// Children of a folder; links have none.
    pub fn children(&self) -> &[BookmarkNode] {
        match self {
            BookmarkNode::Folder { children, .. } => children,
            BookmarkNode::Link { .. } => &[],
        }
    }

    pub fn is_folder(&self) -> bool {
        matches!(self, BookmarkNode::Folder { .. })
    }

    /// Resolves a `/`-separated path of folder titles below this node.
    ///
    /// The first matching child folder wins at each level. An empty path
    /// returns `self`.
    pub fn find_folder(&self, path: &str) -> Option<&BookmarkNode> {
        let mut current = self;
        for part in path.split('/').map(str::trim).filter(|p| !p.is_empty()) {
            current = current
                .children()
                .iter()
                .find(|c| c.is_folder() && c.title() == part)?;
        }
        current.is_folder().then_some(current)
    }

    /// Depth-first walk over folders (self included), yielding each with its depth.
    pub fn folders(&self) -> Vec<(usize, &BookmarkNode)> {
        let mut out = Vec::new();
        walk_folders(self, 0, &mut out);
        out
    }
}

fn walk_folders<'a>(node: &'a BookmarkNode, depth: usize, out: &mut Vec<(usize, &'a BookmarkNode)>) {
    if !node.is_folder() {
        return;
    }
    out.push((depth, node));
    for child in node.children() {
        walk_folders(child, depth + 1, out);
    }
}
