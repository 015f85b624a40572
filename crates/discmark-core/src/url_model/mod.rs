//! URL classification for Discogs catalog links.
//!
//! Decides whether a bookmarked URL points at the catalog domain and, if so,
//! extracts the typed release/master identifier from its path.

mod path;

pub use path::path_segments;

use std::fmt;

/// Catalog domain; subdomains (e.g. `www.`) also qualify.
pub const CATALOG_DOMAIN: &str = "discogs.com";

/// Kind of catalog page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CatalogKind {
    Release,
    Master,
}

impl CatalogKind {
    fn from_segment(segment: &str) -> Option<Self> {
        match segment {
            "release" => Some(CatalogKind::Release),
            "master" => Some(CatalogKind::Master),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CatalogKind::Release => "release",
            CatalogKind::Master => "master",
        }
    }
}

impl fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifier of one catalog item: kind plus a string of ASCII digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CatalogId {
    pub kind: CatalogKind,
    pub id: String,
}

impl fmt::Display for CatalogId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.kind, self.id)
    }
}

/// True iff `url` parses and its host is the catalog domain or a subdomain of it.
/// Never fails: unparsable input is simply not on the domain.
pub fn is_target_domain(url: &str) -> bool {
    let Ok(parsed) = url::Url::parse(url) else {
        return false;
    };
    let Some(host) = parsed.host_str() else {
        return false;
    };
    host == CATALOG_DOMAIN
        || host
            .strip_suffix(CATALOG_DOMAIN)
            .is_some_and(|prefix| prefix.ends_with('.'))
}

/// Extracts a catalog identifier from the URL path.
///
/// The first `release` or `master` segment anywhere in the path is the
/// keyword (so locale prefixes such as `/ja/release/...` work); the next
/// segment, cut at the first `-`, must be a non-empty run of digits.
pub fn parse_catalog_id(url: &str) -> Option<CatalogId> {
    let segments = path_segments(url);
    let idx = segments
        .iter()
        .position(|s| CatalogKind::from_segment(s).is_some())?;
    let kind = CatalogKind::from_segment(&segments[idx])?;
    let next = segments.get(idx + 1)?;
    let id = next.split('-').next().unwrap_or_default();
    if id.is_empty() || !id.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(CatalogId {
        kind,
        id: id.to_string(),
    })
}

/// A qualifying URL is on the catalog domain and carries a catalog identifier.
pub fn is_qualifying(url: &str) -> bool {
    is_target_domain(url) && parse_catalog_id(url).is_some()
}
