//! Path segment extraction.

/// Splits the URL path into its non-empty segments.
///
/// Returns an empty list if the URL cannot be parsed.
pub fn path_segments(url: &str) -> Vec<String> {
    let Ok(parsed) = url::Url::parse(url) else {
        return Vec::new();
    };
    parsed
        .path()
        .split('/')
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normal() {
        assert_eq!(
            path_segments("https://www.discogs.com/ja/release/1-x"),
            vec!["ja", "release", "1-x"]
        );
    }

    #[test]
    fn root_or_empty() {
        assert!(path_segments("https://www.discogs.com/").is_empty());
        assert!(path_segments("https://www.discogs.com").is_empty());
        assert!(path_segments("::::").is_empty());
    }

    #[test]
    fn with_query() {
        assert_eq!(
            path_segments("https://www.discogs.com//master//9?x=1"),
            vec!["master", "9"]
        );
    }
}
