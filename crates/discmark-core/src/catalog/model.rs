//! API payloads and the record/row shapes derived from them.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// CSV column order.
pub const CSV_HEADER: [&str; 6] = ["artist", "title", "genre", "style", "year", "url"];

/// Fields read from both `/releases/{id}` and `/masters/{id}`; all optional.
/// Lists may be missing or `null`; both decode as empty.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogPayload {
    #[serde(default, deserialize_with = "null_as_default")]
    pub artists: Vec<ArtistCredit>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub genres: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub styles: Vec<String>,
    #[serde(default)]
    pub year: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArtistCredit {
    #[serde(default)]
    pub name: Option<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Metadata for one catalog item, as exported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogRecord {
    pub artist: String,
    pub title: String,
    pub genre: String,
    pub style: String,
    pub year: String,
    pub source_url: String,
}

impl CatalogPayload {
    pub fn into_record(self, source_url: &str) -> CatalogRecord {
        CatalogRecord {
            artist: self
                .artists
                .iter()
                .filter_map(|a| a.name.as_deref())
                .collect::<Vec<_>>()
                .join(", "),
            title: self.title.unwrap_or_default(),
            genre: self.genres.join(" / "),
            style: self.styles.join(" / "),
            year: render_year(self.year.as_ref()),
            source_url: source_url.to_string(),
        }
    }
}

/// Numbers print as-is, strings pass through; null, missing and 0 are empty.
fn render_year(year: Option<&Value>) -> String {
    match year {
        Some(Value::Number(n)) if n.as_u64() == Some(0) => String::new(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::String(s)) => s.clone(),
        _ => String::new(),
    }
}

/// One CSV data row, in [`CSV_HEADER`] order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRow(pub [String; 6]);

impl From<CatalogRecord> for ExportRow {
    fn from(r: CatalogRecord) -> Self {
        ExportRow([r.artist, r.title, r.genre, r.style, r.year, r.source_url])
    }
}

impl ExportRow {
    pub fn fields(&self) -> &[String; 6] {
        &self.0
    }
}
