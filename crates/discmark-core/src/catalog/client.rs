use anyhow::{Context, Result};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, USER_AGENT};
use reqwest::Client;

use crate::config::DiscmarkConfig;
use crate::retry::{run_with_retry, FetchError, RetryPolicy};
use crate::url_model::{parse_catalog_id, CatalogId, CatalogKind};

use super::model::{CatalogPayload, CatalogRecord};

pub const DEFAULT_API_BASE: &str = "https://api.discogs.com";
pub const DEFAULT_USER_AGENT: &str = "DiscogsBookmarks/1.0 (+discmark)";

#[derive(Debug, Clone)]
pub struct ClientOptions {
    pub base_url: String,
    pub user_agent: String,
    pub token: Option<String>,
    pub retry: RetryPolicy,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            token: None,
            retry: RetryPolicy::default(),
        }
    }
}

impl From<&DiscmarkConfig> for ClientOptions {
    fn from(cfg: &DiscmarkConfig) -> Self {
        Self {
            base_url: cfg.api_base_url.clone(),
            user_agent: cfg.user_agent.clone(),
            token: cfg.token.clone(),
            retry: cfg.retry_policy(),
        }
    }
}

/// Read-only client for the release and master endpoints.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    client: Client,
    base_url: String,
    retry: RetryPolicy,
}

impl CatalogClient {
    pub fn new(options: ClientOptions) -> Result<Self> {
        let mut headers = HeaderMap::new();
        // Identity headers are diagnostic; a bad value is skipped, not fatal.
        match HeaderValue::from_str(&options.user_agent) {
            Ok(v) => {
                headers.insert(USER_AGENT, v);
            }
            Err(e) => tracing::warn!("ignoring invalid user agent {:?}: {}", options.user_agent, e),
        }
        if let Some(token) = &options.token {
            match HeaderValue::from_str(&format!("Discogs token={}", token)) {
                Ok(v) => {
                    headers.insert(AUTHORIZATION, v);
                }
                Err(e) => tracing::warn!("ignoring invalid API token: {}", e),
            }
        }

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .context("build HTTP client")?;

        Ok(Self {
            client,
            base_url: options.base_url.trim_end_matches('/').to_string(),
            retry: options.retry,
        })
    }

    fn endpoint(&self, id: &CatalogId) -> String {
        let collection = match id.kind {
            CatalogKind::Release => "releases",
            CatalogKind::Master => "masters",
        };
        format!("{}/{}/{}", self.base_url, collection, id.id)
    }

    /// Fetches one release or master and maps it to a [`CatalogRecord`]
    /// tagged with `source_url`.
    pub async fn fetch_metadata(
        &self,
        id: &CatalogId,
        source_url: &str,
    ) -> Result<CatalogRecord, FetchError> {
        let payload = self.fetch_payload(id).await?;
        Ok(payload.into_record(source_url))
    }

    /// Parses `url` into an identifier and fetches it.
    pub async fn fetch_url(&self, url: &str) -> Result<CatalogRecord, FetchError> {
        let id = parse_catalog_id(url).ok_or_else(|| FetchError::Unsupported(url.to_string()))?;
        self.fetch_metadata(&id, url).await
    }

    async fn fetch_payload(&self, id: &CatalogId) -> Result<CatalogPayload, FetchError> {
        let url = self.endpoint(id);
        let url = url.as_str();
        let client = &self.client;
        run_with_retry(&self.retry, move || get_once(client, url)).await
    }
}

/// One GET attempt; non-2xx statuses become [`FetchError::Http`].
async fn get_once(client: &Client, url: &str) -> Result<CatalogPayload, FetchError> {
    let response = client.get(url).send().await.map_err(FetchError::Network)?;
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Http {
            status: status.as_u16(),
        });
    }
    response
        .json::<CatalogPayload>()
        .await
        .map_err(FetchError::Decode)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_per_kind() {
        let client = CatalogClient::new(ClientOptions {
            base_url: "http://localhost:1/".to_string(),
            ..ClientOptions::default()
        })
        .unwrap();
        let release = parse_catalog_id("https://www.discogs.com/release/12-x").unwrap();
        let master = parse_catalog_id("https://www.discogs.com/master/34").unwrap();
        assert_eq!(client.endpoint(&release), "http://localhost:1/releases/12");
        assert_eq!(client.endpoint(&master), "http://localhost:1/masters/34");
    }

    #[test]
    fn invalid_identity_headers_are_not_fatal() {
        let client = CatalogClient::new(ClientOptions {
            user_agent: "bad\nagent".to_string(),
            token: Some("bad\ntoken".to_string()),
            ..ClientOptions::default()
        });
        assert!(client.is_ok());
    }

    #[tokio::test]
    async fn fetch_url_rejects_non_catalog_url() {
        let client = CatalogClient::new(ClientOptions::default()).unwrap();
        let err = client.fetch_url("https://www.discogs.com/artist/1").await.unwrap_err();
        assert!(matches!(err, FetchError::Unsupported(_)));
    }
}
