use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::retry::RetryPolicy;

/// Retry policy parameters (optional section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Additional attempts after the first request (429 / 5xx / transport errors).
    pub max_retries: u32,
    /// Base delay in milliseconds; the n-th retry waits `base * 2^n`.
    pub base_delay_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 2,
            base_delay_ms: 500,
        }
    }
}

impl RetryConfig {
    pub fn to_policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_retries: self.max_retries,
            base_delay: Duration::from_millis(self.base_delay_ms),
        }
    }
}

/// Global configuration loaded from `~/.config/discmark/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscmarkConfig {
    /// Base URL of the catalog API (no trailing slash needed).
    pub api_base_url: String,
    /// Value of the outbound `User-Agent` header.
    pub user_agent: String,
    /// Optional Discogs personal access token.
    #[serde(default)]
    pub token: Option<String>,
    /// Bookmarks file to read; if missing, the Chrome default profile is used.
    #[serde(default)]
    pub bookmarks_file: Option<PathBuf>,
    /// Optional retry policy; if missing, built-in defaults are used.
    #[serde(default)]
    pub retry: Option<RetryConfig>,
}

impl Default for DiscmarkConfig {
    fn default() -> Self {
        Self {
            api_base_url: crate::catalog::DEFAULT_API_BASE.to_string(),
            user_agent: crate::catalog::DEFAULT_USER_AGENT.to_string(),
            token: None,
            bookmarks_file: None,
            retry: None,
        }
    }
}

impl DiscmarkConfig {
    pub fn retry_policy(&self) -> RetryPolicy {
        self.retry
            .as_ref()
            .map(RetryConfig::to_policy)
            .unwrap_or_default()
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("discmark")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<DiscmarkConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = DiscmarkConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: DiscmarkConfig = toml::from_str(&data)?;
    Ok(cfg)
}
