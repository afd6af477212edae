use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::transport::CurlOptions;

/// Global configuration loaded from `~/.config/catalog/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Base URL of the catalog service (e.g. `http://localhost:8080/catalog`).
    pub catalog_url: String,
    /// Session id forwarded to the catalog with every request. Optional; can come from the CLI.
    #[serde(default)]
    pub session_id: Option<String>,
    /// Seconds allowed for the TCP/TLS connect phase.
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    /// Seconds allowed for a whole request, body included.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Maximum number of redirects followed per request.
    #[serde(default = "default_max_redirections")]
    pub max_redirections: u32,
}

fn default_connect_timeout_secs() -> u64 {
    15
}

fn default_timeout_secs() -> u64 {
    60
}

fn default_max_redirections() -> u32 {
    10
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            catalog_url: "http://localhost:8080/catalog".to_string(),
            session_id: None,
            connect_timeout_secs: default_connect_timeout_secs(),
            timeout_secs: default_timeout_secs(),
            max_redirections: default_max_redirections(),
        }
    }
}

impl CatalogConfig {
    /// Transport settings derived from this config.
    pub fn curl_options(&self) -> CurlOptions {
        CurlOptions {
            connect_timeout_secs: self.connect_timeout_secs,
            timeout_secs: self.timeout_secs,
            max_redirections: self.max_redirections,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("catalog")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from an explicit file.
pub fn load_from(path: &Path) -> Result<CatalogConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: CatalogConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<CatalogConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = CatalogConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}
