//! Optional TOML config file for the `ipgeo` binary
//!
//! ```toml
//! api_key = "..."
//! lang = "en"
//! fields = ["city", "country_name"]
//! timeout = 5
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// Looked up in the working directory when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "ipgeolocation.toml";

#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub lang: Option<String>,
    pub timeout: Option<u64>,
    #[serde(default)]
    pub fields: Vec<String>,
    #[serde(default)]
    pub excludes: Vec<String>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }
}
