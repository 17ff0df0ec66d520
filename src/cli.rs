use anyhow::{Context, Result};
use clap::Parser;
use ipgeolocation::Options;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::config::{FileConfig, DEFAULT_CONFIG_FILE};

const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Parser, Debug)]
#[command(name = "ipgeo")]
#[command(version)]
#[command(about = "Look up the geolocation of an IP address via ipgeolocation.io", long_about = None)]
pub struct Args {
    /// IP address to look up (defaults to your own public IP)
    pub ip: Option<String>,

    /// API key
    #[arg(short = 'k', long, env = "IPGEOLOCATION_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Response language (en, de, ru, ja, fr, cn, es, cs, it)
    #[arg(short = 'l', long, env = "IPGEOLOCATION_LANG")]
    pub lang: Option<String>,

    /// Only return these fields (e.g. "city,country_name")
    #[arg(short = 'f', long, value_delimiter = ',')]
    pub fields: Vec<String>,

    /// Leave these fields out of the response
    #[arg(short = 'x', long, value_delimiter = ',')]
    pub excludes: Vec<String>,

    /// Config file path (defaults to ./ipgeolocation.toml if it exists)
    #[arg(short = 'c', long, env = "IPGEOLOCATION_CONFIG")]
    pub config: Option<PathBuf>,

    /// Override the API endpoint
    #[arg(long, env = "IPGEOLOCATION_BASE_URL")]
    pub base_url: Option<String>,

    /// Request timeout in seconds (defaults to 10)
    #[arg(short = 't', long, env = "IPGEOLOCATION_TIMEOUT")]
    pub timeout: Option<u64>,

    /// Verbose output
    #[arg(short = 'v', long, env = "IPGEOLOCATION_VERBOSE")]
    pub verbose: bool,
}

impl Args {
    /// Fill anything not given on the command line from the config file.
    pub fn merge_with_config(self) -> Result<Self> {
        let path = match &self.config {
            Some(path) => path.clone(),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => PathBuf::from(DEFAULT_CONFIG_FILE),
            None => return Ok(self),
        };
        let file = FileConfig::load(&path)?;
        Ok(self.merge(file))
    }

    fn merge(mut self, file: FileConfig) -> Self {
        self.api_key = self.api_key.or(file.api_key);
        self.base_url = self.base_url.or(file.base_url);
        self.lang = self.lang.or(file.lang);
        self.timeout = self.timeout.or(file.timeout);
        if self.fields.is_empty() {
            self.fields = file.fields;
        }
        if self.excludes.is_empty() {
            self.excludes = file.excludes;
        }
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }

    /// Build validated lookup options from the arguments.
    pub fn to_options(&self) -> Result<Options> {
        let mut options = Options::new();
        if let Some(ip) = self.ip.as_deref().filter(|ip| !ip.is_empty()) {
            options.set_ip(ip)?;
        }
        if let Some(lang) = &self.lang {
            options.set_language(lang)?;
        }
        options
            .set_includes(self.fields.as_slice())
            .context("Invalid --fields")?;
        options
            .set_excludes(self.excludes.as_slice())
            .context("Invalid --excludes")?;
        Ok(options)
    }
}
