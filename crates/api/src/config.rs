//! Process configuration read from environment variables.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::{bail, Context};

use prodfilter_observability::LogFormat;

pub const DEFAULT_LISTEN_PORT: u16 = 8080;
pub const DEFAULT_CATALOG_URL: &str = "https://pastebin.com/raw/JucRNpWs";
pub const DEFAULT_CATALOG_TIMEOUT: Duration = Duration::from_secs(10);

/// Runtime configuration of the API process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// `LISTEN_ADDR`, default `0.0.0.0:8080`.
    pub listen_addr: SocketAddr,
    /// `CATALOG_URL`, the upstream catalog document.
    pub catalog_url: String,
    /// `CATALOG_TIMEOUT_SECS`, whole seconds, must be positive.
    pub catalog_timeout: Duration,
    /// `LOG_FORMAT`, `json` or `pretty`.
    pub log_format: LogFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], DEFAULT_LISTEN_PORT)),
            catalog_url: DEFAULT_CATALOG_URL.to_string(),
            catalog_timeout: DEFAULT_CATALOG_TIMEOUT,
            log_format: LogFormat::default(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from any key lookup; unset or blank keys fall
    /// back to defaults, malformed values are errors.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let mut config = Self::default();

        if let Some(addr) = get("LISTEN_ADDR") {
            config.listen_addr = addr
                .parse::<SocketAddr>()
                .with_context(|| format!("LISTEN_ADDR={addr:?} is not a socket address"))?;
        }

        if let Some(url) = get("CATALOG_URL") {
            config.catalog_url = url;
        }

        if let Some(secs) = get("CATALOG_TIMEOUT_SECS") {
            let secs = secs
                .parse::<u64>()
                .with_context(|| format!("CATALOG_TIMEOUT_SECS={secs:?} is not a whole number"))?;
            if secs == 0 {
                bail!("CATALOG_TIMEOUT_SECS must be greater than zero");
            }
            config.catalog_timeout = Duration::from_secs(secs);
        }

        if let Some(format) = get("LOG_FORMAT") {
            config.log_format = format.parse::<LogFormat>().context("invalid LOG_FORMAT")?;
        }

        Ok(config)
    }

    pub fn uses_default_catalog(&self) -> bool {
        self.catalog_url == DEFAULT_CATALOG_URL
    }
}
