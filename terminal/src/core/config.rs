//! # Wallet Configuration
//!
//! Runtime settings resolved at startup from, in increasing precedence:
//! built-in defaults, the JSON config file, and environment variables.
//!
//! | field | env |
//! |---|---|
//! | `price_api_url` | `WALLET_PRICE_API_URL` |
//! | `price_poll_interval_secs` | `WALLET_PRICE_INTERVAL_SECS` |
//! | `request_timeout_secs` | `WALLET_REQUEST_TIMEOUT_SECS` |
//! | `storage_dir` | `WALLET_STORAGE_DIR` |
//! | `explorer_url` | `WALLET_EXPLORER_URL` |
//!
//! The file is `./wallet-terminal.json` unless `WALLET_CONFIG` points elsewhere.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::error::{AppError, Result};

const DEFAULT_PRICE_API_URL: &str = "https://api.coingecko.com/api/v3";
const DEFAULT_POLL_INTERVAL_SECS: u64 = 10;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;
const DEFAULT_STORAGE_DIR: &str = "./wallet-data";
const DEFAULT_EXPLORER_URL: &str = "https://etherscan.io/address/";

/// Serializable runtime configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WalletConfig {
    /// Base URL of the market data API (no trailing slash)
    pub price_api_url: String,
    /// Seconds between price refreshes
    pub price_poll_interval_secs: u64,
    /// Per-request HTTP timeout
    pub request_timeout_secs: u64,
    /// Directory holding durable key-value files
    pub storage_dir: PathBuf,
    /// Explorer prefix; the wallet address is appended
    pub explorer_url: String,
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self {
            price_api_url: DEFAULT_PRICE_API_URL.to_string(),
            price_poll_interval_secs: DEFAULT_POLL_INTERVAL_SECS,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            storage_dir: PathBuf::from(DEFAULT_STORAGE_DIR),
            explorer_url: DEFAULT_EXPLORER_URL.to_string(),
        }
    }
}

impl WalletConfig {
    /// Default config file path, overridable with `WALLET_CONFIG`.
    pub fn config_path() -> PathBuf {
        std::env::var("WALLET_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./wallet-terminal.json"))
    }

    /// Resolve the configuration for this process.
    ///
    /// Never fails: an unreadable file or a bad value is logged and replaced
    /// by its default.
    pub fn load() -> Self {
        let path = Self::config_path();
        let config = match Self::load_from_file(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to load config, using defaults");
                Self::default()
            }
        };
        config.with_env(|key| std::env::var(key).ok()).sanitized()
    }

    /// Load configuration from a JSON file. A missing file yields defaults.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: WalletConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration as pretty JSON.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Apply overrides from an environment lookup.
    ///
    /// Values that fail to parse are ignored with a warning.
    pub fn with_env(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(url) = lookup("WALLET_PRICE_API_URL") {
            self.price_api_url = url;
        }
        if let Some(raw) = lookup("WALLET_PRICE_INTERVAL_SECS") {
            match raw.parse() {
                Ok(secs) => self.price_poll_interval_secs = secs,
                Err(_) => tracing::warn!(value = %raw, "Ignoring non-numeric WALLET_PRICE_INTERVAL_SECS"),
            }
        }
        if let Some(raw) = lookup("WALLET_REQUEST_TIMEOUT_SECS") {
            match raw.parse() {
                Ok(secs) => self.request_timeout_secs = secs,
                Err(_) => tracing::warn!(value = %raw, "Ignoring non-numeric WALLET_REQUEST_TIMEOUT_SECS"),
            }
        }
        if let Some(dir) = lookup("WALLET_STORAGE_DIR") {
            self.storage_dir = PathBuf::from(dir);
        }
        if let Some(url) = lookup("WALLET_EXPLORER_URL") {
            self.explorer_url = url;
        }
        self
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<()> {
        if self.price_poll_interval_secs == 0 {
            return Err(AppError::Config("price_poll_interval_secs must be at least 1".to_string()));
        }
        if self.request_timeout_secs == 0 {
            return Err(AppError::Config("request_timeout_secs must be at least 1".to_string()));
        }
        if self.price_api_url.trim().is_empty() {
            return Err(AppError::Config("price_api_url must not be empty".to_string()));
        }
        Ok(())
    }

    /// Replace out-of-range values with their defaults.
    pub fn sanitized(mut self) -> Self {
        if let Err(e) = self.validate() {
            tracing::warn!(error = %e, "Invalid configuration value, falling back to default");
            let defaults = Self::default();
            if self.price_poll_interval_secs == 0 {
                self.price_poll_interval_secs = defaults.price_poll_interval_secs;
            }
            if self.request_timeout_secs == 0 {
                self.request_timeout_secs = defaults.request_timeout_secs;
            }
            if self.price_api_url.trim().is_empty() {
                self.price_api_url = defaults.price_api_url;
            }
        }
        self.price_api_url = self.price_api_url.trim_end_matches('/').to_string();
        self
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.price_poll_interval_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
