//! # API Client
//!
//! HTTP client for the market data API.

use async_trait::async_trait;
use reqwest::Client;

use crate::app::state::{Asset, PriceBoard};
use crate::core::config::WalletConfig;
use crate::core::error::Result;
use crate::core::service::PriceSource;

/// HTTP client for the market data API.
///
/// Keeps one connection pool for the life of the process; the poller reuses
/// it on every tick.
pub struct ApiClient {
    pub(crate) client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client from configuration.
    ///
    /// The request timeout bounds every fetch, so a hung endpoint can delay
    /// the next tick by at most that long.
    pub fn new(config: &WalletConfig) -> Self {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .user_agent(concat!("wallet-terminal/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Failed to build configured HTTP client, using defaults");
                Client::new()
            });

        Self {
            client,
            base_url: config.price_api_url.trim_end_matches('/').to_string(),
        }
    }

    /// Get the base URL for API requests.
    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl PriceSource for ApiClient {
    async fn fetch_board(&self, assets: &[Asset]) -> Result<PriceBoard> {
        let response = crate::services::api::market::get_simple_prices(self, assets).await?;
        PriceBoard::from_response(&response, assets)
    }
}
