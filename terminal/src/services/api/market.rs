//! # Market Data Endpoints
//!
//! Simple-price queries: spot price, 24h change, 24h volume, and last-update
//! time for several assets in one request.

use shared::dto::market::SimplePriceResponse;

use super::client::ApiClient;
use crate::app::state::Asset;
use crate::core::error::{AppError, Result};

/// Build the simple-price URL for `assets`.
pub fn simple_price_url(base_url: &str, assets: &[Asset]) -> String {
    let ids = assets.iter().map(Asset::api_id).collect::<Vec<_>>().join(",");
    format!(
        "{}/simple/price?ids={}&vs_currencies=usd&include_24hr_change=true&include_24hr_vol=true&include_last_updated_at=true",
        base_url, ids
    )
}

/// Fetch quotes for `assets` in a single request.
#[tracing::instrument(skip(client, assets), fields(asset_count = assets.len()))]
pub async fn get_simple_prices(client: &ApiClient, assets: &[Asset]) -> Result<SimplePriceResponse> {
    let start = std::time::Instant::now();
    let url = simple_price_url(client.base_url(), assets);

    tracing::debug!(url = %url, "Fetching prices");

    let response = client.client.get(&url).send().await.map_err(|e| {
        tracing::error!(error = %e, "Price fetch network error");
        AppError::from(e)
    })?;

    let status = response.status();
    let duration = start.elapsed();

    if !status.is_success() {
        tracing::warn!(
            status = status.as_u16(),
            duration_ms = duration.as_millis(),
            "Price fetch failed"
        );
        return Err(AppError::Api(format!("Failed to fetch prices: {}", status)));
    }

    let body = response.text().await.map_err(AppError::from)?;
    let prices: SimplePriceResponse = serde_json::from_str(&body).map_err(|e| {
        tracing::error!(error = %e, "Price response parse error");
        AppError::Serialization(format!("Failed to parse response: {}", e))
    })?;

    tracing::debug!(
        duration_ms = duration.as_millis(),
        price_count = prices.len(),
        "Prices fetched successfully"
    );
    Ok(prices)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::PriceBoard;
    use crate::core::config::WalletConfig;
    use crate::core::service::PriceSource;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve a single canned HTTP response and return the base URL.
    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await;
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
        });
        format!("http://{}", addr)
    }

    fn client_for(base_url: String) -> ApiClient {
        ApiClient::new(&WalletConfig { price_api_url: base_url, ..WalletConfig::default() })
    }

    #[test]
    fn test_simple_price_url_requests_all_fields() {
        let url = simple_price_url("https://api.example.com/api/v3", &Asset::ALL);
        assert_eq!(
            url,
            "https://api.example.com/api/v3/simple/price?ids=ethereum,solana&vs_currencies=usd&include_24hr_change=true&include_24hr_vol=true&include_last_updated_at=true"
        );
    }

    #[tokio::test]
    async fn test_fetch_board_success() {
        let base = serve_once(
            "200 OK",
            r#"{"ethereum":{"usd":3120.55,"usd_24h_vol":18234567890.12,"usd_24h_change":-1.84,"last_updated_at":1760600000},"solana":{"usd":152.1,"usd_24h_vol":3100000000.0,"usd_24h_change":4.2,"last_updated_at":1760600001}}"#,
        )
        .await;

        let board = client_for(base).fetch_board(&Asset::ALL).await.unwrap();
        assert_eq!(board.get(Asset::Ethereum).spot_price_usd, 3120.55);
        assert_eq!(board.get(Asset::Solana).change_24h_pct, 4.2);
    }

    #[tokio::test]
    async fn test_fetch_board_non_success_status() {
        let base = serve_once("429 Too Many Requests", r#"{"status":{"error_code":429}}"#).await;

        let err = client_for(base).fetch_board(&Asset::ALL).await.unwrap_err();
        assert!(matches!(err, AppError::Api(_)));
        assert!(err.to_string().contains("429"));
    }

    #[tokio::test]
    async fn test_fetch_board_malformed_body() {
        let base = serve_once("200 OK", r#"{"ethereum": "#).await;

        let err = client_for(base).fetch_board(&Asset::ALL).await.unwrap_err();
        assert!(matches!(err, AppError::Serialization(_)));
    }

    #[tokio::test]
    async fn test_fetch_board_missing_asset() {
        let base = serve_once("200 OK", r#"{"ethereum":{"usd":3120.55}}"#).await;

        let err = client_for(base).fetch_board(&Asset::ALL).await.unwrap_err();
        assert!(err.to_string().contains("solana"));
    }

    #[tokio::test]
    async fn test_fetch_board_connection_refused() {
        // Bind then drop to get a port nobody listens on.
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let result: Result<PriceBoard> = client_for(format!("http://{}", addr)).fetch_board(&Asset::ALL).await;
        assert!(matches!(result, Err(AppError::Api(_))));
    }
}
