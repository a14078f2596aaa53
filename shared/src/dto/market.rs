//! # Market Data DTOs
//!
//! Response types for the simple-price endpoint:
//! `GET /simple/price?ids=ethereum,solana&vs_currencies=usd&include_24hr_change=true&include_24hr_vol=true&include_last_updated_at=true`
//!
//! The response is an object keyed by asset identifier. Only `usd` is
//! guaranteed by the provider; the 24h fields and the timestamp are omitted
//! for assets the provider has no data for.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One asset's quote in the simple-price response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimplePriceQuote {
    /// Spot price in USD
    pub usd: f64,
    /// 24h change in percent (signed)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usd_24h_change: Option<f64>,
    /// 24h traded volume in USD
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usd_24h_vol: Option<f64>,
    /// Unix timestamp (seconds) of the provider's last update
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated_at: Option<i64>,
}

/// Full simple-price response keyed by asset identifier (`ethereum`, `solana`).
pub type SimplePriceResponse = HashMap<String, SimplePriceQuote>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_price_response() {
        let body = r#"{
            "ethereum": {"usd": 3120.55, "usd_24h_vol": 18234567890.12, "usd_24h_change": -1.84, "last_updated_at": 1760600000},
            "solana": {"usd": 152.1}
        }"#;
        let response: SimplePriceResponse = serde_json::from_str(body).unwrap();

        let eth = &response["ethereum"];
        assert_eq!(eth.usd, 3120.55);
        assert_eq!(eth.usd_24h_change, Some(-1.84));
        assert_eq!(eth.last_updated_at, Some(1760600000));

        let sol = &response["solana"];
        assert_eq!(sol.usd, 152.1);
        assert_eq!(sol.usd_24h_vol, None);
    }

    #[test]
    fn test_quote_requires_usd() {
        let result = serde_json::from_str::<SimplePriceQuote>(r#"{"usd_24h_change": 1.0}"#);
        assert!(result.is_err());
    }
}
