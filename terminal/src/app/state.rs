//! # Application State Types
//!
//! Tracked assets, screens, price snapshot types, and notifications shared by
//! the poller, the coordinator, and the renderers.

use chrono::{DateTime, TimeZone, Utc};
use shared::dto::market::{SimplePriceQuote, SimplePriceResponse};

use crate::core::error::{AppError, Result};

/// Assets whose prices are polled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Asset {
    #[default]
    Ethereum,
    Solana,
}

impl Asset {
    /// Every tracked asset, in display order.
    pub const ALL: [Asset; 2] = [Asset::Ethereum, Asset::Solana];

    /// Identifier used by the market data API.
    pub fn api_id(&self) -> &'static str {
        match self {
            Asset::Ethereum => "ethereum",
            Asset::Solana => "solana",
        }
    }

    /// Name shown on selector buttons and card titles.
    pub fn display_name(&self) -> &'static str {
        match self {
            Asset::Ethereum => "Ethereum",
            Asset::Solana => "Solana",
        }
    }

    pub fn ticker(&self) -> &'static str {
        match self {
            Asset::Ethereum => "ETH",
            Asset::Solana => "SOL",
        }
    }
}

/// Screens available once a session exists.
///
/// There is no variant for the first-run screen: it is the absence of a
/// session, modelled by [`crate::app::navigation::Navigation::Initial`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Balance header, menu, and the live price card
    Main,
    /// Full address, balance, and transaction history placeholder
    TokenDetails,
    /// Recovery phrase export
    RecoverAccount,
}

impl Screen {
    /// Get screen title for header display
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Main => "PedalUps Wallet",
            Screen::TokenDetails => "Token Details",
            Screen::RecoverAccount => "Recover Account",
        }
    }
}

/// Latest known market data for one asset.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PriceSnapshot {
    pub spot_price_usd: f64,
    pub change_24h_pct: f64,
    pub volume_24h_usd: f64,
    /// `None` until the provider has reported a timestamp
    pub observed_at: Option<DateTime<Utc>>,
}

impl PriceSnapshot {
    /// Zero-valued placeholder shown before the first successful fetch.
    pub fn placeholder() -> Self {
        Self::default()
    }

    fn from_quote(asset: Asset, quote: &SimplePriceQuote) -> Result<Self> {
        let volume = quote.usd_24h_vol.unwrap_or(0.0);
        let change = quote.usd_24h_change.unwrap_or(0.0);

        if !quote.usd.is_finite() || quote.usd < 0.0 {
            return Err(AppError::Api(format!("Invalid {} price: {}", asset.api_id(), quote.usd)));
        }
        if !volume.is_finite() || volume < 0.0 {
            return Err(AppError::Api(format!("Invalid {} volume: {}", asset.api_id(), volume)));
        }
        if !change.is_finite() {
            return Err(AppError::Api(format!("Invalid {} change: {}", asset.api_id(), change)));
        }

        let observed_at = quote
            .last_updated_at
            .and_then(|secs| Utc.timestamp_opt(secs, 0).single());

        Ok(Self {
            spot_price_usd: quote.usd,
            change_24h_pct: change,
            volume_24h_usd: volume,
            observed_at,
        })
    }
}

/// Snapshot for every tracked asset.
///
/// One field per [`Asset`] variant, so a board can never be missing an asset.
/// The poller replaces the whole board per successful fetch.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PriceBoard {
    ethereum: PriceSnapshot,
    solana: PriceSnapshot,
}

impl PriceBoard {
    /// Board of zero placeholders.
    pub fn placeholder() -> Self {
        Self::default()
    }

    pub fn get(&self, asset: Asset) -> &PriceSnapshot {
        match asset {
            Asset::Ethereum => &self.ethereum,
            Asset::Solana => &self.solana,
        }
    }

    pub fn with(mut self, asset: Asset, snapshot: PriceSnapshot) -> Self {
        match asset {
            Asset::Ethereum => self.ethereum = snapshot,
            Asset::Solana => self.solana = snapshot,
        }
        self
    }

    /// Build a board from a simple-price response.
    ///
    /// Fails unless the response carries a valid quote for every requested
    /// asset. Assets not requested keep their placeholder snapshot.
    pub fn from_response(response: &SimplePriceResponse, assets: &[Asset]) -> Result<Self> {
        let mut board = PriceBoard::placeholder();
        for &asset in assets {
            let quote = response
                .get(asset.api_id())
                .ok_or_else(|| AppError::Api(format!("Response missing quote for {}", asset.api_id())))?;
            board = board.with(asset, PriceSnapshot::from_quote(asset, quote)?);
        }
        Ok(board)
    }
}

/// Health of the price feed, shown next to the price card.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FeedStatus {
    /// Time of the last successful fetch
    pub last_success: Option<DateTime<Utc>>,
    /// Failures since the last success
    pub consecutive_failures: u32,
    /// Most recent failure message
    pub last_error: Option<String>,
}

impl FeedStatus {
    /// True while the displayed prices are older than the latest attempt.
    pub fn is_stale(&self) -> bool {
        self.consecutive_failures > 0
    }
}

/// Severity of a user-facing notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Info,
    Warning,
    Error,
}

/// A toast queued by the coordinator and drained by the UI each frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn new(level: NoticeLevel, message: impl Into<String>) -> Self {
        Self { level, message: message.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quote(usd: f64) -> SimplePriceQuote {
        SimplePriceQuote {
            usd,
            usd_24h_change: Some(2.5),
            usd_24h_vol: Some(1_000_000.0),
            last_updated_at: Some(1_760_600_000),
        }
    }

    #[test]
    fn test_asset_identifiers() {
        assert_eq!(Asset::Ethereum.api_id(), "ethereum");
        assert_eq!(Asset::Solana.display_name(), "Solana");
        assert_eq!(Asset::default(), Asset::Ethereum);
    }

    #[test]
    fn test_placeholder_board_has_every_asset_zeroed() {
        let board = PriceBoard::placeholder();
        for asset in Asset::ALL {
            let snapshot = board.get(asset);
            assert_eq!(snapshot.spot_price_usd, 0.0);
            assert_eq!(snapshot.volume_24h_usd, 0.0);
            assert!(snapshot.observed_at.is_none());
        }
    }

    #[test]
    fn test_board_from_complete_response() {
        let mut response = SimplePriceResponse::new();
        response.insert("ethereum".into(), quote(3120.55));
        response.insert("solana".into(), quote(152.1));

        let board = PriceBoard::from_response(&response, &Asset::ALL).unwrap();
        assert_eq!(board.get(Asset::Ethereum).spot_price_usd, 3120.55);
        assert_eq!(board.get(Asset::Solana).spot_price_usd, 152.1);
        assert_eq!(
            board.get(Asset::Solana).observed_at,
            Utc.timestamp_opt(1_760_600_000, 0).single()
        );
    }

    #[test]
    fn test_board_rejects_missing_asset() {
        let mut response = SimplePriceResponse::new();
        response.insert("ethereum".into(), quote(3120.55));

        let err = PriceBoard::from_response(&response, &Asset::ALL).unwrap_err();
        assert!(err.to_string().contains("solana"));
    }

    #[test]
    fn test_board_covers_only_requested_assets() {
        let mut response = SimplePriceResponse::new();
        response.insert("ethereum".into(), quote(3120.55));

        let board = PriceBoard::from_response(&response, &[Asset::Ethereum]).unwrap();
        assert_eq!(board.get(Asset::Ethereum).spot_price_usd, 3120.55);
        assert_eq!(*board.get(Asset::Solana), PriceSnapshot::default());
    }

    #[test]
    fn test_board_rejects_negative_price() {
        let mut response = SimplePriceResponse::new();
        response.insert("ethereum".into(), quote(-1.0));
        response.insert("solana".into(), quote(152.1));

        assert!(PriceBoard::from_response(&response, &Asset::ALL).is_err());
    }

    #[test]
    fn test_missing_optional_fields_default_to_zero() {
        let mut response = SimplePriceResponse::new();
        for asset in Asset::ALL {
            response.insert(
                asset.api_id().into(),
                SimplePriceQuote { usd: 10.0, usd_24h_change: None, usd_24h_vol: None, last_updated_at: None },
            );
        }

        let board = PriceBoard::from_response(&response, &Asset::ALL).unwrap();
        assert_eq!(board.get(Asset::Ethereum).change_24h_pct, 0.0);
        assert!(board.get(Asset::Ethereum).observed_at.is_none());
    }
}
