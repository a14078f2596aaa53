//! # Service Traits
//!
//! Seams between the wallet core and the outside world. Production code uses
//! the adapters in [`crate::services`]; tests substitute in-memory doubles.

use async_trait::async_trait;

use crate::app::session::Session;
use crate::app::state::{Asset, PriceBoard};
use crate::core::error::Result;

/// Source of market quotes for the tracked assets.
#[async_trait]
pub trait PriceSource: Send + Sync {
    /// Fetch quotes for all `assets` in a single request.
    ///
    /// Returns a complete board or an error; never a partial board.
    async fn fetch_board(&self, assets: &[Asset]) -> Result<PriceBoard>;
}

/// String key-value store backing the session (local-storage analogue).
pub trait KeyValueStore: Send + Sync {
    /// Read the value under `key`; `Ok(None)` when the key is absent.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Delete `key`; deleting an absent key succeeds.
    fn remove(&self, key: &str) -> Result<()>;
}

/// Write-only system clipboard.
pub trait ClipboardSink {
    fn copy_text(&mut self, text: &str) -> Result<()>;
}

/// Produces a fresh wallet session. Key derivation lives entirely behind this trait.
pub trait AccountCreator: Send + Sync {
    fn create_account(&self) -> Result<Session>;
}
