//! # Application Events
//!
//! Results sent from background tasks to the UI thread.

use crate::app::state::PriceBoard;

/// Async task results sent to the main thread
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// A fetch succeeded and the board was replaced
    PricesUpdated(PriceBoard),
    /// A fetch failed; the previous board is still shown
    PriceFetchFailed {
        /// Poller activation that produced the failure
        generation: u64,
        error: String,
        consecutive_failures: u32,
    },
}
