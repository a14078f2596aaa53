//! # Logging and Diagnostics
//!
//! - **File-based logging**: structured logs to `logs/wallet-terminal.log` (daily rotation)
//! - **Error aggregation**: bounded history of recoverable failures with storm detection
//!
//! ## Usage
//!
//! ```rust,no_run
//! // Initialize at app startup
//! wallet_terminal::debug::init();
//!
//! tracing::info!(asset_count = 2, duration_ms = 180, "Prices fetched successfully");
//! ```
//!
//! ## Configuration
//!
//! Environment variables:
//! - `RUST_LOG`: Log level filter (default `wallet_terminal=info,warn`)
//! - `WALLET_LOG_DIR`: Log directory (default `logs`)
//! - `WALLET_LOG_STDERR`: Mirror logs to stderr (1=on)

pub mod config;
pub mod error_aggregator;
pub mod logger;

pub use config::DebugConfig;
pub use error_aggregator::{
    get_error_stats, get_recent_errors, log_error_stats, record_error, record_panic, record_warning, total_error_count,
    ErrorEntry, ErrorLevel,
};
pub use logger::init as init_logger;

/// Initialize logging. Call once at startup, before any other operation.
pub fn init() {
    init_logger();
}
