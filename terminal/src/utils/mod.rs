//! # Utility Functions
//!
//! Shared utility functions used across the wallet terminal.
//!
//! ## Modules
//!
//! - **[`format`]**: Display formatting for prices, volumes, changes, and times
//! - **[`runtime`]**: Process-wide Tokio runtime for background work
//!
//! ## Related Modules
//!
//! - [`shared::utils`]: Cross-crate utilities (address truncation)

pub mod format;
pub mod runtime;

pub use format::{format_change, format_price, format_time, format_volume, ChangeDirection, ChangeIndicator};
