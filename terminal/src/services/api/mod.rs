//! # Market Data API Client Module
//!
//! HTTP client for the public market data API.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs      - Module exports and documentation
//! ├── client.rs   - ApiClient struct, PriceSource implementation
//! └── market.rs   - Simple-price endpoint
//! ```

pub mod client;
pub mod market;

pub use client::ApiClient;
pub use market::*;
