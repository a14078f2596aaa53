//! # Shared Data Transfer Objects Library
//!
//! Wire formats shared between the wallet terminal core and anything else that
//! reads or writes its data.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects
//!   - **[`dto::wallet`]**: the durable wallet record written to local storage
//!   - **[`dto::market`]**: the simple-price response of the market data API
//! - **[`utils`]**: Shared utility functions
//!   - **[`utils::format_address`]**: Format wallet addresses for display
//!   - **[`utils::truncate_address`]**: Header-sized address
//!
//! ## Wire Format
//!
//! Both DTO families mirror formats defined by someone else, so field names
//! follow the external format rather than Rust naming:
//!
//! - The wallet record uses **camelCase** (`privateKey`, `seedPhrase`), the
//!   layout already present in users' storage.
//! - Market quotes use the provider's **snake_case** keys (`usd_24h_change`).
//!
//! ```rust
//! use shared::dto::wallet::StoredWallet;
//!
//! let raw = r#"{"account":{"privateKey":"0xab","address":"0x01","balance":"0"},"seedPhrase":"a b c"}"#;
//! let wallet: StoredWallet = serde_json::from_str(raw).unwrap();
//! assert_eq!(serde_json::to_string(&wallet).unwrap(), raw);
//! ```

pub mod dto;
pub mod utils;

pub use dto::*;
pub use utils::*;
