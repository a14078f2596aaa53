//! # Data Transfer Objects (DTOs)
//!
//! ## Module Organization
//!
//! - [`wallet`] - the serialized wallet session kept in durable storage
//! - [`market`] - quotes returned by the simple-price endpoint
//!
//! ## Example JSON
//!
//! ### Durable wallet record (storage key `wallet`)
//!
//! ```text
//! {
//!   "account": {
//!     "privateKey": "0x4c0883a69102937d6231471b5dbb6204fe512961708279f0b1f5e3e9e1b0c3a1",
//!     "address": "0x52908400098527886E0F7030069857D2E4169EE7",
//!     "balance": "0"
//!   },
//!   "seedPhrase": "ripple lamp ocean ... velvet"
//! }
//! ```
//!
//! ### Simple-price response
//!
//! ```text
//! {
//!   "ethereum": {
//!     "usd": 3120.55,
//!     "usd_24h_vol": 18234567890.12,
//!     "usd_24h_change": -1.84,
//!     "last_updated_at": 1760600000
//!   },
//!   "solana": { ... }
//! }
//! ```

pub mod market;
pub mod wallet;

pub use market::*;
pub use wallet::*;
