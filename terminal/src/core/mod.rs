//! # Core Abstractions
//!
//! Error types, service traits, and configuration used throughout the wallet
//! terminal.
//!
//! ## Modules
//!
//! - **[`error`]**: Application error types (`AppError`, `Result<T>`)
//! - **[`service`]**: Traits at the external seams (`PriceSource`,
//!   `KeyValueStore`, `ClipboardSink`, `AccountCreator`)
//! - **[`config`]**: Runtime configuration (`WalletConfig`)
//!
//! ## Dependency Injection
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use wallet_terminal::core::service::PriceSource;
//! use wallet_terminal::services::api::ApiClient;
//! use wallet_terminal::core::config::WalletConfig;
//!
//! let config = WalletConfig::default();
//! let prices: Arc<dyn PriceSource> = Arc::new(ApiClient::new(&config));
//! ```

pub mod config;
pub mod error;
pub mod service;

pub use config::WalletConfig;
pub use error::{AppError, Result};
pub use service::{AccountCreator, ClipboardSink, KeyValueStore, PriceSource};
