//! # PedalUps Wallet Terminal - Library Root
//!
//! A **native desktop wallet shell**: create a demo wallet, keep the session
//! across restarts, watch live ETH and SOL prices, and export the address or
//! recovery phrase. No signing or broadcasting happens here.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              wallet-terminal (this crate)              │
//! ├────────────────────────────────────────────────────────┤
//! │  egui / eframe  - Immediate-mode GUI, native window    │
//! │  egui-notify    - Toast notifications                  │
//! │  Tokio          - Background price polling             │
//! │  Reqwest        - Market data over HTTPS               │
//! └────────────────────────────────────────────────────────┘
//!          │                              │
//!          │ HTTPS                        │ files
//!          ▼                              ▼
//! ┌─────────────────┐          ┌─────────────────────────┐
//! │  Price API      │          │   storage_dir/          │
//! │  (simple/price) │          │   wallet.json           │
//! └─────────────────┘          └─────────────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **core**: error taxonomy, service traits, configuration
//! - **app**: session store, navigation state machine, price feed poller,
//!   view snapshot, and the [`App`] coordinator
//! - **services**: HTTP price client, key-value stores, clipboard, demo
//!   account creator
//! - **ui**: egui screens and widgets drawn from the view snapshot
//! - **utils**: display formatting and the shared Tokio runtime
//! - **debug**: logging setup and error aggregation
//!
//! ```text
//! main.rs
//!   │
//!   ├── app (coordinator, session, navigation, poller)
//!   │   ├── core::service (traits)
//!   │   └── services::* (implementations)
//!   │
//!   └── ui (rendering)
//!       ├── screens::* (landing, main, token details, recover)
//!       ├── widgets::* (header, price panel, notifications)
//!       └── theme
//! ```
//!
//! ## Core Concepts
//!
//! ### Events
//!
//! The poller runs on the Tokio runtime and reports through an
//! `async_channel` of [`AppEvent`]s. The GUI thread drains the channel once
//! per frame in [`App::on_tick`].
//!
//! ### Screens
//!
//! Without a session only the first-run screen exists. With one, the main
//! screen is home and Token Details and Recover Account are one step away.
//!
//! ## Testing
//!
//! ```bash
//! cargo test --workspace
//! ```

pub mod app;
pub mod core;
pub mod debug;
pub mod services;
pub mod ui;
pub mod utils;

pub use app::{App, AppEvent, Screen, WalletView};
pub use core::{AppError, Result};
