//! # Application Orchestrator
//!
//! The [`App`] struct is the screen coordinator: it composes the Session
//! Store, the Navigation Controller, and the Price Feed into the
//! [`WalletView`] drawn each frame, and turns user actions into intents on
//! those owners.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Main Thread (egui)                       │
//! │  ┌──────────────────────────────────────────────────────┐   │
//! │  │  App (coordinator)                                   │   │
//! │  │  - on_tick()   drains AppEvents                      │   │
//! │  │  - view()      builds the frame snapshot             │   │
//! │  │  - intents     create_account, logout, open, ...     │   │
//! │  └──────┬───────────────┬───────────────────┬───────────┘   │
//! │         │               │                   │               │
//! │   SessionStore      Navigation          PriceFeed           │
//! │   (durable KV)      (state machine)     (board + poller)    │
//! └─────────────────────────────────────────────┬───────────────┘
//!                                               │ async_channel
//! ┌─────────────────────────────────────────────▼───────────────┐
//! │              Tokio runtime                                  │
//! │  price poller: fetch now, then every interval               │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Single Writer
//!
//! Each piece of state has exactly one owner. The session changes only
//! through [`SessionStore`], the screen only through [`Navigation`], the
//! board only through the poller. Renderers get copies.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use wallet_terminal::app::{App, AppServices};
//! use wallet_terminal::core::WalletConfig;
//! use wallet_terminal::services::{ApiClient, DemoAccountCreator, FileStore, MemoryClipboard};
//! use wallet_terminal::utils::runtime::TOKIO_RT;
//!
//! let config = WalletConfig::load();
//! let services = AppServices {
//!     storage: Arc::new(FileStore::new(&config.storage_dir)),
//!     prices: Arc::new(ApiClient::new(&config)),
//!     accounts: Arc::new(DemoAccountCreator::new()),
//!     clipboard: Box::new(MemoryClipboard::new()),
//! };
//! let mut app = App::new(config, services, TOKIO_RT.handle().clone());
//!
//! // Every frame:
//! app.on_tick();
//! let view = app.view();
//! ```

pub mod events;
pub mod navigation;
pub mod session;
pub mod state;
pub mod tasks;
pub mod view;

pub use events::AppEvent;
pub use navigation::{MenuDestination, NavAction, Navigation, SessionNav};
pub use session::{PrivateKey, SeedPhrase, Session, SessionStore};
pub use state::*;
pub use tasks::{PriceFeed, PriceFeedState};
pub use view::{MenuEntry, WalletView};

use async_channel::{unbounded, Receiver, Sender};
use std::sync::Arc;
use tokio::runtime::Handle;

use crate::core::config::WalletConfig;
use crate::core::service::{AccountCreator, ClipboardSink, KeyValueStore, PriceSource};
use crate::debug::error_aggregator;
use view::ViewInputs;

/// External collaborators the coordinator is built from.
pub struct AppServices {
    pub storage: Arc<dyn KeyValueStore>,
    pub prices: Arc<dyn PriceSource>,
    pub accounts: Arc<dyn AccountCreator>,
    pub clipboard: Box<dyn ClipboardSink>,
}

/// Screen coordinator.
///
/// Owns no state of its own beyond UI transients: the menu flag and the
/// queue of notifications waiting to be shown.
pub struct App {
    config: WalletConfig,
    sessions: SessionStore,
    navigation: Navigation,
    prices: PriceFeed,
    accounts: Arc<dyn AccountCreator>,
    clipboard: Box<dyn ClipboardSink>,
    runtime: Handle,

    /// Channel receiver for background results, polled in `on_tick()`.
    event_rx: Receiver<AppEvent>,
    /// Cloned into background tasks.
    event_tx: Sender<AppEvent>,

    menu_open: bool,
    pending_notifications: Vec<Notice>,
}

impl App {
    /// Build the coordinator and restore any stored session.
    ///
    /// A restored session lands on the main screen and starts the poller;
    /// otherwise the first-run screen is shown.
    pub fn new(config: WalletConfig, services: AppServices, runtime: Handle) -> Self {
        let (event_tx, event_rx) = unbounded();
        let prices = PriceFeed::new(services.prices, config.poll_interval());

        let mut app = App {
            sessions: SessionStore::new(services.storage),
            navigation: Navigation::new(),
            prices,
            accounts: services.accounts,
            clipboard: services.clipboard,
            runtime,
            event_rx,
            event_tx,
            menu_open: false,
            pending_notifications: Vec::new(),
            config,
        };

        if app.sessions.restore_session() {
            app.start_session();
        }

        tracing::info!(
            has_session = app.sessions.has_session(),
            poll_interval_secs = app.prices.interval().as_secs(),
            "App initialized"
        );
        app
    }

    fn start_session(&mut self) {
        self.menu_open = false;
        self.navigation.session_started();
        self.prices.activate(&self.runtime, self.event_tx.clone());
    }

    fn notify(&mut self, level: NoticeLevel, message: impl Into<String>) {
        self.pending_notifications.push(Notice::new(level, message));
    }

    /// Process background results. Returns whether anything changed.
    pub fn on_tick(&mut self) -> bool {
        let mut changed = false;
        while let Ok(event) = self.event_rx.try_recv() {
            self.handle_event(event);
            changed = true;
        }
        changed
    }

    fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::PricesUpdated(_) => {
                tracing::trace!("Price board refreshed");
            }
            AppEvent::PriceFetchFailed { generation, error, consecutive_failures } => {
                if self.prices.active_generation() != Some(generation) {
                    tracing::debug!(generation = generation, "Ignoring failure from a stopped poller");
                    return;
                }
                // Notify once per failure streak; the card shows the count afterwards.
                if consecutive_failures == 1 {
                    tracing::debug!(error = %error, "Price feed went stale");
                    self.notify(NoticeLevel::Warning, "Price update failed, showing last known prices");
                }
            }
        }
    }

    /// Snapshot for this frame.
    pub fn view(&self) -> WalletView {
        let prices = self.prices.snapshot();
        WalletView::build(ViewInputs {
            session: self.sessions.session(),
            navigation: &self.navigation,
            prices: &prices,
            menu_open: self.menu_open,
            explorer_base: &self.config.explorer_url,
        })
    }

    /// Drain notifications queued since the last call.
    pub fn take_notifications(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.pending_notifications)
    }

    // Intents ------------------------------------------------------------

    /// Generate a wallet and enter the main screen.
    pub fn create_account(&mut self) {
        if self.sessions.has_session() {
            tracing::warn!("Create account ignored, a session is already active");
            return;
        }

        let session = match self.accounts.create_account() {
            Ok(session) => session,
            Err(e) => {
                error_aggregator::record_error(format!("Account creation failed: {}", e), None);
                self.notify(NoticeLevel::Error, format!("Could not create wallet: {}", e));
                return;
            }
        };

        match self.sessions.create_session(session) {
            Ok(()) => self.notify(NoticeLevel::Success, "Wallet created"),
            Err(e) => {
                error_aggregator::record_warning(format!("Session not persisted: {}", e), None);
                self.notify(
                    NoticeLevel::Warning,
                    format!("Wallet created but not saved; it will be lost on exit ({})", e),
                );
            }
        }
        self.start_session();
    }

    /// Clear the session and return to the first-run screen.
    pub fn logout(&mut self) {
        if !self.sessions.has_session() && self.navigation.is_initial() {
            return;
        }
        self.menu_open = false;
        self.sessions.clear_session();
        self.navigation.end_session();
        self.prices.deactivate();
        // Results already queued belong to the ended session.
        while self.event_rx.try_recv().is_ok() {}
        tracing::info!("Logged out");
        self.notify(NoticeLevel::Info, "Logged out");
    }

    /// Open or close the main screen's menu.
    pub fn toggle_menu(&mut self) {
        if self.navigation.current_screen() == Some(Screen::Main) {
            self.menu_open = !self.menu_open;
        }
    }

    /// Act on a menu entry. Every entry closes the menu.
    pub fn select_menu_entry(&mut self, entry: MenuEntry) {
        match entry {
            MenuEntry::Open(destination) => self.open(destination),
            MenuEntry::Logout => self.logout(),
        }
    }

    pub fn open(&mut self, destination: MenuDestination) {
        self.menu_open = false;
        if let Some(nav) = self.navigation.active_mut() {
            nav.open(destination);
        }
    }

    pub fn back(&mut self) {
        self.menu_open = false;
        if let Some(nav) = self.navigation.active_mut() {
            nav.back();
        }
    }

    pub fn select_asset(&mut self, asset: Asset) {
        if let Some(nav) = self.navigation.active_mut() {
            nav.select_asset(asset);
        }
    }

    pub fn copy_address(&mut self) {
        let Some(address) = self.sessions.session().map(|s| s.address().to_string()) else {
            return;
        };
        self.copy_to_clipboard(&address, "Address copied to clipboard");
    }

    pub fn copy_seed_phrase(&mut self) {
        let Some(phrase) = self.sessions.session().map(|s| s.seed_phrase().to_phrase()) else {
            return;
        };
        self.copy_to_clipboard(&phrase, "Recovery phrase copied to clipboard");
    }

    fn copy_to_clipboard(&mut self, text: &str, success: &str) {
        match self.clipboard.copy_text(text) {
            Ok(()) => self.notify(NoticeLevel::Info, success),
            Err(e) => {
                error_aggregator::record_error(format!("Clipboard copy failed: {}", e), None);
                self.notify(NoticeLevel::Error, format!("Copy failed: {}", e));
            }
        }
    }

    /// Send intent for the selected asset. Transfers are not built here.
    pub fn send(&mut self) {
        self.transfer_intent("Send");
    }

    pub fn receive(&mut self) {
        self.transfer_intent("Receive");
    }

    fn transfer_intent(&mut self, kind: &str) {
        let Some(asset) = self.navigation.active().map(SessionNav::selected_asset) else {
            return;
        };
        tracing::info!(kind = kind, asset = asset.api_id(), "Transfer requested");
        self.notify(
            NoticeLevel::Info,
            format!("{} {} is not available in this wallet yet", kind, asset.display_name()),
        );
    }

    /// Explorer page for the session address.
    pub fn explorer_url(&self) -> Option<String> {
        self.sessions
            .session()
            .map(|s| format!("{}{}", self.config.explorer_url, s.address()))
    }

    /// Open the explorer page in the system browser.
    pub fn open_explorer(&mut self) {
        let Some(url) = self.explorer_url() else {
            return;
        };
        if let Err(e) = open::that(&url) {
            tracing::error!(url = %url, error = %e, "Failed to open explorer");
            self.notify(NoticeLevel::Error, format!("Could not open browser: {}", e));
        }
    }

    // Queries ------------------------------------------------------------

    pub fn has_session(&self) -> bool {
        self.sessions.has_session()
    }

    pub fn navigation(&self) -> &Navigation {
        &self.navigation
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn price_state(&self) -> PriceFeedState {
        self.prices.snapshot()
    }

    pub fn is_polling(&self) -> bool {
        self.prices.is_active()
    }

    pub fn config(&self) -> &WalletConfig {
        &self.config
    }
}
