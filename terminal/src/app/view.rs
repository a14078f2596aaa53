//! # View Snapshot
//!
//! Everything a frame needs, derived in one pass from the session, the
//! navigation state, and the price feed. Renderers read only this, so every
//! widget in a frame sees the same data.

use shared::utils::truncate_address;

use crate::app::navigation::{MenuDestination, Navigation};
use crate::app::session::Session;
use crate::app::state::{Asset, FeedStatus, PriceSnapshot, Screen};
use crate::app::tasks::PriceFeedState;
use crate::utils::format::{format_change, format_price, format_time, format_volume, ChangeIndicator};

/// Menu entries on the main screen, in display order.
pub const MENU_ENTRIES: [MenuEntry; 3] = [
    MenuEntry::Open(MenuDestination::TokenDetails),
    MenuEntry::Open(MenuDestination::RecoverAccount),
    MenuEntry::Logout,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEntry {
    Open(MenuDestination),
    Logout,
}

impl MenuEntry {
    pub fn label(&self) -> &'static str {
        match self {
            MenuEntry::Open(dest) => dest.label(),
            MenuEntry::Logout => "Logout",
        }
    }
}

/// Price feed health as shown under the card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedHealth {
    /// No fetch has completed yet
    Waiting,
    Live,
    Stale { failures: u32 },
}

impl FeedHealth {
    fn from_status(status: &FeedStatus) -> Self {
        match (status.last_success, status.consecutive_failures) {
            (_, failures) if failures > 0 => FeedHealth::Stale { failures },
            (Some(_), _) => FeedHealth::Live,
            (None, _) => FeedHealth::Waiting,
        }
    }

    pub fn label(&self) -> String {
        match self {
            FeedHealth::Waiting => "Connecting...".to_string(),
            FeedHealth::Live => "Live".to_string(),
            FeedHealth::Stale { failures: 1 } => "Stale (1 failed update)".to_string(),
            FeedHealth::Stale { failures } => format!("Stale ({} failed updates)", failures),
        }
    }
}

/// Formatted price card for the selected asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceCardView {
    pub asset: Asset,
    pub name: &'static str,
    pub price: String,
    pub change: ChangeIndicator,
    pub volume: String,
    /// `Updated: 3:04:05 PM`
    pub updated: String,
    pub health: FeedHealth,
}

impl PriceCardView {
    pub fn new(asset: Asset, snapshot: &PriceSnapshot, status: &FeedStatus) -> Self {
        Self {
            asset,
            name: asset.display_name(),
            price: format_price(snapshot.spot_price_usd),
            change: format_change(snapshot.change_24h_pct),
            volume: format_volume(snapshot.volume_24h_usd),
            updated: format!("Updated: {}", format_time(snapshot.observed_at)),
            health: FeedHealth::from_status(status),
        }
    }
}

/// Title bar shared by the post-session screens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderView {
    pub title: &'static str,
    pub short_address: String,
    pub balance: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MainView {
    pub header: HeaderView,
    pub menu_open: bool,
    pub selected_asset: Asset,
    pub price_card: PriceCardView,
    pub send_label: String,
    pub receive_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenDetailsView {
    pub header: HeaderView,
    pub address: String,
    pub balance: String,
    pub explorer_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecoverAccountView {
    pub header: HeaderView,
    /// Numbered for display, in phrase order
    pub words: Vec<(usize, String)>,
}

/// The screen to draw this frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalletView {
    FirstRun,
    Main(MainView),
    TokenDetails(TokenDetailsView),
    RecoverAccount(RecoverAccountView),
}

/// Inputs for [`WalletView::build`].
pub struct ViewInputs<'a> {
    pub session: Option<&'a Session>,
    pub navigation: &'a Navigation,
    pub prices: &'a PriceFeedState,
    pub menu_open: bool,
    pub explorer_base: &'a str,
}

fn balance_text(session: &Session) -> String {
    format!("{} {}", session.balance(), Asset::Ethereum.ticker())
}

impl WalletView {
    pub fn build(inputs: ViewInputs<'_>) -> Self {
        let (Some(session), Some(nav)) = (inputs.session, inputs.navigation.active()) else {
            return WalletView::FirstRun;
        };

        let header = HeaderView {
            title: nav.screen().title(),
            short_address: truncate_address(session.address()),
            balance: balance_text(session),
        };

        match nav.screen() {
            Screen::Main => {
                let asset = nav.selected_asset();
                WalletView::Main(MainView {
                    header,
                    menu_open: inputs.menu_open,
                    selected_asset: asset,
                    price_card: PriceCardView::new(asset, inputs.prices.board.get(asset), &inputs.prices.status),
                    send_label: format!("Send {}", asset.display_name()),
                    receive_label: format!("Receive {}", asset.display_name()),
                })
            }
            Screen::TokenDetails => WalletView::TokenDetails(TokenDetailsView {
                header,
                address: session.address().to_string(),
                balance: balance_text(session),
                explorer_url: format!("{}{}", inputs.explorer_base, session.address()),
            }),
            Screen::RecoverAccount => WalletView::RecoverAccount(RecoverAccountView {
                header,
                words: session
                    .seed_phrase()
                    .words()
                    .iter()
                    .enumerate()
                    .map(|(i, w)| (i + 1, w.clone()))
                    .collect(),
            }),
        }
    }

    /// Post-session screen, `None` for first run.
    pub fn screen(&self) -> Option<Screen> {
        match self {
            WalletView::FirstRun => None,
            WalletView::Main(_) => Some(Screen::Main),
            WalletView::TokenDetails(_) => Some(Screen::TokenDetails),
            WalletView::RecoverAccount(_) => Some(Screen::RecoverAccount),
        }
    }
}
