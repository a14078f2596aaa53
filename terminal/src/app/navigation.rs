//! # Navigation Controller
//!
//! Finite state machine over the wallet screens, gated by session presence.
//!
//! ```text
//!              session_started()
//!   Initial ───────────────────────► Active { Main }
//!      ▲                              │  ▲
//!      │ end_session() (logout)       │  │ Back
//!      │                   Open(dest) ▼  │
//!      └──────────────────── Active { TokenDetails | RecoverAccount }
//! ```
//!
//! Screen-changing operations exist only on [`SessionNav`], which is reachable
//! only through [`Navigation::Active`], so no screen can be entered without a
//! session. Entering and leaving the active subgraph is crate-private: the
//! coordinator pairs it with the Session Store.

use crate::app::state::{Asset, Screen};

/// Destinations offered by the main screen's menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuDestination {
    TokenDetails,
    RecoverAccount,
}

impl MenuDestination {
    pub fn screen(&self) -> Screen {
        match self {
            MenuDestination::TokenDetails => Screen::TokenDetails,
            MenuDestination::RecoverAccount => Screen::RecoverAccount,
        }
    }

    pub fn label(&self) -> &'static str {
        self.screen().title()
    }
}

/// User-initiated moves within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    Open(MenuDestination),
    Back,
}

/// Transition table for the post-session subgraph.
///
/// `None` means the action is not available on `from`.
pub fn transition(from: Screen, action: NavAction) -> Option<Screen> {
    match (from, action) {
        (Screen::Main, NavAction::Open(dest)) => Some(dest.screen()),
        (Screen::TokenDetails | Screen::RecoverAccount, NavAction::Back) => Some(Screen::Main),
        (Screen::Main, NavAction::Back) => None,
        (Screen::TokenDetails | Screen::RecoverAccount, NavAction::Open(_)) => None,
    }
}

/// Navigation state while a session exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionNav {
    screen: Screen,
    selected_asset: Asset,
}

impl SessionNav {
    fn new() -> Self {
        Self {
            screen: Screen::Main,
            selected_asset: Asset::default(),
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn selected_asset(&self) -> Asset {
        self.selected_asset
    }

    /// Apply `action`; returns whether the screen changed.
    pub fn apply(&mut self, action: NavAction) -> bool {
        match transition(self.screen, action) {
            Some(next) => {
                tracing::info!(from = ?self.screen, to = ?next, "Screen transition");
                self.screen = next;
                true
            }
            None => {
                tracing::debug!(screen = ?self.screen, action = ?action, "Ignoring unavailable navigation action");
                false
            }
        }
    }

    pub fn open(&mut self, destination: MenuDestination) -> bool {
        self.apply(NavAction::Open(destination))
    }

    pub fn back(&mut self) -> bool {
        self.apply(NavAction::Back)
    }

    /// Change the asset shown on the price card. Independent of the screen.
    pub fn select_asset(&mut self, asset: Asset) {
        if self.selected_asset != asset {
            tracing::debug!(asset = asset.api_id(), "Selected asset");
        }
        self.selected_asset = asset;
    }
}

/// Top-level navigation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Navigation {
    /// No session: the first-run screen
    #[default]
    Initial,
    Active(SessionNav),
}

impl Navigation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter the main screen with the default asset selected.
    ///
    /// Called when the Session Store goes from empty to holding a session.
    pub(crate) fn session_started(&mut self) {
        if matches!(self, Navigation::Active(_)) {
            tracing::warn!("Session started while another was active, resetting navigation");
        }
        *self = Navigation::Active(SessionNav::new());
        tracing::info!(to = ?Screen::Main, "Screen transition");
    }

    /// Return to the first-run screen. Only the logout intent calls this.
    pub(crate) fn end_session(&mut self) {
        if let Navigation::Active(nav) = self {
            tracing::info!(from = ?nav.screen, "Returning to first-run screen");
        }
        *self = Navigation::Initial;
    }

    pub fn is_initial(&self) -> bool {
        matches!(self, Navigation::Initial)
    }

    pub fn active(&self) -> Option<&SessionNav> {
        match self {
            Navigation::Active(nav) => Some(nav),
            Navigation::Initial => None,
        }
    }

    pub fn active_mut(&mut self) -> Option<&mut SessionNav> {
        match self {
            Navigation::Active(nav) => Some(nav),
            Navigation::Initial => None,
        }
    }

    /// Current post-session screen, `None` on the first-run screen.
    pub fn current_screen(&self) -> Option<Screen> {
        self.active().map(SessionNav::screen)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCREENS: [Screen; 3] = [Screen::Main, Screen::TokenDetails, Screen::RecoverAccount];
    const ACTIONS: [NavAction; 3] = [
        NavAction::Open(MenuDestination::TokenDetails),
        NavAction::Open(MenuDestination::RecoverAccount),
        NavAction::Back,
    ];

    #[test]
    fn test_transition_table_is_exhaustive() {
        let allowed: Vec<(Screen, NavAction, Screen)> = SCREENS
            .iter()
            .flat_map(|&s| ACTIONS.iter().filter_map(move |&a| transition(s, a).map(|t| (s, a, t))))
            .collect();

        assert_eq!(
            allowed,
            vec![
                (Screen::Main, NavAction::Open(MenuDestination::TokenDetails), Screen::TokenDetails),
                (Screen::Main, NavAction::Open(MenuDestination::RecoverAccount), Screen::RecoverAccount),
                (Screen::TokenDetails, NavAction::Back, Screen::Main),
                (Screen::RecoverAccount, NavAction::Back, Screen::Main),
            ]
        );
    }

    #[test]
    fn test_session_started_lands_on_main() {
        let mut nav = Navigation::new();
        assert!(nav.is_initial());
        assert_eq!(nav.current_screen(), None);

        nav.session_started();
        assert_eq!(nav.current_screen(), Some(Screen::Main));
    }

    #[test]
    fn test_menu_screens_only_reachable_from_main() {
        let mut nav = Navigation::new();
        nav.session_started();
        let session = nav.active_mut().unwrap();

        assert!(session.open(MenuDestination::TokenDetails));
        assert!(!session.open(MenuDestination::RecoverAccount));
        assert_eq!(session.screen(), Screen::TokenDetails);

        assert!(session.back());
        assert!(!session.back());
        assert_eq!(session.screen(), Screen::Main);
    }

    #[test]
    fn test_selected_asset_survives_screen_changes() {
        let mut nav = Navigation::new();
        nav.session_started();
        let session = nav.active_mut().unwrap();
        session.select_asset(Asset::Solana);

        session.open(MenuDestination::TokenDetails);
        session.back();
        assert_eq!(session.selected_asset(), Asset::Solana);
    }

    #[test]
    fn test_end_session_resets_everything() {
        let mut nav = Navigation::new();
        nav.session_started();
        let session = nav.active_mut().unwrap();
        session.select_asset(Asset::Solana);
        session.open(MenuDestination::RecoverAccount);

        nav.end_session();
        assert!(nav.is_initial());
        assert!(nav.active_mut().is_none());

        nav.session_started();
        let session = nav.active().unwrap();
        assert_eq!(session.screen(), Screen::Main);
        assert_eq!(session.selected_asset(), Asset::Ethereum);
    }

    #[test]
    fn test_menu_labels() {
        assert_eq!(MenuDestination::TokenDetails.label(), "Token Details");
        assert_eq!(MenuDestination::RecoverAccount.label(), "Recover Account");
    }
}
