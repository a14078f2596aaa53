//! # GUI Rendering Framework
//!
//! [`WalletWindow`] is the eframe entry point. Each frame it drains
//! background results into the coordinator, turns queued notices into
//! toasts, builds one [`WalletView`] snapshot, and dispatches it to the
//! matching screen.

pub mod screens;
pub mod theme;
pub mod widgets;

use std::time::Duration;

use crate::app::{App, WalletView};
use theme::Theme;
use widgets::NotificationManager;

/// Repaint cadence while idle, so price updates show without input.
const IDLE_REPAINT: Duration = Duration::from_millis(500);

/// Native window hosting the wallet.
pub struct WalletWindow {
    app: App,
    notifications: NotificationManager,
    theme: Theme,
}

impl WalletWindow {
    pub fn new(cc: &eframe::CreationContext<'_>, app: App) -> Self {
        let theme = Theme::default();
        theme.apply(&cc.egui_ctx);

        Self {
            app,
            notifications: NotificationManager::new(),
            theme,
        }
    }

    pub fn app(&self) -> &App {
        &self.app
    }
}

impl eframe::App for WalletWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.app.on_tick() {
            ctx.request_repaint();
        }

        let view = self.app.view();
        egui::CentralPanel::default().show(ctx, |ui| {
            render(ui, &view, &mut self.app, &self.theme);
        });

        // Intents from this frame may have queued notices.
        for notice in self.app.take_notifications() {
            self.notifications.push(notice);
        }
        self.notifications.show(ctx);

        ctx.request_repaint_after(IDLE_REPAINT);
    }
}

/// Dispatch the frame's view to its screen.
pub fn render(ui: &mut egui::Ui, view: &WalletView, app: &mut App, theme: &Theme) {
    match view {
        WalletView::FirstRun => screens::landing::render(ui, app, theme),
        WalletView::Main(main) => screens::main::render(ui, main, app, theme),
        WalletView::TokenDetails(details) => screens::token_details::render(ui, details, app, theme),
        WalletView::RecoverAccount(recover) => screens::recover::render(ui, recover, app, theme),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::{Asset, PriceBoard};
    use crate::app::{AppServices, MenuDestination, Screen};
    use crate::core::config::WalletConfig;
    use crate::core::error::Result;
    use crate::core::service::PriceSource;
    use crate::services::{DemoAccountCreator, MemoryClipboard, MemoryStore};
    use async_trait::async_trait;
    use std::sync::Arc;
    use tokio::runtime::Handle;

    struct PlaceholderPrices;

    #[async_trait]
    impl PriceSource for PlaceholderPrices {
        async fn fetch_board(&self, _assets: &[Asset]) -> Result<PriceBoard> {
            Ok(PriceBoard::placeholder())
        }
    }

    fn app() -> App {
        let services = AppServices {
            storage: Arc::new(MemoryStore::new()),
            prices: Arc::new(PlaceholderPrices),
            accounts: Arc::new(DemoAccountCreator::new()),
            clipboard: Box::new(MemoryClipboard::new()),
        };
        App::new(WalletConfig::default(), services, Handle::current())
    }

    fn draw(ctx: &egui::Context, app: &mut App) {
        let theme = Theme::default();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            let view = app.view();
            egui::CentralPanel::default().show(ctx, |ui| render(ui, &view, app, &theme));
        });
    }

    #[tokio::test]
    async fn test_every_screen_renders_headless() {
        let ctx = egui::Context::default();
        let mut app = app();

        draw(&ctx, &mut app);
        assert_eq!(app.view(), WalletView::FirstRun);

        app.create_account();
        app.toggle_menu();
        draw(&ctx, &mut app);
        assert_eq!(app.view().screen(), Some(Screen::Main));

        for destination in [MenuDestination::TokenDetails, MenuDestination::RecoverAccount] {
            app.open(destination);
            draw(&ctx, &mut app);
            assert_eq!(app.view().screen(), Some(destination.screen()));
            app.back();
        }
    }
}
