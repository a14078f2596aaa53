//! Wallet terminal binary: logging, configuration, services, window.

use std::process::ExitCode;
use std::sync::Arc;

use wallet_terminal::app::{App, AppServices};
use wallet_terminal::core::WalletConfig;
use wallet_terminal::debug;
use wallet_terminal::services::{ApiClient, DemoAccountCreator, EguiClipboard, FileStore};
use wallet_terminal::ui::screens::landing::PRODUCT_NAME;
use wallet_terminal::ui::WalletWindow;
use wallet_terminal::utils::runtime::TOKIO_RT;

fn main() -> ExitCode {
    debug::init();

    let config = WalletConfig::load();
    tracing::info!(
        price_api_url = %config.price_api_url,
        storage_dir = %config.storage_dir.display(),
        "Starting {}",
        PRODUCT_NAME
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([420.0, 680.0])
            .with_min_inner_size([360.0, 520.0])
            .with_title(PRODUCT_NAME),
        ..Default::default()
    };

    let result = eframe::run_native(
        PRODUCT_NAME,
        options,
        Box::new(move |cc| {
            // The clipboard needs the window's egui context, so services are built here.
            let services = AppServices {
                storage: Arc::new(FileStore::new(&config.storage_dir)),
                prices: Arc::new(ApiClient::new(&config)),
                accounts: Arc::new(DemoAccountCreator::new()),
                clipboard: Box::new(EguiClipboard::new(cc.egui_ctx.clone())),
            };
            let app = App::new(config, services, TOKIO_RT.handle().clone());
            Ok(Box::new(WalletWindow::new(cc, app)))
        }),
    );

    debug::log_error_stats();

    match result {
        Ok(()) => {
            tracing::info!("Window closed, exiting");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to start window");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
