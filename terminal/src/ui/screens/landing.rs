//! # Landing Screen
//!
//! First-run screen. The only action is creating an account.

use egui::{self, RichText};

use crate::app::App;
use crate::ui::theme::Theme;

/// Product name shown on the landing screen and in the window title.
pub const PRODUCT_NAME: &str = "PedalUps Wallet";

pub fn render(ui: &mut egui::Ui, app: &mut App, theme: &Theme) {
    ui.vertical_centered(|ui| {
        ui.add_space(120.0);
        ui.label(RichText::new(PRODUCT_NAME).size(32.0).strong());
        ui.add_space(8.0);
        ui.colored_label(theme.dim(), "Track prices and keep your recovery phrase at hand.");
        ui.add_space(40.0);

        let button = egui::Button::new(RichText::new("Create Account").size(18.0))
            .fill(theme.colors.accent)
            .min_size(egui::vec2(220.0, 44.0));
        if ui.add(button).clicked() {
            app.create_account();
        }
    });

    if ui.input(|i| i.key_pressed(egui::Key::Enter)) {
        app.create_account();
    }
}
