//! # Token Details Screen

use egui::{self, RichText};

use crate::app::view::TokenDetailsView;
use crate::app::App;
use crate::ui::theme::Theme;
use crate::ui::widgets::header::{render_header, HeaderButton};

pub fn render(ui: &mut egui::Ui, view: &TokenDetailsView, app: &mut App, theme: &Theme) {
    if render_header(ui, &view.header, HeaderButton::Back, theme) {
        app.back();
    }

    ui.add_space(12.0);
    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.colored_label(theme.dim(), "Address");
        ui.horizontal_wrapped(|ui| {
            ui.label(RichText::new(&view.address).monospace());
        });
        if ui.button("Copy Address").clicked() {
            app.copy_address();
        }
    });

    ui.add_space(8.0);
    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.colored_label(theme.dim(), "Balance");
        ui.label(RichText::new(&view.balance).size(24.0).strong());
    });

    ui.add_space(12.0);
    if ui
        .link("View on Etherscan →")
        .on_hover_text(&view.explorer_url)
        .clicked()
    {
        app.open_explorer();
    }

    if ui.input(|i| i.key_pressed(egui::Key::Escape)) {
        app.back();
    }
}
