//! # Main Screen
//!
//! Header with menu, asset selector, price card, and transfer buttons.

use egui;

use crate::app::view::{MainView, MENU_ENTRIES};
use crate::app::App;
use crate::ui::theme::Theme;
use crate::ui::widgets::header::{render_header, HeaderButton};
use crate::ui::widgets::price_panel;

pub fn render(ui: &mut egui::Ui, view: &MainView, app: &mut App, theme: &Theme) {
    if render_header(ui, &view.header, HeaderButton::Menu { open: view.menu_open }, theme) {
        app.toggle_menu();
    }

    if view.menu_open {
        render_menu(ui, app);
        ui.separator();
    }

    ui.add_space(8.0);
    if let Some(asset) = price_panel::render_asset_selector(ui, view.selected_asset) {
        app.select_asset(asset);
    }

    ui.add_space(8.0);
    price_panel::render_price_card(ui, &view.price_card, theme);

    ui.add_space(16.0);
    ui.columns(2, |columns| {
        let width = columns[0].available_width();
        if columns[0]
            .add(egui::Button::new(view.send_label.as_str()).min_size(egui::vec2(width, 36.0)))
            .clicked()
        {
            app.send();
        }
        let width = columns[1].available_width();
        if columns[1]
            .add(egui::Button::new(view.receive_label.as_str()).min_size(egui::vec2(width, 36.0)))
            .clicked()
        {
            app.receive();
        }
    });

    if ui.input(|i| i.key_pressed(egui::Key::Escape)) && view.menu_open {
        app.toggle_menu();
    }
}

fn render_menu(ui: &mut egui::Ui, app: &mut App) {
    ui.vertical(|ui| {
        for entry in MENU_ENTRIES {
            if ui.selectable_label(false, entry.label()).clicked() {
                app.select_menu_entry(entry);
            }
        }
    });
}
