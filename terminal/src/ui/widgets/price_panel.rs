//! # Price Panel Widget
//!
//! Asset selector and price card for the main screen.

use egui::{self, RichText};

use crate::app::state::Asset;
use crate::app::view::{FeedHealth, PriceCardView};
use crate::ui::theme::Theme;

/// Row of asset buttons. Returns the asset clicked this frame, if any.
pub fn render_asset_selector(ui: &mut egui::Ui, selected: Asset) -> Option<Asset> {
    let mut picked = None;
    ui.horizontal(|ui| {
        for asset in Asset::ALL {
            if ui.selectable_label(asset == selected, asset.display_name()).clicked() {
                picked = Some(asset);
            }
        }
    });
    picked
}

/// Price card for the selected asset.
pub fn render_price_card(ui: &mut egui::Ui, card: &PriceCardView, theme: &Theme) {
    ui.group(|ui| {
        ui.set_width(ui.available_width());

        ui.horizontal(|ui| {
            ui.label(RichText::new(card.name).strong());
            ui.colored_label(theme.dim(), card.asset.ticker());
        });

        ui.add_space(4.0);
        ui.label(RichText::new(&card.price).size(32.0).strong());

        ui.horizontal(|ui| {
            ui.colored_label(theme.change_color(card.change.direction), &card.change.text);
            ui.colored_label(theme.dim(), "24h");
        });

        ui.add_space(4.0);
        ui.horizontal(|ui| {
            ui.colored_label(theme.dim(), "Volume (24h)");
            ui.label(&card.volume);
        });

        ui.add_space(4.0);
        ui.horizontal(|ui| {
            ui.colored_label(theme.dim(), &card.updated);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                render_health(ui, &card.health, theme);
            });
        });
    });
}

fn render_health(ui: &mut egui::Ui, health: &FeedHealth, theme: &Theme) {
    let color = match health {
        FeedHealth::Waiting => theme.dim(),
        FeedHealth::Live => theme.colors.green,
        FeedHealth::Stale { .. } => theme.colors.yellow,
    };
    ui.colored_label(color, format!("● {}", health.label()));
}
