//! # Header Widget
//!
//! Title bar shared by the post-session screens: screen title on the left,
//! short address and balance on the right, plus a menu or back button.

use egui;

use crate::app::view::HeaderView;
use crate::ui::theme::Theme;

/// Leading control of the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderButton {
    /// Hamburger menu on the main screen
    Menu { open: bool },
    Back,
}

/// Render the header. Returns true when the leading button was clicked.
pub fn render_header(ui: &mut egui::Ui, header: &HeaderView, button: HeaderButton, theme: &Theme) -> bool {
    let mut clicked = false;

    ui.horizontal(|ui| {
        let label = match button {
            HeaderButton::Menu { open: false } => "☰",
            HeaderButton::Menu { open: true } => "✕",
            HeaderButton::Back => "← Back",
        };
        clicked = ui.button(label).clicked();

        ui.heading(header.title);

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.colored_label(theme.colors.text, &header.balance);
            ui.colored_label(theme.dim(), &header.short_address);
        });
    });
    ui.separator();

    clicked
}
