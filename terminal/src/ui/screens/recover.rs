//! # Recover Account Screen
//!
//! Shows the recovery phrase as a numbered grid with a copy button.

use egui::{self, RichText};

use crate::app::view::RecoverAccountView;
use crate::app::App;
use crate::ui::theme::Theme;
use crate::ui::widgets::header::{render_header, HeaderButton};

const COLUMNS: usize = 3;

pub fn render(ui: &mut egui::Ui, view: &RecoverAccountView, app: &mut App, theme: &Theme) {
    if render_header(ui, &view.header, HeaderButton::Back, theme) {
        app.back();
    }

    ui.add_space(8.0);
    ui.colored_label(
        theme.colors.yellow,
        "Anyone with these words can take your funds. Never share them.",
    );
    ui.add_space(8.0);

    ui.group(|ui| {
        ui.set_width(ui.available_width());
        egui::Grid::new("recovery_words")
            .num_columns(COLUMNS)
            .spacing([16.0, 8.0])
            .show(ui, |ui| {
                for (i, (number, word)) in view.words.iter().enumerate() {
                    ui.horizontal(|ui| {
                        ui.colored_label(theme.dim(), format!("{:>2}.", number));
                        ui.label(RichText::new(word).monospace());
                    });
                    if (i + 1) % COLUMNS == 0 {
                        ui.end_row();
                    }
                }
            });
    });

    ui.add_space(12.0);
    if ui.button("Copy Recovery Phrase").clicked() {
        app.copy_seed_phrase();
    }

    if ui.input(|i| i.key_pressed(egui::Key::Escape)) {
        app.back();
    }
}
