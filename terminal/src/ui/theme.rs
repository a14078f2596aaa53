//! # GUI Theme
//!
//! Dark wallet theme for egui: near-black panels, white text, an indigo
//! accent, and green/red for price direction.

use egui::Theme as EguiTheme;
use egui::{Color32, Context, Stroke, Visuals};

use crate::utils::format::ChangeDirection;

/// Wallet color palette
#[derive(Debug, Clone, PartialEq)]
pub struct WalletColors {
    /// Window background
    pub background: Color32,
    /// Card and button background
    pub surface: Color32,
    pub text: Color32,
    /// Primary accent (buttons, selection)
    pub accent: Color32,
    /// Accent used on hover
    pub accent_hover: Color32,
    pub border: Color32,
    /// Price up
    pub green: Color32,
    /// Price down and errors
    pub red: Color32,
    pub yellow: Color32,
    /// Secondary text
    pub gray: Color32,
}

impl Default for WalletColors {
    fn default() -> Self {
        WalletColors {
            background: Color32::from_rgb(17, 17, 24),    // #111118
            surface: Color32::from_rgb(30, 30, 42),       // #1E1E2A
            text: Color32::from_rgb(240, 240, 245),       // #F0F0F5
            accent: Color32::from_rgb(99, 102, 241),      // #6366F1
            accent_hover: Color32::from_rgb(129, 140, 248), // #818CF8
            border: Color32::from_rgb(55, 55, 70),        // #373746
            green: Color32::from_rgb(34, 197, 94),        // #22C55E
            red: Color32::from_rgb(239, 68, 68),          // #EF4444
            yellow: Color32::from_rgb(234, 179, 8),       // #EAB308
            gray: Color32::from_rgb(148, 148, 160),       // #9494A0
        }
    }
}

/// Application theme
#[derive(Debug, Clone, Default)]
pub struct Theme {
    pub colors: WalletColors,
}

impl Theme {
    /// Color for a 24h change marker
    pub fn change_color(&self, direction: ChangeDirection) -> Color32 {
        match direction {
            ChangeDirection::Up => self.colors.green,
            ChangeDirection::Down => self.colors.red,
        }
    }

    pub fn dim(&self) -> Color32 {
        self.colors.gray
    }

    pub fn visuals(&self) -> Visuals {
        let colors = &self.colors;
        let mut visuals = Visuals::dark();

        visuals.override_text_color = Some(colors.text);
        visuals.panel_fill = colors.background;
        visuals.window_fill = colors.surface;
        visuals.window_stroke = Stroke::new(1.0, colors.border);
        visuals.faint_bg_color = colors.surface;
        visuals.extreme_bg_color = colors.background;

        visuals.widgets.noninteractive.bg_fill = colors.surface;
        visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, colors.border);

        visuals.widgets.inactive.bg_fill = colors.surface;
        visuals.widgets.inactive.weak_bg_fill = colors.surface;
        visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, colors.border);

        visuals.widgets.hovered.weak_bg_fill = colors.accent;
        visuals.widgets.hovered.bg_fill = colors.accent;
        visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, colors.accent_hover);

        visuals.widgets.active.weak_bg_fill = colors.accent_hover;
        visuals.widgets.active.bg_fill = colors.accent_hover;
        visuals.widgets.active.bg_stroke = Stroke::new(1.0, colors.accent_hover);

        visuals.selection.bg_fill = colors.accent;
        visuals.selection.stroke = Stroke::new(1.0, colors.text);
        visuals.hyperlink_color = colors.accent_hover;

        visuals
    }

    /// Apply visuals and spacing to both egui themes.
    ///
    /// Uses `style_mut_of` rather than `set_visuals` so the choice survives
    /// a system theme switch.
    pub fn apply(&self, ctx: &Context) {
        let visuals = self.visuals();
        for egui_theme in [EguiTheme::Dark, EguiTheme::Light] {
            ctx.style_mut_of(egui_theme, |style| {
                style.visuals = visuals.clone();
                style.spacing.item_spacing = egui::Vec2::new(8.0, 6.0);
                style.spacing.button_padding = egui::Vec2::new(12.0, 6.0);
                style.spacing.interact_size = egui::Vec2::new(40.0, 28.0);
            });
        }
        tracing::debug!("Applied wallet theme");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_change_colors_are_distinct() {
        let theme = Theme::default();
        assert_eq!(theme.change_color(ChangeDirection::Up), theme.colors.green);
        assert_eq!(theme.change_color(ChangeDirection::Down), theme.colors.red);
        assert_ne!(theme.colors.green, theme.colors.red);
    }

    #[test]
    fn test_visuals_use_palette() {
        let theme = Theme::default();
        let visuals = theme.visuals();
        assert_eq!(visuals.panel_fill, theme.colors.background);
        assert_eq!(visuals.override_text_color, Some(theme.colors.text));
    }
}
