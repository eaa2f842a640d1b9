//! Theme Styling Functions
//!
//! Helpers applying the active palette to the egui context and building the
//! frames shared by the views.

use eframe::egui::{self, Color32, CornerRadius, Stroke};

use super::colors::{palette, Palette};
use crate::egui_app::types::Theme;

/// Apply the global theme to the egui context
pub fn apply_global_theme(ctx: &egui::Context, theme: Theme) {
    let colors = palette(theme);
    let mut visuals = match theme {
        Theme::Light => egui::Visuals::light(),
        Theme::Dark => egui::Visuals::dark(),
    };

    visuals.panel_fill = colors.background;
    visuals.window_fill = colors.surface;
    visuals.window_stroke = Stroke::new(1.0, colors.border);
    visuals.override_text_color = Some(colors.text);

    visuals.widgets.active.bg_fill = colors.accent;
    visuals.selection.bg_fill = colors.accent;
    visuals.selection.stroke = Stroke::new(1.0, colors.on_accent);

    ctx.set_visuals(visuals);
}

/// Create a frame style for the top bar
pub fn top_bar_frame(colors: &Palette) -> egui::Frame {
    egui::Frame::new()
        .fill(colors.top_bar)
        .stroke(Stroke::new(1.0, colors.border))
        .inner_margin(egui::Margin::symmetric(16, 10))
}

/// Create a frame style for the main content area
pub fn content_frame(colors: &Palette) -> egui::Frame {
    egui::Frame::new()
        .fill(colors.background)
        .inner_margin(egui::Margin::symmetric(24, 16))
}

/// Create a frame for product cards
pub fn card_frame(colors: &Palette) -> egui::Frame {
    egui::Frame::new()
        .fill(colors.surface)
        .stroke(Stroke::new(1.0, colors.border))
        .corner_radius(CornerRadius::same(10))
        .inner_margin(egui::Margin::same(12))
}

/// Create a frame for modal dialogs
pub fn modal_frame(colors: &Palette) -> egui::Frame {
    egui::Frame::new()
        .fill(colors.surface)
        .stroke(Stroke::new(1.0, colors.border))
        .corner_radius(CornerRadius::same(12))
        .inner_margin(egui::Margin::same(20))
        .shadow(egui::epaint::Shadow {
            offset: [0, 4],
            blur: 12,
            spread: 0,
            color: Color32::from_black_alpha(60),
        })
}
