use eframe::egui;

use crate::egui_app::render::ProfilePlan;
use crate::egui_app::state::Action;
use crate::egui_app::theme::{styles, Palette};

const AVATAR_RADIUS: f32 = 36.0;

pub fn render(ui: &mut egui::Ui, colors: &Palette, profile: &ProfilePlan, actions: &mut Vec<Action>) {
    styles::card_frame(colors).show(ui, |ui| {
        ui.set_width(320.0);
        ui.vertical_centered(|ui| match profile {
            ProfilePlan::Profile { initials, name, email } => {
                let size = egui::vec2(AVATAR_RADIUS * 2.0, AVATAR_RADIUS * 2.0);
                let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
                let painter = ui.painter();
                painter.circle_filled(rect.center(), AVATAR_RADIUS, colors.accent);
                painter.text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    initials,
                    egui::FontId::proportional(26.0),
                    colors.on_accent,
                );

                ui.add_space(8.0);
                ui.label(egui::RichText::new(name).size(20.0).strong());
                ui.label(egui::RichText::new(email).color(colors.text_muted));
            }
            ProfilePlan::Placeholder(text) => {
                ui.label(egui::RichText::new(*text).color(colors.text_muted));
                if ui.button("Login").clicked() {
                    actions.push(Action::OpenAuth);
                }
            }
        });
    });
}
