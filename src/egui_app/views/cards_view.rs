use eframe::egui;

use crate::egui_app::render::{Card, Panel};
use crate::egui_app::theme::{styles, Palette};

const CARD_WIDTH: f32 = 220.0;

pub fn render(ui: &mut egui::Ui, colors: &Palette, panel: &Panel) {
    match panel {
        Panel::Blank => {}
        Panel::Notice(text) => {
            ui.label(egui::RichText::new(text).color(colors.text_muted));
        }
        Panel::Cards(cards) => {
            ui.horizontal_wrapped(|ui| {
                ui.spacing_mut().item_spacing = egui::vec2(12.0, 12.0);
                for card in cards {
                    render_card(ui, colors, card);
                }
            });
        }
    }
}

fn render_card(ui: &mut egui::Ui, colors: &Palette, card: &Card) {
    styles::card_frame(colors).show(ui, |ui| {
        ui.set_width(CARD_WIDTH);
        ui.vertical(|ui| {
            match &card.image_url {
                Some(url) => {
                    ui.hyperlink_to("🖼 View image", url);
                }
                None => {
                    ui.label(egui::RichText::new("🖼").color(colors.text_muted));
                }
            }
            ui.label(egui::RichText::new(&card.title).size(16.0).strong());
            if let Some(description) = &card.description {
                ui.label(egui::RichText::new(description).color(colors.text_muted));
            }
            if let Some(purchased_on) = &card.purchased_on {
                ui.label(egui::RichText::new(purchased_on).small().color(colors.text_muted));
            }
        });
    });
}
