use eframe::egui;

use crate::egui_app::render::{RenderPlan, ViewBody};
use crate::egui_app::state::Action;
use crate::egui_app::theme::{palette, styles};
use crate::egui_app::types::Theme;

pub mod auth_view;
pub mod cards_view;
pub mod profile_view;

pub use auth_view::FormInputs;

pub fn render_top_bar(ctx: &egui::Context, plan: &RenderPlan, actions: &mut Vec<Action>) {
    let colors = palette(plan.theme);

    egui::TopBottomPanel::top("top_panel")
        .frame(styles::top_bar_frame(colors))
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("🛍 Shop Agent").size(18.0).strong().color(colors.text));
                ui.add_space(16.0);

                for entry in &plan.nav {
                    if ui.selectable_label(entry.active, entry.view.label()).clicked() {
                        actions.push(Action::Navigate(entry.view));
                    }
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button(plan.header.auth_button).clicked() {
                        actions.push(Action::AuthButton);
                    }

                    let theme_icon = match plan.theme {
                        Theme::Light => "🌙",
                        Theme::Dark => "☀",
                    };
                    if ui.button(theme_icon).on_hover_text("Toggle theme").clicked() {
                        actions.push(Action::ToggleTheme);
                    }

                    if let Some(selector) = &plan.header.demo_selector {
                        let selected_text = selector
                            .selected
                            .and_then(|id| selector.options.iter().find(|u| u.id == id))
                            .map(|u| u.name.clone())
                            .unwrap_or_else(|| "Select a demo profile".to_string());

                        egui::ComboBox::from_id_salt("demo_user")
                            .selected_text(selected_text)
                            .show_ui(ui, |ui| {
                                if ui.selectable_label(selector.selected.is_none(), "None").clicked()
                                    && selector.selected.is_some()
                                {
                                    actions.push(Action::SelectDemoUser(None));
                                }
                                for user in &selector.options {
                                    let is_selected = selector.selected == Some(user.id);
                                    if ui.selectable_label(is_selected, user.name.as_str()).clicked() && !is_selected {
                                        actions.push(Action::SelectDemoUser(Some(user.id)));
                                    }
                                }
                            });
                    }
                });
            });
        });
}

pub fn render_main_panel(ctx: &egui::Context, plan: &RenderPlan, actions: &mut Vec<Action>) {
    let colors = palette(plan.theme);

    egui::CentralPanel::default()
        .frame(styles::content_frame(colors))
        .show(ctx, |ui| {
            ui.label(egui::RichText::new(&plan.header.welcome_title).size(26.0).strong());
            ui.label(egui::RichText::new(plan.header.welcome_subtitle).color(colors.text_muted));
            ui.add_space(16.0);

            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| match &plan.body {
                    ViewBody::Recommendations(panel) => cards_view::render(ui, colors, panel),
                    ViewBody::PurchaseHistory { title, panel } => {
                        ui.heading(title.as_str());
                        ui.add_space(8.0);
                        cards_view::render(ui, colors, panel);
                    }
                    ViewBody::UserDetails(profile) => profile_view::render(ui, colors, profile, actions),
                });
        });
}
