use eframe::egui;

use crate::egui_app::state::{Action, AuthModal};
use crate::egui_app::theme::{styles, Palette};
use crate::egui_app::types::AuthTab;
use crate::shared::{Credentials, NewUser};

/// Text typed into the auth forms. Lives in the front-end, not the controller.
#[derive(Debug, Default)]
pub struct FormInputs {
    pub login_email: String,
    pub login_password: String,
    pub register_name: String,
    pub register_email: String,
    pub register_password: String,
}

impl FormInputs {
    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.login_email.trim(), self.login_password.clone())
    }

    pub fn new_user(&self) -> NewUser {
        NewUser {
            name: self.register_name.trim().to_string(),
            email: self.register_email.trim().to_string(),
            password: self.register_password.clone(),
        }
    }

    /// Forget passwords once the modal is gone
    pub fn clear_secrets(&mut self) {
        self.login_password.clear();
        self.register_password.clear();
    }
}

pub fn render(
    ctx: &egui::Context,
    colors: &Palette,
    modal: &AuthModal,
    inputs: &mut FormInputs,
    actions: &mut Vec<Action>,
) {
    let mut open = true;

    egui::Window::new("Account")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .frame(styles::modal_frame(colors))
        .show(ctx, |ui| {
            ui.set_width(300.0);

            ui.horizontal(|ui| {
                for (tab, label) in [(AuthTab::Login, "Login"), (AuthTab::Register, "Register")] {
                    if ui.selectable_label(modal.tab == tab, label).clicked() && modal.tab != tab {
                        actions.push(Action::SwitchAuthTab(tab));
                    }
                }
            });
            ui.separator();

            if let Some(notice) = &modal.notice {
                ui.label(egui::RichText::new(notice.as_str()).color(colors.success));
                ui.add_space(6.0);
            }
            if let Some(error) = &modal.error {
                ui.label(egui::RichText::new(error.as_str()).color(colors.error));
                ui.add_space(6.0);
            }

            let submitted = match modal.tab {
                AuthTab::Login => login_form(ui, inputs),
                AuthTab::Register => register_form(ui, inputs),
            };

            ui.add_space(10.0);
            ui.add_enabled_ui(!modal.busy, |ui| {
                let label = match modal.tab {
                    AuthTab::Login => "Login",
                    AuthTab::Register => "Create Account",
                };
                if ui.button(label).clicked() || (submitted && !modal.busy) {
                    actions.push(match modal.tab {
                        AuthTab::Login => Action::SubmitLogin(inputs.credentials()),
                        AuthTab::Register => Action::SubmitRegister(inputs.new_user()),
                    });
                }
            });

            if modal.busy {
                ui.horizontal(|ui| {
                    ui.label("Please wait...");
                    ui.spinner();
                });
            }
        });

    if !open {
        actions.push(Action::CloseAuth);
    }
}

/// Returns true when Enter was pressed in the last field
fn login_form(ui: &mut egui::Ui, inputs: &mut FormInputs) -> bool {
    ui.label("Email");
    ui.add(egui::TextEdit::singleline(&mut inputs.login_email).hint_text("you@example.com"));
    ui.label("Password");
    let response = ui.add(egui::TextEdit::singleline(&mut inputs.login_password).password(true));
    response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter))
}

fn register_form(ui: &mut egui::Ui, inputs: &mut FormInputs) -> bool {
    ui.label("Name");
    ui.add(egui::TextEdit::singleline(&mut inputs.register_name));
    ui.label("Email");
    ui.add(egui::TextEdit::singleline(&mut inputs.register_email).hint_text("you@example.com"));
    ui.label("Password");
    let response = ui.add(egui::TextEdit::singleline(&mut inputs.register_password).password(true));
    response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter))
}
