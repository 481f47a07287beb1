use eframe::egui;

use crate::desktop::state::{AppState, AppView};
use crate::desktop::theme;
use crate::desktop::views::field_error;

const INPUT_WIDTH: f32 = 280.0;

fn labeled_input(ui: &mut egui::Ui, label: &str, value: &mut String, password: bool) {
    ui.label(egui::RichText::new(label).color(theme::TEXT_MUTED));
    ui.add(
        egui::TextEdit::singleline(value)
            .password(password)
            .desired_width(INPUT_WIDTH),
    );
}

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let registering = state.view == AppView::Register;

    ui.vertical_centered(|ui| {
        ui.add_space(40.0);
        ui.label(
            egui::RichText::new(if registering { "Create Account" } else { "Welcome Back" })
                .size(24.0)
                .strong(),
        );
        ui.add_space(20.0);

        if registering {
            labeled_input(ui, "Name", &mut state.register_form.name, false);
            field_error(ui, &state.field_errors, "name");
            labeled_input(ui, "Email", &mut state.register_form.email, false);
            field_error(ui, &state.field_errors, "email");
            labeled_input(ui, "Password", &mut state.register_form.password, true);
            field_error(ui, &state.field_errors, "password");
            labeled_input(ui, "Confirm password", &mut state.register_form.confirm_password, true);
            field_error(ui, &state.field_errors, "confirmPassword");
        } else {
            labeled_input(ui, "Email", &mut state.login_form.email, false);
            field_error(ui, &state.field_errors, "email");
            labeled_input(ui, "Password", &mut state.login_form.password, true);
            field_error(ui, &state.field_errors, "password");
        }

        ui.add_space(16.0);
        let submit = if registering { "Register" } else { "Login" };
        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if ui.button(submit).clicked() || enter {
            if registering {
                state.register();
            } else {
                state.login();
            }
        }

        ui.add_space(8.0);
        let switch = if registering {
            "Already have an account? Log in"
        } else {
            "No account yet? Register"
        };
        if ui.link(switch).clicked() {
            if registering {
                state.show_login();
            } else {
                state.show_register();
            }
        }
    });
}
