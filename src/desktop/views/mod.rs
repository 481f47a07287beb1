use eframe::egui;

use crate::desktop::state::{AppState, AppView};
use crate::desktop::theme;
use crate::shared::FieldError;

pub mod auth_view;
pub mod form_view;
pub mod list_view;
pub mod post_view;

pub fn render_top_bar(ctx: &egui::Context, state: &mut AppState) {
    let frame_style = egui::Frame::default()
        .fill(theme::TOP_BAR_BG)
        .inner_margin(egui::Margin::symmetric(12, 8));

    egui::TopBottomPanel::top("top_panel")
        .frame(frame_style)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                let title = egui::RichText::new("Quillpost").size(18.0).strong().color(theme::TEXT_LIGHT);
                if ui.add(egui::Label::new(title).sense(egui::Sense::click())).clicked() {
                    state.show_posts();
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    match state.user.clone() {
                        Some(user) => {
                            if ui.button("Logout").clicked() {
                                state.logout();
                            }
                            if ui.button("New Post").clicked() {
                                state.show_new_post();
                            }
                            ui.colored_label(theme::TEXT_LIGHT, user.name);
                        }
                        None => {
                            if ui.button("Register").clicked() {
                                state.show_register();
                            }
                            if ui.button("Login").clicked() {
                                state.show_login();
                            }
                        }
                    }

                    let pending = state.store.pending_count();
                    if pending > 0 {
                        ui.colored_label(theme::TEXT_MUTED, format!("{} saving", pending));
                    }
                });
            });
        });
}

pub fn render_main_panel(ctx: &egui::Context, state: &mut AppState) {
    egui::CentralPanel::default().show(ctx, |ui| {
        render_messages(ui, state);

        match state.view {
            AppView::Login | AppView::Register => auth_view::render(ui, state),
            AppView::Posts => list_view::render(ui, state),
            AppView::PostDetail(_) => post_view::render(ui, state),
            AppView::NewPost => form_view::render(ui, state),
        }
    });
}

fn render_messages(ui: &mut egui::Ui, state: &mut AppState) {
    if let Some(error) = state.error.clone() {
        ui.horizontal(|ui| {
            ui.colored_label(theme::ERROR, error);
            if ui.small_button("✕").clicked() {
                state.error = None;
            }
        });
    }
    if let Some(notice) = state.notice.clone() {
        ui.horizontal(|ui| {
            ui.colored_label(theme::SUCCESS, notice);
            if ui.small_button("✕").clicked() {
                state.notice = None;
            }
        });
    }
}

/// Show the validation message for one input, if any.
pub(crate) fn field_error(ui: &mut egui::Ui, errors: &[FieldError], field: &str) {
    if let Some(message) = crate::client::forms::message_for(errors, field) {
        ui.colored_label(theme::ERROR, message);
    }
}
