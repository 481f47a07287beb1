use eframe::egui;

use crate::desktop::state::AppState;
use crate::desktop::theme;
use crate::desktop::views::field_error;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading("New Post");
    ui.add_space(12.0);

    egui::Grid::new("post_form")
        .num_columns(2)
        .spacing([12.0, 8.0])
        .show(ui, |ui| {
            ui.label("Title");
            ui.vertical(|ui| {
                ui.add(egui::TextEdit::singleline(&mut state.post_form.title).desired_width(420.0));
                field_error(ui, &state.field_errors, "title");
            });
            ui.end_row();

            ui.label("Category");
            ui.vertical(|ui| {
                let selected = state
                    .post_form
                    .category
                    .and_then(|id| state.categories.iter().find(|c| c.id == id))
                    .map(|c| c.name.clone())
                    .unwrap_or_else(|| "Select a category".to_string());

                egui::ComboBox::from_id_salt("category")
                    .selected_text(selected)
                    .width(420.0)
                    .show_ui(ui, |ui| {
                        for category in &state.categories {
                            ui.selectable_value(
                                &mut state.post_form.category,
                                Some(category.id),
                                &category.name,
                            );
                        }
                    });
                field_error(ui, &state.field_errors, "category");
            });
            ui.end_row();

            ui.label("Content");
            ui.vertical(|ui| {
                ui.add(
                    egui::TextEdit::multiline(&mut state.post_form.content)
                        .desired_rows(12)
                        .desired_width(420.0),
                );
                field_error(ui, &state.field_errors, "content");
            });
            ui.end_row();

            ui.label("Image");
            ui.vertical(|ui| {
                ui.horizontal(|ui| {
                    ui.add(
                        egui::TextEdit::singleline(&mut state.image_path)
                            .hint_text("Path to an image file")
                            .desired_width(330.0),
                    );
                    if ui.button("Upload").clicked() {
                        state.upload_image();
                    }
                });
                if let Some(image) = &state.post_form.featured_image {
                    ui.colored_label(theme::TEXT_MUTED, image);
                }
            });
            ui.end_row();
        });

    ui.add_space(12.0);
    ui.horizontal(|ui| {
        if ui.button("Publish").clicked() {
            state.create_post();
        }
        if ui.button("Cancel").clicked() {
            state.show_posts();
        }
    });
}
