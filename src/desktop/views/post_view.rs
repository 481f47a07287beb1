use eframe::egui;

use crate::desktop::state::AppState;
use crate::desktop::theme;
use crate::desktop::views::field_error;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    if ui.button("◀ Back to posts").clicked() {
        state.show_posts();
        return;
    }
    ui.add_space(8.0);

    let Some(post) = state.current_post.clone() else {
        ui.colored_label(theme::TEXT_MUTED, "Post not found");
        return;
    };

    egui::ScrollArea::vertical().show(ui, |ui| {
        ui.heading(egui::RichText::new(&post.title).size(26.0).strong());
        ui.horizontal(|ui| {
            if let Some(category) = &post.category {
                ui.colored_label(theme::BUTTON_PRIMARY, &category.name);
            }
            if let Some(author) = &post.author {
                ui.colored_label(theme::TEXT_MUTED, format!("by {}", author.name));
            }
            ui.colored_label(
                theme::TEXT_MUTED,
                post.created_at.format("%Y-%m-%d %H:%M").to_string(),
            );
        });

        if let Some(image) = &post.featured_image {
            let url = state.api.config().asset_url(image);
            ui.hyperlink_to("Featured image", url);
        }

        ui.add_space(12.0);
        ui.label(&post.content);
        ui.add_space(16.0);

        if state.is_authenticated() && ui.button("Delete post").clicked() {
            state.delete_post(post.id);
            return;
        }

        ui.separator();
        ui.label(egui::RichText::new(format!("Comments ({})", post.comments.len())).strong());

        for comment in &post.comments {
            theme::card_frame(false).show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.colored_label(
                    theme::TEXT_MUTED,
                    comment.created_at.format("%Y-%m-%d %H:%M").to_string(),
                );
                ui.label(&comment.content);
            });
            ui.add_space(4.0);
        }

        ui.add_space(8.0);
        if state.is_authenticated() {
            ui.add(
                egui::TextEdit::multiline(&mut state.comment_form.content)
                    .hint_text("Write a comment")
                    .desired_rows(3)
                    .desired_width(f32::INFINITY),
            );
            field_error(ui, &state.field_errors, "content");
            if ui.button("Add Comment").clicked() {
                state.add_comment();
            }
        } else {
            ui.colored_label(theme::TEXT_MUTED, "Log in to leave a comment");
        }
    });
}
