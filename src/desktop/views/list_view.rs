use eframe::egui;

use crate::client::store::EntryState;
use crate::desktop::state::AppState;
use crate::desktop::theme;

/// Preview length of a post body in the list
const EXCERPT_CHARS: usize = 160;

fn excerpt(content: &str) -> String {
    let mut chars = content.chars();
    let head: String = chars.by_ref().take(EXCERPT_CHARS).collect();
    if chars.next().is_some() {
        format!("{}…", head.trim_end())
    } else {
        head
    }
}

enum Action {
    Open(uuid::Uuid),
    Delete(uuid::Uuid),
}

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        let response = ui.add(
            egui::TextEdit::singleline(&mut state.search_input)
                .hint_text("Search posts by title")
                .desired_width(320.0),
        );
        let submitted = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        if submitted || ui.button("Search").clicked() {
            state.search();
        }
        if !state.listing.query().is_empty() && ui.button("Clear").clicked() {
            state.search_input.clear();
            state.search();
        }
    });
    ui.add_space(8.0);

    let mut action = None;
    let can_delete = state.is_authenticated();

    egui::ScrollArea::vertical()
        .max_height(ui.available_height() - 40.0)
        .show(ui, |ui| {
            if state.store.is_empty() {
                ui.colored_label(theme::TEXT_MUTED, "No posts found");
            }

            for entry in state.store.entries() {
                let pending = entry.state == EntryState::Pending;
                theme::card_frame(pending).show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.label(egui::RichText::new(&entry.title).size(18.0).strong());

                    ui.horizontal(|ui| {
                        if let Some(category) = &entry.category_name {
                            ui.colored_label(theme::BUTTON_PRIMARY, category);
                        }
                        if let Some(author) = &entry.author_name {
                            ui.colored_label(theme::TEXT_MUTED, format!("by {}", author));
                        }
                        if let Some(created) = entry.created_at {
                            ui.colored_label(theme::TEXT_MUTED, created.format("%Y-%m-%d").to_string());
                        }
                        if pending {
                            ui.colored_label(theme::TEXT_MUTED, "Saving…");
                        }
                    });

                    ui.label(excerpt(&entry.content));

                    if let Some(id) = entry.server_id() {
                        ui.horizontal(|ui| {
                            if ui.button("Read more").clicked() {
                                action = Some(Action::Open(id));
                            }
                            ui.colored_label(theme::TEXT_MUTED, format!("{} comments", entry.comment_count));
                            if can_delete && ui.button("Delete").clicked() {
                                action = Some(Action::Delete(id));
                            }
                        });
                    }
                });
                ui.add_space(8.0);
            }
        });

    ui.separator();
    ui.horizontal(|ui| {
        if ui
            .add_enabled(state.listing.has_prev(), egui::Button::new("◀ Previous"))
            .clicked()
        {
            state.prev_page();
        }
        ui.label(format!("Page {} of {}", state.listing.page(), state.listing.pages()));
        if ui
            .add_enabled(state.listing.has_next(), egui::Button::new("Next ▶"))
            .clicked()
        {
            state.next_page();
        }
    });

    match action {
        Some(Action::Open(id)) => state.open_post(id),
        Some(Action::Delete(id)) => state.delete_post(id),
        None => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_excerpt_short() {
        assert_eq!(excerpt("short"), "short");
    }

    #[test]
    fn test_excerpt_truncates() {
        let long = "a".repeat(EXCERPT_CHARS + 10);
        let result = excerpt(&long);
        assert_eq!(result.chars().count(), EXCERPT_CHARS + 1);
        assert!(result.ends_with('…'));
    }
}
