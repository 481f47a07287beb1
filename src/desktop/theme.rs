//! Colors and global style for the desktop app.

use eframe::egui::{self, Color32, Stroke};

/// Window background - Warm paper
pub const PAGE_BG: Color32 = Color32::from_rgb(0xF7, 0xF2, 0xEC);

/// Top bar background - Dark ink
pub const TOP_BAR_BG: Color32 = Color32::from_rgb(0x2B, 0x2A, 0x33);

/// Post card background
pub const CARD_BG: Color32 = Color32::from_rgb(0xFF, 0xFD, 0xFA);

/// Card border
pub const CARD_BORDER: Color32 = Color32::from_rgb(0xD9, 0xCF, 0xC1);

/// Pending (not yet saved) card background
pub const CARD_PENDING_BG: Color32 = Color32::from_rgb(0xEF, 0xEA, 0xE2);

/// Primary button - Quill blue
pub const BUTTON_PRIMARY: Color32 = Color32::from_rgb(0x2F, 0x5D, 0x8A);

pub const TEXT_DARK: Color32 = Color32::from_rgb(0x22, 0x22, 0x22);
pub const TEXT_LIGHT: Color32 = Color32::from_rgb(0xF5, 0xF5, 0xF5);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(0x7A, 0x72, 0x68);

pub const ERROR: Color32 = Color32::from_rgb(0xC0, 0x39, 0x2B);
pub const SUCCESS: Color32 = Color32::from_rgb(0x2E, 0x8B, 0x57);

pub fn apply_global_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    style.visuals.panel_fill = PAGE_BG;
    style.visuals.window_fill = CARD_BG;
    style.visuals.override_text_color = Some(TEXT_DARK);

    style.visuals.widgets.inactive.bg_fill = CARD_BG;
    style.visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, CARD_BORDER);
    style.visuals.widgets.active.bg_fill = BUTTON_PRIMARY;
    style.visuals.selection.bg_fill = BUTTON_PRIMARY;
    style.visuals.selection.stroke = Stroke::new(1.0, TEXT_LIGHT);

    ctx.set_style(style);
}

/// Frame around a post in the list
pub fn card_frame(pending: bool) -> egui::Frame {
    egui::Frame::new()
        .fill(if pending { CARD_PENDING_BG } else { CARD_BG })
        .stroke(Stroke::new(1.0, CARD_BORDER))
        .corner_radius(6)
        .inner_margin(egui::Margin::same(12))
}
