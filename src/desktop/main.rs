/**
 * Quillpost Desktop - Main Entry Point
 *
 * Native egui client for the blog API. The server URL comes from
 * `CLIENT_API_URL` (default `http://127.0.0.1:3000`).
 */
use eframe::egui;
use quillpost::desktop::{theme, views, AppState};

struct QuillpostApp {
    state: AppState,
}

impl eframe::App for QuillpostApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        views::render_top_bar(ctx, &mut self.state);
        views::render_main_panel(ctx, &mut self.state);
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    let state = AppState::new()?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 760.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Quillpost",
        options,
        Box::new(move |cc| {
            theme::apply_global_theme(&cc.egui_ctx);
            Ok(Box::new(QuillpostApp { state }))
        }),
    )?;
    Ok(())
}
