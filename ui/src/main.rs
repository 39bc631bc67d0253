#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use bizcard_render::FontFace;
use bizcard_ui::state::CardState;
use bizcard_ui::utils::fonts::register_card_font;

fn main() -> eframe::Result {
    // Log to stderr (if you run with `RUST_LOG=debug`).
    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_module("egui_winit::clipboard", log::LevelFilter::Off)
        .init();

    let native_options = eframe::NativeOptions {
        hardware_acceleration: eframe::HardwareAcceleration::Preferred,
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 720.0])
            .with_min_inner_size([560.0, 420.0]),
        ..Default::default()
    };

    let font = FontFace::discover();
    match &font {
        Some(face) => log::info!("Using font {}", face.origin()),
        None => log::warn!("No system font found; card text will not be drawn"),
    }

    eframe::run_native(
        "Bizcard",
        native_options,
        Box::new(move |cc| {
            if let Some(face) = &font {
                register_card_font(&cc.egui_ctx, face);
            }
            let state = CardState::new(font);
            let app = bizcard_ui::BizCardApp::new(state);
            Ok(Box::new(app))
        }),
    )
}
