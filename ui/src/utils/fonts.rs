use bizcard_render::FontFace;
use egui::{
    FontData, FontFamily,
    epaint::text::{FontInsert, FontPriority, InsertFontFamily},
};

/// Register `font_data` as a fallback for proportional text.
pub fn add_font(ctx: &egui::Context, name: &str, font_data: Vec<u8>) {
    let data = FontData::from_owned(font_data);
    ctx.add_font(FontInsert::new(
        name,
        data,
        vec![InsertFontFamily {
            family: FontFamily::Proportional,
            priority: FontPriority::Lowest,
        }],
    ));
}

/// Make the face used on the card available to the form as well, so CJK
/// names typed into it are legible.
pub fn register_card_font(ctx: &egui::Context, face: &FontFace) {
    match std::fs::read(face.origin()) {
        Ok(bytes) => add_font(ctx, "card font", bytes),
        Err(e) => log::warn!("Could not read {} for the editor: {e}", face.origin()),
    }
}
