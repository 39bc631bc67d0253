//! Business-card compositing.
//!
//! A [`BizCard`] turns a contact into a QR image (optionally with a logo in
//! its centre) and draws it, together with a cover-fitted background photo
//! and the company/name text, into one RGBA canvas. [`GestureController`]
//! keeps the QR placement in sync with drag and pinch input, and
//! [`export()`] hands the PNG to a share target or saves it.

mod card;
mod compose;
mod cover;
mod error;
mod export;
mod font;
mod gesture;
mod logo;
mod placement;
mod qr;
mod shape;
mod text;

pub use card::{BizCard, load_image};
pub use compose::{CardScene, QR_CARD_COLOR, render_card};
pub use cover::{CoverCrop, FALLBACK_BACKGROUND, cover_crop, draw_cover, fill_fallback};
pub use error::{ExportError, RenderError};
pub use export::{DirectoryExporter, ExportOutcome, Exporter, encode_png, export, export_file_name};
pub use font::{FontFace, SYSTEM_FONT_CANDIDATES};
pub use gesture::{GestureController, GestureMode, PinchStart, TouchPhase, TouchPoint, TouchTracker};
pub use logo::{LogoAspect, LogoBox, LogoStyle, embed_logo, logo_box};
pub use placement::{
    BASE_SIZE_RATIO, CARD_INSET, CanvasSize, MAX_SCALE, MIN_SCALE, Placement, QrRect, clamp_scale, clamp01,
};
pub use qr::{QrStyle, parse_hex_color, render_qr};
pub use shape::{RoundedRect, fill_rect, fill_rounded_rect};
pub use text::{OverlayLayout, Shadow, TEXT_COLOR, TextLine, TextStyle, draw_text, draw_text_overlay};
