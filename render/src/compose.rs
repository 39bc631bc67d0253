//! Full card compositing: background, text, QR card, QR code.

use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};

use crate::cover::{draw_cover, fill_fallback};
use crate::font::FontFace;
use crate::placement::Placement;
use crate::shape::fill_rounded_rect;
use crate::text::draw_text_overlay;

/// rgba(255,255,255,0.92)
pub const QR_CARD_COLOR: Rgba<u8> = Rgba([255, 255, 255, 235]);

/// Everything one frame of the card is drawn from.
#[derive(Debug, Clone, Copy)]
pub struct CardScene<'a> {
    pub width: u32,
    pub height: u32,
    pub background: Option<&'a RgbaImage>,
    pub org: &'a str,
    pub name: &'a str,
    pub qr: Option<&'a RgbaImage>,
    pub placement: Placement,
}

impl<'a> CardScene<'a> {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            background: None,
            org: "",
            name: "",
            qr: None,
            placement: Placement::default(),
        }
    }
}

/// Draw the scene onto a fresh canvas.
///
/// Text is skipped when `font` is `None`; the QR block is skipped when the
/// scene has no QR image.
pub fn render_card(scene: &CardScene<'_>, font: Option<&FontFace>) -> RgbaImage {
    let width = scene.width.max(1);
    let height = scene.height.max(1);
    let mut canvas = RgbaImage::new(width, height);

    fill_fallback(&mut canvas);
    if let Some(background) = scene.background {
        draw_cover(&mut canvas, background);
    }

    match font {
        Some(face) => draw_text_overlay(&mut canvas, face, scene.org.trim(), scene.name.trim()),
        None if !scene.org.trim().is_empty() || !scene.name.trim().is_empty() => {
            log::warn!("no font available, card text is not drawn");
        }
        None => {}
    }

    if let Some(qr) = scene.qr {
        let rect = scene.placement.qr_rect(width, height);
        fill_rounded_rect(&mut canvas, &rect.card(), QR_CARD_COLOR);
        let side = rect.pixel_size();
        let scaled = if qr.dimensions() == (side, side) {
            qr.clone()
        } else {
            imageops::resize(qr, side, side, FilterType::Triangle)
        };
        imageops::overlay(&mut canvas, &scaled, rect.left, rect.top);
    }

    canvas
}
