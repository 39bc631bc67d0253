//! Background drawing with CSS `object-fit: cover` semantics.

use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};

/// Canvas colour when no background photo is set.
pub const FALLBACK_BACKGROUND: Rgba<u8> = Rgba([0x11, 0x11, 0x11, 0xff]);

/// The part of the source image that ends up visible, in source pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoverCrop {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Scale the source by `max(cw/iw, ch/ih)`, centre it and crop the excess.
pub fn cover_crop(source: (u32, u32), canvas: (u32, u32)) -> CoverCrop {
    let (iw, ih) = (source.0 as f32, source.1 as f32);
    let (cw, ch) = (canvas.0 as f32, canvas.1 as f32);
    let scale = (cw / iw).max(ch / ih);
    let width = cw / scale;
    let height = ch / scale;
    CoverCrop {
        x: (iw - width) / 2.0,
        y: (ih - height) / 2.0,
        width,
        height,
    }
}

/// Draw `background` over the whole canvas.
pub fn draw_cover(canvas: &mut RgbaImage, background: &RgbaImage) {
    let (cw, ch) = canvas.dimensions();
    if background.width() == 0 || background.height() == 0 || cw == 0 || ch == 0 {
        return;
    }
    let crop = cover_crop(background.dimensions(), (cw, ch));
    let x = crop.x.round().max(0.0) as u32;
    let y = crop.y.round().max(0.0) as u32;
    let x = x.min(background.width() - 1);
    let y = y.min(background.height() - 1);
    let width = (crop.width.round() as u32).min(background.width() - x).max(1);
    let height = (crop.height.round() as u32).min(background.height() - y).max(1);

    let visible = imageops::crop_imm(background, x, y, width, height).to_image();
    let scaled = imageops::resize(&visible, cw, ch, FilterType::Triangle);
    imageops::overlay(canvas, &scaled, 0, 0);
}

/// Fill the canvas with [`FALLBACK_BACKGROUND`].
pub fn fill_fallback(canvas: &mut RgbaImage) {
    for pixel in canvas.pixels_mut() {
        *pixel = FALLBACK_BACKGROUND;
    }
}
