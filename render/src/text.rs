//! Company and name text drawn over the background.

use image::imageops;
use image::{GrayImage, Luma, Rgba, RgbaImage};
use rusttype::{Scale, point};

use crate::font::FontFace;
use crate::shape::blend;

pub const TEXT_COLOR: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Drop shadow behind overlay text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shadow {
    pub color: Rgba<u8>,
    /// Canvas-style blur amount; the Gaussian sigma is half of it.
    pub blur: f32,
}

impl Default for Shadow {
    fn default() -> Self {
        Self {
            // rgba(0,0,0,0.35)
            color: Rgba([0, 0, 0, 89]),
            blur: 8.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub px: f32,
    pub color: Rgba<u8>,
    pub shadow: Option<Shadow>,
}

/// One text line: font size and baseline, both in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextLine {
    pub px: u32,
    pub baseline: u32,
}

/// Positions of the company and name lines for a canvas size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayLayout {
    pub pad: u32,
    pub org: TextLine,
    pub name: TextLine,
}

impl OverlayLayout {
    pub fn for_canvas(width: u32, height: u32) -> Self {
        let ch = f64::from(height);
        let pad = (f64::from(width.min(height)) * 0.04).round() as u32;
        Self {
            pad,
            org: TextLine {
                px: (ch * 0.05).round() as u32,
                baseline: pad + (ch * 0.06).round() as u32,
            },
            name: TextLine {
                px: (ch * 0.045).round() as u32,
                baseline: pad + (ch * 0.12).round() as u32,
            },
        }
    }
}

/// Coverage mask of rendered glyphs plus its offset on the canvas.
struct GlyphMask {
    mask: GrayImage,
    left: i32,
    top: i32,
}

fn rasterize(face: &FontFace, text: &str, x: f32, baseline: f32, px: f32, margin: i32) -> Option<GlyphMask> {
    let scale = Scale::uniform(px);
    let glyphs: Vec<_> = face.font().layout(text, scale, point(x, baseline)).collect();

    let bounds = glyphs
        .iter()
        .filter_map(rusttype::PositionedGlyph::pixel_bounding_box)
        .reduce(|a, b| rusttype::Rect {
            min: point(a.min.x.min(b.min.x), a.min.y.min(b.min.y)),
            max: point(a.max.x.max(b.max.x), a.max.y.max(b.max.y)),
        })?;

    let left = bounds.min.x - margin;
    let top = bounds.min.y - margin;
    let width = (bounds.width() + 2 * margin).max(1) as u32;
    let height = (bounds.height() + 2 * margin).max(1) as u32;
    let mut mask = GrayImage::new(width, height);

    for glyph in &glyphs {
        let Some(bb) = glyph.pixel_bounding_box() else {
            continue;
        };
        glyph.draw(|gx, gy, v| {
            let mx = bb.min.x - left + gx as i32;
            let my = bb.min.y - top + gy as i32;
            if mx < 0 || my < 0 {
                return;
            }
            if let Some(p) = mask.get_pixel_mut_checked(mx as u32, my as u32) {
                let value = (v * 255.0).round() as u8;
                p.0[0] = p.0[0].max(value);
            }
        });
    }
    Some(GlyphMask { mask, left, top })
}

fn paint_mask(canvas: &mut RgbaImage, mask: &GrayImage, left: i32, top: i32, color: Rgba<u8>) {
    for (mx, my, Luma([coverage])) in mask.enumerate_pixels() {
        if *coverage == 0 {
            continue;
        }
        let cx = left + mx as i32;
        let cy = top + my as i32;
        if cx < 0 || cy < 0 {
            continue;
        }
        if let Some(dst) = canvas.get_pixel_mut_checked(cx as u32, cy as u32) {
            blend(dst, color, f32::from(*coverage) / 255.0);
        }
    }
}

/// Draw `text` with its baseline starting at `(x, baseline)`.
pub fn draw_text(canvas: &mut RgbaImage, face: &FontFace, text: &str, x: f32, baseline: f32, style: &TextStyle) {
    if text.is_empty() || style.px <= 0.0 {
        return;
    }
    let missing = face.missing_glyphs(text);
    if !missing.is_empty() {
        log::warn!("font {} has no glyphs for {missing:?}", face.origin());
    }

    let margin = style.shadow.map_or(0, |s| (s.blur * 2.0).ceil() as i32);
    let Some(GlyphMask { mask, left, top }) = rasterize(face, text, x, baseline, style.px, margin) else {
        return;
    };

    if let Some(shadow) = style.shadow {
        let blurred = if shadow.blur > 0.0 {
            imageops::blur(&mask, shadow.blur / 2.0)
        } else {
            mask.clone()
        };
        paint_mask(canvas, &blurred, left, top, shadow.color);
    }
    paint_mask(canvas, &mask, left, top, style.color);
}

/// Draw the company line and the name line in the top-left corner.
pub fn draw_text_overlay(canvas: &mut RgbaImage, face: &FontFace, org: &str, name: &str) {
    let layout = OverlayLayout::for_canvas(canvas.width(), canvas.height());
    let x = layout.pad as f32;
    for (text, line) in [(org, layout.org), (name, layout.name)] {
        if text.is_empty() {
            continue;
        }
        let style = TextStyle {
            px: line.px as f32,
            color: TEXT_COLOR,
            shadow: Some(Shadow::default()),
        };
        draw_text(canvas, face, text, x, line.baseline as f32, &style);
    }
}
