//! Filled shapes blended onto an RGBA canvas.

use image::{Pixel as _, Rgba, RgbaImage};

/// Blend `color` over `dst` with extra `coverage` in `0.0..=1.0`.
pub(crate) fn blend(dst: &mut Rgba<u8>, color: Rgba<u8>, coverage: f32) {
    if coverage <= 0.0 {
        return;
    }
    let alpha = (f32::from(color[3]) * coverage.min(1.0)).round() as u8;
    let src = Rgba([color[0], color[1], color[2], alpha]);
    dst.blend(&src);
}

/// Fill an axis-aligned rectangle, clipped to the canvas.
pub fn fill_rect(canvas: &mut RgbaImage, x: i64, y: i64, width: u32, height: u32, color: Rgba<u8>) {
    let (cw, ch) = (i64::from(canvas.width()), i64::from(canvas.height()));
    let x0 = x.clamp(0, cw);
    let y0 = y.clamp(0, ch);
    let x1 = (x + i64::from(width)).clamp(0, cw);
    let y1 = (y + i64::from(height)).clamp(0, ch);
    for py in y0..y1 {
        for px in x0..x1 {
            blend(canvas.get_pixel_mut(px as u32, py as u32), color, 1.0);
        }
    }
}

/// A rectangle with rounded corners, in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundedRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub radius: f32,
}

impl RoundedRect {
    /// Signed distance from `(px, py)` to the outline; negative inside.
    pub fn distance(&self, px: f32, py: f32) -> f32 {
        let half_w = self.width / 2.0;
        let half_h = self.height / 2.0;
        let radius = self.radius.min(half_w).min(half_h).max(0.0);
        let qx = (px - (self.x + half_w)).abs() - (half_w - radius);
        let qy = (py - (self.y + half_h)).abs() - (half_h - radius);
        let outside = qx.max(0.0).hypot(qy.max(0.0));
        outside + qx.max(qy).min(0.0) - radius
    }
}

/// Fill `rect` with anti-aliased edges.
pub fn fill_rounded_rect(canvas: &mut RgbaImage, rect: &RoundedRect, color: Rgba<u8>) {
    if rect.width <= 0.0 || rect.height <= 0.0 {
        return;
    }
    let (cw, ch) = (canvas.width() as f32, canvas.height() as f32);
    let x0 = rect.x.floor().clamp(0.0, cw) as u32;
    let y0 = rect.y.floor().clamp(0.0, ch) as u32;
    let x1 = (rect.x + rect.width).ceil().clamp(0.0, cw) as u32;
    let y1 = (rect.y + rect.height).ceil().clamp(0.0, ch) as u32;
    for py in y0..y1 {
        for px in x0..x1 {
            let d = rect.distance(px as f32 + 0.5, py as f32 + 0.5);
            let coverage = (0.5 - d).clamp(0.0, 1.0);
            blend(canvas.get_pixel_mut(px, py), color, coverage);
        }
    }
}
