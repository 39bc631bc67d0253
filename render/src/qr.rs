//! QR code rasterisation.

use image::{Rgba, RgbaImage};
use qrcode::{Color, EcLevel, QrCode};

use crate::error::RenderError;

/// How the QR symbol is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QrStyle {
    /// Output width and height in pixels.
    pub size: u32,
    /// Quiet zone, in modules, on every side.
    pub margin: u32,
    /// Level H survives the logo covering the centre.
    pub ec_level: EcLevel,
    pub dark: Rgba<u8>,
    pub light: Rgba<u8>,
}

impl Default for QrStyle {
    fn default() -> Self {
        Self {
            size: 1024,
            margin: 2,
            ec_level: EcLevel::H,
            dark: Rgba([0, 0, 0, 255]),
            light: Rgba([255, 255, 255, 255]),
        }
    }
}

/// Parse `#rgb`, `#rrggbb` or `#rrggbbaa`.
pub fn parse_hex_color(s: &str) -> Result<Rgba<u8>, RenderError> {
    let hex = s.trim().trim_start_matches('#');
    let invalid = || RenderError::InvalidColor(s.to_owned());
    if !hex.is_ascii() {
        return Err(invalid());
    }
    let channel = |range: std::ops::Range<usize>| {
        hex.get(range)
            .and_then(|h| u8::from_str_radix(h, 16).ok())
            .ok_or_else(invalid)
    };
    match hex.len() {
        3 => {
            let mut rgb = [0u8; 3];
            for (i, c) in rgb.iter_mut().enumerate() {
                let v = channel(i..i + 1)?;
                *c = v * 17;
            }
            Ok(Rgba([rgb[0], rgb[1], rgb[2], 255]))
        }
        6 => Ok(Rgba([channel(0..2)?, channel(2..4)?, channel(4..6)?, 255])),
        8 => Ok(Rgba([
            channel(0..2)?,
            channel(2..4)?,
            channel(4..6)?,
            channel(6..8)?,
        ])),
        _ => Err(invalid()),
    }
}

/// Render `data` as a square QR image of exactly `style.size` pixels.
///
/// The module grid plus the quiet zone is stretched over the whole image;
/// each pixel takes the colour of the module under its centre. A size
/// smaller than the module count is raised to one pixel per module.
pub fn render_qr(data: &str, style: &QrStyle) -> Result<RgbaImage, RenderError> {
    let code = QrCode::with_error_correction_level(data.as_bytes(), style.ec_level)?;
    // At most 177 modules per side.
    let modules = code.width() as u32;
    let colors = code.to_colors();

    let total = modules + 2 * style.margin;
    let size = style.size.max(total);
    let scale = f64::from(total) / f64::from(size);

    log::debug!(
        "QR version {:?}, {modules} modules, {size}px ({:.2} px/module)",
        code.version(),
        1.0 / scale
    );

    let module_at = |p: u32| -> Option<u32> {
        let m = ((f64::from(p) + 0.5) * scale) as u32;
        m.checked_sub(style.margin).filter(|m| *m < modules)
    };

    Ok(RgbaImage::from_fn(size, size, |x, y| {
        let dark = module_at(x)
            .zip(module_at(y))
            .and_then(|(mx, my)| colors.get((my * modules + mx) as usize))
            .is_some_and(|c| *c == Color::Dark);
        if dark { style.dark } else { style.light }
    }))
}
