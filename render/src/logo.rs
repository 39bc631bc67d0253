//! Logo embedding in the QR centre.

use image::RgbaImage;
use image::imageops::{self, FilterType};

use crate::shape::fill_rect;

/// Width-to-height ratio of the logo box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LogoAspect {
    Fixed(f64),
    /// Use the logo image's own proportions.
    Intrinsic,
}

impl Default for LogoAspect {
    fn default() -> Self {
        Self::Fixed(375.0 / 140.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogoStyle {
    /// Box height as a fraction of the QR size. Error correction level H
    /// keeps the code readable at this coverage.
    pub height_ratio: f64,
    pub aspect: LogoAspect,
}

impl Default for LogoStyle {
    fn default() -> Self {
        Self {
            height_ratio: 0.16,
            aspect: LogoAspect::default(),
        }
    }
}

/// Where the logo lands inside the QR image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogoBox {
    pub left: u32,
    pub top: u32,
    pub width: u32,
    pub height: u32,
}

/// Compute the centred logo box for a `qr_size` square QR image.
///
/// The width is capped at half the QR size so a very wide logo cannot wipe
/// out more modules than the error correction recovers.
pub fn logo_box(qr_size: u32, logo_dims: (u32, u32), style: &LogoStyle) -> LogoBox {
    let height = (f64::from(qr_size) * style.height_ratio).floor() as u32;
    let aspect = match style.aspect {
        LogoAspect::Fixed(aspect) => aspect,
        LogoAspect::Intrinsic if logo_dims.1 > 0 => {
            f64::from(logo_dims.0) / f64::from(logo_dims.1)
        }
        LogoAspect::Intrinsic => 1.0,
    };
    let width = ((f64::from(height) * aspect).floor() as u32).min(qr_size / 2);
    LogoBox {
        left: (qr_size - width) / 2,
        top: (qr_size - height.min(qr_size)) / 2,
        width,
        height,
    }
}

/// Clear a white box in the middle of `qr` and draw `logo` into it,
/// honouring the logo's alpha channel.
pub fn embed_logo(qr: &mut RgbaImage, logo: &RgbaImage, style: &LogoStyle) -> Option<LogoBox> {
    let bounds = logo_box(qr.width(), logo.dimensions(), style);
    if bounds.width == 0 || bounds.height == 0 || logo.width() == 0 || logo.height() == 0 {
        log::warn!("skipping logo: empty logo box {bounds:?}");
        return None;
    }

    fill_rect(
        qr,
        i64::from(bounds.left),
        i64::from(bounds.top),
        bounds.width,
        bounds.height,
        image::Rgba([255, 255, 255, 255]),
    );
    let resized = imageops::resize(logo, bounds.width, bounds.height, FilterType::Lanczos3);
    imageops::overlay(qr, &resized, i64::from(bounds.left), i64::from(bounds.top));
    log::debug!("embedded {}x{} logo at {bounds:?}", logo.width(), logo.height());
    Some(bounds)
}
