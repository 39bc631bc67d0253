use std::path::Path;

use bizcard_vcard::{Contact, EncodeOptions, encode_for_qr};
use image::RgbaImage;

use crate::compose::{CardScene, render_card};
use crate::error::RenderError;
use crate::font::FontFace;
use crate::logo::{LogoStyle, embed_logo};
use crate::placement::Placement;
use crate::qr::{QrStyle, render_qr};

/// Read and decode an image file into RGBA.
pub fn load_image(path: &Path) -> Result<RgbaImage, RenderError> {
    let bytes = std::fs::read(path).map_err(|source| RenderError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let image = image::load_from_memory(&bytes)?.to_rgba8();
    log::debug!("loaded {} ({}x{})", path.display(), image.width(), image.height());
    Ok(image)
}

/// A business card: contact, QR appearance and optional images.
///
/// The QR image is cached; call [`BizCard::regenerate`] after changing the
/// contact, the options, the QR style or the logo.
#[derive(Debug, Clone, Default)]
pub struct BizCard {
    pub contact: Contact,
    pub options: EncodeOptions,
    pub qr_style: QrStyle,
    pub logo_style: LogoStyle,
    pub logo: Option<RgbaImage>,
    pub background: Option<RgbaImage>,
    qr: Option<RgbaImage>,
}

impl BizCard {
    pub fn new(contact: Contact, options: EncodeOptions) -> Self {
        Self {
            contact,
            options,
            ..Self::default()
        }
    }

    /// The vCard text the QR code carries.
    pub fn payload(&self) -> Result<String, RenderError> {
        Ok(encode_for_qr(&self.contact, &self.options)?)
    }

    /// Re-encode the vCard and redraw the QR image with the logo on top.
    pub fn regenerate(&mut self) -> Result<&RgbaImage, RenderError> {
        let payload = self.payload()?;
        let mut qr = render_qr(&payload, &self.qr_style)?;
        if let Some(logo) = &self.logo {
            embed_logo(&mut qr, logo, &self.logo_style);
        }
        log::info!("regenerated QR ({} payload bytes)", payload.len());
        Ok(&*self.qr.insert(qr))
    }

    /// The last generated QR image, if any.
    pub fn qr_image(&self) -> Option<&RgbaImage> {
        self.qr.as_ref()
    }

    /// Drop the cached QR image, e.g. after the form changed.
    pub fn clear_qr(&mut self) {
        self.qr = None;
    }

    /// Compose the full card at `width × height`.
    pub fn render(&self, width: u32, height: u32, placement: Placement, font: Option<&FontFace>) -> RgbaImage {
        let contact = &self.contact;
        let scene = CardScene {
            width,
            height,
            background: self.background.as_ref(),
            org: &contact.org,
            name: &contact.name,
            qr: self.qr.as_ref(),
            placement,
        };
        render_card(&scene, font)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bizcard_vcard::VCardError;
    use image::Rgba;

    fn small_card() -> BizCard {
        let mut card = BizCard::new(Contact::new("Ada Lovelace").with_tel("+44 20 0000"), EncodeOptions::default());
        card.qr_style.size = 200;
        card
    }

    #[test]
    fn test_regenerate_caches_qr() {
        let mut card = small_card();
        assert!(card.qr_image().is_none());
        let size = card.regenerate().expect("regenerate").width();
        assert_eq!(size, 200);
        assert!(card.qr_image().is_some());
        card.clear_qr();
        assert!(card.qr_image().is_none());
    }

    #[test]
    fn test_regenerate_embeds_logo() {
        let mut card = small_card();
        card.logo = Some(RgbaImage::from_pixel(375, 140, Rgba([255, 0, 0, 255])));
        let qr = card.regenerate().expect("regenerate");
        let centre = qr.get_pixel(100, 100);
        assert!(centre[0] > 200 && centre[1] < 60, "centre {centre:?}");
    }

    #[test]
    fn test_missing_name_surfaces_vcard_error() {
        let mut card = BizCard::new(Contact::default(), EncodeOptions::default());
        assert!(matches!(card.regenerate(), Err(RenderError::VCard(VCardError::MissingName))));
    }

    #[test]
    fn test_render_without_qr_is_background_only() {
        let card = small_card();
        let canvas = card.render(30, 20, Placement::default(), None);
        assert!(canvas.pixels().all(|p| *p == crate::cover::FALLBACK_BACKGROUND));
    }

    #[test]
    fn test_load_image_errors() {
        let dir = tempfile::tempdir().expect("tempdir");
        assert!(matches!(load_image(&dir.path().join("missing.png")), Err(RenderError::Io { .. })));

        let junk = dir.path().join("junk.png");
        std::fs::write(&junk, b"nope").expect("write");
        assert!(matches!(load_image(&junk), Err(RenderError::Image(_))));
    }
}
