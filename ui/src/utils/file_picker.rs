//! Picking background and logo images via native file dialogs.
//!
//! The dialog sits behind the [`ImagePicker`] trait so tests can hand the
//! app images without opening system windows.

use bizcard_render::load_image;
use image::RgbaImage;

/// Extensions offered in the open dialog.
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp", "webp", "tiff", "tif"];

/// Trait for picking images, enabling mock implementations for testing.
pub trait ImagePicker {
    /// Ask for an image. `None` when the dialog was cancelled or the file
    /// could not be decoded.
    fn pick_image(&mut self, title: &str) -> Option<RgbaImage>;
}

/// Default picker using the system file dialog.
#[derive(Debug, Default)]
pub struct SystemImagePicker;

impl ImagePicker for SystemImagePicker {
    fn pick_image(&mut self, title: &str) -> Option<RgbaImage> {
        let path = rfd::FileDialog::new()
            .add_filter("Image", IMAGE_EXTENSIONS)
            .set_title(title)
            .pick_file()?;

        log::info!("User selected file: {}", path.display());

        match load_image(&path) {
            Ok(image) => Some(image),
            Err(e) => {
                log::warn!("Failed to load image {}: {e}", path.display());
                None
            }
        }
    }
}
