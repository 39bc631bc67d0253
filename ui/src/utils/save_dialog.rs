//! Export target for the desktop app.
//!
//! Desktop platforms have no share sheet for files, so sharing always
//! reports [`ExportError::ShareUnavailable`] and the export flow falls back
//! to a save dialog.

use std::path::PathBuf;

use bizcard_render::{ExportError, Exporter};

#[derive(Debug, Default)]
pub struct SaveDialogExporter {
    /// Folder the dialog opens in; the last used one after a save.
    directory: Option<PathBuf>,
}

impl Exporter for SaveDialogExporter {
    fn share(&mut self, _png: &[u8], _file_name: &str) -> Result<(), ExportError> {
        Err(ExportError::ShareUnavailable)
    }

    fn download(&mut self, png: &[u8], file_name: &str) -> Result<PathBuf, ExportError> {
        let mut dialog = rfd::FileDialog::new()
            .add_filter("PNG image", &["png"])
            .set_title("Save business card")
            .set_file_name(file_name);
        if let Some(dir) = &self.directory {
            dialog = dialog.set_directory(dir);
        }
        let path = dialog.save_file().ok_or(ExportError::Cancelled)?;

        std::fs::write(&path, png).map_err(|source| ExportError::Io {
            path: path.clone(),
            source,
        })?;
        log::info!("Saved card to {}", path.display());
        self.directory = path.parent().map(PathBuf::from);
        Ok(path)
    }
}
