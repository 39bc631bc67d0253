use std::path::PathBuf;

use bizcard_vcard::VCardError;
use qrcode::types::QrError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    VCard(#[from] VCardError),
    #[error("QR encoding failed: {0}")]
    Qr(#[from] QrError),
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("not a usable TrueType/OpenType font: {0}")]
    InvalidFont(String),
    #[error("invalid color: {0}")]
    InvalidColor(String),
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("sharing is not available here")]
    ShareUnavailable,
    #[error("export cancelled")]
    Cancelled,
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to share image: {0}")]
    Share(#[source] std::io::Error),
}
