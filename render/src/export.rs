//! PNG export with a share-first, download-fallback flow.

use std::io::Cursor;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use image::{DynamicImage, ImageFormat, RgbaImage};

use crate::error::{ExportError, RenderError};

/// Encode the canvas as PNG bytes.
pub fn encode_png(canvas: &RgbaImage) -> Result<Vec<u8>, RenderError> {
    let mut bytes = Cursor::new(Vec::new());
    DynamicImage::ImageRgba8(canvas.clone()).write_to(&mut bytes, ImageFormat::Png)?;
    Ok(bytes.into_inner())
}

/// `bizcard_<unix-millis>.png`
pub fn export_file_name(now: DateTime<Utc>) -> String {
    format!("bizcard_{}.png", now.timestamp_millis())
}

/// A destination for exported cards.
pub trait Exporter {
    /// Hand the image to the platform's share mechanism.
    fn share(&mut self, png: &[u8], file_name: &str) -> Result<(), ExportError>;

    /// Save the image and return where it went.
    fn download(&mut self, png: &[u8], file_name: &str) -> Result<PathBuf, ExportError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    Shared,
    Downloaded(PathBuf),
}

/// Try to share; on any share failure fall back to a download.
pub fn export(exporter: &mut dyn Exporter, png: &[u8], file_name: &str) -> Result<ExportOutcome, ExportError> {
    match exporter.share(png, file_name) {
        Ok(()) => {
            log::info!("shared {file_name} ({} bytes)", png.len());
            Ok(ExportOutcome::Shared)
        }
        Err(ExportError::ShareUnavailable) => {
            log::debug!("share unavailable, downloading {file_name}");
            exporter.download(png, file_name).map(ExportOutcome::Downloaded)
        }
        Err(e) => {
            log::warn!("share failed ({e}), downloading {file_name}");
            exporter.download(png, file_name).map(ExportOutcome::Downloaded)
        }
    }
}

/// Saves into a directory. Sharing is never available.
#[derive(Debug, Clone)]
pub struct DirectoryExporter {
    dir: PathBuf,
}

impl DirectoryExporter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl Exporter for DirectoryExporter {
    fn share(&mut self, _png: &[u8], _file_name: &str) -> Result<(), ExportError> {
        Err(ExportError::ShareUnavailable)
    }

    fn download(&mut self, png: &[u8], file_name: &str) -> Result<PathBuf, ExportError> {
        let io_err = |path: &Path| {
            let path = path.to_path_buf();
            move |source: std::io::Error| ExportError::Io { path, source }
        };
        std::fs::create_dir_all(&self.dir).map_err(io_err(&self.dir))?;
        let path = self.dir.join(file_name);
        std::fs::write(&path, png).map_err(io_err(&path))?;
        log::info!("saved {}", path.display());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone as _;
    use image::Rgba;

    #[derive(Default)]
    struct Recorder {
        share_result: Option<fn() -> ExportError>,
        shared: usize,
        downloaded: Vec<String>,
    }

    impl Exporter for Recorder {
        fn share(&mut self, _png: &[u8], _file_name: &str) -> Result<(), ExportError> {
            match self.share_result {
                Some(err) => Err(err()),
                None => {
                    self.shared += 1;
                    Ok(())
                }
            }
        }

        fn download(&mut self, _png: &[u8], file_name: &str) -> Result<PathBuf, ExportError> {
            self.downloaded.push(file_name.to_owned());
            Ok(PathBuf::from(file_name))
        }
    }

    #[test]
    fn test_export_file_name() {
        let now = Utc.timestamp_millis_opt(1_700_000_000_123).single().expect("valid timestamp");
        assert_eq!(export_file_name(now), "bizcard_1700000000123.png");
    }

    #[test]
    fn test_encode_png_signature() {
        let canvas = RgbaImage::from_pixel(3, 2, Rgba([1, 2, 3, 255]));
        let png = encode_png(&canvas).expect("encode");
        assert!(png.starts_with(b"\x89PNG\r\n\x1a\n"));
        let decoded = image::load_from_memory(&png).expect("decode").to_rgba8();
        assert_eq!(decoded, canvas);
    }

    #[test]
    fn test_share_success_skips_download() {
        let mut recorder = Recorder::default();
        let outcome = export(&mut recorder, b"png", "a.png").expect("export");
        assert_eq!(outcome, ExportOutcome::Shared);
        assert_eq!(recorder.shared, 1);
        assert!(recorder.downloaded.is_empty());
    }

    #[test]
    fn test_share_unavailable_falls_back() {
        let mut recorder = Recorder {
            share_result: Some(|| ExportError::ShareUnavailable),
            ..Recorder::default()
        };
        let outcome = export(&mut recorder, b"png", "a.png").expect("export");
        assert_eq!(outcome, ExportOutcome::Downloaded(PathBuf::from("a.png")));
    }

    #[test]
    fn test_share_failure_falls_back() {
        let mut recorder = Recorder {
            share_result: Some(|| ExportError::Share(std::io::Error::other("cancelled"))),
            ..Recorder::default()
        };
        let outcome = export(&mut recorder, b"png", "b.png").expect("export");
        assert_eq!(outcome, ExportOutcome::Downloaded(PathBuf::from("b.png")));
        assert_eq!(recorder.downloaded, ["b.png"]);
    }

    #[test]
    fn test_directory_exporter_writes_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut exporter = DirectoryExporter::new(dir.path().join("nested"));
        let outcome = export(&mut exporter, b"data", "card.png").expect("export");
        let path = dir.path().join("nested").join("card.png");
        assert_eq!(outcome, ExportOutcome::Downloaded(path.clone()));
        assert_eq!(std::fs::read(path).expect("read back"), b"data");
    }
}
