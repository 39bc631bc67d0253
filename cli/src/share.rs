//! Sharing a card by piping it to another program.

use std::io::{IsTerminal as _, Stdout, Write};
use std::path::PathBuf;

use bizcard_render::{DirectoryExporter, ExportError, Exporter};

/// Shares by writing the PNG to a pipe and downloads into a directory.
///
/// A terminal is not a share target, so `bizcard render --share` on an
/// interactive shell falls back to saving the file.
pub struct PipeExporter<W> {
    sink: W,
    piped: bool,
    fallback: DirectoryExporter,
}

impl PipeExporter<Stdout> {
    pub fn stdout(dir: impl Into<PathBuf>) -> Self {
        let stdout = std::io::stdout();
        let piped = !stdout.is_terminal();
        Self::new(stdout, piped, dir)
    }
}

impl<W: Write> PipeExporter<W> {
    pub fn new(sink: W, piped: bool, dir: impl Into<PathBuf>) -> Self {
        Self {
            sink,
            piped,
            fallback: DirectoryExporter::new(dir),
        }
    }
}

impl<W: Write> Exporter for PipeExporter<W> {
    fn share(&mut self, png: &[u8], file_name: &str) -> Result<(), ExportError> {
        if !self.piped {
            return Err(ExportError::ShareUnavailable);
        }
        tracing::debug!(file_name, bytes = png.len(), "writing PNG to pipe");
        self.sink
            .write_all(png)
            .and_then(|()| self.sink.flush())
            .map_err(ExportError::Share)
    }

    fn download(&mut self, png: &[u8], file_name: &str) -> Result<PathBuf, ExportError> {
        self.fallback.download(png, file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bizcard_render::{ExportOutcome, export};

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_piped_share_writes_bytes() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut exporter = PipeExporter::new(Vec::new(), true, dir.path());
        let outcome = export(&mut exporter, b"\x89PNG", "card.png").expect("export");
        assert_eq!(outcome, ExportOutcome::Shared);
        assert_eq!(exporter.sink, b"\x89PNG");
        assert!(!dir.path().join("card.png").exists());
    }

    #[test]
    fn test_terminal_falls_back_to_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut exporter = PipeExporter::new(Vec::new(), false, dir.path());
        let outcome = export(&mut exporter, b"png", "card.png").expect("export");
        assert_eq!(outcome, ExportOutcome::Downloaded(dir.path().join("card.png")));
        assert!(exporter.sink.is_empty());
    }

    #[test]
    fn test_broken_pipe_falls_back_to_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut exporter = PipeExporter::new(BrokenPipe, true, dir.path());
        let outcome = export(&mut exporter, b"png", "card.png").expect("export");
        assert_eq!(outcome, ExportOutcome::Downloaded(dir.path().join("card.png")));
    }
}
