//! Font loading for the text overlay.

use std::path::{Path, PathBuf};

use rusttype::Font;

use crate::error::RenderError;

/// Fonts tried when no font is configured, CJK-capable faces first.
pub const SYSTEM_FONT_CANDIDATES: &[&str] = &[
    "/System/Library/Fonts/PingFang.ttc",
    "/System/Library/Fonts/Hiragino Sans GB.ttc",
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Bold.ttc",
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/google-noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/truetype/wqy/wqy-microhei.ttc",
    "C:\\Windows\\Fonts\\msyhbd.ttc",
    "C:\\Windows\\Fonts\\msyh.ttc",
    "/System/Library/Fonts/Helvetica.ttc",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/TTF/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans-Bold.ttf",
    "C:\\Windows\\Fonts\\segoeuib.ttf",
];

/// A loaded font face.
pub struct FontFace {
    font: Font<'static>,
    origin: String,
}

impl std::fmt::Debug for FontFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontFace")
            .field("origin", &self.origin)
            .field("glyphs", &self.font.glyph_count())
            .finish()
    }
}

impl FontFace {
    /// Parse font bytes. Collections (`.ttc`) use their first face.
    pub fn from_bytes(bytes: Vec<u8>, origin: impl Into<String>) -> Result<Self, RenderError> {
        let origin = origin.into();
        let font = Font::try_from_vec(bytes).ok_or_else(|| RenderError::InvalidFont(origin.clone()))?;
        Ok(Self { font, origin })
    }

    pub fn load(path: &Path) -> Result<Self, RenderError> {
        let bytes = std::fs::read(path).map_err(|source| RenderError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let face = Self::from_bytes(bytes, path.display().to_string())?;
        log::info!("loaded font {}", path.display());
        Ok(face)
    }

    /// First loadable font among [`SYSTEM_FONT_CANDIDATES`].
    pub fn discover() -> Option<Self> {
        Self::discover_in(SYSTEM_FONT_CANDIDATES.iter().map(PathBuf::from))
    }

    pub fn discover_in(candidates: impl IntoIterator<Item = PathBuf>) -> Option<Self> {
        candidates
            .into_iter()
            .filter(|p| p.is_file())
            .find_map(|p| match Self::load(&p) {
                Ok(face) => Some(face),
                Err(e) => {
                    log::debug!("skipping font candidate: {e}");
                    None
                }
            })
    }

    pub fn font(&self) -> &Font<'static> {
        &self.font
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Characters of `text` the face has no glyph for (whitespace ignored).
    pub fn missing_glyphs(&self, text: &str) -> Vec<char> {
        text.chars()
            .filter(|c| !c.is_whitespace() && self.font.glyph(*c).id().0 == 0)
            .collect()
    }
}
