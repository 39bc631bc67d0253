//! Configuration file handling for the CLI.
//!
//! Card defaults live in `$XDG_CONFIG_HOME/bizcard/config.toml` following
//! the XDG Base Directory Specification. Every value is optional; command
//! line flags and `BIZCARD_*` environment variables take precedence.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use bizcard_render::Placement;
use bizcard_vcard::Profile;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

pub const DEFAULT_WIDTH: u32 = 1080;
pub const DEFAULT_HEIGHT: u32 = 1920;

/// CLI configuration stored on disk
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub card: CardConfig,
    #[serde(default)]
    pub qr: QrConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

/// Canvas and text defaults
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardConfig {
    pub width: Option<u32>,
    pub height: Option<u32>,
    /// Font used for the company and name lines
    pub font: Option<PathBuf>,
    /// Importer profile name, e.g. "android"
    pub profile: Option<String>,
}

/// QR placement and size defaults
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct QrConfig {
    pub x: Option<f32>,
    pub y: Option<f32>,
    pub scale: Option<f32>,
    /// Side of the generated QR image in pixels
    pub size: Option<u32>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Directory PNG files are saved to
    pub out_dir: Option<PathBuf>,
}

impl Config {
    /// Get the configuration file path.
    ///
    /// Returns `$XDG_CONFIG_HOME/bizcard/config.toml` on Linux,
    /// appropriate paths on other platforms.
    pub fn config_path() -> Result<PathBuf> {
        let project_dirs =
            ProjectDirs::from("com", "bizcard", "bizcard").context("Failed to determine config directory")?;
        Ok(project_dirs.config_dir().join("config.toml"))
    }

    /// Load configuration from the default location.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from `path`.
    ///
    /// Returns default configuration if the file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content =
            fs::read_to_string(path).with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self =
            toml::from_str(&content).with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Save configuration to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        let content = self.to_toml()?;

        fs::write(path, content).with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration")
    }

    /// A configuration with every built-in default spelled out, for `config init`.
    pub fn with_defaults() -> Self {
        let placement = Placement::default();
        Self {
            card: CardConfig {
                width: Some(DEFAULT_WIDTH),
                height: Some(DEFAULT_HEIGHT),
                font: None,
                profile: Some(Profile::default().to_string()),
            },
            qr: QrConfig {
                x: Some(placement.x),
                y: Some(placement.y),
                scale: Some(placement.scale),
                size: Some(bizcard_render::QrStyle::default().size),
            },
            export: ExportConfig::default(),
        }
    }

    /// The configured profile, if any.
    pub fn profile(&self) -> Result<Option<Profile>> {
        self.card
            .profile
            .as_deref()
            .map(|name| name.parse::<Profile>().context("Invalid profile in config file"))
            .transpose()
    }
}
