//! Merging command line flags with the configuration file.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use bizcard_render::{BizCard, FontFace, LogoAspect, LogoStyle, Placement, QrStyle, export_file_name, load_image, parse_hex_color};
use chrono::{DateTime, Utc};

use crate::cli::{ContactArgs, EncodingArgs, QrArgs, RenderArgs};
use crate::config::{Config, DEFAULT_HEIGHT, DEFAULT_WIDTH};

pub fn qr_style(args: &QrArgs, config: &Config) -> Result<QrStyle> {
    let defaults = QrStyle::default();
    Ok(QrStyle {
        size: args.qr_size.or(config.qr.size).unwrap_or(defaults.size),
        dark: parse_hex_color(&args.dark).context("Invalid --dark colour")?,
        light: parse_hex_color(&args.light).context("Invalid --light colour")?,
        ..defaults
    })
}

pub fn logo_style(args: &QrArgs) -> LogoStyle {
    if args.logo_intrinsic {
        LogoStyle {
            aspect: LogoAspect::Intrinsic,
            ..LogoStyle::default()
        }
    } else {
        LogoStyle::default()
    }
}

/// Build a card from the contact, encoding and QR flags. The QR image is not
/// generated yet.
pub fn build_card(contact: &ContactArgs, encoding: &EncodingArgs, style: &QrArgs, config: &Config) -> Result<BizCard> {
    let mut card = BizCard::new(contact.to_contact(), encoding.options(config.profile()?));
    card.qr_style = qr_style(style, config)?;
    card.logo_style = logo_style(style);
    if let Some(path) = &style.logo {
        let logo = load_image(path).with_context(|| format!("Failed to load logo: {}", path.display()))?;
        card.logo = Some(logo);
    }
    Ok(card)
}

pub fn canvas_size(args: &RenderArgs, config: &Config) -> (u32, u32) {
    (
        args.width.or(config.card.width).unwrap_or(DEFAULT_WIDTH).max(1),
        args.height.or(config.card.height).unwrap_or(DEFAULT_HEIGHT).max(1),
    )
}

pub fn placement(args: &RenderArgs, config: &Config) -> Placement {
    let defaults = Placement::default();
    Placement::new(
        args.qr_x.or(config.qr.x).unwrap_or(defaults.x),
        args.qr_y.or(config.qr.y).unwrap_or(defaults.y),
        args.qr_scale.or(config.qr.scale).unwrap_or(defaults.scale),
    )
}

/// Directory and file name for the exported card.
pub fn destination(args: &RenderArgs, config: &Config, now: DateTime<Utc>) -> (PathBuf, String) {
    if let Some(output) = &args.output
        && let Some(name) = output.file_name()
    {
        let dir = output
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map_or_else(|| PathBuf::from("."), Path::to_path_buf);
        return (dir, name.to_string_lossy().into_owned());
    }
    let dir = args
        .out_dir
        .clone()
        .or_else(|| config.export.out_dir.clone())
        .unwrap_or_else(|| PathBuf::from("."));
    (dir, export_file_name(now))
}

/// Load the configured font, or look for a system font.
pub fn resolve_font(path: Option<&Path>) -> Result<Option<FontFace>> {
    match path {
        Some(path) => {
            let face = FontFace::load(path).with_context(|| format!("Failed to load font: {}", path.display()))?;
            Ok(Some(face))
        }
        None => Ok(FontFace::discover()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ExportConfig, QrConfig};
    use chrono::TimeZone as _;

    fn qr_args() -> QrArgs {
        QrArgs {
            dark: "#000000".to_owned(),
            light: "#ffffff".to_owned(),
            ..QrArgs::default()
        }
    }

    fn render_args() -> RenderArgs {
        RenderArgs {
            style: qr_args(),
            ..RenderArgs::default()
        }
    }

    #[test]
    fn test_qr_style_flag_beats_config() {
        let config = Config {
            qr: QrConfig {
                size: Some(512),
                ..QrConfig::default()
            },
            ..Config::default()
        };
        assert_eq!(qr_style(&qr_args(), &config).expect("valid").size, 512);

        let args = QrArgs {
            qr_size: Some(256),
            ..qr_args()
        };
        assert_eq!(qr_style(&args, &config).expect("valid").size, 256);
    }

    #[test]
    fn test_qr_style_rejects_bad_colour() {
        let args = QrArgs {
            dark: "black".to_owned(),
            ..qr_args()
        };
        assert!(qr_style(&args, &Config::default()).is_err());
    }

    #[test]
    fn test_placement_merging() {
        let config = Config {
            qr: QrConfig {
                x: Some(0.2),
                scale: Some(9.0),
                ..QrConfig::default()
            },
            ..Config::default()
        };
        let args = RenderArgs {
            qr_y: Some(0.4),
            ..render_args()
        };
        let p = placement(&args, &config);
        assert_eq!(p, Placement::new(0.2, 0.4, 2.5));
    }

    #[test]
    fn test_canvas_size_defaults() {
        assert_eq!(canvas_size(&render_args(), &Config::default()), (DEFAULT_WIDTH, DEFAULT_HEIGHT));
        let args = RenderArgs {
            width: Some(0),
            ..render_args()
        };
        assert_eq!(canvas_size(&args, &Config::default()).0, 1);
    }

    #[test]
    fn test_destination() {
        let now = Utc.timestamp_millis_opt(42).single().expect("valid timestamp");
        let (dir, name) = destination(&render_args(), &Config::default(), now);
        assert_eq!((dir, name.as_str()), (PathBuf::from("."), "bizcard_42.png"));

        let config = Config {
            export: ExportConfig {
                out_dir: Some(PathBuf::from("/tmp/cards")),
            },
            ..Config::default()
        };
        assert_eq!(destination(&render_args(), &config, now).0, PathBuf::from("/tmp/cards"));

        let args = RenderArgs {
            output: Some(PathBuf::from("out/me.png")),
            ..render_args()
        };
        assert_eq!(destination(&args, &config, now), (PathBuf::from("out"), "me.png".to_owned()));

        let args = RenderArgs {
            output: Some(PathBuf::from("me.png")),
            ..render_args()
        };
        assert_eq!(destination(&args, &config, now).0, PathBuf::from("."));
    }

    #[test]
    fn test_build_card_missing_logo() {
        let style = QrArgs {
            logo: Some(PathBuf::from("/nonexistent/logo.png")),
            ..qr_args()
        };
        let contact = ContactArgs {
            name: "Ada".to_owned(),
            ..ContactArgs::default()
        };
        let err = build_card(&contact, &EncodingArgs::default(), &style, &Config::default()).expect_err("missing logo");
        assert!(format!("{err:#}").contains("logo"), "{err:#}");
    }

    #[test]
    fn test_resolve_font_reports_bad_path() {
        assert!(resolve_font(Some(Path::new("/nonexistent/font.ttf"))).is_err());
    }
}
