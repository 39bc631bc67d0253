//! Render the full card and export it.

use anyhow::{Context as _, Result};
use bizcard_render::{DirectoryExporter, ExportOutcome, encode_png, export, load_image};
use chrono::Utc;
use tracing::instrument;

use crate::cli::RenderArgs;
use crate::config::Config;
use crate::output::Output;
use crate::settings::{build_card, canvas_size, destination, placement, resolve_font};
use crate::share::PipeExporter;

#[instrument(skip_all, name = "render", fields(share = args.share))]
pub fn run_render(args: &RenderArgs, config: &Config) -> Result<()> {
    let out = if args.share { Output::stderr() } else { Output::new() };

    let mut card = build_card(&args.contact, &args.encoding, &args.style, config)?;
    if let Some(path) = &args.background {
        let background =
            load_image(path).with_context(|| format!("Failed to load background: {}", path.display()))?;
        card.background = Some(background);
    }
    card.regenerate().context("Failed to build the QR code")?;

    let (width, height) = canvas_size(args, config);
    let placement = placement(args, config);
    let font = resolve_font(args.font.as_deref().or(config.card.font.as_deref()))?;
    if font.is_none() && !(card.contact.org.is_empty() && card.contact.name.is_empty()) {
        out.warning("No usable font found; company and name are left out. Pass --font to fix this.");
    }

    let canvas = card.render(width, height, placement, font.as_ref());
    let png = encode_png(&canvas).context("Failed to encode PNG")?;
    tracing::info!(width, height, bytes = png.len(), "card rendered");

    let (dir, file_name) = destination(args, config, Utc::now());
    let outcome = if args.share {
        export(&mut PipeExporter::stdout(dir), &png, &file_name)
    } else {
        export(&mut DirectoryExporter::new(dir), &png, &file_name)
    }
    .context("Failed to export card")?;

    match outcome {
        ExportOutcome::Shared => out.success(format!("Shared {file_name} ({} bytes)", png.len())),
        ExportOutcome::Downloaded(path) => {
            out.success(format!("Saved {}", path.display()));
            out.labeled_indent("size", format!("{width}x{height}"), 2);
            out.labeled_indent(
                "qr",
                format!("x {:.2}, y {:.2}, scale {:.2}", placement.x, placement.y, placement.scale),
                2,
            );
        }
    }
    Ok(())
}
