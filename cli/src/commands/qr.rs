//! Write only the QR code.

use std::path::Path;

use anyhow::{Context as _, Result};
use bizcard_render::encode_png;
use tracing::instrument;

use crate::cli::{ContactArgs, EncodingArgs, QrArgs};
use crate::config::Config;
use crate::output::Output;
use crate::settings::build_card;

#[instrument(skip_all, name = "qr", fields(output = %output.display()))]
pub fn run_qr(contact: &ContactArgs, encoding: &EncodingArgs, style: &QrArgs, output: &Path, config: &Config) -> Result<()> {
    let out = Output::new();

    let mut card = build_card(contact, encoding, style, config)?;
    let qr = card.regenerate().context("Failed to build the QR code")?;
    let png = encode_png(qr).context("Failed to encode PNG")?;

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    std::fs::write(output, &png).with_context(|| format!("Failed to write {}", output.display()))?;

    out.success(format!("Saved {}", output.display()));
    out.labeled_indent("vCard", card.options.version, 2);
    if card.logo.is_some() {
        out.labeled_indent("logo", "embedded", 2);
    }
    Ok(())
}
