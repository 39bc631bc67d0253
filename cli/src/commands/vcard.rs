//! Print the vCard payload.

use std::io::Write as _;

use anyhow::{Context as _, Result};
use bizcard_vcard::encode_for_qr;
use tracing::instrument;

use crate::cli::{ContactArgs, EncodingArgs};
use crate::config::Config;

/// Writes the payload byte for byte, CRLF line endings included, so it can be
/// piped into another QR encoder.
#[instrument(skip_all, name = "vcard")]
pub fn run_vcard(contact: &ContactArgs, encoding: &EncodingArgs, config: &Config) -> Result<()> {
    let options = encoding.options(config.profile()?);
    let payload = encode_for_qr(&contact.to_contact(), &options).context("Failed to encode vCard")?;
    tracing::debug!(version = %options.version, bytes = payload.len(), "vCard encoded");

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(payload.as_bytes())
        .and_then(|()| stdout.flush())
        .context("Failed to write vCard to stdout")?;
    Ok(())
}
