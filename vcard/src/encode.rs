//! vCard payload assembly.

use crate::contact::Contact;
use crate::error::VCardError;
use crate::escape::{escape_components, escape_text, escape_uri, has_newline};
use crate::fold::fold_line;
use crate::name::split_name;
use crate::profile::{CharsetPolicy, EncodeOptions, LineEnding, Version};
use crate::qp::encode_quoted_printable;

/// Byte capacity of a version-40 QR symbol at error correction level H.
pub const QR_BYTE_CAPACITY_H: usize = 1273;

/// One content line before parameters and encoding are decided.
struct Property<'a> {
    name: &'static str,
    /// Parameters that depend only on the version, e.g. `TYPE=CELL`.
    type_params: &'a [&'static str],
    /// The raw, unescaped value (used for charset/encoding decisions).
    raw: String,
    /// The value escaped for the target version.
    escaped: String,
    is_text: bool,
}

impl Property<'_> {
    fn render(&self, opts: &EncodeOptions) -> String {
        let line_ending = opts.line_ending.as_str();
        let mut params: Vec<&str> = self.type_params.to_vec();
        let quoted_printable =
            opts.version == Version::V2_1 && (!self.raw.is_ascii() || has_newline(&self.raw));

        // A quoted-printable value always gets its charset label, ASCII or not.
        let qp_charset = quoted_printable && opts.charset == CharsetPolicy::NonAscii;
        if qp_charset || opts.wants_charset(self.is_text, &self.raw) {
            params.push("CHARSET=UTF-8");
        }
        if quoted_printable {
            params.push("ENCODING=QUOTED-PRINTABLE");
        }

        let mut prefix = String::from(self.name);
        for param in params {
            prefix.push(';');
            prefix.push_str(param);
        }
        prefix.push(':');

        if quoted_printable {
            let value = encode_quoted_printable(&self.escaped, prefix.len(), line_ending);
            format!("{prefix}{value}")
        } else {
            let line = format!("{prefix}{}", self.escaped);
            if opts.fold {
                fold_line(&line, line_ending)
            } else {
                line
            }
        }
    }
}

fn tel_params(version: Version) -> &'static [&'static str] {
    match version {
        Version::V2_1 => &["CELL"],
        Version::V3_0 => &["TYPE=CELL"],
        Version::V4_0 => &["TYPE=cell"],
    }
}

fn email_params(version: Version) -> &'static [&'static str] {
    match version {
        Version::V2_1 => &["INTERNET"],
        Version::V3_0 => &["TYPE=INTERNET"],
        Version::V4_0 => &[],
    }
}

fn text_property(name: &'static str, value: &str, version: Version) -> Property<'static> {
    Property {
        name,
        type_params: &[],
        raw: value.to_owned(),
        escaped: escape_text(value, version),
        is_text: true,
    }
}

fn properties(contact: &Contact, opts: &EncodeOptions) -> Result<Vec<Property<'static>>, VCardError> {
    let version = opts.version;
    let display_name = contact.display_name().ok_or(VCardError::MissingName)?;
    let structured = split_name(&contact.name, opts.name_split);

    let mut props = vec![
        text_property("FN", display_name, version),
        Property {
            name: "N",
            type_params: &[],
            raw: structured.components().concat(),
            escaped: escape_components(structured.components(), version),
            is_text: true,
        },
    ];

    if !contact.org.is_empty() {
        props.push(text_property("ORG", &contact.org, version));
    }
    if !contact.title.is_empty() {
        props.push(text_property("TITLE", &contact.title, version));
    }
    if !contact.tel.is_empty() {
        props.push(Property {
            name: "TEL",
            type_params: tel_params(version),
            raw: contact.tel.clone(),
            escaped: escape_text(&contact.tel, version),
            is_text: false,
        });
    }
    if !contact.email.is_empty() {
        props.push(Property {
            name: "EMAIL",
            type_params: email_params(version),
            raw: contact.email.clone(),
            escaped: escape_text(&contact.email, version),
            is_text: false,
        });
    }
    if !contact.url.is_empty() {
        props.push(Property {
            name: "URL",
            type_params: &[],
            raw: contact.url.clone(),
            escaped: escape_uri(&contact.url, version),
            is_text: false,
        });
    }
    if !contact.note.is_empty() {
        props.push(text_property("NOTE", &contact.note, version));
    }
    Ok(props)
}

/// Encode `contact` as a vCard.
///
/// Fields are trimmed first and empty ones are skipped. `FN` falls back to
/// the company when the name is empty; a contact with neither is rejected.
pub fn encode(contact: &Contact, opts: &EncodeOptions) -> Result<String, VCardError> {
    let contact = contact.trimmed();
    let line_ending = opts.line_ending.as_str();

    let mut lines = vec![
        "BEGIN:VCARD".to_owned(),
        format!("VERSION:{}", opts.version),
    ];
    lines.extend(properties(&contact, opts)?.iter().map(|p| p.render(opts)));
    lines.push("END:VCARD".to_owned());

    let mut payload = lines.join(line_ending);
    if opts.line_ending == LineEnding::Crlf {
        payload.push_str(line_ending);
    }
    log::debug!(
        "encoded vCard {} ({} bytes, {} lines)",
        opts.version,
        payload.len(),
        lines.len()
    );
    Ok(payload)
}

/// Encode `contact` and check the payload fits in a QR code at level H.
pub fn encode_for_qr(contact: &Contact, opts: &EncodeOptions) -> Result<String, VCardError> {
    let payload = encode(contact, opts)?;
    if payload.len() > QR_BYTE_CAPACITY_H {
        return Err(VCardError::PayloadTooLarge {
            len: payload.len(),
            max: QR_BYTE_CAPACITY_H,
        });
    }
    Ok(payload)
}
