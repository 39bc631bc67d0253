//! Property value escaping.

use crate::profile::Version;

/// Replace `\r\n`, `\r` and `\n` with `replacement`.
pub(crate) fn normalize_newlines(value: &str, replacement: &str) -> String {
    value
        .replace("\r\n", "\n")
        .replace('\r', "\n")
        .replace('\n', replacement)
}

pub(crate) fn has_newline(value: &str) -> bool {
    value.contains(['\n', '\r'])
}

/// Escape a text value for `version`.
///
/// 3.0 and 4.0 escape backslash, newline, semicolon and comma. 2.1 only
/// knows `\;`; a backslash before a comma shows up verbatim in several 2.1
/// importers, and newlines are carried by quoted-printable instead of an
/// escape, so they are normalised to CRLF here.
pub fn escape_text(value: &str, version: Version) -> String {
    match version {
        Version::V2_1 => normalize_newlines(value, "\r\n").replace(';', "\\;"),
        Version::V3_0 | Version::V4_0 => {
            let mut out = String::with_capacity(value.len());
            let mut chars = value.chars().peekable();
            while let Some(c) = chars.next() {
                match c {
                    '\\' => out.push_str("\\\\"),
                    ';' => out.push_str("\\;"),
                    ',' => out.push_str("\\,"),
                    '\r' => {
                        if chars.peek() == Some(&'\n') {
                            chars.next();
                        }
                        out.push_str("\\n");
                    }
                    '\n' => out.push_str("\\n"),
                    other => out.push(other),
                }
            }
            out
        }
    }
}

/// Escape each component and join them with the structural `;`.
pub fn escape_components<'a>(
    components: impl IntoIterator<Item = &'a str>,
    version: Version,
) -> String {
    components
        .into_iter()
        .map(|c| escape_text(c, version))
        .collect::<Vec<_>>()
        .join(";")
}

/// Escape a URI value. RFC 6350 types `URL` as a URI, which has no text
/// escaping; 2.1 and 3.0 importers expect it escaped like text.
pub fn escape_uri(value: &str, version: Version) -> String {
    match version {
        Version::V4_0 => normalize_newlines(value, ""),
        Version::V2_1 | Version::V3_0 => escape_text(value, version),
    }
}
