//! Quoted-printable encoding for vCard 2.1 values.

/// Maximum physical line length, soft-break `=` included.
const MAX_LINE: usize = 76;

fn is_literal(byte: u8) -> bool {
    (b'!'..=b'~').contains(&byte) && byte != b'=' || byte == b' ' || byte == b'\t'
}

/// Encode `value` as quoted-printable.
///
/// `prefix_len` is the length of `NAME;PARAMS:` already written on the first
/// physical line. Line breaks inside the value are encoded as `=0D=0A`, so the
/// only physical breaks are soft ones (`=` followed by `line_ending`), placed
/// so no line exceeds 76 characters and no `=XX` triplet is split.
pub fn encode_quoted_printable(value: &str, prefix_len: usize, line_ending: &str) -> String {
    let bytes = value.as_bytes();
    let mut out = String::with_capacity(bytes.len() * 3);
    let mut line_len = prefix_len;

    for (i, &byte) in bytes.iter().enumerate() {
        let is_last = i + 1 == bytes.len();
        let token = if is_literal(byte) && !(is_last && (byte == b' ' || byte == b'\t')) {
            char::from(byte).to_string()
        } else {
            format!("={byte:02X}")
        };

        if line_len + token.len() > MAX_LINE - 1 {
            out.push('=');
            out.push_str(line_ending);
            line_len = 0;
        }
        line_len += token.len();
        out.push_str(&token);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_passes_through() {
        assert_eq!(encode_quoted_printable("Hello World", 0, "\r\n"), "Hello World");
    }

    #[test]
    fn test_utf8_bytes_are_hex_encoded() {
        assert_eq!(encode_quoted_printable("王", 0, "\r\n"), "=E7=8E=8B");
    }

    #[test]
    fn test_equals_and_newline() {
        assert_eq!(encode_quoted_printable("a=b\r\nc", 0, "\r\n"), "a=3Db=0D=0Ac");
    }

    #[test]
    fn test_trailing_space_is_encoded() {
        assert_eq!(encode_quoted_printable("a ", 0, "\r\n"), "a=20");
    }

    #[test]
    fn test_soft_breaks_respect_line_length() {
        let value = "张".repeat(40);
        let encoded = encode_quoted_printable(&value, "FN;CHARSET=UTF-8;ENCODING=QUOTED-PRINTABLE:".len(), "\r\n");
        let mut lines = encoded.split("\r\n");
        let first = lines.next().unwrap_or_default();
        assert!(first.len() + 43 <= MAX_LINE, "first line too long: {first}");
        for line in encoded.split("\r\n") {
            assert!(line.len() <= MAX_LINE, "line too long: {line}");
            // A soft break never lands inside an =XX triplet.
            let body = line.strip_suffix('=').unwrap_or(line);
            assert_eq!(body.len() % 3, 0, "split triplet in {line}");
        }
        let rejoined: String = encoded.split("=\r\n").collect();
        assert_eq!(rejoined, "=E5=BC=A0".repeat(40));
    }
}
