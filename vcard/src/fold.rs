//! Content-line folding.

/// Longest content line, in octets, before folding.
pub const MAX_LINE_OCTETS: usize = 75;

/// Fold `line` so no physical line exceeds 75 octets.
///
/// Continuation lines start with a single space, which counts toward their
/// length. Folding only happens on character boundaries so multi-byte UTF-8
/// sequences stay intact.
pub fn fold_line(line: &str, line_ending: &str) -> String {
    if line.len() <= MAX_LINE_OCTETS {
        return line.to_owned();
    }

    let mut out = String::with_capacity(line.len() + line.len() / MAX_LINE_OCTETS * 3);
    let mut current = 0;
    for c in line.chars() {
        if current + c.len_utf8() > MAX_LINE_OCTETS {
            out.push_str(line_ending);
            out.push(' ');
            current = 1;
        }
        out.push(c);
        current += c.len_utf8();
    }
    out
}

/// Undo [`fold_line`]: remove every line ending followed by a space or tab.
pub fn unfold(text: &str) -> String {
    text.replace("\r\n ", "")
        .replace("\r\n\t", "")
        .replace("\n ", "")
        .replace("\n\t", "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_line_untouched() {
        assert_eq!(fold_line("FN:Ada Lovelace", "\r\n"), "FN:Ada Lovelace");
    }

    #[test]
    fn test_fold_ascii() {
        let line = format!("NOTE:{}", "x".repeat(200));
        let folded = fold_line(&line, "\r\n");
        for physical in folded.split("\r\n") {
            assert!(physical.len() <= MAX_LINE_OCTETS, "too long: {}", physical.len());
        }
        assert_eq!(unfold(&folded), line);
    }

    #[test]
    fn test_fold_never_splits_utf8() {
        let line = format!("ORG:{}", "株式会社".repeat(12));
        let folded = fold_line(&line, "\r\n");
        for physical in folded.split("\r\n") {
            assert!(physical.len() <= MAX_LINE_OCTETS, "too long: {}", physical.len());
            // Every physical line is valid UTF-8 by construction; check it
            // is not empty after the fold marker.
            assert!(!physical.trim_start().is_empty(), "empty continuation line");
        }
        assert_eq!(unfold(&folded), line);
    }

    #[test]
    fn test_fold_with_lf() {
        let line = "y".repeat(80);
        let folded = fold_line(&line, "\n");
        assert_eq!(folded, format!("{}\n {}", "y".repeat(75), "y".repeat(5)));
    }
}
