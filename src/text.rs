//! Text normalization and paragraph extraction.
//!
//! Extracted text arrives with whatever line endings the source produced
//! (PDF extractors are fond of `\r`), tabs used as layout, and stray blank
//! lines. Before chunking:
//!
//! ```text
//! "Title\r\n\r\n\tFirst para.\rSecond para.  "
//!         ↓ normalize
//! "Title\n\n First para.\nSecond para."
//!         ↓ paragraphs
//! ["Title", "First para.", "Second para."]
//! ```
//!
//! Any run of newlines ends a paragraph, so a single line break is already
//! a paragraph boundary.

/// Unify line endings to `\n`, turn tabs into spaces, trim the ends.
#[must_use]
pub fn normalize(text: &str) -> String {
    text.replace("\r\n", "\n")
        .replace('\r', "\n")
        .replace('\t', " ")
        .trim()
        .to_string()
}

/// Split normalized text into trimmed, non-empty paragraphs.
pub fn paragraphs(normalized: &str) -> impl Iterator<Item = &str> {
    normalized
        .split('\n')
        .map(str::trim)
        .filter(|p| !p.is_empty())
}

/// Whitespace-delimited words.
#[must_use]
pub fn words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_line_endings() {
        assert_eq!(normalize("a\r\nb\rc\nd"), "a\nb\nc\nd");
    }

    #[test]
    fn test_normalize_tabs_and_trim() {
        assert_eq!(normalize("\t  a\tb  \n"), "a b");
    }

    #[test]
    fn test_paragraphs_drop_blank_runs() {
        let text = normalize("First.\n\n\n   \nSecond line\nThird.");
        let paras: Vec<_> = paragraphs(&text).collect();
        assert_eq!(paras, vec!["First.", "Second line", "Third."]);
    }

    #[test]
    fn test_whitespace_only_has_no_paragraphs() {
        let text = normalize(" \r\n\t \n ");
        assert!(text.is_empty());
        assert_eq!(paragraphs(&text).count(), 0);
    }

    #[test]
    fn test_words_collapse_whitespace() {
        assert_eq!(words("  a   b\u{00a0}c \n d"), vec!["a", "b", "c", "d"]);
    }
}
