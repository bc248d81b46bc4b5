//! Per-chunk term frequencies.
//!
//! A chunk is tokenized once into maximal runs of term characters (letters,
//! digits, `_`), lowercased. Query terms are then answered from the map
//! instead of rescanning the text for every term:
//!
//! ```text
//! "Cats chase the cat-flap's cat."
//!     ↓
//! { "cats": 1, "chase": 1, "the": 1, "cat": 2, "flap": 1, "s": 1 }
//!
//! exact("cat")       = 2            whole-token matches
//! occurrences("cat") = 2 + 1 = 3    "cat" twice, inside "cats" once
//! ```
//!
//! A query term is made of term characters only, so every occurrence of it
//! in the text lies inside a single token and summing per-token counts gives
//! the same total as scanning the whole text.

use std::collections::HashMap;

use super::query::is_term_char;

/// Token counts of one chunk.
#[derive(Debug, Clone, Default)]
pub struct TermCounts {
    counts: HashMap<String, usize>,
    word_count: usize,
}

impl TermCounts {
    /// Tokenize `content`.
    #[must_use]
    pub fn from_content(content: &str) -> Self {
        let lower = content.to_lowercase();
        let mut counts: HashMap<String, usize> = HashMap::new();
        for token in lower.split(|c: char| !is_term_char(c)).filter(|t| !t.is_empty()) {
            *counts.entry(token.to_string()).or_default() += 1;
        }
        Self {
            counts,
            word_count: lower.split_whitespace().count(),
        }
    }

    /// Whitespace-delimited words in the chunk.
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// Whole-token matches of `term`.
    #[must_use]
    pub fn exact(&self, term: &str) -> usize {
        self.counts.get(term).copied().unwrap_or(0)
    }

    /// Non-overlapping occurrences of `term` anywhere in the text, exact
    /// matches included.
    #[must_use]
    pub fn occurrences(&self, term: &str) -> usize {
        if term.is_empty() {
            return 0;
        }
        self.counts
            .iter()
            .map(|(token, count)| token.matches(term).count() * count)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_and_partial() {
        let counts = TermCounts::from_content("Cats chase the cat-flap's cat.");
        assert_eq!(counts.exact("cat"), 2);
        assert_eq!(counts.occurrences("cat"), 3);
        assert_eq!(counts.word_count(), 5);
    }

    #[test]
    fn test_non_overlapping_occurrences() {
        let counts = TermCounts::from_content("aaaa");
        assert_eq!(counts.occurrences("aa"), 2);
        assert_eq!(counts.exact("aa"), 0);
    }

    #[test]
    fn test_case_insensitive() {
        let counts = TermCounts::from_content("MITOSIS and Mitosis");
        assert_eq!(counts.exact("mitosis"), 2);
    }

    #[test]
    fn test_missing_term() {
        let counts = TermCounts::from_content("dogs bark loudly");
        assert_eq!(counts.exact("cat"), 0);
        assert_eq!(counts.occurrences("cat"), 0);
        assert_eq!(counts.occurrences(""), 0);
    }

    #[test]
    fn test_unicode_tokens() {
        let counts = TermCounts::from_content("Le café, les cafés");
        assert_eq!(counts.exact("café"), 1);
        assert_eq!(counts.occurrences("café"), 2);
    }
}
