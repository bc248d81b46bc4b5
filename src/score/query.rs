//! Query tokenization.
//!
//! ```text
//! "What is the Krebs-cycle's role?"
//!        ↓ lowercase, split on whitespace
//! ["what", "is", "the", "krebs-cycle's", "role?"]
//!        ↓ keep letters, digits and '_'
//! ["what", "is", "the", "krebscycles", "role"]
//!        ↓ drop short terms and stop words
//! ["what", "krebscycles", "role"]
//! ```
//!
//! Term length is measured in grapheme clusters, so a two-letter word in a
//! decomposed script is still two letters.

use std::collections::HashSet;

use unicode_segmentation::UnicodeSegmentation;

/// Stop words used by [`StopWords::default`].
pub const DEFAULT_STOP_WORDS: [&str; 20] = [
    "the", "is", "at", "which", "on", "a", "an", "and", "or", "but", "in", "with", "to", "for",
    "of", "as", "by", "this", "that", "it",
];

/// Shortest term, in grapheme clusters, that survives tokenization.
pub const MIN_TERM_LEN: usize = 3;

/// Characters that belong to a term: letters, digits and underscore.
///
/// "Letters" is Unicode `Alphabetic`, which also takes in the combining
/// vowel signs of scripts such as Devanagari. Stripping those would split
/// a word into consonants.
pub(crate) fn is_term_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Low-information words excluded from queries.
///
/// ```rust
/// use chunkwise::StopWords;
///
/// let stop_words = StopWords::default().extend(["chapter", "Part"]);
/// assert!(stop_words.contains("the"));
/// assert!(stop_words.contains("part"));
/// assert!(!stop_words.contains("mitosis"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// A stop-word set from arbitrary words, stored lowercased.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words.into_iter().map(|w| w.as_ref().to_lowercase()).collect(),
        }
    }

    /// An empty set: only the length filter applies.
    #[must_use]
    pub fn none() -> Self {
        Self {
            words: HashSet::new(),
        }
    }

    /// Add more words to the set.
    #[must_use]
    pub fn extend<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.words
            .extend(words.into_iter().map(|w| w.as_ref().to_lowercase()));
        self
    }

    /// Whether `word` (already lowercased) is a stop word.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of stop words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for StopWords {
    fn default() -> Self {
        Self::new(DEFAULT_STOP_WORDS)
    }
}

/// The searchable terms of a query, in query order.
///
/// Repeated words are kept: a term given twice is scored twice, though it
/// still counts once toward
/// [`RelevantChunk::matched_words`](crate::RelevantChunk::matched_words).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryTerms {
    terms: Vec<String>,
}

impl QueryTerms {
    /// Tokenize `query`.
    ///
    /// ```rust
    /// use chunkwise::{QueryTerms, StopWords};
    ///
    /// let terms = QueryTerms::parse("Explain the Cat's mat, at night!", &StopWords::default());
    /// assert_eq!(terms.as_slice(), ["explain", "cats", "mat", "night"]);
    /// ```
    #[must_use]
    pub fn parse(query: &str, stop_words: &StopWords) -> Self {
        let terms = query
            .to_lowercase()
            .split_whitespace()
            .map(|word| word.chars().filter(|&c| is_term_char(c)).collect::<String>())
            .filter(|term| term.graphemes(true).count() >= MIN_TERM_LEN)
            .filter(|term| !stop_words.contains(term))
            .collect();
        Self { terms }
    }

    /// The terms as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.terms
    }

    /// Iterate the terms.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(String::as_str)
    }

    /// Number of terms, repeats included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Whether nothing searchable survived.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(query: &str) -> Vec<String> {
        QueryTerms::parse(query, &StopWords::default()).terms
    }

    #[test]
    fn test_lowercases_and_strips_punctuation() {
        assert_eq!(parse("Photosynthesis, (light)!"), vec!["photosynthesis", "light"]);
    }

    #[test]
    fn test_drops_short_terms() {
        assert_eq!(parse("go to pH 7 now"), vec!["now"]);
    }

    #[test]
    fn test_drops_stop_words() {
        assert!(parse("which is that and this").is_empty());
    }

    #[test]
    fn test_unicode_letters_kept() {
        assert_eq!(parse("Über café naïve"), vec!["über", "café", "naïve"]);
        assert_eq!(parse("日本語 テスト"), vec!["日本語", "テスト"]);
    }

    #[test]
    fn test_combining_vowel_signs_kept() {
        assert!(is_term_char('\u{093F}'));
        assert_eq!(parse("किताब?"), vec!["किताब"]);
    }

    #[test]
    fn test_underscore_and_digits_kept() {
        assert_eq!(parse("snake_case 2024"), vec!["snake_case", "2024"]);
    }

    #[test]
    fn test_repeats_kept() {
        assert_eq!(parse("cell cell"), vec!["cell", "cell"]);
    }

    #[test]
    fn test_custom_stop_words() {
        let stop_words = StopWords::none().extend(["Chapter"]);
        let terms = QueryTerms::parse("chapter the end", &stop_words);
        assert_eq!(terms.as_slice(), ["the", "end"]);
    }

    #[test]
    fn test_default_stop_words() {
        let stop_words = StopWords::default();
        assert_eq!(stop_words.len(), DEFAULT_STOP_WORDS.len());
        assert!(stop_words.contains("which"));
    }
}
