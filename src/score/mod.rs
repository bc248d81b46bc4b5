//! Lexical relevance ranking of chunks against a free-text query.
//!
//! ## Scoring
//!
//! For every query term `t` and chunk `c`:
//!
//! ```text
//! raw(c)  = Σ_t  3 · exact(t, c)                     whole-word hits
//!              + 1 · (occurrences(t, c) - exact(t, c))  hits inside longer words
//!         + 2 · matched(c)     if more than one distinct term matched
//!
//! score(c) = raw(c) / sqrt(max(1, words(c)))
//!          + 0.05 · (1 - position(c) / chunks)
//! ```
//!
//! Dividing by the square root of the length rewards dense matches over
//! long chunks that merely mention a term. The position term is small
//! enough to matter only between near-equal chunks, where it prefers the
//! earlier one.
//!
//! Chunks that match no term are dropped. The rest are ordered by score
//! descending, then `matched_words` descending, then `chunk_index`
//! ascending, so the ranking is fully deterministic.

mod query;
mod terms;

pub use query::{QueryTerms, StopWords, DEFAULT_STOP_WORDS, MIN_TERM_LEN};
pub use terms::TermCounts;

use std::cmp::Ordering;
use std::collections::HashSet;
use std::sync::OnceLock;

use tracing::{debug, instrument};

use crate::{Chunk, Error, RelevantChunk, Result};

/// Weight of a whole-word match.
pub const EXACT_WEIGHT: f64 = 3.0;

/// Weight of a match inside a longer word.
pub const PARTIAL_WEIGHT: f64 = 1.0;

/// Bonus per distinct matched term when more than one term matched.
pub const COVERAGE_BONUS: f64 = 2.0;

/// Scale of the earlier-chunk preference.
pub const POSITION_WEIGHT: f64 = 0.05;

/// Result count prompt builders typically ask for.
pub const DEFAULT_MAX_RESULTS: usize = 3;

/// Ranks chunks by weighted keyword matching.
///
/// ## Example
///
/// ```rust
/// use chunkwise::{Chunk, RelevanceScorer};
///
/// let chunks = vec![
///     Chunk::new("the cat sat on the mat", 0),
///     Chunk::new("dogs bark loudly at night", 1),
/// ];
///
/// let ranked = RelevanceScorer::new().find_relevant(&chunks, "cat mat", 2)?;
/// assert_eq!(ranked.len(), 1);
/// assert_eq!(ranked[0].chunk_index, 0);
/// assert_eq!(ranked[0].matched_words, 2);
/// # Ok::<(), chunkwise::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct RelevanceScorer {
    stop_words: StopWords,
}

impl RelevanceScorer {
    /// A scorer with the default English stop words.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A scorer with a custom stop-word set.
    #[must_use]
    pub fn with_stop_words(stop_words: StopWords) -> Self {
        Self { stop_words }
    }

    /// The stop words in use.
    #[must_use]
    pub fn stop_words(&self) -> &StopWords {
        &self.stop_words
    }

    /// Tokenize a query with this scorer's stop words.
    #[must_use]
    pub fn query_terms(&self, query: &str) -> QueryTerms {
        QueryTerms::parse(query, &self.stop_words)
    }

    /// Rank `chunks` against `query`, returning at most `max_results`.
    ///
    /// An empty chunk list, a blank query, or a query made only of stop
    /// words and short words yields an empty ranking.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyChunk`] if a chunk has blank content. Every chunk is
    /// checked before anything is returned.
    #[instrument(
        skip_all,
        fields(chunks = chunks.len(), query_len = query.len(), max_results = max_results)
    )]
    pub fn find_relevant(
        &self,
        chunks: &[Chunk],
        query: &str,
        max_results: usize,
    ) -> Result<Vec<RelevantChunk>> {
        if chunks.is_empty() || query.trim().is_empty() {
            return Ok(vec![]);
        }

        let terms = self.query_terms(query);
        if terms.is_empty() {
            debug!("query has no searchable terms");
            return Ok(vec![]);
        }

        let mut ranked = chunks
            .iter()
            .enumerate()
            .map(|(position, chunk)| score_chunk(chunk, position, chunks.len(), &terms))
            .collect::<Result<Vec<_>>>()?;

        ranked.retain(|r| r.matched_words > 0 && r.score > 0.0);
        let matched = ranked.len();
        ranked.sort_by(rank_order);
        ranked.truncate(max_results);

        debug!(
            terms = terms.len(),
            matched,
            returned = ranked.len(),
            "ranked chunks"
        );
        Ok(ranked)
    }
}

/// Score one chunk. `position` is its place in the input sequence.
fn score_chunk(
    chunk: &Chunk,
    position: usize,
    total: usize,
    terms: &QueryTerms,
) -> Result<RelevantChunk> {
    if chunk.is_blank() {
        return Err(Error::EmptyChunk {
            chunk_index: chunk.chunk_index,
            position,
        });
    }

    let counts = TermCounts::from_content(&chunk.content);
    let mut raw_score = 0.0;
    let mut matched = HashSet::new();

    for term in terms.iter() {
        let exact = counts.exact(term);
        let partial = counts.occurrences(term).saturating_sub(exact);
        raw_score += exact as f64 * EXACT_WEIGHT + partial as f64 * PARTIAL_WEIGHT;
        if exact + partial > 0 {
            matched.insert(term);
        }
    }

    if matched.len() > 1 {
        raw_score += matched.len() as f64 * COVERAGE_BONUS;
    }

    let normalized = raw_score / (counts.word_count().max(1) as f64).sqrt();
    let position_bonus = (1.0 - position as f64 / total as f64) * POSITION_WEIGHT;

    Ok(RelevantChunk {
        content: chunk.content.clone(),
        chunk_index: chunk.chunk_index,
        page_number: chunk.page_number,
        score: normalized + position_bonus,
        raw_score,
        matched_words: matched.len(),
    })
}

/// Score descending, then matched terms descending, then index ascending.
fn rank_order(a: &RelevantChunk, b: &RelevantChunk) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| b.matched_words.cmp(&a.matched_words))
        .then_with(|| a.chunk_index.cmp(&b.chunk_index))
}

/// Rank `chunks` against `query` with the default scorer.
///
/// See [`RelevanceScorer::find_relevant`].
///
/// # Errors
///
/// [`Error::EmptyChunk`] if a chunk has blank content.
pub fn find_relevant(
    chunks: &[Chunk],
    query: &str,
    max_results: usize,
) -> Result<Vec<RelevantChunk>> {
    static DEFAULT: OnceLock<RelevanceScorer> = OnceLock::new();
    DEFAULT
        .get_or_init(RelevanceScorer::new)
        .find_relevant(chunks, query, max_results)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chunks(contents: &[&str]) -> Vec<Chunk> {
        contents
            .iter()
            .enumerate()
            .map(|(i, c)| Chunk::new(*c, i))
            .collect()
    }

    #[test]
    fn test_cat_mat_scenario() {
        let chunks = chunks(&["the cat sat on the mat", "dogs bark loudly at night"]);
        let ranked = find_relevant(&chunks, "cat mat", 2).unwrap();

        assert_eq!(ranked.len(), 1);
        let top = &ranked[0];
        assert_eq!(top.chunk_index, 0);
        assert_eq!(top.matched_words, 2);
        // 3 + 3 exact, plus 2 * 2 coverage bonus
        assert_eq!(top.raw_score, 10.0);
        let expected = 10.0 / 6f64.sqrt() + POSITION_WEIGHT;
        assert!((top.score - expected).abs() < 1e-12);
    }

    #[test]
    fn test_degenerate_inputs() {
        let chunks = chunks(&["some text here"]);
        assert!(find_relevant(&chunks, "", 3).unwrap().is_empty());
        assert!(find_relevant(&chunks, "   \n", 3).unwrap().is_empty());
        assert!(find_relevant(&[], "text", 3).unwrap().is_empty());
        assert!(find_relevant(&chunks, "the and of it", 3).unwrap().is_empty());
        assert!(find_relevant(&chunks, "text", 0).unwrap().is_empty());
    }

    #[test]
    fn test_partial_match_scores_lower_than_exact() {
        let chunks = chunks(&["cellular biology", "cell biology"]);
        let ranked = find_relevant(&chunks, "cell", 2).unwrap();

        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].chunk_index, 1);
        assert_eq!(ranked[0].raw_score, EXACT_WEIGHT);
        assert_eq!(ranked[1].raw_score, PARTIAL_WEIGHT);
    }

    #[test]
    fn test_length_normalization() {
        let chunks = chunks(&[
            "enzyme filler filler filler filler filler filler filler filler",
            "enzyme",
        ]);
        let ranked = find_relevant(&chunks, "enzyme", 2).unwrap();
        assert_eq!(ranked[0].chunk_index, 1);
    }

    #[test]
    fn test_position_breaks_near_ties() {
        let chunks = chunks(&["alpha beta", "alpha beta"]);
        let ranked = find_relevant(&chunks, "alpha", 2).unwrap();
        assert_eq!(ranked[0].chunk_index, 0);
        assert!(ranked[0].score > ranked[1].score);
    }

    #[test]
    fn test_equal_scores_order_by_index() {
        let a = RelevantChunk {
            content: String::new(),
            chunk_index: 5,
            page_number: 0,
            score: 1.0,
            raw_score: 1.0,
            matched_words: 1,
        };
        let b = RelevantChunk {
            chunk_index: 2,
            ..a.clone()
        };
        let c = RelevantChunk {
            chunk_index: 9,
            matched_words: 2,
            ..a.clone()
        };
        let mut ranked = vec![a, b, c];
        ranked.sort_by(rank_order);
        let order: Vec<_> = ranked.iter().map(|r| r.chunk_index).collect();
        assert_eq!(order, vec![9, 2, 5]);
    }

    #[test]
    fn test_truncates_to_max_results() {
        let chunks = chunks(&["atom one", "atom two", "atom three", "atom four"]);
        let ranked = find_relevant(&chunks, "atom", 2).unwrap();
        assert_eq!(ranked.len(), 2);
    }

    #[test]
    fn test_repeated_term_counts_once_toward_matched_words() {
        let chunks = chunks(&["protein folding"]);
        let ranked = find_relevant(&chunks, "protein protein", 1).unwrap();
        assert_eq!(ranked[0].matched_words, 1);
        assert_eq!(ranked[0].raw_score, 2.0 * EXACT_WEIGHT);
    }

    #[test]
    fn test_blank_chunk_is_an_error() {
        let chunks = vec![Chunk::new("valid words", 0), Chunk::new("  ", 7)];
        let err = find_relevant(&chunks, "valid", 3).unwrap_err();
        assert_eq!(
            err,
            Error::EmptyChunk {
                chunk_index: 7,
                position: 1
            }
        );
    }

    #[test]
    fn test_custom_stop_words() {
        let scorer = RelevanceScorer::with_stop_words(StopWords::default().extend(["chapter"]));
        let chunks = chunks(&["chapter one", "chapter two"]);
        assert!(scorer.find_relevant(&chunks, "chapter", 3).unwrap().is_empty());
    }

    #[test]
    fn test_inputs_untouched_and_deterministic() {
        let chunks = chunks(&["glucose enters glycolysis", "glycolysis yields pyruvate"]);
        let before = chunks.clone();
        let first = find_relevant(&chunks, "glycolysis pyruvate", 3).unwrap();
        let second = find_relevant(&chunks, "glycolysis pyruvate", 3).unwrap();
        assert_eq!(first, second);
        assert_eq!(chunks, before);
    }
}
