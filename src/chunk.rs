//! The chunk types: a document fragment and its per-query ranking.

/// Value written to [`Chunk::page_number`].
///
/// Page boundaries are not tracked; the field exists so stored chunks keep
/// the shape their consumers expect.
pub const PAGE_PLACEHOLDER: u32 = 0;

/// A contiguous fragment of a document, possibly sharing leading words with
/// the tail of the previous fragment.
///
/// Chunks produced by one call to a [`Chunker`](crate::Chunker) carry
/// `chunk_index` values `0..n` in emission order:
///
/// ```rust
/// use chunkwise::{Chunker, ChunkParams, ParagraphChunker};
///
/// let chunker = ParagraphChunker::new(ChunkParams::new(4, 1));
/// let chunks = chunker.chunk("one two three four five six seven");
///
/// assert_eq!(chunks[0].content, "one two three four");
/// assert_eq!(chunks[1].content, "four five six seven");
/// assert_eq!(chunks[1].chunk_index, 1);
/// ```
///
/// ## Overlap
///
/// With an overlap of `k` words, the last `k` words of a chunk reappear as
/// the first `k` words of the next one:
///
/// ```text
/// size = 4, overlap = 1
/// Chunk 0: "one two three four"
/// Chunk 1: "four five six seven"
///           ^^^^ carried over
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Chunk {
    /// The chunk text.
    pub content: String,
    /// Zero-based position of this chunk in its document.
    pub chunk_index: usize,
    /// Always [`PAGE_PLACEHOLDER`].
    pub page_number: u32,
}

impl Chunk {
    /// Create a new chunk on the placeholder page.
    #[must_use]
    pub fn new(content: impl Into<String>, chunk_index: usize) -> Self {
        Self {
            content: content.into(),
            chunk_index,
            page_number: PAGE_PLACEHOLDER,
        }
    }

    /// Whitespace-delimited words of the content.
    pub fn words(&self) -> std::str::SplitWhitespace<'_> {
        self.content.split_whitespace()
    }

    /// Number of whitespace-delimited words.
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.words().count()
    }

    /// Whether the content holds no words at all.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.content.trim().is_empty()
    }
}

impl std::fmt::Display for Chunk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Chunk {{ index: {}, page: {}, words: {} }}",
            self.chunk_index,
            self.page_number,
            self.word_count()
        )
    }
}

/// A chunk annotated with its relevance to one query.
///
/// Produced fresh by every call to
/// [`RelevanceScorer::find_relevant`](crate::RelevanceScorer::find_relevant);
/// it is never stored.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct RelevantChunk {
    /// The chunk text.
    pub content: String,
    /// Index of the chunk within its document.
    pub chunk_index: usize,
    /// Copied from the source chunk.
    pub page_number: u32,
    /// Length-normalized score plus position bonus; the ranking key.
    pub score: f64,
    /// Weighted match count before normalization.
    pub raw_score: f64,
    /// Distinct query terms found in the chunk.
    pub matched_words: usize,
}

impl RelevantChunk {
    /// The underlying chunk, without ranking metadata.
    #[must_use]
    pub fn as_chunk(&self) -> Chunk {
        Chunk {
            content: self.content.clone(),
            chunk_index: self.chunk_index,
            page_number: self.page_number,
        }
    }
}

impl From<RelevantChunk> for Chunk {
    fn from(relevant: RelevantChunk) -> Self {
        Self {
            content: relevant.content,
            chunk_index: relevant.chunk_index,
            page_number: relevant.page_number,
        }
    }
}

impl std::fmt::Display for RelevantChunk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "RelevantChunk {{ index: {}, score: {:.4}, raw: {}, matched: {} }}",
            self.chunk_index, self.score, self.raw_score, self.matched_words
        )
    }
}
