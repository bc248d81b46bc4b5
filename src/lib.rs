//! # chunkwise
//!
//! Split long documents into overlap-linked chunks and pick the few that
//! matter for a question.
//!
//! ## The Problem
//!
//! Flashcard, quiz, summary and chat generation all need the same thing: a
//! handful of passages from a long document that fit in a prompt. Two steps
//! get there:
//!
//! 1. **Chunking**, once per document: split the text into bounded pieces
//!    without tearing paragraphs apart when it can be avoided.
//! 2. **Ranking**, once per query: score every stored chunk against the
//!    query and keep the best few.
//!
//! ## Chunking
//!
//! Sizes are counted in whitespace-delimited words.
//!
//! ```text
//! Document:  [ p1 ][ p2 ][ p3 ......................... ][ p4 ]
//!                              oversized paragraph
//!
//! Chunks:    [ p1 + p2 ][ window ][ window ][ window ][ p4 ]
//!                        └ overlap ┘└ overlap ┘
//! ```
//!
//! Windows of an oversized paragraph overlap each other. Between grouped
//! paragraphs, the next chunk starts with the last `overlap` words of the
//! previous one.
//!
//! [`ParagraphChunker`] keeps paragraphs whole while they fit and falls back
//! to word windows ([`WindowChunker`]) for paragraphs that do not. Parameters
//! are clamped rather than rejected; see [`ChunkParams`].
//!
//! ## Ranking
//!
//! [`RelevanceScorer`] is purely lexical: whole-word hits weigh 3, hits inside
//! longer words weigh 1, matching several query terms earns a bonus, and the
//! total is divided by the square root of the chunk length. Ties lean toward
//! earlier chunks, then more matched terms, then lower index.
//!
//! ## Quick Start
//!
//! ```rust
//! use chunkwise::{assemble_context, chunk_text, find_relevant};
//!
//! let document = "Mitochondria produce ATP through respiration.\n\n\
//!                 Chloroplasts capture light for photosynthesis.\n\n\
//!                 Ribosomes assemble proteins from amino acids.";
//!
//! let chunks = chunk_text(document, 8, 2);
//! let ranked = find_relevant(&chunks, "How do chloroplasts use light?", 3)?;
//!
//! assert!(!ranked.is_empty());
//! assert!(assemble_context(&ranked).contains("Chloroplasts"));
//! # Ok::<(), chunkwise::Error>(())
//! ```
//!
//! ## Performance Considerations
//!
//! | Step | Cost |
//! |------|------|
//! | Chunking | O(words) |
//! | Ranking | O(chunk text + chunks × terms × distinct tokens) |
//!
//! Both steps are synchronous, allocate only their outputs, and keep no
//! state between calls, so any number may run in parallel.

mod chunk;
mod context;
mod error;
mod paragraph;
mod params;
mod score;
mod text;
mod window;

pub use chunk::{Chunk, RelevantChunk, PAGE_PLACEHOLDER};
pub use context::{assemble_context, chunk_indices, CONTEXT_SEPARATOR};
pub use error::{Error, Result};
pub use paragraph::{chunk_text, ParagraphChunker};
pub use params::ChunkParams;
pub use score::{
    find_relevant, QueryTerms, RelevanceScorer, StopWords, TermCounts, COVERAGE_BONUS,
    DEFAULT_MAX_RESULTS, DEFAULT_STOP_WORDS, EXACT_WEIGHT, MIN_TERM_LEN, PARTIAL_WEIGHT,
    POSITION_WEIGHT,
};
pub use window::WindowChunker;

/// A text chunking strategy.
///
/// All chunkers implement this trait, enabling polymorphic usage:
///
/// ```rust
/// use chunkwise::{Chunker, ChunkParams, ParagraphChunker, WindowChunker};
///
/// fn chunk_document(chunker: &dyn Chunker, text: &str) -> Vec<chunkwise::Chunk> {
///     chunker.chunk(text)
/// }
///
/// let params = ChunkParams::new(100, 20);
/// let text = "Hello world.\n\nThis is a test.";
/// let by_paragraph = chunk_document(&ParagraphChunker::new(params), text);
/// let by_window = chunk_document(&WindowChunker::new(params), text);
///
/// assert_eq!(by_paragraph[0].content, "Hello world.\n\nThis is a test.");
/// assert_eq!(by_window[0].content, "Hello world. This is a test.");
/// ```
pub trait Chunker: Send + Sync {
    /// Split text into chunks.
    ///
    /// Indices run `0..n` in emission order. Empty or whitespace-only text
    /// yields no chunks.
    fn chunk(&self, text: &str) -> Vec<Chunk>;

    /// Estimate the number of chunks for a text of `word_count` words.
    ///
    /// Useful for pre-allocation. May be approximate.
    fn estimate_chunks(&self, word_count: usize) -> usize {
        (word_count / ChunkParams::DEFAULT_CHUNK_SIZE).max(1)
    }
}
