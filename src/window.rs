//! Sliding-window chunking over words.
//!
//! The simplest strategy: every `chunk_size` words, with `overlap` words
//! repeated at the start of the next window.
//!
//! ## How It Works
//!
//! ```text
//! chunk_size = 4, overlap = 1, step = 3
//!
//! Words:   a b c d e f g h i j
//!
//! Chunk 0: a b c d          [0..4]
//! Chunk 1: d e f g          [3..7]   <- starts at 4 - 1 = 3
//! Chunk 2: g h i j          [6..10]  <- last window reaches the end
//! ```
//!
//! The final window may be shorter than `chunk_size`. A window that would
//! start inside the previous one's overlap without adding words is never
//! emitted: iteration stops as soon as a window reaches the last word.
//!
//! [`ParagraphChunker`](crate::ParagraphChunker) falls back to this for
//! paragraphs too long to keep whole.

use tracing::{debug, instrument};

use crate::{Chunk, ChunkParams, Chunker};

/// Iterate the windows of `words` for the given parameters.
pub(crate) fn windows<'w, 'a>(
    words: &'w [&'a str],
    params: ChunkParams,
) -> impl Iterator<Item = &'w [&'a str]> {
    let size = params.chunk_size();
    let step = params.step();
    let mut start = Some(0);

    std::iter::from_fn(move || {
        let from = start.filter(|&s| s < words.len())?;
        let end = (from + size).min(words.len());
        start = (end < words.len()).then_some(from + step);
        Some(&words[from..end])
    })
}

/// Word-window chunker with configurable overlap.
///
/// ## Example
///
/// ```rust
/// use chunkwise::{ChunkParams, Chunker, WindowChunker};
///
/// let text = (0..1200).map(|i| format!("w{i}")).collect::<Vec<_>>().join(" ");
/// let chunks = WindowChunker::new(ChunkParams::new(500, 50)).chunk(&text);
///
/// // windows start at words 0, 450 and 900
/// assert_eq!(chunks.len(), 3);
/// assert_eq!(chunks[2].word_count(), 300);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowChunker {
    params: ChunkParams,
}

impl WindowChunker {
    /// Create a window chunker.
    #[must_use]
    pub fn new(params: impl Into<ChunkParams>) -> Self {
        Self {
            params: params.into(),
        }
    }

    /// Create a chunker with no overlap.
    #[must_use]
    pub fn no_overlap(chunk_size: usize) -> Self {
        Self::new(ChunkParams::new(chunk_size, 0))
    }

    /// The normalized parameters in use.
    #[must_use]
    pub fn params(&self) -> ChunkParams {
        self.params
    }
}

impl Chunker for WindowChunker {
    #[instrument(skip_all, fields(text_len = text.len()))]
    fn chunk(&self, text: &str) -> Vec<Chunk> {
        let words: Vec<&str> = text.split_whitespace().collect();
        let mut chunks = Vec::with_capacity(self.estimate_chunks(words.len()));

        for (index, window) in windows(&words, self.params).enumerate() {
            chunks.push(Chunk::new(window.join(" "), index));
        }

        debug!(words = words.len(), chunks = chunks.len(), "window chunking done");
        chunks
    }

    fn estimate_chunks(&self, word_count: usize) -> usize {
        if word_count <= self.params.chunk_size() {
            return usize::from(word_count > 0);
        }
        (word_count - self.params.overlap()).div_ceil(self.params.step())
    }
}
