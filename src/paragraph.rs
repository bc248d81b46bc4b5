//! Paragraph-preserving chunking.
//!
//! Paragraphs are kept whole and grouped until the next one would overflow
//! the word budget. Paragraphs larger than the budget on their own are cut
//! into word windows.
//!
//! ## The Algorithm
//!
//! A fold over paragraphs carrying the chunk under construction:
//!
//! ```text
//! Pending::Paragraphs([p1, p2])   whole paragraphs, flushed as "p1\n\np2"
//! Pending::Words([..seed, ..])    loose words, flushed as "w1 w2 ..."
//! ```
//!
//! For each paragraph `p`:
//!
//! 1. `p` alone exceeds `chunk_size`: flush, then cut `p` into sliding
//!    windows. The next paragraph starts a fresh group.
//! 2. `pending + p` exceeds `chunk_size`: flush, start over from the seed
//!    (the last `overlap` words of the flushed chunk) plus the words of `p`.
//!    With no overlap the new chunk is the paragraph group `[p]`.
//! 3. Otherwise append `p`.
//!
//! After each step a pending chunk that reached exactly `chunk_size` is
//! flushed and seeds the next one. One that went past it (only possible
//! after a seeded restart) is cut into windows until what remains fits.
//! Whatever is pending at the end is flushed as the last chunk.
//!
//! ## Overlap
//!
//! Once a chunk has been flushed with `overlap > 0`, the following chunk
//! starts with the last `overlap` words of its predecessor, so accumulation
//! continues in word mode. Windows of an oversized paragraph overlap each
//! other but not the chunks around them.
//!
//! ```text
//! chunk_size = 5, overlap = 1
//!
//! "a b c\nd e f\ng h i"
//!
//! Chunk 0: "a b c"
//! Chunk 1: "c d e f"    <- seed "c" + paragraph 2
//! Chunk 2: "f g h i"    <- seed "f" + paragraph 3
//! ```

use tracing::{debug, instrument, trace};

use crate::text;
use crate::window::{self, WindowChunker};
use crate::{Chunk, ChunkParams, Chunker};

/// A paragraph and its words, split once.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Paragraph<'a> {
    text: &'a str,
    words: Vec<&'a str>,
}

impl<'a> Paragraph<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            text,
            words: text::words(text),
        }
    }
}

/// The chunk under construction.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Pending<'a> {
    /// Whole paragraphs, joined by a blank line on flush.
    Paragraphs(Vec<Paragraph<'a>>),
    /// Loose words, joined by a space on flush. The first `carried` words
    /// repeat the tail of the previous chunk.
    Words { words: Vec<&'a str>, carried: usize },
}

impl<'a> Pending<'a> {
    fn empty() -> Self {
        Self::Paragraphs(Vec::new())
    }

    /// Start a chunk from the overlap carried out of the previous one.
    fn seeded(seed: &[&'a str]) -> Self {
        if seed.is_empty() {
            Self::empty()
        } else {
            Self::Words {
                words: seed.to_vec(),
                carried: seed.len(),
            }
        }
    }

    fn word_count(&self) -> usize {
        match self {
            Self::Paragraphs(paragraphs) => paragraphs.iter().map(|p| p.words.len()).sum(),
            Self::Words { words, .. } => words.len(),
        }
    }

    fn is_empty(&self) -> bool {
        match self {
            Self::Paragraphs(paragraphs) => paragraphs.is_empty(),
            Self::Words { words, .. } => words.is_empty(),
        }
    }

    fn words(&self) -> Vec<&'a str> {
        match self {
            Self::Paragraphs(paragraphs) => paragraphs
                .iter()
                .flat_map(|p| p.words.iter().copied())
                .collect(),
            Self::Words { words, .. } => words.clone(),
        }
    }

    fn content(&self) -> String {
        match self {
            Self::Paragraphs(paragraphs) => paragraphs
                .iter()
                .map(|p| p.text)
                .collect::<Vec<_>>()
                .join("\n\n"),
            Self::Words { words, .. } => words.join(" "),
        }
    }

    fn append(&mut self, paragraph: Paragraph<'a>) {
        match self {
            Self::Paragraphs(paragraphs) => paragraphs.push(paragraph),
            Self::Words { words, .. } => words.extend(paragraph.words),
        }
    }
}

/// Emitted chunks and the index the next one receives.
#[derive(Debug, Default)]
struct Emitter {
    chunks: Vec<Chunk>,
    next_index: usize,
}

impl Emitter {
    fn emit(&mut self, content: String) {
        trace!(chunk_index = self.next_index, len = content.len(), "emit chunk");
        self.chunks.push(Chunk::new(content, self.next_index));
        self.next_index += 1;
    }
}

/// Fold state: parameters, the pending chunk, and what has been emitted.
#[derive(Debug)]
struct Accumulator<'a> {
    params: ChunkParams,
    pending: Pending<'a>,
    emitter: Emitter,
}

impl<'a> Accumulator<'a> {
    fn new(params: ChunkParams) -> Self {
        Self {
            params,
            pending: Pending::empty(),
            emitter: Emitter::default(),
        }
    }

    /// Fold one paragraph in.
    fn push(mut self, paragraph: Paragraph<'a>) -> Self {
        let size = self.params.chunk_size();

        if paragraph.words.len() > size {
            self.split_oversized(paragraph);
        } else if self.pending.word_count() + paragraph.words.len() > size {
            let seed = self.flush();
            self.pending = Pending::seeded(&seed);
            self.pending.append(paragraph);
        } else {
            self.pending.append(paragraph);
        }

        self.settle();
        self
    }

    /// Emit the pending chunk, if any; return the seed for the next one.
    fn flush(&mut self) -> Vec<&'a str> {
        let pending = std::mem::replace(&mut self.pending, Pending::empty());
        if pending.is_empty() {
            return Vec::new();
        }
        let words = pending.words();
        self.emitter.emit(pending.content());
        self.params.overlap_tail(&words).to_vec()
    }

    /// Windows cover the paragraph alone; the flushed seed is not carried.
    fn split_oversized(&mut self, paragraph: Paragraph<'a>) {
        self.flush();
        for window in window::windows(&paragraph.words, self.params) {
            self.emitter.emit(window.join(" "));
        }
        self.pending = Pending::empty();
    }

    /// Flush a pending chunk that reached the budget, or cut one past it.
    fn settle(&mut self) {
        let size = self.params.chunk_size();
        let step = self.params.step();
        let overlap = self.params.overlap();

        if let Pending::Words { words, carried } = &mut self.pending {
            if words.len() > size {
                while words.len() > size {
                    self.emitter.emit(words[..size].join(" "));
                    words.drain(..step);
                    *carried = overlap.min(words.len());
                }
                return;
            }
        }

        if self.pending.word_count() == size {
            let seed = self.flush();
            self.pending = Pending::seeded(&seed);
        }
    }

    fn finish(mut self) -> Vec<Chunk> {
        self.flush();
        self.emitter.chunks
    }
}

/// Paragraph-preserving chunker with word overlap.
///
/// ## Example
///
/// ```rust
/// use chunkwise::{ChunkParams, Chunker, ParagraphChunker};
///
/// let chunker = ParagraphChunker::new(ChunkParams::new(8, 0));
/// let text = "Cells divide by mitosis.\n\nMitosis has four phases.\n\nProphase comes first.";
/// let chunks = chunker.chunk(text);
///
/// assert_eq!(chunks.len(), 2);
/// assert_eq!(chunks[0].content, "Cells divide by mitosis.\n\nMitosis has four phases.");
/// assert_eq!(chunks[1].content, "Prophase comes first.");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ParagraphChunker {
    params: ChunkParams,
}

impl ParagraphChunker {
    /// Create a paragraph chunker.
    #[must_use]
    pub fn new(params: impl Into<ChunkParams>) -> Self {
        Self {
            params: params.into(),
        }
    }

    /// The normalized parameters in use.
    #[must_use]
    pub fn params(&self) -> ChunkParams {
        self.params
    }
}

impl Chunker for ParagraphChunker {
    #[instrument(
        skip_all,
        fields(
            text_len = text.len(),
            chunk_size = self.params.chunk_size(),
            overlap = self.params.overlap()
        )
    )]
    fn chunk(&self, text: &str) -> Vec<Chunk> {
        let normalized = text::normalize(text);
        if normalized.is_empty() {
            return vec![];
        }

        let chunks = text::paragraphs(&normalized)
            .map(Paragraph::new)
            .fold(Accumulator::new(self.params), Accumulator::push)
            .finish();

        if chunks.is_empty() {
            debug!("no paragraph chunks, falling back to word windows");
            return WindowChunker::new(self.params).chunk(&normalized);
        }

        debug!(chunks = chunks.len(), "paragraph chunking done");
        chunks
    }

    fn estimate_chunks(&self, word_count: usize) -> usize {
        WindowChunker::new(self.params).estimate_chunks(word_count)
    }
}

/// Chunk `text` with the paragraph-preserving strategy.
///
/// `chunk_size` and `overlap` are clamped as described on [`ChunkParams`].
///
/// ```rust
/// let chunks = chunkwise::chunk_text("First.\n\nSecond.", 500, 50);
/// assert_eq!(chunks.len(), 1);
/// assert_eq!(chunks[0].content, "First.\n\nSecond.");
/// ```
#[must_use]
pub fn chunk_text(text: &str, chunk_size: usize, overlap: usize) -> Vec<Chunk> {
    ParagraphChunker::new(ChunkParams::new(chunk_size, overlap)).chunk(text)
}
