//! Turning a ranking into prompt context.
//!
//! The generation side wants one block of text and, for chat history, the
//! indices of the chunks that went into it.

use crate::RelevantChunk;

/// Separator placed between chunks in an assembled context.
pub const CONTEXT_SEPARATOR: &str = "\n\n";

/// Join ranked chunk contents, best first, separated by a blank line.
///
/// ```rust
/// use chunkwise::{assemble_context, chunk_text, find_relevant};
///
/// let chunks = chunk_text("Osmosis moves water.\nDiffusion moves solutes.", 3, 0);
/// let ranked = find_relevant(&chunks, "osmosis water", 3)?;
/// assert_eq!(assemble_context(&ranked), "Osmosis moves water.");
/// # Ok::<(), chunkwise::Error>(())
/// ```
#[must_use]
pub fn assemble_context(ranked: &[RelevantChunk]) -> String {
    ranked
        .iter()
        .map(|r| r.content.as_str())
        .collect::<Vec<_>>()
        .join(CONTEXT_SEPARATOR)
}

/// Indices of the ranked chunks, in ranked order.
#[must_use]
pub fn chunk_indices(ranked: &[RelevantChunk]) -> Vec<usize> {
    ranked.iter().map(|r| r.chunk_index).collect()
}
