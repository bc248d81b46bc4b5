//! Error types for chunkwise.

/// Errors that can occur while ranking chunks.
///
/// Chunking never fails: sizes are clamped and empty text yields no chunks.
/// Only a chunk sequence that breaks the caller contract is reported.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A stored chunk has no content to score.
    #[error("chunk {chunk_index} at position {position} has empty content")]
    EmptyChunk {
        /// The `chunk_index` carried by the offending chunk.
        chunk_index: usize,
        /// Position of the chunk in the supplied sequence.
        position: usize,
    },
}

/// Result type for chunkwise operations.
pub type Result<T> = std::result::Result<T, Error>;
