//! Chunk size and overlap configuration.
//!
//! ## The Problem
//!
//! Sizes arrive from request bodies, CLI flags and stored settings. Rejecting
//! a bad value there means a document is never indexed; silently accepting
//! one means an infinite loop (`overlap >= size` gives a step of zero).
//!
//! ## The Solution: Clamp, Never Fail
//!
//! `ChunkParams` normalizes whatever it is given:
//!
//! - `chunk_size == 0` is treated as unset and becomes the default (500).
//! - `overlap >= chunk_size` is clamped to `chunk_size - 1`.
//!
//! Both sizes are measured in whitespace-delimited words.

/// Word budget per chunk and word overlap between adjacent chunks.
///
/// # Examples
///
/// ```rust
/// use chunkwise::ChunkParams;
///
/// let params = ChunkParams::default();
/// assert_eq!(params.chunk_size(), 500);
/// assert_eq!(params.overlap(), 50);
/// assert_eq!(params.step(), 450);
///
/// // Overlap can never reach the chunk size
/// let params = ChunkParams::new(10, 25);
/// assert_eq!(params.overlap(), 9);
/// assert_eq!(params.step(), 1);
///
/// // Zero means "use the default"
/// assert_eq!(ChunkParams::new(0, 0).chunk_size(), 500);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChunkParams {
    chunk_size: usize,
    overlap: usize,
}

impl ChunkParams {
    /// Chunk size used when none is given.
    pub const DEFAULT_CHUNK_SIZE: usize = 500;

    /// Overlap used by [`ChunkParams::default`].
    pub const DEFAULT_OVERLAP: usize = 50;

    /// Create normalized parameters.
    ///
    /// Never fails; see the [module docs](self) for the clamping rules.
    #[must_use]
    pub const fn new(chunk_size: usize, overlap: usize) -> Self {
        let chunk_size = if chunk_size == 0 {
            Self::DEFAULT_CHUNK_SIZE
        } else {
            chunk_size
        };
        let overlap = if overlap >= chunk_size {
            chunk_size - 1
        } else {
            overlap
        };
        Self {
            chunk_size,
            overlap,
        }
    }

    /// Replace the overlap, clamping it against the current chunk size.
    #[must_use]
    pub const fn with_overlap(self, overlap: usize) -> Self {
        Self::new(self.chunk_size, overlap)
    }

    /// Maximum words per chunk.
    #[must_use]
    pub const fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Words shared between adjacent chunks.
    #[must_use]
    pub const fn overlap(&self) -> usize {
        self.overlap
    }

    /// Distance in words between the starts of two consecutive windows.
    ///
    /// Always at least 1.
    #[must_use]
    pub const fn step(&self) -> usize {
        self.chunk_size - self.overlap
    }

    /// The trailing `overlap` words of `words`, carried into the next chunk.
    #[must_use]
    pub fn overlap_tail<'a, 'w>(&self, words: &'w [&'a str]) -> &'w [&'a str] {
        &words[words.len().saturating_sub(self.overlap)..]
    }
}

impl Default for ChunkParams {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CHUNK_SIZE, Self::DEFAULT_OVERLAP)
    }
}

impl From<usize> for ChunkParams {
    /// A chunk size with the default overlap, clamped.
    fn from(chunk_size: usize) -> Self {
        Self::new(chunk_size, Self::DEFAULT_OVERLAP)
    }
}

impl From<(usize, usize)> for ChunkParams {
    fn from((chunk_size, overlap): (usize, usize)) -> Self {
        Self::new(chunk_size, overlap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = ChunkParams::default();
        assert_eq!(params.chunk_size(), 500);
        assert_eq!(params.overlap(), 50);
    }

    #[test]
    fn test_zero_size_falls_back_to_default() {
        let params = ChunkParams::new(0, 10);
        assert_eq!(params.chunk_size(), 500);
        assert_eq!(params.overlap(), 10);
    }

    #[test]
    fn test_overlap_clamped_below_size() {
        assert_eq!(ChunkParams::new(10, 10).overlap(), 9);
        assert_eq!(ChunkParams::new(1, 5).overlap(), 0);
        assert_eq!(ChunkParams::new(1, 5).step(), 1);
    }

    #[test]
    fn test_from_small_size_clamps_default_overlap() {
        let params = ChunkParams::from(20_usize);
        assert_eq!(params.chunk_size(), 20);
        assert_eq!(params.overlap(), 19);
    }

    #[test]
    fn test_with_overlap() {
        let params = ChunkParams::new(100, 0).with_overlap(30);
        assert_eq!(params.overlap(), 30);
        assert_eq!(params.step(), 70);
    }

    #[test]
    fn test_overlap_tail() {
        let words = ["a", "b", "c", "d"];
        assert_eq!(ChunkParams::new(5, 2).overlap_tail(&words), &["c", "d"]);
        assert!(ChunkParams::new(5, 0).overlap_tail(&words).is_empty());
        assert_eq!(ChunkParams::new(10, 6).overlap_tail(&words), &words);
    }
}
