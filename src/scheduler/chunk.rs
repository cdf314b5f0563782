//! Partitioning the catalog into contiguous chunks.

use std::ops::Range;

/// A contiguous group of catalog positions fetched together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    /// Zero-based chunk index
    pub id: usize,
    /// Catalog positions covered by this chunk
    pub range: Range<usize>,
}

impl Chunk {
    pub fn len(&self) -> usize {
        self.range.len()
    }

    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }
}

/// Split `len` positions into chunks of `chunk_size`; the last may be short.
///
/// A `chunk_size` of zero is treated as one.
pub fn partition(len: usize, chunk_size: usize) -> Vec<Chunk> {
    let chunk_size = chunk_size.max(1);
    (0..len)
        .step_by(chunk_size)
        .enumerate()
        .map(|(id, start)| Chunk {
            id,
            range: start..(start + chunk_size).min(len),
        })
        .collect()
}

/// Number of chunks `partition` would produce.
pub fn chunk_count(len: usize, chunk_size: usize) -> usize {
    len.div_ceil(chunk_size.max(1))
}
