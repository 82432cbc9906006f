//! Ordered storage for the chunks of the message in flight.
//!
//! [`ChunkStore`] keys chunks by [`ChunkIndex`], so arrival order is
//! irrelevant and a repeated index replaces the earlier chunk. The store is
//! deliberately unsynchronised; [`ReassemblySession`](crate::ReassemblySession)
//! owns it behind a lock.

use std::collections::{BTreeMap, btree_map};

use super::{Chunk, ChunkIndex};

/// Chunks received so far for a single message, ordered by index.
#[derive(Clone, Debug, Default)]
pub struct ChunkStore {
    chunks: BTreeMap<ChunkIndex, Chunk>,
}

impl ChunkStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Insert `chunk` at its index, returning any chunk it replaced.
    pub fn add(&mut self, chunk: Chunk) -> Option<Chunk> { self.chunks.insert(chunk.index(), chunk) }

    /// Number of distinct indices currently stored.
    #[must_use]
    pub fn len(&self) -> usize { self.chunks.len() }

    /// Whether no chunk is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool { self.chunks.is_empty() }

    /// Chunk with the smallest index, if any.
    #[must_use]
    pub fn first(&self) -> Option<&Chunk> { self.chunks.values().next() }

    /// Drop every stored chunk.
    pub fn clear(&mut self) { self.chunks.clear(); }

    /// Iterate over stored chunks in ascending index order.
    pub fn iter(&self) -> Values<'_> {
        Values {
            inner: self.chunks.values(),
        }
    }

    /// Whether the stored indices are exactly `0..expected`.
    ///
    /// Keys are unique and sorted, so the walk fails on the first gap.
    #[must_use]
    pub fn is_contiguous_from_zero(&self, expected: usize) -> bool {
        self.chunks.len() == expected
            && self
                .chunks
                .keys()
                .enumerate()
                .all(|(position, index)| usize::from(*index) == position)
    }

    /// Concatenate the payloads of all stored chunks in index order.
    #[must_use]
    pub fn concat_payloads(&self) -> Vec<u8> {
        let total = self.iter().map(|chunk| chunk.payload().len()).sum();
        let mut buffer = Vec::with_capacity(total);
        for chunk in self.iter() {
            buffer.extend_from_slice(chunk.payload());
        }
        buffer
    }
}

/// Ascending iterator over the chunks in a [`ChunkStore`].
#[derive(Debug)]
pub struct Values<'a> {
    inner: btree_map::Values<'a, ChunkIndex, Chunk>,
}

impl<'a> Iterator for Values<'a> {
    type Item = &'a Chunk;

    fn next(&mut self) -> Option<Self::Item> { self.inner.next() }

    fn size_hint(&self) -> (usize, Option<usize>) { self.inner.size_hint() }
}

impl ExactSizeIterator for Values<'_> {}

impl<'a> IntoIterator for &'a ChunkStore {
    type Item = &'a Chunk;
    type IntoIter = Values<'a>;

    fn into_iter(self) -> Self::IntoIter { self.iter() }
}
