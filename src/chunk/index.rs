//! Zero-based chunk positioning within a message.
//!
//! Provides [`ChunkIndex`], a type-safe wrapper around the single sequence
//! byte that leads every frame.

use std::num::TryFromIntError;

use derive_more::{Display, From};

/// Zero-based ordinal describing a chunk's position within its message.
///
/// # Examples
///
/// ```
/// use uartframe::chunk::ChunkIndex;
/// let index = ChunkIndex::new(3);
/// assert_eq!(index.get(), 3);
/// assert!(ChunkIndex::try_from(256_usize).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Display, From)]
#[display("{_0}")]
pub struct ChunkIndex(u8);

impl ChunkIndex {
    /// Construct an index from its wire byte.
    #[must_use]
    pub const fn new(value: u8) -> Self { Self(value) }

    /// Return the index of the first chunk of every message.
    #[must_use]
    pub const fn zero() -> Self { Self(0) }

    /// Return the underlying wire byte.
    #[must_use]
    pub const fn get(self) -> u8 { self.0 }
}

impl TryFrom<usize> for ChunkIndex {
    type Error = TryFromIntError;

    fn try_from(value: usize) -> Result<Self, Self::Error> { u8::try_from(value).map(Self) }
}

impl From<ChunkIndex> for u8 {
    fn from(value: ChunkIndex) -> Self { value.0 }
}

impl From<ChunkIndex> for usize {
    fn from(value: ChunkIndex) -> Self { usize::from(value.0) }
}
