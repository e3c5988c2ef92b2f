//! L1 block reference type.

use alloy_eips::BlockNumHash;
use alloy_primitives::B256;
use derive_more::Display;

/// A reference to an L1 block, as returned by block lookups.
#[derive(Debug, Clone, Display, Copy, Eq, Hash, PartialEq, Default)]
#[display("{number}:{hash}")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct L1BlockRef {
    /// The block hash
    pub hash: B256,
    /// The block number
    pub number: u64,
    /// The parent block hash
    pub parent_hash: B256,
    /// The block timestamp
    pub timestamp: u64,
}

impl L1BlockRef {
    /// Instantiates a new [`L1BlockRef`].
    pub const fn new(hash: B256, number: u64, parent_hash: B256, timestamp: u64) -> Self {
        Self { hash, number, parent_hash, timestamp }
    }

    /// Returns the block ID.
    pub const fn id(&self) -> BlockNumHash {
        BlockNumHash { hash: self.hash, number: self.number }
    }

    /// Returns `true` if this is the zero value, i.e. no block has been observed yet.
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }

    /// Returns `true` if this [`L1BlockRef`] is the direct parent of the given block.
    pub fn is_parent_of(&self, block: &Self) -> bool {
        self.number.checked_add(1) == Some(block.number) && self.hash == block.parent_hash
    }
}
