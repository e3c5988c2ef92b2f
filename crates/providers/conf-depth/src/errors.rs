//! Error types for L1 block lookups.

use thiserror::Error;

/// The L1 block is not available.
///
/// This is the one "not found" signal shared by every [`L1BlockRefProvider`]: providers return it
/// for blocks they do not know, and [`ConfDepth`] returns it for blocks that are not yet
/// confirmed. Provider error types embed it through a `From` conversion so both cases surface as
/// the same value.
///
/// [`L1BlockRefProvider`]: crate::L1BlockRefProvider
/// [`ConfDepth`]: crate::ConfDepth
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[error("L1 block {number} not found")]
pub struct BlockNotFound {
    /// The number of the block that was requested.
    pub number: u64,
}

impl BlockNotFound {
    /// Creates a new [`BlockNotFound`] for the given block number.
    pub const fn new(number: u64) -> Self {
        Self { number }
    }
}

impl From<u64> for BlockNotFound {
    fn from(number: u64) -> Self {
        Self::new(number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_not_found_display() {
        assert_eq!(BlockNotFound::new(42).to_string(), "L1 block 42 not found");
        assert_eq!(BlockNotFound::from(42), BlockNotFound { number: 42 });
    }
}
