//! Test utilities for L1 block lookups.

use crate::{BlockNotFound, L1BlockRef, L1BlockRefProvider};
use alloy_primitives::B256;
use async_trait::async_trait;
use std::{collections::HashMap, sync::Arc};
use tokio::sync::Mutex;

/// The error type of [`MockL1Source`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TestL1Error {
    /// The block is not available.
    #[error(transparent)]
    NotFound(#[from] BlockNotFound),
    /// The block hash is not known.
    #[error("L1 block {0} not found")]
    HashNotFound(B256),
    /// A transport failure.
    #[error("transport error: {0}")]
    Transport(String),
}

/// An in-memory [`L1BlockRefProvider`] that records the lookups it serves.
#[derive(Debug, Clone, Default)]
pub struct MockL1Source {
    /// The known blocks, keyed by number.
    pub blocks: HashMap<u64, L1BlockRef>,
    /// If set, every lookup fails with this error.
    pub failure: Option<TestL1Error>,
    /// The block numbers requested through [`L1BlockRefProvider::l1_block_ref_by_number`].
    requests: Arc<Mutex<Vec<u64>>>,
}

impl MockL1Source {
    /// Creates a source holding a contiguous chain of blocks `0..=head`.
    pub fn with_chain(head: u64) -> Self {
        let mut source = Self::default();
        let mut parent_hash = B256::ZERO;
        for number in 0..=head {
            let block = L1BlockRef::new(block_hash(number), number, parent_hash, number * 12);
            parent_hash = block.hash;
            source.insert(block);
        }
        source
    }

    /// Adds a block to the source.
    pub fn insert(&mut self, block: L1BlockRef) {
        self.blocks.insert(block.number, block);
    }

    /// Makes every subsequent lookup fail with the given error.
    pub fn fail_with(mut self, error: TestL1Error) -> Self {
        self.failure = Some(error);
        self
    }

    /// Returns the block numbers requested so far, in order.
    pub async fn requests(&self) -> Vec<u64> {
        self.requests.lock().await.clone()
    }
}

/// Returns the deterministic hash used for block `number` by [`MockL1Source::with_chain`].
pub fn block_hash(number: u64) -> B256 {
    let mut hash = B256::ZERO;
    hash[24..].copy_from_slice(&number.to_be_bytes());
    hash[0] = 0x11;
    hash
}

#[async_trait]
impl L1BlockRefProvider for MockL1Source {
    type Error = TestL1Error;

    async fn l1_block_ref_by_number(&self, number: u64) -> Result<L1BlockRef, Self::Error> {
        self.requests.lock().await.push(number);
        if let Some(err) = &self.failure {
            return Err(err.clone());
        }
        self.blocks.get(&number).copied().ok_or_else(|| BlockNotFound::new(number).into())
    }

    async fn l1_block_ref_by_hash(&self, hash: B256) -> Result<L1BlockRef, Self::Error> {
        if let Some(err) = &self.failure {
            return Err(err.clone());
        }
        self.blocks
            .values()
            .find(|block| block.hash == hash)
            .copied()
            .ok_or(TestL1Error::HashNotFound(hash))
    }
}
