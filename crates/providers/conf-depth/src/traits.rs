//! Traits for the collaborators of the [`ConfDepth`] gate.
//!
//! [`ConfDepth`]: crate::ConfDepth

use crate::{BlockNotFound, L1BlockRef};
use alloy_primitives::B256;
use async_trait::async_trait;
use core::fmt::Display;
use tokio::sync::watch;

/// Looks up [`L1BlockRef`]s on the L1 chain.
///
/// A lookup for a block the provider does not have must fail with [`BlockNotFound`], converted
/// into the provider's error type.
#[async_trait]
#[auto_impl::auto_impl(&, Arc, Box)]
pub trait L1BlockRefProvider: Send + Sync {
    /// The error type for the provider.
    type Error: Display + From<BlockNotFound> + Send;

    /// Returns the [`L1BlockRef`] of the canonical block with the given number.
    async fn l1_block_ref_by_number(&self, number: u64) -> Result<L1BlockRef, Self::Error>;

    /// Returns the [`L1BlockRef`] of the block with the given hash.
    async fn l1_block_ref_by_hash(&self, hash: B256) -> Result<L1BlockRef, Self::Error>;
}

/// Returns the number of the current L1 head.
///
/// Implementations are read on every gated lookup, so they must be cheap and must not block on
/// I/O. Keeping the value fresh is the implementor's concern.
pub trait L1HeadProvider: Send + Sync {
    /// Returns the number of the latest observed L1 head.
    fn l1_head_number(&self) -> u64;
}

impl<F> L1HeadProvider for F
where
    F: Fn() -> u64 + Send + Sync,
{
    fn l1_head_number(&self) -> u64 {
        self()
    }
}

/// An [`L1HeadProvider`] backed by the L1 head channel of the L1 watcher.
///
/// Before the watcher publishes its first head, the head reads as block `0`.
#[derive(Debug, Clone)]
pub struct WatchL1Head {
    head: watch::Receiver<Option<L1BlockRef>>,
}

impl WatchL1Head {
    /// Creates a new [`WatchL1Head`] from a receiver of L1 head updates.
    pub const fn new(head: watch::Receiver<Option<L1BlockRef>>) -> Self {
        Self { head }
    }

    /// Returns the latest [`L1BlockRef`] published on the channel, if any.
    pub fn latest(&self) -> Option<L1BlockRef> {
        *self.head.borrow()
    }
}

impl From<watch::Receiver<Option<L1BlockRef>>> for WatchL1Head {
    fn from(head: watch::Receiver<Option<L1BlockRef>>) -> Self {
        Self::new(head)
    }
}

impl L1HeadProvider for WatchL1Head {
    fn l1_head_number(&self) -> u64 {
        self.latest().map(|head| head.number).unwrap_or_default()
    }
}
