//! Contains the [`ConfDepth`] gate.

use crate::{BlockNotFound, L1BlockRef, L1BlockRefProvider, L1HeadProvider};
use alloy_primitives::B256;
use async_trait::async_trait;
use core::fmt;
use tracing::trace;

/// Returns `true` if the L1 block `number` has at least `depth` blocks on top of it when the L1
/// head is at `head`.
///
/// A `depth` of `0` disables the check. Otherwise the block is confirmed iff
/// `number + depth <= head`, where an overflowing sum is never confirmed.
pub const fn is_confirmed(number: u64, depth: u64, head: u64) -> bool {
    if depth == 0 {
        return true;
    }
    match number.checked_add(depth) {
        Some(threshold) => threshold <= head,
        None => false,
    }
}

/// An [`L1BlockRefProvider`] that hides L1 blocks which are not buried at least `depth` blocks
/// behind the current L1 head.
///
/// Lookups by number for unconfirmed blocks fail with [`BlockNotFound`] without reaching the
/// inner provider, exactly as if the block did not exist yet. Every other lookup is forwarded to
/// the inner provider and its result is returned as-is.
///
/// The head is read from the [`L1HeadProvider`] on every lookup and never cached.
#[derive(Clone)]
pub struct ConfDepth<H, P> {
    /// The number of blocks a block must be behind the head to be served.
    depth: u64,
    /// The live L1 head.
    head: H,
    /// The inner provider.
    inner: P,
}

impl<H, P> ConfDepth<H, P> {
    /// Creates a new [`ConfDepth`] gate in front of `inner`.
    pub const fn new(depth: u64, head: H, inner: P) -> Self {
        Self { depth, head, inner }
    }

    /// Returns the configured confirmation depth.
    pub const fn depth(&self) -> u64 {
        self.depth
    }

    /// Returns a reference to the inner provider.
    pub const fn inner(&self) -> &P {
        &self.inner
    }

    /// Consumes the gate and returns the inner provider.
    pub fn into_inner(self) -> P {
        self.inner
    }
}

impl<H: L1HeadProvider, P> ConfDepth<H, P> {
    /// Returns `true` if the block `number` is confirmed against the current L1 head.
    pub fn is_confirmed(&self, number: u64) -> bool {
        is_confirmed(number, self.depth, self.head.l1_head_number())
    }
}

impl<H, P: fmt::Debug> fmt::Debug for ConfDepth<H, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfDepth")
            .field("depth", &self.depth)
            .field("inner", &self.inner)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl<H, P> L1BlockRefProvider for ConfDepth<H, P>
where
    H: L1HeadProvider,
    P: L1BlockRefProvider,
{
    type Error = P::Error;

    async fn l1_block_ref_by_number(&self, number: u64) -> Result<L1BlockRef, Self::Error> {
        let head = self.head.l1_head_number();
        if !is_confirmed(number, self.depth, head) {
            trace!(
                target: "conf_depth",
                number,
                depth = self.depth,
                head,
                "L1 block not confirmed yet"
            );
            #[cfg(feature = "metrics")]
            metrics::counter!(crate::Metrics::REQUESTS, "outcome" => "rejected").increment(1);
            return Err(BlockNotFound::new(number).into());
        }

        trace!(target: "conf_depth", number, depth = self.depth, head, "L1 block confirmed");
        #[cfg(feature = "metrics")]
        metrics::counter!(crate::Metrics::REQUESTS, "outcome" => "admitted").increment(1);

        self.inner.l1_block_ref_by_number(number).await
    }

    async fn l1_block_ref_by_hash(&self, hash: B256) -> Result<L1BlockRef, Self::Error> {
        self.inner.l1_block_ref_by_hash(hash).await
    }
}
