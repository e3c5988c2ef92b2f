//! Configuration for the confirmation depth gates of a rollup node.

use crate::ConfDepth;

/// The confirmation depths applied to L1 block lookups.
///
/// The verifier depth gates the L1 traversal of the derivation pipeline. The sequencer depth
/// gates the selection of L1 origins for new L2 blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct ConfDepthConfig {
    /// Number of L1 blocks to keep distance from the L1 head before deriving L2 data from them.
    pub verifier_l1_confs: u64,
    /// Number of L1 blocks to keep distance from the L1 head when picking an L1 origin.
    pub sequencer_l1_confs: u64,
}

impl ConfDepthConfig {
    /// The default verifier confirmation depth.
    pub const DEFAULT_VERIFIER_L1_CONFS: u64 = 0;

    /// The default sequencer confirmation depth.
    pub const DEFAULT_SEQUENCER_L1_CONFS: u64 = 4;

    /// Creates a new [`ConfDepthConfig`].
    pub const fn new(verifier_l1_confs: u64, sequencer_l1_confs: u64) -> Self {
        Self { verifier_l1_confs, sequencer_l1_confs }
    }

    /// Wraps `inner` in a [`ConfDepth`] gate using the verifier confirmation depth.
    pub const fn verifier<H, P>(&self, head: H, inner: P) -> ConfDepth<H, P> {
        ConfDepth::new(self.verifier_l1_confs, head, inner)
    }

    /// Wraps `inner` in a [`ConfDepth`] gate using the sequencer confirmation depth.
    pub const fn sequencer<H, P>(&self, head: H, inner: P) -> ConfDepth<H, P> {
        ConfDepth::new(self.sequencer_l1_confs, head, inner)
    }
}

impl Default for ConfDepthConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_VERIFIER_L1_CONFS, Self::DEFAULT_SEQUENCER_L1_CONFS)
    }
}
