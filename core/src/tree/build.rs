//! tree/build.rs
//! Construction mode: grow the tree from observed weights.

use tracing::debug;

use crate::constants::MERGE_STEPS;
use crate::frequency::FrequencyTable;
use crate::headers::PairingOrder;
use crate::tree::types::{Forest, HuffmanTree};

impl HuffmanTree {
    /// Build the tree for `freqs` and return it with the pairing order that
    /// replays to the same tree.
    ///
    /// Every step takes the two lightest subtrees by linear scan over the
    /// 256 slots, ties going to the lower symbol id. Zero-weight symbols
    /// take part like any other, so all 256 leaves always exist and the
    /// result is fully determined by the weights.
    pub fn from_frequencies(freqs: &FrequencyTable) -> (HuffmanTree, PairingOrder) {
        let mut forest = Forest::with_weights(freqs.weights());

        for _ in 0..MERGE_STEPS {
            let Some(first) = forest.select_min(None) else { break };
            let Some(second) = forest.select_min(Some(first)) else { break };
            if forest.merge(first, second).is_err() {
                break;
            }
        }
        debug_assert_eq!(forest.steps(), MERGE_STEPS);

        let (tree, order) = forest.into_parts();
        debug!(
            total_weight = tree.total_weight(),
            height = tree.height(),
            "tree built from frequencies"
        );
        (tree, order)
    }
}
