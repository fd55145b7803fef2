//! tree/replay.rs
//! Replay mode: rebuild a tree from a stored pairing order, no weights.

use tracing::debug;

use crate::constants::SYMBOL_COUNT;
use crate::headers::PairingOrder;
use crate::tree::types::{Forest, HuffmanTree};
use crate::types::HuffError;

impl HuffmanTree {
    /// Apply the 255 recorded merges in order under the same
    /// merge-to-lower-slot rule used by the builder.
    ///
    /// Fails with `CorruptHeader` when a pair names one slot twice or names
    /// a slot that an earlier step already emptied.
    pub fn from_pairing_order(order: &PairingOrder) -> Result<HuffmanTree, HuffError> {
        let mut forest = Forest::with_weights(&[0u64; SYMBOL_COUNT]);

        for (step, (a, b)) in order.pairs().enumerate() {
            if a == b {
                return Err(HuffError::CorruptHeader { path: None, step, symbol: a, reason: "is paired with itself" });
            }
            for symbol in [a, b] {
                if !forest.is_occupied(symbol) {
                    return Err(HuffError::CorruptHeader { path: None, step, symbol, reason: "was already merged" });
                }
            }
            forest
                .merge(a, b)
                .map_err(|symbol| HuffError::CorruptHeader { path: None, step, symbol, reason: "was already merged" })?;
        }

        let (tree, _) = forest.into_parts();
        debug!(height = tree.height(), "tree replayed from pairing order");
        Ok(tree)
    }
}
