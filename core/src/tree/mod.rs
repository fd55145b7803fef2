//! tree/mod.rs
//! Huffman tree over all 256 byte values.
//!
//! Two ways in:
//! - `build`: greedy merge by weight, recording the pairing order.
//! - `replay`: apply a recorded pairing order, weights irrelevant.
//!
//! Both share the slot/merge rule in `types::Forest`, which is what makes a
//! header replay into the exact tree that wrote it.

pub mod types;
pub mod build;
pub mod replay;

pub use types::{Branch, HuffmanTree, Node, NodeId, NodeKind};
