//! tree/types.rs
//! Arena-backed Huffman tree.
//!
//! Layout notes:
//! - Leaves occupy ids 0..=255 and id == symbol.
//! - Internal nodes are appended in merge order, ids 256..=510.
//! - Leaf-or-internal is the node kind, so a leaf can never carry one child.
//! - Dropping the tree drops the arena; no recursive teardown.

use std::fmt;

use num_enum::TryFromPrimitive;

use crate::constants::{HEADER_LEN, SYMBOL_COUNT};
use crate::headers::PairingOrder;

/// Branch taken from a parent: left encodes as bit 0, right as bit 1.
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, TryFromPrimitive)]
pub enum Branch {
    Left = 0,
    Right = 1,
}

impl Branch {
    #[inline]
    pub fn from_bit(bit: bool) -> Self {
        if bit { Branch::Right } else { Branch::Left }
    }

    #[inline]
    pub fn bit(self) -> bool {
        self == Branch::Right
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Branch::Left => "0",
            Branch::Right => "1",
        })
    }
}

/// Index of a node inside the tree arena.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u16);

impl NodeId {
    #[inline]
    pub fn leaf(symbol: u8) -> Self {
        NodeId(symbol as u16)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NodeKind {
    Leaf,
    Internal { left: NodeId, right: NodeId },
}

/// One tree node.
///
/// `symbol` is the byte for a leaf; for an internal node it is the smaller
/// of its children's ids, i.e. the working slot the node occupied.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Node {
    pub symbol: u8,
    pub weight: u64,
    pub kind: NodeKind,
}

impl Node {
    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::Leaf)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HuffmanTree {
    nodes: Vec<Node>,
    root: NodeId,
}

impl HuffmanTree {
    #[inline]
    pub fn root(&self) -> NodeId {
        self.root
    }

    #[inline]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    /// Child of `id` along `branch`, `None` for a leaf.
    #[inline]
    pub fn child(&self, id: NodeId, branch: Branch) -> Option<NodeId> {
        match self.node(id).kind {
            NodeKind::Leaf => None,
            NodeKind::Internal { left, right } => Some(match branch {
                Branch::Left => left,
                Branch::Right => right,
            }),
        }
    }

    #[inline]
    pub fn is_leaf(&self, id: NodeId) -> bool {
        self.node(id).is_leaf()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn leaf_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_leaf()).count()
    }

    /// Weight at the root: total byte count in construction mode, 0 after replay.
    pub fn total_weight(&self) -> u64 {
        self.node(self.root).weight
    }

    /// Maximum leaf depth, walked with an explicit stack.
    pub fn height(&self) -> usize {
        let mut max = 0usize;
        let mut stack = vec![(self.root, 0usize)];
        while let Some((id, depth)) = stack.pop() {
            match self.node(id).kind {
                NodeKind::Leaf => max = max.max(depth),
                NodeKind::Internal { left, right } => {
                    stack.push((left, depth + 1));
                    stack.push((right, depth + 1));
                }
            }
        }
        max
    }
}

/// Working state while a tree is grown in place: the arena plus the 256
/// slots, each holding a still-unmerged subtree or nothing.
pub(crate) struct Forest {
    nodes: Vec<Node>,
    slots: [Option<NodeId>; SYMBOL_COUNT],
    order: [u8; HEADER_LEN],
    steps: usize,
}

impl Forest {
    /// One leaf per symbol, each in its own slot.
    pub(crate) fn with_weights(weights: &[u64; SYMBOL_COUNT]) -> Self {
        let mut nodes = Vec::with_capacity(2 * SYMBOL_COUNT - 1);
        let mut slots = [None; SYMBOL_COUNT];
        for (symbol, &weight) in weights.iter().enumerate() {
            nodes.push(Node { symbol: symbol as u8, weight, kind: NodeKind::Leaf });
            slots[symbol] = Some(NodeId::leaf(symbol as u8));
        }
        Self { nodes, slots, order: [0u8; HEADER_LEN], steps: 0 }
    }

    #[inline]
    pub(crate) fn is_occupied(&self, slot: u8) -> bool {
        self.slots[slot as usize].is_some()
    }

    /// Lowest-id slot holding the minimum weight, skipping `exclude`.
    /// Scans ascending and only replaces on a strictly lower weight, so ties
    /// go to the lower symbol id.
    pub(crate) fn select_min(&self, exclude: Option<u8>) -> Option<u8> {
        let mut best: Option<(u8, u64)> = None;
        for (slot, entry) in self.slots.iter().enumerate() {
            let Some(id) = entry else { continue };
            let slot = slot as u8;
            if exclude == Some(slot) {
                continue;
            }
            let weight = self.nodes[id.index()].weight;
            match best {
                Some((_, best_weight)) if weight >= best_weight => {}
                _ => best = Some((slot, weight)),
            }
        }
        best.map(|(slot, _)| slot)
    }

    /// Merge the subtrees in slots `a` and `b`.
    ///
    /// The parent takes the smaller id: it goes into that slot, the larger
    /// slot is cleared, the smaller-id child becomes the left child, and
    /// `(smaller, larger)` is appended to the pairing order.
    /// Returns `Err(slot)` naming an empty slot; nothing is changed then.
    pub(crate) fn merge(&mut self, a: u8, b: u8) -> Result<(), u8> {
        let (lo, hi) = (a.min(b), a.max(b));
        let left = self.slots[lo as usize].ok_or(lo)?;
        let right = self.slots[hi as usize].ok_or(hi)?;

        let weight = self.nodes[left.index()].weight + self.nodes[right.index()].weight;
        let parent = NodeId(self.nodes.len() as u16);
        self.nodes.push(Node { symbol: lo, weight, kind: NodeKind::Internal { left, right } });

        self.slots[lo as usize] = Some(parent);
        self.slots[hi as usize] = None;

        self.order[2 * self.steps] = lo;
        self.order[2 * self.steps + 1] = hi;
        self.steps += 1;
        Ok(())
    }

    pub(crate) fn steps(&self) -> usize {
        self.steps
    }

    /// Finish construction. The last parent created is the root; slot 0 is
    /// never vacated, so that is also the node left in slot 0.
    pub(crate) fn into_parts(self) -> (HuffmanTree, PairingOrder) {
        let root = match self.steps {
            0 => NodeId::leaf(0),
            _ => NodeId((self.nodes.len() - 1) as u16),
        };
        debug_assert_eq!(self.slots[0], Some(root));
        let tree = HuffmanTree { nodes: self.nodes, root };
        (tree, PairingOrder::from_bytes(self.order))
    }
}
