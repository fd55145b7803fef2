//! codec/unpack.rs
//! Bit unpacker: one tree step per input bit, emit at each leaf.
//!
//! Every bit read is consumed, padding included. Pad bits that do not
//! finish a code leave the cursor mid-tree and are dropped with it.

use crate::codec::types::SymbolDecoder;
use crate::tree::{Branch, HuffmanTree, NodeId};

pub struct BitUnpacker<'a> {
    tree: &'a HuffmanTree,
    cursor: NodeId,
    bits_read: u64,
    symbols: u64,
}

impl<'a> BitUnpacker<'a> {
    pub fn new(tree: &'a HuffmanTree) -> Self {
        Self { tree, cursor: tree.root(), bits_read: 0, symbols: 0 }
    }

    #[inline]
    fn step(&mut self, branch: Branch, out: &mut Vec<u8>) {
        self.bits_read += 1;
        match self.tree.child(self.cursor, branch) {
            Some(next) if self.tree.is_leaf(next) => {
                out.push(self.tree.node(next).symbol);
                self.symbols += 1;
                self.cursor = self.tree.root();
            }
            Some(next) => self.cursor = next,
            // Lone-leaf root: each bit is one occurrence of the root symbol.
            None => {
                out.push(self.tree.node(self.cursor).symbol);
                self.symbols += 1;
            }
        }
    }

    /// True when the bits seen so far end inside a code.
    pub fn is_mid_code(&self) -> bool {
        self.cursor != self.tree.root()
    }

    pub fn bits_read(&self) -> u64 {
        self.bits_read
    }

    pub fn symbols(&self) -> u64 {
        self.symbols
    }
}

impl SymbolDecoder for BitUnpacker<'_> {
    fn decode_chunk(&mut self, input: &[u8], out: &mut Vec<u8>) {
        for &byte in input {
            for shift in (0..8).rev() {
                let bit = (byte >> shift) & 1 == 1;
                self.step(Branch::from_bit(bit), out);
            }
        }
    }
}

/// Decode a whole body at once (no header).
pub fn unpack_bytes(tree: &HuffmanTree, body: &[u8]) -> Vec<u8> {
    let mut unpacker = BitUnpacker::new(tree);
    let mut out = Vec::with_capacity(body.len() * 2);
    unpacker.decode_chunk(body, &mut out);
    out
}
