//! cipher.rs
//! Symbol -> code table derived from a tree.
//!
//! Summary: one depth-first walk from the root with an explicit stack.
//! Going left appends a 0 bit, going right a 1 bit; each leaf yields one entry.
//! Codes are prefix-free because they are distinct root-to-leaf paths.

use std::fmt;

use tracing::debug;

use crate::constants::SYMBOL_COUNT;
use crate::frequency::FrequencyTable;
use crate::tree::{Branch, HuffmanTree, NodeId, NodeKind};

/// The root-to-leaf path of one symbol, first branch first.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Code(Vec<bool>);

impl Code {
    #[inline]
    pub fn bits(&self) -> &[bool] {
        &self.0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn branches(&self) -> impl Iterator<Item = Branch> + '_ {
        self.0.iter().map(|&b| Branch::from_bit(b))
    }

    pub fn starts_with(&self, other: &Code) -> bool {
        self.0.starts_with(&other.0)
    }

    fn extended(&self, branch: Branch) -> Code {
        let mut bits = Vec::with_capacity(self.0.len() + 1);
        bits.extend_from_slice(&self.0);
        bits.push(branch.bit());
        Code(bits)
    }
}

/// Renders as the '0'/'1' string of the path.
impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for branch in self.branches() {
            write!(f, "{}", branch)?;
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CipherTable {
    codes: Vec<Code>,
    zero_run: usize,
}

impl CipherTable {
    /// Walk `tree` and record every leaf's path.
    ///
    /// A root that is itself a leaf gets the one-bit code `0`. The builders
    /// never produce such a tree; the rule keeps the table total anyway.
    pub fn from_tree(tree: &HuffmanTree) -> Self {
        let mut codes = vec![Code::default(); SYMBOL_COUNT];
        let mut zero_run = 0usize;

        let mut stack: Vec<(NodeId, Code)> = vec![(tree.root(), Code::default())];
        while let Some((id, path)) = stack.pop() {
            let node = tree.node(id);
            match node.kind {
                NodeKind::Internal { left, right } => {
                    stack.push((right, path.extended(Branch::Right)));
                    stack.push((left, path.extended(Branch::Left)));
                }
                NodeKind::Leaf => {
                    let path = if path.is_empty() { Code(vec![false]) } else { path };
                    if path.bits().iter().all(|b| !b) {
                        zero_run = path.len();
                    }
                    codes[node.symbol as usize] = path;
                }
            }
        }

        let table = Self { codes, zero_run };
        debug!(min = table.min_len(), max = table.max_len(), zero_run, "cipher table built");
        table
    }

    #[inline]
    pub fn code(&self, symbol: u8) -> &Code {
        &self.codes[symbol as usize]
    }

    pub fn iter(&self) -> impl Iterator<Item = (u8, &Code)> {
        self.codes.iter().enumerate().map(|(s, c)| (s as u8, c))
    }

    pub fn max_len(&self) -> usize {
        self.codes.iter().map(Code::len).max().unwrap_or(0)
    }

    pub fn min_len(&self) -> usize {
        self.codes.iter().map(Code::len).min().unwrap_or(0)
    }

    /// Length of the all-zero code: zero padding shorter than this can never
    /// complete a symbol.
    pub fn zero_run(&self) -> usize {
        self.zero_run
    }

    /// The longest code, lowest symbol on ties.
    pub fn deepest(&self) -> &Code {
        let mut best = &self.codes[0];
        for code in &self.codes[1..] {
            if code.len() > best.len() {
                best = code;
            }
        }
        best
    }

    /// Body size in bits for an input with these frequencies.
    pub fn encoded_bits(&self, freqs: &FrequencyTable) -> u64 {
        self.iter()
            .map(|(s, c)| freqs.weight(s) * c.len() as u64)
            .sum()
    }

    /// No code is a prefix of another. After sorting, a prefix sits directly
    /// before some code that extends it, so adjacent checks are enough.
    pub fn is_prefix_free(&self) -> bool {
        let mut sorted: Vec<&Code> = self.codes.iter().collect();
        sorted.sort();
        sorted.windows(2).all(|w| !w[1].starts_with(w[0]))
    }
}
