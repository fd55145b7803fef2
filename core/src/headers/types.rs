//! headers/types.rs
//! Pairing-order header type and its errors.
//!
//! Layout notes:
//! - 255 entries of 2 bytes, entry i = (smaller id, larger id) merged at step i.
//! - No magic, no version, no length prefix, no checksum: the header is the raw merge log.
//! - Replaying the log under the merge-to-lower-slot rule rebuilds the tree without weights.

use std::fmt;

use crate::constants::HEADER_LEN;

/// Fixed header size in bytes.
pub const HEADER_LEN_V1: usize = HEADER_LEN;

/// The merge log recorded while building a tree.
///
/// Logically immutable once produced. The builder's forest writes one
/// `(smaller, larger)` pair per merge and hands the bytes over whole.
#[derive(Clone, PartialEq, Eq)]
pub struct PairingOrder {
    bytes: [u8; HEADER_LEN],
}

impl PairingOrder {
    pub const LEN: usize = HEADER_LEN;

    /// Wrap raw header bytes verbatim. Pairs are not normalized: replay
    /// accepts either order within a pair.
    pub fn from_bytes(bytes: [u8; HEADER_LEN]) -> Self {
        Self { bytes }
    }

    /// The `(first, second)` pair stored at merge step `step`.
    #[inline]
    pub fn pair(&self, step: usize) -> (u8, u8) {
        (self.bytes[2 * step], self.bytes[2 * step + 1])
    }

    pub fn pairs(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        self.bytes.chunks_exact(2).map(|p| (p[0], p[1]))
    }

    pub fn as_bytes(&self) -> &[u8; HEADER_LEN] {
        &self.bytes
    }
}

impl fmt::Debug for PairingOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PairingOrder")
            .field("first", &fmt_bytes(&self.bytes[..8]))
            .field("last", &fmt_bytes(&self.bytes[HEADER_LEN - 8..]))
            .finish()
    }
}

pub fn fmt_bytes(b: &[u8]) -> String {
    format!("0x{}", hex::encode(b))
}

#[derive(Debug)]
pub enum HeaderError {
    /// Buffer too short to contain a full header.
    BufferTooShort { have: usize, need: usize },
}

impl fmt::Display for HeaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use HeaderError::*;
        match self {
            BufferTooShort { have, need } =>
                write!(f, "header buffer too short: {} < {}", have, need),
        }
    }
}

impl std::error::Error for HeaderError {}
