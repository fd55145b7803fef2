//! codec/types.rs
//! Shared codec traits and the padding policy.

use serde::{Deserialize, Serialize};

/// How the packer fills the low bits of the final byte.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Padding {
    /// Always pad with 0 bits. Byte-identical to the legacy format, but the
    /// decoder emits an extra symbol when the pad is at least as long as
    /// the all-zero code.
    Zeros,
    /// Pad with 0 bits when that cannot complete a code, otherwise with a
    /// prefix of the deepest code. Decodes exactly on every input.
    #[default]
    Guarded,
}

/// Turns bytes into packed code bits, MSB first.
pub trait SymbolEncoder: Send {
    /// Append the codes of `input`, pushing every completed byte to `out`.
    fn encode_chunk(&mut self, input: &[u8], out: &mut Vec<u8>);
    /// Flush the pending partial byte, if any, with padding.
    fn finish(&mut self, out: &mut Vec<u8>);
}

/// Walks packed bits through the tree and emits decoded bytes.
pub trait SymbolDecoder: Send {
    /// Consume every bit of `input`, bit 7 first, appending symbols to `out`.
    fn decode_chunk(&mut self, input: &[u8], out: &mut Vec<u8>);
}
