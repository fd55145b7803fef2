//! frequency.rs
//! Byte-frequency counting over a source stream.
//!
//! Summary: one sequential pass, one counter per symbol, zero by default.
//! Symbols that never occur keep weight 0 and still get a leaf in the tree.

use std::io::{ErrorKind, Read};

use tracing::debug;

use crate::constants::{DEFAULT_BUFFER_SIZE, SYMBOL_COUNT};
use crate::types::HuffError;

/// Occurrence count of each of the 256 byte values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrequencyTable {
    weights: [u64; SYMBOL_COUNT],
}

impl Default for FrequencyTable {
    fn default() -> Self {
        Self { weights: [0u64; SYMBOL_COUNT] }
    }
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use caller-supplied weights as-is.
    pub fn from_weights(weights: [u64; SYMBOL_COUNT]) -> Self {
        Self { weights }
    }

    pub fn from_bytes(data: &[u8]) -> Self {
        let mut table = Self::new();
        table.add(data);
        table
    }

    /// Count every byte of `r` until end of stream, reading `buffer_size`
    /// bytes at a time. A read failure is reported as `SourceUnavailable`.
    pub fn from_reader<R: Read>(mut r: R, buffer_size: usize) -> Result<Self, HuffError> {
        let mut table = Self::new();
        let mut buf = vec![0u8; buffer_size.max(1)];
        loop {
            match r.read(&mut buf) {
                Ok(0) => break,
                Ok(n) => table.add(&buf[..n]),
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(HuffError::source_unavailable(None, e)),
            }
        }
        debug!(total = table.total(), distinct = table.distinct(), "frequencies counted");
        Ok(table)
    }

    /// Same as `from_reader` with the default buffer size.
    pub fn count<R: Read>(r: R) -> Result<Self, HuffError> {
        Self::from_reader(r, DEFAULT_BUFFER_SIZE)
    }

    /// Accumulate one chunk of input.
    #[inline]
    pub fn add(&mut self, chunk: &[u8]) {
        for &b in chunk {
            self.weights[b as usize] += 1;
        }
    }

    #[inline]
    pub fn weight(&self, symbol: u8) -> u64 {
        self.weights[symbol as usize]
    }

    pub fn weights(&self) -> &[u64; SYMBOL_COUNT] {
        &self.weights
    }

    /// Total number of bytes counted.
    pub fn total(&self) -> u64 {
        self.weights.iter().sum()
    }

    /// Number of symbols with a non-zero weight.
    pub fn distinct(&self) -> usize {
        self.weights.iter().filter(|&&w| w > 0).count()
    }
}
