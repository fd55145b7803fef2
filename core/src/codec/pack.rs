//! codec/pack.rs
//! Bit packer: concatenated codes split into 8-bit groups, first bit -> bit 7.

use crate::cipher::CipherTable;
use crate::codec::types::{Padding, SymbolEncoder};

pub struct BitPacker<'a> {
    table: &'a CipherTable,
    padding: Padding,
    acc: u8,
    pending: u8,
    symbols: u64,
    bits_body: u64,
    bits_padding: u64,
}

impl<'a> BitPacker<'a> {
    pub fn new(table: &'a CipherTable, padding: Padding) -> Self {
        Self {
            table,
            padding,
            acc: 0,
            pending: 0,
            symbols: 0,
            bits_body: 0,
            bits_padding: 0,
        }
    }

    #[inline]
    fn push_bit(&mut self, bit: bool, out: &mut Vec<u8>) {
        self.acc = (self.acc << 1) | bit as u8;
        self.pending += 1;
        if self.pending == 8 {
            out.push(self.acc);
            self.acc = 0;
            self.pending = 0;
        }
    }

    /// The `n` bits (n < 8) used to fill the last byte.
    fn pad_bits(&self, n: usize) -> Vec<bool> {
        match self.padding {
            Padding::Zeros => vec![false; n],
            Padding::Guarded if self.table.zero_run() > n => vec![false; n],
            Padding::Guarded => {
                // Every 256-leaf tree has a code of at least 8 bits, so an
                // n-bit prefix of the deepest one stops at an internal node.
                let mut bits: Vec<bool> = self.table.deepest().bits().iter().copied().take(n).collect();
                bits.resize(n, false);
                bits
            }
        }
    }

    pub fn symbols(&self) -> u64 {
        self.symbols
    }

    pub fn bits_body(&self) -> u64 {
        self.bits_body
    }

    pub fn bits_padding(&self) -> u64 {
        self.bits_padding
    }
}

impl SymbolEncoder for BitPacker<'_> {
    fn encode_chunk(&mut self, input: &[u8], out: &mut Vec<u8>) {
        let table = self.table;
        for &byte in input {
            let code = table.code(byte);
            for &bit in code.bits() {
                self.push_bit(bit, out);
            }
            self.symbols += 1;
            self.bits_body += code.len() as u64;
        }
    }

    fn finish(&mut self, out: &mut Vec<u8>) {
        if self.pending == 0 {
            return;
        }
        let n = 8 - self.pending as usize;
        for bit in self.pad_bits(n) {
            self.push_bit(bit, out);
        }
        self.bits_padding += n as u64;
        debug_assert_eq!(self.pending, 0);
    }
}

/// Pack a whole buffer at once: body only, no header.
pub fn pack_bytes(table: &CipherTable, data: &[u8], padding: Padding) -> Vec<u8> {
    let mut packer = BitPacker::new(table, padding);
    let mut out = Vec::with_capacity(data.len() / 2 + 1);
    packer.encode_chunk(data, &mut out);
    packer.finish(&mut out);
    out
}
