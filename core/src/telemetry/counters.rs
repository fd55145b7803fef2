//! telemetry/counters.rs
//! Mutable counters used during one compression session.
//!
//! Summary: Collects byte, symbol and bit counts while a session runs.
//! Converted into an immutable TelemetrySnapshot at session end.
use std::ops::AddAssign;

use serde::{Deserialize, Serialize};

/// Deterministic counters collected during stream processing
#[derive(Default, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelemetryCounters {
    pub bytes_in: u64,
    pub bytes_out: u64,
    pub bytes_header: u64,
    pub symbols: u64,
    pub bits_body: u64,
    pub bits_padding: u64,
}

impl TelemetryCounters {
    /// Record a header read from the source.
    pub fn add_header_in(&mut self, header_len: usize) {
        self.bytes_in += header_len as u64;
        self.bytes_header += header_len as u64;
    }

    /// Record a header written to the sink.
    pub fn add_header_out(&mut self, header_len: usize) {
        self.bytes_out += header_len as u64;
        self.bytes_header += header_len as u64;
    }

    /// Record one encode pass.
    ///
    /// - `raw_len`: source bytes consumed
    /// - `packed_len`: body bytes written
    /// - `symbols`: symbols encoded (equals `raw_len`)
    /// - `bits_body` / `bits_padding`: code bits and pad bits emitted
    pub fn add_encode(&mut self, raw_len: u64, packed_len: u64, symbols: u64, bits_body: u64, bits_padding: u64) {
        self.bytes_in += raw_len;
        self.bytes_out += packed_len;
        self.symbols += symbols;
        self.bits_body += bits_body;
        self.bits_padding += bits_padding;
    }

    /// Record one decode pass.
    ///
    /// - `packed_len`: body bytes consumed
    /// - `raw_len`: decoded bytes written
    /// - `bits_read`: every body bit, padding included
    pub fn add_decode(&mut self, packed_len: u64, raw_len: u64, bits_read: u64) {
        self.bytes_in += packed_len;
        self.bytes_out += raw_len;
        self.symbols += raw_len;
        self.bits_body += bits_read;
    }

    pub fn merge(&mut self, other: &TelemetryCounters) {
        self.bytes_in += other.bytes_in;
        self.bytes_out += other.bytes_out;
        self.bytes_header += other.bytes_header;
        self.symbols += other.symbols;
        self.bits_body += other.bits_body;
        self.bits_padding += other.bits_padding;
    }
}

impl AddAssign for TelemetryCounters {
    fn add_assign(&mut self, rhs: Self) {
        self.merge(&rhs);
    }
}
