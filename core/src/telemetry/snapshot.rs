//! telemetry/snapshot.rs
//!
//! Immutable view of one finished session.
//!
//! Design notes:
//! - Ratio is `bytes_out / bytes_in` and is not capped: tiny inputs grow by the header.
//! - `summary_line` renders the classic one-line console report.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::telemetry::counters::TelemetryCounters;
use crate::telemetry::timers::{Stage, StageTimes, TelemetryTimer};

/// Code-length facts about the tree used by a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeStats {
    pub min_code_len: usize,
    pub max_code_len: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetrySnapshot {
    pub bytes_in: u64,
    pub bytes_out: u64,
    pub bytes_header: u64,
    pub symbols: u64,
    pub bits_body: u64,
    pub bits_padding: u64,
    pub compression_ratio: f64,
    pub throughput_bytes_per_sec: f64,
    pub elapsed: Duration,
    pub stage_times: StageTimes,
    pub tree: Option<TreeStats>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<Vec<u8>>,
}

impl TelemetrySnapshot {
    pub fn from(counters: &TelemetryCounters, timer: &TelemetryTimer, tree: Option<TreeStats>) -> Self {
        let elapsed = timer.elapsed();

        let compression_ratio = if counters.bytes_in > 0 {
            counters.bytes_out as f64 / counters.bytes_in as f64
        } else {
            0.0
        };

        let throughput = if elapsed.as_secs_f64() > 0.0 {
            counters.bytes_in as f64 / elapsed.as_secs_f64()
        } else {
            0.0
        };

        Self {
            bytes_in: counters.bytes_in,
            bytes_out: counters.bytes_out,
            bytes_header: counters.bytes_header,
            symbols: counters.symbols,
            bits_body: counters.bits_body,
            bits_padding: counters.bits_padding,
            compression_ratio,
            throughput_bytes_per_sec: throughput,
            elapsed,
            stage_times: timer.stage_times.clone(),
            tree,
            output: None,
        }
    }

    /// Keep the produced bytes alongside the numbers (tests, benchmarks).
    pub fn attach_output(&mut self, buf: Vec<u8>) {
        self.output = Some(buf);
    }

    pub fn total_stage_time(&self) -> Duration {
        self.stage_times.total()
    }

    pub fn has_all_stages(&self, expected: &[Stage]) -> bool {
        self.stage_times.has_all(expected)
    }

    /// Internal consistency: stage times fit in the elapsed time and the
    /// bit counters agree with the byte counters.
    pub fn sanity_check(&self) -> bool {
        let bits_fit = (self.bits_body + self.bits_padding) % 8 == 0 || self.bits_padding == 0;
        self.total_stage_time() <= self.elapsed && bits_fit && self.bytes_header <= self.bytes_in.max(self.bytes_out)
    }

    /// `"<secs> seconds. <in> bytes in / <out> bytes out"`
    pub fn summary_line(&self) -> String {
        format!(
            "{:.3} seconds. {} bytes in / {} bytes out",
            self.elapsed.as_secs_f64(),
            self.bytes_in,
            self.bytes_out
        )
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
