//! telemetry/timers.rs
//! Wall-clock accounting per pipeline stage.
//!
//! Summary: a session owns one `TelemetryTimer`; each stage runs inside
//! `TelemetryTimer::time` and its duration lands in `StageTimes`.

use std::collections::BTreeMap;
use std::fmt;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Stage {
    Read,
    Count,
    Build,
    Replay,
    Cipher,
    Write,
    Encode,
    Decode,
}

impl Stage {
    pub fn name(self) -> &'static str {
        match self {
            Stage::Read => "read",
            Stage::Count => "count",
            Stage::Build => "build",
            Stage::Replay => "replay",
            Stage::Cipher => "cipher",
            Stage::Write => "write",
            Stage::Encode => "encode",
            Stage::Decode => "decode",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accumulated time per stage, in pipeline order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StageTimes(BTreeMap<Stage, Duration>);

impl StageTimes {
    pub fn add(&mut self, stage: Stage, dur: Duration) {
        *self.0.entry(stage).or_default() += dur;
    }

    /// Zero for a stage that never ran.
    pub fn get(&self, stage: Stage) -> Duration {
        self.0.get(&stage).copied().unwrap_or_default()
    }

    pub fn get_ms(&self, stage: Stage) -> f64 {
        self.get(stage).as_secs_f64() * 1e3
    }

    pub fn total(&self) -> Duration {
        self.0.values().sum()
    }

    pub fn contains(&self, stage: Stage) -> bool {
        self.0.contains_key(&stage)
    }

    pub fn has_all(&self, expected: &[Stage]) -> bool {
        expected.iter().all(|&s| self.contains(s))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Stage, Duration)> + '_ {
        self.0.iter().map(|(&s, &d)| (s, d))
    }
}

#[derive(Clone, Debug)]
pub struct TelemetryTimer {
    started: Instant,
    elapsed: Option<Duration>,
    pub stage_times: StageTimes,
}

impl Default for TelemetryTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl TelemetryTimer {
    pub fn new() -> Self {
        Self { started: Instant::now(), elapsed: None, stage_times: StageTimes::default() }
    }

    /// Freeze the elapsed time. Later calls keep the first value.
    pub fn finish(&mut self) {
        let started = self.started;
        self.elapsed.get_or_insert_with(|| started.elapsed());
    }

    pub fn add_stage_time(&mut self, stage: Stage, dur: Duration) {
        self.stage_times.add(stage, dur);
    }

    /// Run `f`, charging its wall time to `stage`.
    pub fn time<T>(&mut self, stage: Stage, f: impl FnOnce() -> T) -> T {
        let t = Instant::now();
        let out = f();
        self.add_stage_time(stage, t.elapsed());
        out
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed.unwrap_or_else(|| self.started.elapsed())
    }
}
