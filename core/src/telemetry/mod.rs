//! telemetry/mod.rs
//! Session telemetry: counters, timers, and immutable snapshots.
//!
//! Notes:
//! - Counters and timers are owned by the session that fills them; no globals.
//! - Snapshots serialize with serde so the CLI can print them as JSON.

pub mod counters;
pub mod timers;
pub mod snapshot;

pub use counters::*;
pub use timers::*;
pub use snapshot::*;
