//! headers/mod.rs
//! Public module export for the pairing-order header.
//!
//! Format notes:
//! - Fixed-size header (510 bytes), always read in full before any body byte.
//! - The same bytes open a compressed stream and make up a standalone tree file.
//! - No checksum: a damaged header is only caught when replay hits an empty slot.

pub mod types;
pub mod encode;
pub mod decode;

pub use types::*;
pub use encode::*;
pub use decode::*;
