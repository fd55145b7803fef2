//! session/mod.rs
//! One run of the engine: source in, sink out, telemetry back.
//!
//! Four modes share the same building blocks:
//! - `compress`: count → build → header → pack
//! - `decompress`: header → replay → unpack
//! - `build_tree_file`: count → build → header only
//! - `compress_with_tree`: external header → replay → header → pack

pub mod core;
pub mod io;

pub use self::core::*;
pub use self::io::*;
