//! codec/mod.rs
//! Bit packer / unpacker: the stream codec between bytes and code bits.
//!
//! Format notes:
//! - Body = concatenated codes, 8 bits per byte, first bit in bit 7.
//! - No bit count and no trailer: the decoder stops when input bytes run out.
//! - Padding policy decides what fills the last byte (see `Padding`).

pub mod types;
pub mod pack;
pub mod unpack;
pub mod stream;

pub use types::*;
pub use pack::*;
pub use unpack::*;
pub use stream::*;
