//! huff-core
//!
//! Pure Rust byte-oriented Huffman engine.
//! No process-global state, no FFI.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;

// Engine stages
pub mod frequency;
pub mod tree;
pub mod headers;
pub mod cipher;
pub mod codec;
pub mod telemetry;

// Session layer
pub mod session;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::cipher::{CipherTable, Code};
    pub use crate::codec::{pack_bytes, unpack_bytes, BitPacker, BitUnpacker, Padding, SymbolDecoder, SymbolEncoder};
    pub use crate::frequency::FrequencyTable;
    pub use crate::headers::{decode_header, encode_header, HeaderError, PairingOrder};
    pub use crate::session::{
        build_tree_file, compress, compress_with_tree, decompress, InputSource, OutputSink, SessionConfig,
    };
    pub use crate::telemetry::{Stage, TelemetrySnapshot};
    pub use crate::tree::{Branch, HuffmanTree, NodeId};
    pub use crate::types::HuffError;
}
