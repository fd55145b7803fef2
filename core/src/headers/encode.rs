//! headers/encode.rs
//!
//! Header encoding utilities.
//!
//! Design notes:
//! - Serializes a `PairingOrder` into a fixed 510-byte buffer.
//! - Pure data copy: byte 2i is the smaller id of step i, byte 2i+1 the larger.

use std::io::Write;

use tracing::debug;

use crate::headers::types::{PairingOrder, HEADER_LEN_V1};
use crate::types::HuffError;

/// Serialize a `PairingOrder` into its 510-byte wire form.
#[inline]
pub fn encode_header(order: &PairingOrder) -> [u8; HEADER_LEN_V1] {
    let mut out = [0u8; HEADER_LEN_V1];
    out.copy_from_slice(order.as_bytes());
    out
}

/// Write the header to the sink as the first bytes of the stream.
pub fn write_header<W: Write>(w: &mut W, order: &PairingOrder) -> Result<(), HuffError> {
    let buf = encode_header(order);
    w.write_all(&buf).map_err(|e| HuffError::sink_unavailable(None, e))?;
    debug!(bytes = buf.len(), "pairing-order header written");
    Ok(())
}
