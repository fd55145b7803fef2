//! headers/decode.rs
//!
//! Header decoding utilities.
//!
//! Design notes:
//! - Takes the first 510 bytes of a buffer or stream as the pairing order.
//! - Anything after byte 510 is body (compressed stream) or ignored (tree file).
//! - Structural validity is only known once the order is replayed.

use std::io::{ErrorKind, Read};

use tracing::debug;

use crate::headers::types::{HeaderError, PairingOrder, HEADER_LEN_V1};
use crate::types::HuffError;

/// Deserialize the first 510 bytes of `buf` into a `PairingOrder`.
#[inline]
pub fn decode_header(buf: &[u8]) -> Result<PairingOrder, HeaderError> {
    if buf.len() < PairingOrder::LEN {
        return Err(HeaderError::BufferTooShort { have: buf.len(), need: PairingOrder::LEN });
    }
    let mut bytes = [0u8; HEADER_LEN_V1];
    bytes.copy_from_slice(&buf[..HEADER_LEN_V1]);
    Ok(PairingOrder::from_bytes(bytes))
}

/// Read exactly one header from the front of a stream.
///
/// Reports `TruncatedHeader` with the number of bytes actually available
/// when the stream ends early, `SourceUnavailable` when a read fails.
pub fn read_header<R: Read>(r: &mut R) -> Result<PairingOrder, HuffError> {
    let mut buf = [0u8; HEADER_LEN_V1];
    let mut have = 0usize;
    while have < HEADER_LEN_V1 {
        match r.read(&mut buf[have..]) {
            Ok(0) => break,
            Ok(n) => have += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(HuffError::source_unavailable(None, e)),
        }
    }
    let order = decode_header(&buf[..have])?;
    debug!(bytes = have, "pairing-order header read");
    Ok(order)
}
