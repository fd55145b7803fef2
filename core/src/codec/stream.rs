//! codec/stream.rs
//! Streaming drivers that respect the buffer-size discipline.
//!
//! Reads and writes are strictly sequential. A read failure surfaces as
//! `SourceUnavailable`, a write failure as `SinkUnavailable`; neither is
//! retried and bytes already written stay written.

use std::io::{ErrorKind, Read, Write};

use crate::codec::types::{SymbolDecoder, SymbolEncoder};
use crate::constants::MAX_BUFFER_SIZE;
use crate::types::HuffError;

/// Byte totals moved by one driver run (header excluded).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StreamTotals {
    pub bytes_in: u64,
    pub bytes_out: u64,
}

fn read_chunk<R: Read>(r: &mut R, buf: &mut [u8]) -> Result<usize, HuffError> {
    loop {
        match r.read(buf) {
            Ok(n) => return Ok(n),
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(HuffError::source_unavailable(None, e)),
        }
    }
}

fn write_chunk<W: Write>(w: &mut W, out: &mut Vec<u8>, totals: &mut StreamTotals) -> Result<(), HuffError> {
    if out.is_empty() {
        return Ok(());
    }
    w.write_all(out).map_err(|e| HuffError::sink_unavailable(None, e))?;
    totals.bytes_out += out.len() as u64;
    out.clear();
    Ok(())
}

/// Summary: Encode everything `r` yields in `buffer_size` blocks, writing
/// packed bytes to `w` as they complete.
/// - Calls `encoder.finish()` after EOF to flush the padded last byte.
pub fn encode_stream<R, W, E>(
    r: &mut R,
    w: &mut W,
    encoder: &mut E,
    buffer_size: usize,
) -> Result<StreamTotals, HuffError>
where
    R: Read,
    W: Write,
    E: SymbolEncoder + ?Sized,
{
    debug_assert!(buffer_size > 0 && buffer_size <= MAX_BUFFER_SIZE);
    let mut buf = vec![0u8; buffer_size.max(1)];
    let mut out = Vec::with_capacity(buffer_size);
    let mut totals = StreamTotals::default();

    loop {
        let n = read_chunk(r, &mut buf)?;
        if n == 0 {
            break;
        }
        totals.bytes_in += n as u64;
        encoder.encode_chunk(&buf[..n], &mut out);
        write_chunk(w, &mut out, &mut totals)?;
    }

    encoder.finish(&mut out);
    write_chunk(w, &mut out, &mut totals)?;
    w.flush().map_err(|e| HuffError::sink_unavailable(None, e))?;
    Ok(totals)
}

/// Summary: Decode everything `r` yields in `buffer_size` blocks.
/// - Output does not depend on chunk boundaries: a code may span two reads.
pub fn decode_stream<R, W, D>(
    r: &mut R,
    w: &mut W,
    decoder: &mut D,
    buffer_size: usize,
) -> Result<StreamTotals, HuffError>
where
    R: Read,
    W: Write,
    D: SymbolDecoder + ?Sized,
{
    debug_assert!(buffer_size > 0 && buffer_size <= MAX_BUFFER_SIZE);
    let mut buf = vec![0u8; buffer_size.max(1)];
    let mut out = Vec::with_capacity(buffer_size * 2);
    let mut totals = StreamTotals::default();

    loop {
        let n = read_chunk(r, &mut buf)?;
        if n == 0 {
            break;
        }
        totals.bytes_in += n as u64;
        decoder.decode_chunk(&buf[..n], &mut out);
        write_chunk(w, &mut out, &mut totals)?;
    }

    w.flush().map_err(|e| HuffError::sink_unavailable(None, e))?;
    Ok(totals)
}
