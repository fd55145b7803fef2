// ## 📂 File: `src/session/io.rs`
// ## Normalized input sources and output sinks for a session

use std::fs::{self, File};
use std::io::{self, BufWriter, Cursor, Read, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::types::HuffError;

/// Canonical input abstraction
pub enum InputSource {
    Reader(Box<dyn Read + Send>),
    File(PathBuf),
    Memory(Vec<u8>),
}

impl InputSource {
    pub fn path(&self) -> Option<&Path> {
        match self {
            InputSource::File(p) => Some(p),
            _ => None,
        }
    }
}

/// Canonical output abstraction
pub enum OutputSink {
    Writer(Box<dyn Write + Send>),
    File(PathBuf),
    Memory,
}

impl OutputSink {
    pub fn path(&self) -> Option<&Path> {
        match self {
            OutputSink::File(p) => Some(p),
            _ => None,
        }
    }
}

/// Output buffer shared with the session when capture is enabled.
pub type CapturedOutput = Arc<Mutex<Vec<u8>>>;

/// Normalize input source into a boxed reader
pub fn open_input(src: InputSource) -> Result<Box<dyn Read + Send>, HuffError> {
    let reader: Box<dyn Read + Send> = match src {
        InputSource::Reader(r) => r,
        InputSource::File(p) => {
            let f = File::open(&p).map_err(|e| HuffError::source_unavailable(Some(p), e))?;
            Box::new(f)
        }
        InputSource::Memory(b) => Box::new(Cursor::new(b)),
    };
    Ok(reader)
}

/// Normalize output sink into a boxed writer.
/// - `with_buf == Some(true)` on a `Memory` sink also returns the shared buffer.
pub fn open_output(
    sink: OutputSink,
    with_buf: Option<bool>,
) -> Result<(Box<dyn Write + Send>, Option<CapturedOutput>), HuffError> {
    match sink {
        OutputSink::Writer(w) => Ok((w, None)),
        OutputSink::File(p) => {
            let f = File::create(&p).map_err(|e| HuffError::sink_unavailable(Some(p), e))?;
            Ok((Box::new(BufWriter::new(f)), None))
        }
        OutputSink::Memory => match with_buf {
            Some(true) => {
                let buf = Arc::new(Mutex::new(Vec::new()));
                let writer = SharedBufferWriter { buf: buf.clone() };
                Ok((Box::new(writer), Some(buf)))
            }
            _ => Ok((Box::new(Cursor::new(Vec::new())), None)),
        },
    }
}

pub struct SharedBufferWriter {
    buf: CapturedOutput,
}

impl Write for SharedBufferWriter {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        let mut guard = self
            .buf
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "captured output buffer poisoned"))?;
        guard.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Anything that can hand out a fresh reader positioned at byte 0.
///
/// `compress` reads its source twice and calls `reopen` once per pass.
pub trait Reopen {
    fn reopen(&self) -> Result<Box<dyn Read + Send + '_>, HuffError>;
}

/// A source that can be read from the start more than once.
///
/// Compression reads its input twice (count, then encode). Regular files
/// are reopened for the second pass. Readers and any path that is not a
/// regular file (pipe, FIFO, `/dev/stdin`) are spooled into memory first.
pub enum RewindableSource {
    File(PathBuf),
    Memory(Vec<u8>),
}

impl RewindableSource {
    pub fn from_input(src: InputSource) -> Result<Self, HuffError> {
        match src {
            InputSource::File(p) => {
                let meta = fs::metadata(&p).map_err(|e| HuffError::source_unavailable(Some(p.clone()), e))?;
                if meta.is_file() {
                    return Ok(RewindableSource::File(p));
                }
                let f = File::open(&p).map_err(|e| HuffError::source_unavailable(Some(p.clone()), e))?;
                let buf = spool(f).map_err(|e| HuffError::source_unavailable(Some(p), e))?;
                Ok(RewindableSource::Memory(buf))
            }
            InputSource::Memory(b) => Ok(RewindableSource::Memory(b)),
            InputSource::Reader(r) => {
                let buf = spool(r).map_err(|e| HuffError::source_unavailable(None, e))?;
                Ok(RewindableSource::Memory(buf))
            }
        }
    }

    pub fn is_in_memory(&self) -> bool {
        matches!(self, RewindableSource::Memory(_))
    }
}

impl Reopen for RewindableSource {
    fn reopen(&self) -> Result<Box<dyn Read + Send + '_>, HuffError> {
        match self {
            RewindableSource::File(p) => {
                let f = File::open(p).map_err(|e| HuffError::source_unavailable(Some(p.clone()), e))?;
                Ok(Box::new(f))
            }
            RewindableSource::Memory(b) => Ok(Box::new(b.as_slice())),
        }
    }
}

fn spool<R: Read>(mut r: R) -> io::Result<Vec<u8>> {
    let mut buf = Vec::new();
    r.read_to_end(&mut buf)?;
    Ok(buf)
}
