use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::headers::HeaderError;

/// Unified error covering stream access, header parsing and tree replay.
/// - `From<HeaderError>` enables `?` on header parsing.
/// - Every variant is fatal to the operation in progress.
#[derive(Debug, Error)]
pub enum HuffError {
    /// Input stream could not be opened or read.
    #[error("source unavailable: {}: {source}", display_path(.path))]
    SourceUnavailable {
        path: Option<PathBuf>,
        #[source]
        source: io::Error,
    },

    /// Output stream could not be opened or written.
    #[error("sink unavailable: {}: {source}", display_path(.path))]
    SinkUnavailable {
        path: Option<PathBuf>,
        #[source]
        source: io::Error,
    },

    /// Fewer than 510 bytes where a pairing-order header was expected.
    #[error("truncated header: {}: {have} < {need} bytes", display_path(.path))]
    TruncatedHeader {
        path: Option<PathBuf>,
        have: usize,
        need: usize,
    },

    /// Replay referenced a slot already consumed by an earlier merge.
    #[error("corrupt header: {}: merge step {step}: symbol {symbol} {reason}", display_path(.path))]
    CorruptHeader {
        path: Option<PathBuf>,
        step: usize,
        symbol: u8,
        reason: &'static str,
    },
}

impl HuffError {
    pub fn source_unavailable(path: Option<PathBuf>, source: io::Error) -> Self {
        HuffError::SourceUnavailable { path, source }
    }

    pub fn sink_unavailable(path: Option<PathBuf>, source: io::Error) -> Self {
        HuffError::SinkUnavailable { path, source }
    }

    /// Fill in the file paths of errors raised without one.
    /// Header errors belong to the source. Paths already present are kept.
    pub fn with_paths(self, source_path: Option<&Path>, sink_path: Option<&Path>) -> Self {
        let source_path = source_path.map(Path::to_path_buf);
        match self {
            HuffError::SourceUnavailable { path: None, source } => {
                HuffError::SourceUnavailable { path: source_path, source }
            }
            HuffError::SinkUnavailable { path: None, source } => HuffError::SinkUnavailable {
                path: sink_path.map(Path::to_path_buf),
                source,
            },
            HuffError::TruncatedHeader { path: None, have, need } => {
                HuffError::TruncatedHeader { path: source_path, have, need }
            }
            HuffError::CorruptHeader { path: None, step, symbol, reason } => {
                HuffError::CorruptHeader { path: source_path, step, symbol, reason }
            }
            other => other,
        }
    }
}

impl From<HeaderError> for HuffError {
    fn from(e: HeaderError) -> Self {
        match e {
            HeaderError::BufferTooShort { have, need } => HuffError::TruncatedHeader { path: None, have, need },
        }
    }
}

fn display_path(path: &Option<PathBuf>) -> String {
    match path {
        Some(p) => p.display().to_string(),
        None => "<stream>".to_string(),
    }
}
