// ## `session/core.rs`: the session entry points

use std::io::{self, Read, Write};
use std::path::Path;

use tracing::{debug, info, warn};

use crate::{
    cipher::CipherTable,
    codec::{decode_stream, encode_stream, BitPacker, BitUnpacker, Padding},
    constants::{DEFAULT_BUFFER_SIZE, HEADER_LEN, MAX_BUFFER_SIZE},
    frequency::FrequencyTable,
    headers::{read_header, write_header, PairingOrder},
    session::io::{open_input, open_output, CapturedOutput, InputSource, OutputSink, Reopen, RewindableSource},
    telemetry::{Stage, TelemetryCounters, TelemetrySnapshot, TelemetryTimer, TreeStats},
    tree::HuffmanTree,
    types::HuffError,
};

#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Bytes requested per read. Clamped to `1..=MAX_BUFFER_SIZE`.
    pub buffer_size: Option<usize>,

    /// How the last body byte is filled.
    pub padding: Option<Padding>,

    /// Whether to capture the output buffer in memory.
    /// - `None` or `Some(false)` → no buffer capture (production default).
    /// - `Some(true)` → capture buffer for tests/benchmarks.
    pub with_buf: Option<bool>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            buffer_size: Some(DEFAULT_BUFFER_SIZE),
            padding: Some(Padding::Guarded),
            with_buf: Some(false),
        }
    }
}

impl SessionConfig {
    pub fn new(buffer_size: Option<usize>, padding: Option<Padding>, with_buf: Option<bool>) -> Self {
        let d = Self::default();
        Self {
            buffer_size: buffer_size.or(d.buffer_size),
            padding: padding.or(d.padding),
            with_buf: with_buf.or(d.with_buf),
        }
    }

    pub fn with_buf_enabled() -> Self {
        Self { with_buf: Some(true), ..Self::default() }
    }

    pub fn buffer_size(&self) -> usize {
        self.buffer_size.unwrap_or(DEFAULT_BUFFER_SIZE).clamp(1, MAX_BUFFER_SIZE)
    }

    pub fn padding(&self) -> Padding {
        self.padding.unwrap_or_default()
    }
}

fn tree_stats(table: &CipherTable) -> TreeStats {
    TreeStats { min_code_len: table.min_len(), max_code_len: table.max_len() }
}

fn finish_snapshot(
    counters: &TelemetryCounters,
    timer: &mut TelemetryTimer,
    stats: Option<TreeStats>,
    captured: Option<CapturedOutput>,
) -> TelemetrySnapshot {
    timer.finish();
    let mut snapshot = TelemetrySnapshot::from(counters, timer, stats);

    // --- Telemetry buffer extraction for tests ---
    if let Some(arc_buf) = captured {
        if let Ok(buf) = arc_buf.lock() {
            snapshot.attach_output(buf.clone());
        }
    }
    snapshot
}

/// Pack `reader` with `table` behind an already-written header.
fn encode_body<R, W>(
    reader: &mut R,
    writer: &mut W,
    table: &CipherTable,
    config: &SessionConfig,
    timer: &mut TelemetryTimer,
    counters: &mut TelemetryCounters,
) -> Result<(), HuffError>
where
    R: Read,
    W: Write,
{
    let mut packer = BitPacker::new(table, config.padding());
    let totals = timer.time(Stage::Encode, || encode_stream(reader, writer, &mut packer, config.buffer_size()))?;
    counters.add_encode(
        totals.bytes_in,
        totals.bytes_out,
        packer.symbols(),
        packer.bits_body(),
        packer.bits_padding(),
    );
    debug!(
        symbols = packer.symbols(),
        bits_body = packer.bits_body(),
        bits_padding = packer.bits_padding(),
        "body packed"
    );
    Ok(())
}

/// Count, build, write the pairing order, then pack the source.
pub fn compress(input: InputSource, output: OutputSink, config: &SessionConfig) -> Result<TelemetrySnapshot, HuffError> {
    let source_path = input.path().map(Path::to_path_buf);
    let sink_path = output.path().map(Path::to_path_buf);
    run_compress(input, output, config).map_err(|e| e.with_paths(source_path.as_deref(), sink_path.as_deref()))
}

fn run_compress(input: InputSource, output: OutputSink, config: &SessionConfig) -> Result<TelemetrySnapshot, HuffError> {
    let mut timer = TelemetryTimer::new();
    let source = timer.time(Stage::Read, || RewindableSource::from_input(input))?;
    if source.is_in_memory() {
        debug!("source held in memory for both passes");
    }
    compress_passes(&source, output, config, timer)
}

/// Compress from a caller-supplied source that can be reopened.
///
/// Fails with `SourceUnavailable` when the second pass reads a different
/// number of bytes than the first.
pub fn compress_reopenable<S: Reopen>(
    source: &S,
    output: OutputSink,
    config: &SessionConfig,
) -> Result<TelemetrySnapshot, HuffError> {
    let sink_path = output.path().map(Path::to_path_buf);
    compress_passes(source, output, config, TelemetryTimer::new()).map_err(|e| e.with_paths(None, sink_path.as_deref()))
}

fn compress_passes<S: Reopen>(
    source: &S,
    output: OutputSink,
    config: &SessionConfig,
    mut timer: TelemetryTimer,
) -> Result<TelemetrySnapshot, HuffError> {
    let mut counters = TelemetryCounters::default();

    let freqs = timer.time(Stage::Count, || -> Result<_, HuffError> {
        FrequencyTable::from_reader(source.reopen()?, config.buffer_size())
    })?;
    if freqs.total() == 0 {
        warn!("empty source: output is the header alone");
    }

    let (tree, order) = timer.time(Stage::Build, || HuffmanTree::from_frequencies(&freqs));
    let table = timer.time(Stage::Cipher, || CipherTable::from_tree(&tree));

    let (mut writer, captured) = open_output(output, config.with_buf)?;
    timer.time(Stage::Write, || write_header(&mut writer, &order))?;
    counters.add_header_out(HEADER_LEN);

    let mut reader = source.reopen()?;
    encode_body(&mut reader, &mut writer, &table, config, &mut timer, &mut counters)?;
    if counters.bytes_in != freqs.total() {
        let msg = format!("source changed between passes: counted {} bytes, encoded {}", freqs.total(), counters.bytes_in);
        return Err(HuffError::source_unavailable(None, io::Error::new(io::ErrorKind::UnexpectedEof, msg)));
    }

    let snapshot = finish_snapshot(&counters, &mut timer, Some(tree_stats(&table)), captured);
    info!(
        bytes_in = snapshot.bytes_in,
        bytes_out = snapshot.bytes_out,
        ratio = snapshot.compression_ratio,
        "compress finished"
    );
    Ok(snapshot)
}

/// Read the pairing order, replay the tree, then unpack the body.
///
/// The sink is only opened once the header has replayed cleanly, so a
/// truncated or corrupt input never leaves an empty output behind.
pub fn decompress(input: InputSource, output: OutputSink, config: &SessionConfig) -> Result<TelemetrySnapshot, HuffError> {
    let source_path = input.path().map(Path::to_path_buf);
    let sink_path = output.path().map(Path::to_path_buf);
    run_decompress(input, output, config).map_err(|e| e.with_paths(source_path.as_deref(), sink_path.as_deref()))
}

fn run_decompress(input: InputSource, output: OutputSink, config: &SessionConfig) -> Result<TelemetrySnapshot, HuffError> {
    let mut timer = TelemetryTimer::new();
    let mut counters = TelemetryCounters::default();

    let mut reader = open_input(input)?;
    let order = timer.time(Stage::Read, || read_header(&mut reader))?;
    counters.add_header_in(HEADER_LEN);

    let tree = timer.time(Stage::Replay, || HuffmanTree::from_pairing_order(&order))?;
    let table = timer.time(Stage::Cipher, || CipherTable::from_tree(&tree));

    let (mut writer, captured) = open_output(output, config.with_buf)?;
    let mut unpacker = BitUnpacker::new(&tree);
    let totals = timer.time(Stage::Decode, || {
        decode_stream(&mut reader, &mut writer, &mut unpacker, config.buffer_size())
    })?;
    counters.add_decode(totals.bytes_in, totals.bytes_out, unpacker.bits_read());
    if unpacker.is_mid_code() {
        debug!("trailing padding bits dropped mid-code");
    }

    let snapshot = finish_snapshot(&counters, &mut timer, Some(tree_stats(&table)), captured);
    info!(bytes_in = snapshot.bytes_in, bytes_out = snapshot.bytes_out, "decompress finished");
    Ok(snapshot)
}

/// Count and build, then write only the 510-byte pairing order.
pub fn build_tree_file(input: InputSource, output: OutputSink, config: &SessionConfig) -> Result<TelemetrySnapshot, HuffError> {
    let source_path = input.path().map(Path::to_path_buf);
    let sink_path = output.path().map(Path::to_path_buf);
    run_build_tree_file(input, output, config).map_err(|e| e.with_paths(source_path.as_deref(), sink_path.as_deref()))
}

fn run_build_tree_file(input: InputSource, output: OutputSink, config: &SessionConfig) -> Result<TelemetrySnapshot, HuffError> {
    let mut timer = TelemetryTimer::new();
    let mut counters = TelemetryCounters::default();

    let reader = open_input(input)?;
    let freqs = timer.time(Stage::Count, || FrequencyTable::from_reader(reader, config.buffer_size()))?;
    if freqs.total() == 0 {
        warn!("empty source: tree file carries the all-zero-weight order");
    }
    counters.bytes_in += freqs.total();

    let (tree, order) = timer.time(Stage::Build, || HuffmanTree::from_frequencies(&freqs));
    let table = timer.time(Stage::Cipher, || CipherTable::from_tree(&tree));

    let (mut writer, captured) = open_output(output, config.with_buf)?;
    timer.time(Stage::Write, || -> Result<(), HuffError> {
        write_header(&mut writer, &order)?;
        writer.flush().map_err(|e| HuffError::sink_unavailable(None, e))
    })?;
    counters.add_header_out(HEADER_LEN);

    let snapshot = finish_snapshot(&counters, &mut timer, Some(tree_stats(&table)), captured);
    info!(bytes_in = snapshot.bytes_in, bytes_out = snapshot.bytes_out, "tree file written");
    Ok(snapshot)
}

/// Replay the tree stored in `tree` and use it to pack `input`.
///
/// The tree file's first 510 bytes become the header verbatim; anything
/// after them is ignored. The input is read once, no counting pass.
pub fn compress_with_tree(
    input: InputSource,
    tree: InputSource,
    output: OutputSink,
    config: &SessionConfig,
) -> Result<TelemetrySnapshot, HuffError> {
    let source_path = input.path().map(Path::to_path_buf);
    let sink_path = output.path().map(Path::to_path_buf);
    run_compress_with_tree(input, tree, output, config)
        .map_err(|e| e.with_paths(source_path.as_deref(), sink_path.as_deref()))
}

/// Read and replay the external tree. Errors name the tree file.
fn load_tree(tree: InputSource, timer: &mut TelemetryTimer) -> Result<(PairingOrder, HuffmanTree), HuffError> {
    let tree_path = tree.path().map(Path::to_path_buf);
    read_and_replay(tree, timer).map_err(|e| e.with_paths(tree_path.as_deref(), None))
}

fn read_and_replay(tree: InputSource, timer: &mut TelemetryTimer) -> Result<(PairingOrder, HuffmanTree), HuffError> {
    let order = timer.time(Stage::Read, || -> Result<_, HuffError> {
        let mut reader = open_input(tree)?;
        read_header(&mut reader)
    })?;
    let replayed = timer.time(Stage::Replay, || HuffmanTree::from_pairing_order(&order))?;
    Ok((order, replayed))
}

fn run_compress_with_tree(
    input: InputSource,
    tree: InputSource,
    output: OutputSink,
    config: &SessionConfig,
) -> Result<TelemetrySnapshot, HuffError> {
    let mut timer = TelemetryTimer::new();
    let mut counters = TelemetryCounters::default();

    let (order, replayed) = load_tree(tree, &mut timer)?;
    let table = timer.time(Stage::Cipher, || CipherTable::from_tree(&replayed));

    let mut reader = open_input(input)?;
    let (mut writer, captured) = open_output(output, config.with_buf)?;
    timer.time(Stage::Write, || write_header(&mut writer, &order))?;
    counters.add_header_out(HEADER_LEN);

    encode_body(&mut reader, &mut writer, &table, config, &mut timer, &mut counters)?;
    if counters.symbols == 0 {
        warn!("empty source: output is the header alone");
    }

    let snapshot = finish_snapshot(&counters, &mut timer, Some(tree_stats(&table)), captured);
    info!(
        bytes_in = snapshot.bytes_in,
        bytes_out = snapshot.bytes_out,
        ratio = snapshot.compression_ratio,
        "compress with external tree finished"
    );
    Ok(snapshot)
}
