//! huff-cli
//!
//! Command-line surface over huff-core: argument parsing, output-name
//! inference, logging setup and the one-line report.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use huff_core::codec::Padding;
use huff_core::constants::{extensions, MAX_BUFFER_SIZE};
use huff_core::session::{self, InputSource, OutputSink, SessionConfig};
use huff_core::telemetry::TelemetrySnapshot;

/// Environment variable holding the log filter (e.g. `HUFF_LOG=huff_core=debug`).
pub const LOG_ENV: &str = "HUFF_LOG";

/// Byte-oriented Huffman compressor.
#[derive(Parser, Debug)]
#[command(name = "huff")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Log stage details to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print the telemetry snapshot as JSON instead of the summary line
    #[arg(long, global = true)]
    pub json: bool,

    /// Always pad the last byte with zero bits (legacy output)
    #[arg(long, global = true)]
    pub legacy_padding: bool,

    /// Bytes requested per read
    #[arg(
        long,
        global = true,
        value_parser = clap::value_parser!(u64).range(1..=MAX_BUFFER_SIZE as u64)
    )]
    pub buffer_size: Option<u64>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compress INPUT (OUTPUT defaults to INPUT with a .huf extension)
    Encode {
        #[arg(value_name = "INPUT")]
        input: PathBuf,
        #[arg(value_name = "OUTPUT")]
        output: Option<PathBuf>,
    },
    /// Decompress INPUT into OUTPUT
    Decode {
        #[arg(value_name = "INPUT")]
        input: PathBuf,
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,
    },
    /// Write the 510-byte tree file for INPUT (default extension .htree)
    Tree {
        #[arg(value_name = "INPUT")]
        input: PathBuf,
        #[arg(value_name = "OUTPUT")]
        output: Option<PathBuf>,
    },
    /// Compress INPUT with the tree stored in TREE
    EncodeWithTree {
        #[arg(value_name = "INPUT")]
        input: PathBuf,
        #[arg(value_name = "TREE")]
        tree: PathBuf,
        #[arg(value_name = "OUTPUT")]
        output: Option<PathBuf>,
    },
}

impl Cli {
    pub fn session_config(&self) -> SessionConfig {
        let padding = if self.legacy_padding { Padding::Zeros } else { Padding::Guarded };
        SessionConfig::new(self.buffer_size.map(|n| n as usize), Some(padding), Some(false))
    }
}

/// Output path for a command that may omit it.
///
/// - no OUTPUT: INPUT with its extension replaced by `ext`
/// - OUTPUT without an extension: `ext` appended
/// - otherwise OUTPUT as given
pub fn infer_output(input: &Path, output: Option<&Path>, ext: &str) -> PathBuf {
    match output {
        None => input.with_extension(ext),
        Some(p) if p.extension().is_none() => p.with_extension(ext),
        Some(p) => p.to_path_buf(),
    }
}

/// Install the stderr subscriber. `HUFF_LOG` wins over `-v`.
pub fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));
    // Ignored when a global subscriber is already set.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Execute one parsed command line.
pub fn run(cli: &Cli) -> Result<TelemetrySnapshot> {
    let config = cli.session_config();
    debug!(?config, "session config");
    match &cli.command {
        Command::Encode { input, output } => {
            let out = infer_output(input, output.as_deref(), extensions::COMPRESSED);
            session::compress(InputSource::File(input.clone()), OutputSink::File(out.clone()), &config)
                .with_context(|| format!("encoding {} into {}", input.display(), out.display()))
        }
        Command::Decode { input, output } => {
            session::decompress(InputSource::File(input.clone()), OutputSink::File(output.clone()), &config)
                .with_context(|| format!("decoding {} into {}", input.display(), output.display()))
        }
        Command::Tree { input, output } => {
            let out = infer_output(input, output.as_deref(), extensions::TREE);
            session::build_tree_file(InputSource::File(input.clone()), OutputSink::File(out.clone()), &config)
                .with_context(|| format!("building tree file {} from {}", out.display(), input.display()))
        }
        Command::EncodeWithTree { input, tree, output } => {
            let out = infer_output(input, output.as_deref(), extensions::COMPRESSED);
            session::compress_with_tree(
                InputSource::File(input.clone()),
                InputSource::File(tree.clone()),
                OutputSink::File(out.clone()),
                &config,
            )
            .with_context(|| {
                format!("encoding {} with tree {} into {}", input.display(), tree.display(), out.display())
            })
        }
    }
}

/// The line printed after a successful run.
pub fn report(snapshot: &TelemetrySnapshot, json: bool) -> Result<String> {
    if json {
        snapshot.to_json().context("serializing telemetry")
    } else {
        Ok(snapshot.summary_line())
    }
}
