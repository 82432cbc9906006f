//! Command line interface for the `uartframe` replay binary.
//!
//! Feeds captured notification frames through a reassembly session and
//! supports man page generation from the same definition.

use std::path::PathBuf;

use clap::Parser;

/// Command line arguments for the `uartframe` binary.
#[derive(Debug, Parser)]
#[command(
    name = "uartframe",
    version,
    about = "Replay captured UART-over-GATT frames and print reassembled messages"
)]
pub struct Cli {
    /// File holding one hex-encoded frame per line; reads stdin when absent.
    pub input: Option<PathBuf>,

    /// Maximum bytes per transport frame, header included.
    #[arg(short, long, default_value_t = 20)]
    pub max_chunk_size: usize,
}
