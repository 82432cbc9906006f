//! Replay binary for `uartframe`.
//!
//! Reads captured frames, feeds them through a [`ReassemblySession`], and
//! prints each reassembled message as hex.

mod cli;
mod replay;

use std::{
    error::Error,
    fs::File,
    io::{self, BufRead, BufReader},
};

use clap::Parser;
use uartframe::{ReassembledMessage, ReassemblyConfig, ReassemblySession, chunk::to_hex};

use crate::replay::replay;

fn main() -> Result<(), Box<dyn Error>> {
    // Applications embedding the library should install their own subscriber.
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let cli = cli::Cli::parse();
    let config = ReassemblyConfig::new(cli.max_chunk_size).ok_or_else(|| {
        format!(
            "--max-chunk-size must be at least {}",
            uartframe::HEADER_LEN
        )
    })?;

    let reader: Box<dyn BufRead> = match &cli.input {
        Some(path) => Box::new(BufReader::new(File::open(path)?)),
        None => Box::new(io::stdin().lock()),
    };

    let session = ReassemblySession::with_config(config, |message: ReassembledMessage| {
        println!("{}", to_hex(message.payload()));
    });

    replay(reader, &session)?;

    let pending = session.pending_chunks();
    if pending > 0 {
        tracing::info!(pending, "input ended with an incomplete message");
    }
    Ok(())
}
