//! Line-oriented capture format consumed by the replay binary.
//!
//! Each line is one frame written as whitespace-separated hex bytes. The
//! keyword `abandon` discards the partial message, and blank lines or lines
//! starting with `#` are skipped.

use std::{
    io::{self, BufRead},
    num::ParseIntError,
};

use uartframe::{MessageListener, ReassemblySession};

/// A single parsed capture line.
#[derive(Debug, PartialEq, Eq)]
pub enum ReplayLine {
    /// A frame to feed into the session.
    Frame(Vec<u8>),
    /// Discard any partial message.
    Abandon,
    /// Nothing to do.
    Skip,
}

/// Parse one capture line.
pub fn parse_line(line: &str) -> Result<ReplayLine, ParseIntError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(ReplayLine::Skip);
    }
    if line.eq_ignore_ascii_case("abandon") {
        return Ok(ReplayLine::Abandon);
    }
    line.split_whitespace()
        .map(|token| {
            let digits = token
                .strip_prefix("0x")
                .or_else(|| token.strip_prefix("0X"))
                .unwrap_or(token);
            u8::from_str_radix(digits, 16)
        })
        .collect::<Result<Vec<_>, _>>()
        .map(ReplayLine::Frame)
}

/// Feed every line of `reader` through `session`.
///
/// Lines that are not valid UTF-8 or fail to parse are logged and skipped.
/// Only a failing read ends the replay early.
pub fn replay<L: MessageListener>(
    reader: impl BufRead,
    session: &ReassemblySession<L>,
) -> io::Result<()> {
    for (number, bytes) in reader.split(b'\n').enumerate() {
        let line = number + 1;
        let text = match String::from_utf8(bytes?) {
            Ok(text) => text,
            Err(err) => {
                tracing::warn!(line, %err, "skipping line that is not valid UTF-8");
                continue;
            }
        };
        match parse_line(&text) {
            Ok(ReplayLine::Frame(frame)) => session.chunk_received(frame),
            Ok(ReplayLine::Abandon) => session.abandon(),
            Ok(ReplayLine::Skip) => {}
            Err(err) => tracing::warn!(line, %err, "skipping unparsable line"),
        }
    }
    Ok(())
}
