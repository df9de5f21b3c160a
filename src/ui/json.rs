//! NDJSON output helpers (one JSON object per line on stdout).

use std::io::{self, Write};

/// Write a single NDJSON line.
pub fn write_line(out: &mut impl Write, line: &str) -> io::Result<()> {
    out.write_all(line.as_bytes())?;
    out.write_all(b"\n")?;
    out.flush()
}

/// Emit an already-serialized event to stdout.
pub fn emit_line(line: &str) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_line(&mut out, line)
}

/// Emit a raw JSON value to stdout.
pub fn emit(event: serde_json::Value) -> io::Result<()> {
    let line = serde_json::to_string(&event).unwrap_or_else(|_| "{}".to_string());
    emit_line(&line)
}
