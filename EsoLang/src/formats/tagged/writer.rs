//! Tagged text writing

use std::io::{BufWriter, Write};
use std::path::Path;

use super::{TaggedKey, TaggedMap, escape_text};
use crate::error::Result;
use crate::utils::write_atomic;

/// Format a single tagged line, without the trailing line feed
#[must_use]
pub fn format_line(key: &TaggedKey, text: &[u8]) -> Vec<u8> {
    let escaped = escape_text(text);
    let key = key.to_string();
    let mut line = Vec::with_capacity(key.len() + escaped.len() + 5);
    line.extend_from_slice(b"{{");
    line.extend_from_slice(key.as_bytes());
    line.extend_from_slice(b":}}");
    line.extend_from_slice(&escaped);
    line
}

/// Write every entry as one LF-terminated line, in map order
///
/// # Errors
/// Returns an error if writing fails.
pub fn write_tagged<W: Write>(writer: W, map: &TaggedMap) -> Result<()> {
    let mut writer = BufWriter::new(writer);
    for (key, text) in map {
        writer.write_all(&format_line(key, text))?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(())
}

/// Render a map to bytes
#[must_use]
pub fn tagged_to_bytes(map: &TaggedMap) -> Vec<u8> {
    let mut out = Vec::new();
    for (key, text) in map {
        out.extend_from_slice(&format_line(key, text));
        out.push(b'\n');
    }
    out
}

/// Write a tagged text file atomically
///
/// # Errors
/// Returns an error if the file cannot be written.
pub fn write_tagged_file<P: AsRef<Path>>(path: P, map: &TaggedMap) -> Result<()> {
    let path = path.as_ref();
    write_atomic(path, &tagged_to_bytes(map))?;
    tracing::debug!("Wrote {} tagged entries to {}", map.len(), path.display());
    Ok(())
}
