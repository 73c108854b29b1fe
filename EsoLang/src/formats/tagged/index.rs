//! Adding and removing key tags on plain text files
//!
//! Translators sometimes work on bare text, one entry per line, with the keys
//! kept in a separate identifier file of the same length.

use regex::bytes::Regex;

use super::reader::split_line;
use crate::error::{Error, Result};

lazy_static::lazy_static! {
    /// Pre-tag export style: `18173141-0-2944 text`
    static ref OLD_STYLE_LINE: Regex =
        Regex::new(r"(?-u)^(\d{1,10}-\d{1,7}-\d{1,7}) (.+)$").expect("old style pattern is valid");
}

/// Pair plain text lines with identifier lines
///
/// Text lines lose trailing whitespace and identifier lines lose surrounding
/// whitespace. The result holds one `{{id:}}text` line per pair. Text is taken
/// as it stands; it is expected to be a one-line export already.
///
/// # Errors
/// Returns [`Error::LineCountMismatch`] if the inputs differ in line count.
///
/// [`Error::LineCountMismatch`]: crate::Error::LineCountMismatch
pub fn add_index(text: &[u8], ids: &[u8]) -> Result<Vec<u8>> {
    let text_lines = lines(text);
    let id_lines = lines(ids);
    if text_lines.len() != id_lines.len() {
        return Err(Error::LineCountMismatch {
            text: text_lines.len(),
            ids: id_lines.len(),
        });
    }

    let mut out = Vec::with_capacity(text.len() + ids.len() + text_lines.len() * 6);
    for (line, id) in text_lines.iter().zip(&id_lines) {
        out.extend_from_slice(b"{{");
        out.extend_from_slice(id.trim_ascii());
        out.extend_from_slice(b":}}");
        out.extend_from_slice(line.trim_ascii_end());
        out.push(b'\n');
    }
    Ok(out)
}

/// Drop the key tags, keeping the text of each tagged line
///
/// Both `{{key:}}text` lines and old-style `key text` lines are recognized;
/// other lines are dropped. Texts are returned as written, placeholders
/// included.
#[must_use]
pub fn strip_index(data: &[u8]) -> Vec<Vec<u8>> {
    let mut texts = Vec::new();
    for line in lines(data) {
        if let Some((_, text)) = split_line(line) {
            texts.push(text.to_vec());
        } else if let Some(caps) =
            OLD_STYLE_LINE.captures(line.strip_suffix(b"\r").unwrap_or(line))
        {
            let text = caps.get(2).map_or(&[][..], |m| m.as_bytes());
            texts.push(text.trim_ascii_start().to_vec());
        }
    }
    texts
}

/// Split into lines; a final line feed does not start another line
fn lines(data: &[u8]) -> Vec<&[u8]> {
    let data = data.strip_suffix(b"\n").unwrap_or(data);
    if data.is_empty() {
        return Vec::new();
    }
    data.split(|&b| b == b'\n').collect()
}
