//! Tagged text reading

use std::path::Path;

use regex::bytes::Regex;

use super::{TaggedKey, TaggedLine, TaggedMap, unescape_text};
use crate::error::Result;

lazy_static::lazy_static! {
    /// `{{key:}}text`, over raw bytes
    static ref TAGGED_LINE: Regex =
        Regex::new(r"(?-u)^\{\{([^:]+):\}\}(.*)$").expect("tagged line pattern is valid");
}

/// Read a tagged text file from disk
///
/// # Errors
/// Returns an error if the file cannot be read.
pub fn read_tagged<P: AsRef<Path>>(path: P) -> Result<TaggedMap> {
    let path = path.as_ref();
    let data = std::fs::read(path)?;
    let map = parse_tagged_bytes(&data);
    tracing::debug!("Read {} tagged entries from {}", map.len(), path.display());
    Ok(map)
}

/// Parse tagged text held in memory
///
/// Lines that don't match the grammar are skipped. A key seen twice keeps
/// its first position and takes the later text.
#[must_use]
pub fn parse_tagged_bytes(data: &[u8]) -> TaggedMap {
    let mut map = TaggedMap::new();
    for (number, raw) in data.split(|&b| b == b'\n').enumerate() {
        match parse_line(raw) {
            Some(line) => {
                map.insert(line.key, line.text);
            }
            None if !raw.is_empty() => {
                tracing::trace!("Skipping untagged line {}", number + 1);
            }
            None => {}
        }
    }
    map
}

/// Parse one line (without its line feed)
///
/// A trailing carriage return from CRLF files is ignored.
#[must_use]
pub fn parse_line(line: &[u8]) -> Option<TaggedLine> {
    let (raw_key, text) = split_line(line)?;
    let raw_key = std::str::from_utf8(raw_key).ok()?;

    Some(TaggedLine {
        key: TaggedKey::parse(raw_key),
        text: unescape_text(text),
    })
}

/// Split a tagged line into its raw key and still-escaped text
pub(super) fn split_line(line: &[u8]) -> Option<(&[u8], &[u8])> {
    let line = line.strip_suffix(b"\r").unwrap_or(line);
    let caps = TAGGED_LINE.captures(line)?;
    let key = caps.get(1)?.as_bytes();
    let text = caps.get(2).map_or(&[][..], |m| m.as_bytes());
    Some((key, text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formats::lang::EntryKey;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_numeric_line() {
        let line = parse_line(b"{{18173141-0-2944:}}Hello, world!").unwrap();
        assert_eq!(line.key, TaggedKey::Index(EntryKey::new(18173141, 0, 2944)));
        assert_eq!(line.text, b"Hello, world!".to_vec());
    }

    #[test]
    fn test_parse_symbolic_line() {
        let line = parse_line(b"{{SI_GAMEPAD_BACK:}}Back\r").unwrap();
        assert_eq!(line.key, TaggedKey::Symbol("SI_GAMEPAD_BACK".to_string()));
        assert_eq!(line.text, b"Back".to_vec());
    }

    #[test]
    fn test_parse_empty_text_and_nested_braces() {
        let line = parse_line(b"{{1-2-3:}}").unwrap();
        assert!(line.text.is_empty());

        let line = parse_line(b"{{1-2-3:}}{{not a key:}} |cFFFFFFx|r").unwrap();
        assert_eq!(line.text, b"{{not a key:}} |cFFFFFFx|r".to_vec());
    }

    #[test]
    fn test_non_matching_lines_ignored() {
        for raw in [
            &b"# header"[..],
            b"",
            b"18173141-0-2944 old style",
            b"{{1-0-1:pts:}}review line",
            b"{{:}}no key",
            b"[SI_OK] = \"OK\"",
        ] {
            assert!(parse_line(raw).is_none(), "parsed {:?}", String::from_utf8_lossy(raw));
        }
    }

    #[test]
    fn test_parse_bytes_keeps_order_and_last_text() {
        let data = b"Header line\n{{1-0-2:}}B\n{{1-0-1:}}A\n{{1-0-2:}}B2\n";
        let map = parse_tagged_bytes(data);
        let keys: Vec<String> = map.keys().map(ToString::to_string).collect();
        assert_eq!(keys, vec!["1-0-2", "1-0-1"]);
        assert_eq!(map[&TaggedKey::parse("1-0-2")], b"B2".to_vec());
    }

    #[test]
    fn test_parse_restores_line_breaks_and_raw_bytes() {
        let map = parse_tagged_bytes(b"{{5-0-1:}}Line-=LF=-Next \xFF\xFE\n");
        assert_eq!(
            map[&TaggedKey::parse("5-0-1")],
            b"Line\nNext \xFF\xFE".to_vec()
        );
    }
}
