//! `.lang` file reading and parsing

use std::collections::HashSet;
use std::io::{BufRead, Cursor};
use std::path::Path;

use byteorder::{BigEndian, ReadBytesExt};

use super::{EntryKey, HEADER_SIZE, LangEntry, LangFile, RECORD_SIZE};
use crate::error::{Error, Result};

/// Read a .lang file from disk
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be opened or read, or any of the
/// content errors of [`parse_lang_bytes`].
///
/// [`Error::Io`]: crate::Error::Io
pub fn read_lang<P: AsRef<Path>>(path: P) -> Result<LangFile> {
    let path = path.as_ref();
    let data = std::fs::read(path)?;
    tracing::debug!("Read {} bytes from {}", data.len(), path.display());
    parse_lang_bytes(&data)
}

/// Parse .lang data from bytes
///
/// Either the whole container is returned or an error; there is no partial
/// result.
///
/// # Errors
///
/// - [`Error::TruncatedHeader`] if the data is shorter than 8 bytes.
/// - [`Error::TruncatedIndexRecord`] if the index table is cut off.
/// - [`Error::StringOffsetOutOfBounds`] if a record points past the end.
/// - [`Error::UnterminatedString`] if a string has no 0x00 terminator.
///
/// [`Error::TruncatedHeader`]: crate::Error::TruncatedHeader
/// [`Error::TruncatedIndexRecord`]: crate::Error::TruncatedIndexRecord
/// [`Error::StringOffsetOutOfBounds`]: crate::Error::StringOffsetOutOfBounds
/// [`Error::UnterminatedString`]: crate::Error::UnterminatedString
pub fn parse_lang_bytes(data: &[u8]) -> Result<LangFile> {
    if (data.len() as u64) < HEADER_SIZE {
        return Err(Error::TruncatedHeader { len: data.len() });
    }

    let mut cursor = Cursor::new(data);

    // Read header (8 bytes)
    let num_sections = cursor.read_u32::<BigEndian>()?;
    let num_indexes = cursor.read_u32::<BigEndian>()?;
    let string_table_start = HEADER_SIZE + RECORD_SIZE * u64::from(num_indexes);

    tracing::debug!(
        "Lang header: {} sections, {} indexes, strings at {:#x}",
        num_sections,
        num_indexes,
        string_table_start
    );

    // The whole index table must be present before any string is resolved
    let max_records = (data.len() as u64 - HEADER_SIZE) / RECORD_SIZE;
    if max_records < u64::from(num_indexes) {
        return Err(Error::TruncatedIndexRecord {
            index: max_records as u32,
        });
    }
    let capacity = num_indexes as usize;
    let mut entries = Vec::with_capacity(capacity);
    let mut seen = HashSet::with_capacity(capacity);

    for index in 0..num_indexes {
        let (key, string_offset) =
            read_record(&mut cursor).map_err(|_| Error::TruncatedIndexRecord { index })?;

        let text = read_null_string(&mut cursor, string_table_start, string_offset, index)?;

        if !seen.insert(key) {
            tracing::warn!("Duplicate entry key {} at record {}", key, index);
        }
        entries.push(LangEntry { key, text });
    }

    Ok(LangFile {
        num_sections,
        entries,
    })
}

/// Read one 16-byte index record at the cursor
fn read_record(cursor: &mut Cursor<&[u8]>) -> std::io::Result<(EntryKey, u32)> {
    let section_id = cursor.read_u32::<BigEndian>()?;
    let section_index = cursor.read_u32::<BigEndian>()?;
    let string_index = cursor.read_u32::<BigEndian>()?;
    let string_offset = cursor.read_u32::<BigEndian>()?;
    Ok((
        EntryKey::new(section_id, section_index, string_index),
        string_offset,
    ))
}

/// Read a null-terminated string from the string table
///
/// Jumps to `start + offset`, reads up to the first 0x00 byte and puts the
/// cursor back where it was, so the caller's sequential walk over the index
/// table is undisturbed.
fn read_null_string(
    cursor: &mut Cursor<&[u8]>,
    start: u64,
    offset: u32,
    index: u32,
) -> Result<Vec<u8>> {
    let len = cursor.get_ref().len();
    let target = start + u64::from(offset);
    if target >= len as u64 {
        return Err(Error::StringOffsetOutOfBounds { index, offset, len });
    }

    let current_position = cursor.position();
    cursor.set_position(target);
    let mut text = Vec::new();
    let read = cursor.read_until(0, &mut text);
    cursor.set_position(current_position);
    read?;

    if text.pop() != Some(0) {
        return Err(Error::UnterminatedString { index, offset });
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Hand-built file with a shared offset and an out-of-order table
    fn sample_bytes() -> Vec<u8> {
        let mut data = Vec::new();
        data.extend_from_slice(&7u32.to_be_bytes()); // numSections
        data.extend_from_slice(&3u32.to_be_bytes()); // numIndexes
        for (a, b, c, offset) in [(1u32, 0u32, 10u32, 4u32), (1, 0, 11, 0), (2, 1, 5, 4)] {
            for v in [a, b, c, offset] {
                data.extend_from_slice(&v.to_be_bytes());
            }
        }
        data.extend_from_slice(b"Bye\0Hello\0");
        data
    }

    #[test]
    fn test_parse_shared_and_reordered_offsets() {
        let lang = parse_lang_bytes(&sample_bytes()).unwrap();
        assert_eq!(lang.num_sections, 7);
        assert_eq!(
            lang.entries,
            vec![
                LangEntry::new(EntryKey::new(1, 0, 10), b"Hello".to_vec()),
                LangEntry::new(EntryKey::new(1, 0, 11), b"Bye".to_vec()),
                LangEntry::new(EntryKey::new(2, 1, 5), b"Hello".to_vec()),
            ]
        );
    }

    #[test]
    fn test_parse_empty_container() {
        let data = [0, 0, 0, 1, 0, 0, 0, 0];
        let lang = parse_lang_bytes(&data).unwrap();
        assert_eq!(lang.num_sections, 1);
        assert!(lang.is_empty());
    }

    #[test]
    fn test_truncated_header() {
        assert!(matches!(
            parse_lang_bytes(&[0, 0, 0, 1, 0]),
            Err(Error::TruncatedHeader { len: 5 })
        ));
    }

    #[test]
    fn test_truncated_record() {
        let data = sample_bytes();
        // Header + one full record + half of the second
        assert!(matches!(
            parse_lang_bytes(&data[..8 + 16 + 8]),
            Err(Error::TruncatedIndexRecord { index: 1 })
        ));
    }

    #[test]
    fn test_offset_out_of_bounds() {
        let mut data = sample_bytes();
        // Point the first record far past the end
        data[8 + 12..8 + 16].copy_from_slice(&1000u32.to_be_bytes());
        assert!(matches!(
            parse_lang_bytes(&data),
            Err(Error::StringOffsetOutOfBounds { index: 0, offset: 1000, .. })
        ));
    }

    #[test]
    fn test_unterminated_string() {
        let mut data = sample_bytes();
        data.pop(); // drop final terminator of "Hello"
        assert!(matches!(
            parse_lang_bytes(&data),
            Err(Error::UnterminatedString { index: 0, offset: 4 })
        ));
    }

    #[test]
    fn test_text_bytes_are_not_decoded() {
        let mut data = Vec::new();
        data.extend_from_slice(&0u32.to_be_bytes());
        data.extend_from_slice(&1u32.to_be_bytes());
        for v in [3u32, 0, 1, 0] {
            data.extend_from_slice(&v.to_be_bytes());
        }
        data.extend_from_slice(b"a\xC2\xA0b\\n\xFF\n\0");

        let lang = parse_lang_bytes(&data).unwrap();
        assert_eq!(lang.entries[0].text, b"a\xC2\xA0b\\n\xFF\n".to_vec());
    }
}
