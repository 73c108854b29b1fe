//! `.lang` file writing

use std::path::Path;

use byteorder::{BigEndian, WriteBytesExt};

use super::{HEADER_SIZE, LangFile, RECORD_SIZE, StringTable};
use crate::error::{Error, Result};
use crate::utils::write_atomic;

/// Write a .lang file to disk
///
/// The file is encoded in memory first and then written atomically, so an
/// error never leaves a partially written container behind.
///
/// # Errors
/// Returns an error if encoding or file writing fails.
pub fn write_lang<P: AsRef<Path>>(path: P, lang: &LangFile) -> Result<()> {
    let data = encode_lang(lang)?;
    write_atomic(path, &data)
}

/// Encode a lang file to bytes
///
/// Texts are interned in entry order, so byte-identical texts share one
/// offset and the output is reproducible for a given entry order.
///
/// # Errors
/// - [`Error::EmbeddedNul`] if a text contains a 0x00 byte.
/// - [`Error::TooManyEntries`] / [`Error::StringTableTooLarge`] if the
///   container does not fit the u32 fields.
///
/// [`Error::EmbeddedNul`]: crate::Error::EmbeddedNul
/// [`Error::TooManyEntries`]: crate::Error::TooManyEntries
/// [`Error::StringTableTooLarge`]: crate::Error::StringTableTooLarge
pub fn encode_lang(lang: &LangFile) -> Result<Vec<u8>> {
    let num_indexes = u32::try_from(lang.entries.len()).map_err(|_| Error::TooManyEntries {
        count: lang.entries.len(),
    })?;

    // Assign offsets in a single pass over the stored order
    let mut table = StringTable::new();
    let mut offsets = Vec::with_capacity(lang.entries.len());
    for entry in &lang.entries {
        if entry.text.contains(&0) {
            return Err(Error::EmbeddedNul {
                key: entry.key.to_string(),
            });
        }
        offsets.push(table.intern(&entry.text)?);
    }

    let total = HEADER_SIZE + RECORD_SIZE * u64::from(num_indexes) + table.byte_len();
    let mut out = Vec::with_capacity(total as usize);

    // Write header
    out.write_u32::<BigEndian>(lang.num_sections)?;
    out.write_u32::<BigEndian>(num_indexes)?;

    // Write index table
    for (entry, offset) in lang.entries.iter().zip(&offsets) {
        out.write_u32::<BigEndian>(entry.key.section_id)?;
        out.write_u32::<BigEndian>(entry.key.section_index)?;
        out.write_u32::<BigEndian>(entry.key.string_index)?;
        out.write_u32::<BigEndian>(*offset)?;
    }

    // Write string table
    table.write_to(&mut out)?;

    tracing::debug!(
        "Encoded {} entries, {} unique strings, {} bytes",
        num_indexes,
        table.len(),
        out.len()
    );

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formats::lang::{EntryKey, LangEntry, parse_lang_bytes};
    use pretty_assertions::assert_eq;
    use quickcheck_macros::quickcheck;

    fn entry(a: u32, b: u32, c: u32, text: &[u8]) -> LangEntry {
        LangEntry::new(EntryKey::new(a, b, c), text.to_vec())
    }

    #[test]
    fn test_encode_layout() {
        let mut lang = LangFile::new(2);
        lang.entries.push(entry(1, 0, 1, b"Hi"));
        lang.entries.push(entry(1, 0, 2, b""));

        let bytes = encode_lang(&lang).unwrap();

        let mut expected = Vec::new();
        for v in [2u32, 2, 1, 0, 1, 0, 1, 0, 2, 3] {
            expected.extend_from_slice(&v.to_be_bytes());
        }
        expected.extend_from_slice(b"Hi\0\0");
        assert_eq!(bytes, expected);
    }

    #[test]
    fn test_duplicate_text_stored_once() {
        let mut lang = LangFile::new(1);
        lang.entries.push(entry(1, 0, 1, b"Sword"));
        lang.entries.push(entry(1, 0, 2, b"Shield"));
        lang.entries.push(entry(9, 3, 7, b"Sword"));

        let bytes = encode_lang(&lang).unwrap();
        let offset_at = |record: usize| {
            let pos = 8 + record * 16 + 12;
            u32::from_be_bytes(bytes[pos..pos + 4].try_into().unwrap())
        };

        assert_eq!(offset_at(0), 0);
        assert_eq!(offset_at(1), 6);
        assert_eq!(offset_at(2), 0);
        assert_eq!(&bytes[8 + 48..], b"Sword\0Shield\0");
    }

    #[test]
    fn test_reencode_normalizes_to_dedup_form() {
        // Two copies of the same text at different offsets
        let mut data = Vec::new();
        for v in [0u32, 2, 1, 1, 1, 0, 1, 1, 2, 4] {
            data.extend_from_slice(&v.to_be_bytes());
        }
        data.extend_from_slice(b"abc\0abc\0");

        let lang = parse_lang_bytes(&data).unwrap();
        let bytes = encode_lang(&lang).unwrap();

        assert_eq!(&bytes[8 + 32..], b"abc\0");
        assert_eq!(parse_lang_bytes(&bytes).unwrap(), lang);
    }

    #[test]
    fn test_embedded_nul_rejected() {
        let mut lang = LangFile::new(0);
        lang.entries.push(entry(4, 5, 6, b"bad\0text"));
        assert!(matches!(
            encode_lang(&lang),
            Err(Error::EmbeddedNul { key }) if key == "4-5-6"
        ));
    }

    #[quickcheck]
    fn decode_encode_preserves_entries(
        num_sections: u32,
        raw: Vec<(u32, u32, u32, Vec<u8>)>,
    ) -> bool {
        let entries = raw
            .into_iter()
            .map(|(a, b, c, mut text)| {
                text.retain(|&byte| byte != 0);
                entry(a, b, c, &text)
            })
            .collect();
        let lang = LangFile {
            num_sections,
            entries,
        };

        let decoded = parse_lang_bytes(&encode_lang(&lang).unwrap()).unwrap();
        decoded == lang
    }
}
