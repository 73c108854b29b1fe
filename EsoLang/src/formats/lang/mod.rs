//! .lang localization container format
//!
//! Binary format for ESO client localization strings. Can be converted
//! to/from tagged text.
//!
//! Layout (all integers big-endian u32):
//!
//! ```text
//! numSections | numIndexes
//! numIndexes x (sectionId, sectionIndex, stringIndex, stringOffset)
//! string table: null-terminated strings, offsets relative to its start
//! ```
//!
//! There is no magic number or version tag.

mod editor;
mod reader;
mod string_table;
mod writer;

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

pub use editor::SubsetMergeResult;
pub use reader::{parse_lang_bytes, read_lang};
pub use string_table::StringTable;
pub use writer::{encode_lang, write_lang};

/// Size of the header (numSections + numIndexes)
pub const HEADER_SIZE: u64 = 8;

/// Size of each record in the index table (4 x u32)
pub const RECORD_SIZE: u64 = 16;

/// Composite identifier of a lang entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryKey {
    pub section_id: u32,
    pub section_index: u32,
    pub string_index: u32,
}

impl EntryKey {
    #[must_use]
    pub const fn new(section_id: u32, section_index: u32, string_index: u32) -> Self {
        Self {
            section_id,
            section_index,
            string_index,
        }
    }
}

impl fmt::Display for EntryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}-{}",
            self.section_id, self.section_index, self.string_index
        )
    }
}

impl FromStr for EntryKey {
    type Err = Error;

    /// Parse `sectionId-sectionIndex-stringIndex` (decimal)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_part = |part: &str| -> Option<u32> {
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            part.parse().ok()
        };

        let parts: Vec<&str> = s.split('-').collect();
        match parts.as_slice() {
            [a, b, c] => match (parse_part(a), parse_part(b), parse_part(c)) {
                (Some(section_id), Some(section_index), Some(string_index)) => {
                    Ok(Self::new(section_id, section_index, string_index))
                }
                _ => Err(Error::InvalidEntryKey(s.to_string())),
            },
            _ => Err(Error::InvalidEntryKey(s.to_string())),
        }
    }
}

/// A single localized string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LangEntry {
    pub key: EntryKey,
    /// Raw text bytes (no terminator). Usually UTF-8 but never assumed to be.
    pub text: Vec<u8>,
}

impl LangEntry {
    pub fn new(key: EntryKey, text: impl Into<Vec<u8>>) -> Self {
        Self {
            key,
            text: text.into(),
        }
    }
}

/// A decoded .lang file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LangFile {
    /// Opaque header field, carried through unchanged
    pub num_sections: u32,
    /// Entries in index-table order
    pub entries: Vec<LangEntry>,
}

impl LangFile {
    #[must_use]
    pub fn new(num_sections: u32) -> Self {
        Self {
            num_sections,
            entries: Vec::new(),
        }
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_key_display_and_parse() {
        let key = EntryKey::new(18173141, 0, 2944);
        assert_eq!(key.to_string(), "18173141-0-2944");
        assert_eq!("18173141-0-2944".parse::<EntryKey>().unwrap(), key);
    }

    #[test]
    fn test_entry_key_rejects_malformed() {
        for bad in [
            "",
            "1-2",
            "1-2-3-4",
            "a-b-c",
            "1--3",
            "-1-2-3",
            "1-2-+3",
            "4294967296-0-0",
            "SI_OK",
        ] {
            assert!(bad.parse::<EntryKey>().is_err(), "accepted {bad:?}");
        }
    }
}
