//! Tagged text interchange format
//!
//! One entry per line:
//!
//! ```text
//! {{18173141-0-2944:}}Hello, world!
//! {{SI_GAME_MENU_OPTIONS:}}Options
//! ```
//!
//! The key is either a numeric lang key (`sectionId-sectionIndex-stringIndex`)
//! or an opaque symbolic identifier. Lines that don't follow the grammar are
//! ignored when reading, so files may carry headers and comments.
//!
//! Text is handled as raw bytes throughout. Line feeds and carriage returns
//! inside a text are written as placeholder tokens (see [`escape_text`]);
//! everything else, including the non-breaking space `C2 A0` and literal
//! `\n` / `\"` / `\\` escape sequences, is written verbatim.

mod escape;
mod index;
mod reader;
mod writer;

use std::fmt;

use indexmap::IndexMap;

use crate::formats::lang::EntryKey;

pub use escape::{CR_TOKEN, LF_TOKEN, NBSP, NBSP_TOKEN, escape_text, unescape_text};
pub use index::{add_index, strip_index};
pub use reader::{parse_line, parse_tagged_bytes, read_tagged};
pub use writer::{format_line, tagged_to_bytes, write_tagged, write_tagged_file};

/// Ordered collection of tagged texts, keyed by entry
///
/// Insertion ordered; inserting an existing key replaces its text but keeps
/// its original position.
pub type TaggedMap = IndexMap<TaggedKey, Vec<u8>>;

/// Key of a tagged line
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TaggedKey {
    /// Numeric lang key
    Index(EntryKey),
    /// Symbolic identifier (client string constants)
    Symbol(String),
}

impl TaggedKey {
    /// Classify a raw key: numeric if it parses as an [`EntryKey`]
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        raw.parse::<EntryKey>()
            .map_or_else(|_| Self::Symbol(raw.to_string()), Self::Index)
    }

    /// The numeric key, if this is one
    #[must_use]
    pub fn as_index(&self) -> Option<&EntryKey> {
        match self {
            Self::Index(key) => Some(key),
            Self::Symbol(_) => None,
        }
    }
}

impl From<EntryKey> for TaggedKey {
    fn from(key: EntryKey) -> Self {
        Self::Index(key)
    }
}

impl fmt::Display for TaggedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(key) => write!(f, "{key}"),
            Self::Symbol(name) => f.write_str(name),
        }
    }
}

/// A single parsed tagged line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedLine {
    pub key: TaggedKey,
    /// Unescaped text bytes
    pub text: Vec<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_classification() {
        assert_eq!(
            TaggedKey::parse("3427285-5-36"),
            TaggedKey::Index(EntryKey::new(3427285, 5, 36))
        );
        assert_eq!(
            TaggedKey::parse("SI_ABANDON_QUEST"),
            TaggedKey::Symbol("SI_ABANDON_QUEST".to_string())
        );
        // Not three decimal parts: stays symbolic
        assert_eq!(
            TaggedKey::parse("1-2-3-4"),
            TaggedKey::Symbol("1-2-3-4".to_string())
        );
    }

    #[test]
    fn test_key_display_round_trips() {
        for raw in ["8290981-0-123", "SI_OK"] {
            assert_eq!(TaggedKey::parse(raw).to_string(), raw);
        }
    }
}
