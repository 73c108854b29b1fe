//! Error types for `EsoLang`

use thiserror::Error;

/// The error type for `EsoLang` operations.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    // ==================== IO Errors ====================
    /// IO error from file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A finished temporary file could not be moved over the destination.
    #[error("failed to persist output file: {0}")]
    Persist(#[from] tempfile::PersistError),

    // ==================== Lang Container Errors ====================
    /// The file is shorter than the 8-byte header.
    #[error("truncated lang header: {len} bytes, need 8")]
    TruncatedHeader {
        /// Number of bytes actually available.
        len: usize,
    },

    /// An index record is cut off by the end of the file.
    #[error("truncated index record {index}")]
    TruncatedIndexRecord {
        /// Position of the record in the index table.
        index: u32,
    },

    /// An index record points past the end of the file.
    #[error("string offset {offset} of record {index} is outside the file ({len} bytes)")]
    StringOffsetOutOfBounds {
        /// Position of the record in the index table.
        index: u32,
        /// Offset relative to the string table start.
        offset: u32,
        /// Total file length.
        len: usize,
    },

    /// A string runs to the end of the file without a terminator.
    #[error("string at offset {offset} of record {index} has no terminator")]
    UnterminatedString {
        /// Position of the record in the index table.
        index: u32,
        /// Offset relative to the string table start.
        offset: u32,
    },

    /// Entry text contains a 0x00 byte and cannot be stored null-terminated.
    #[error("text of entry {key} contains a NUL byte")]
    EmbeddedNul {
        /// Display form of the entry key.
        key: String,
    },

    /// More entries than the u32 header field can describe.
    #[error("too many entries for a lang file: {count}")]
    TooManyEntries {
        /// The number of entries.
        count: usize,
    },

    /// The string table no longer fits u32 offsets.
    #[error("string table too large: {size} bytes")]
    StringTableTooLarge {
        /// Size the table would have reached.
        size: u64,
    },

    // ==================== Tagged Text Errors ====================
    /// A key is not of the form `sectionId-sectionIndex-stringIndex`.
    #[error("invalid entry key: {0}")]
    InvalidEntryKey(String),

    /// Text and identifier files have a different number of lines.
    #[error("line count mismatch: {text} text lines, {ids} identifier lines")]
    LineCountMismatch {
        /// Lines in the text file.
        text: usize,
        /// Lines in the identifier file.
        ids: usize,
    },
}

/// A specialized Result type for `EsoLang` operations.
pub type Result<T> = std::result::Result<T, Error>;
