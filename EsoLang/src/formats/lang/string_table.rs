//! String table management for .lang files
//!
//! Content-addressed: byte-identical texts share one offset. Offsets are
//! assigned in first-occurrence order, so interning a container's entries in
//! their stored order always produces the same table.

use std::collections::HashMap;
use std::io::Write;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Default)]
pub struct StringTable {
    strings: Vec<Vec<u8>>,
    /// Offset of each entry in `strings`, ascending
    starts: Vec<u32>,
    offsets: HashMap<Vec<u8>, u32>,
    /// Offset the next new string will receive
    next_offset: u64,
}

impl StringTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a string to the table, returns its offset
    ///
    /// A string seen before returns its original offset. A new one is placed
    /// at the running byte counter, which then advances by `len + 1` for the
    /// terminator.
    pub fn intern(&mut self, text: &[u8]) -> Result<u32> {
        if let Some(&offset) = self.offsets.get(text) {
            return Ok(offset);
        }

        let offset = u32::try_from(self.next_offset).map_err(|_| Error::StringTableTooLarge {
            size: self.next_offset,
        })?;
        self.strings.push(text.to_vec());
        self.starts.push(offset);
        self.offsets.insert(text.to_vec(), offset);
        self.next_offset += text.len() as u64 + 1;
        Ok(offset)
    }

    /// Get the offset of a string, if it has been interned
    #[must_use]
    pub fn offset_of(&self, text: &[u8]) -> Option<u32> {
        self.offsets.get(text).copied()
    }

    /// Get the string stored at an offset
    ///
    /// Only offsets returned by [`intern`](Self::intern) resolve.
    #[must_use]
    pub fn get(&self, offset: u32) -> Option<&[u8]> {
        let index = self.starts.binary_search(&offset).ok()?;
        self.strings.get(index).map(Vec::as_slice)
    }

    /// Unique strings in first-occurrence order
    pub fn iter(&self) -> impl Iterator<Item = &[u8]> {
        self.strings.iter().map(Vec::as_slice)
    }

    /// Size of the serialized table in bytes
    #[must_use]
    pub fn byte_len(&self) -> u64 {
        self.next_offset
    }

    /// Write every unique string followed by its terminator
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        for s in &self.strings {
            writer.write_all(s)?;
            writer.write_all(&[0])?;
        }
        Ok(())
    }

    /// Convert to bytes for serialization
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.next_offset as usize);
        for s in &self.strings {
            bytes.extend_from_slice(s);
            bytes.push(0);
        }
        bytes
    }

    /// Number of unique strings
    #[must_use]
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}
