//! Lead-byte character scanning
//!
//! Lang text is walked one "extended character" at a time without a full
//! UTF-8 decoder. The length table below is the one the game tooling has
//! always used; it is kept as-is so byte offsets computed over existing data
//! stay identical (it is not a strict UTF-8 validator: continuation bytes and
//! `0x75..=0xBF` lead bytes count as single bytes).

/// Number of bytes the character starting with `lead` occupies
#[must_use]
pub const fn char_byte_length(lead: u8) -> usize {
    match lead {
        0x00..=0x74 => 1,
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF7 => 4,
        _ => 1,
    }
}

/// Iterator over the extended characters of a byte slice
///
/// Each item is the raw byte slice of one character. A character cut short
/// by the end of the input yields the bytes that remain.
#[derive(Debug, Clone)]
pub struct ExtendedChars<'a> {
    data: &'a [u8],
}

impl<'a> ExtendedChars<'a> {
    #[must_use]
    pub fn new(data: &'a [u8]) -> Self {
        Self { data }
    }
}

impl<'a> Iterator for ExtendedChars<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        let lead = *self.data.first()?;
        let len = char_byte_length(lead).min(self.data.len());
        let (head, tail) = self.data.split_at(len);
        self.data = tail;
        Some(head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_byte_length_table() {
        assert_eq!(char_byte_length(0x00), 1);
        assert_eq!(char_byte_length(b'A'), 1);
        assert_eq!(char_byte_length(0x74), 1);
        // Legacy table: everything outside the multi-byte lead ranges is 1
        assert_eq!(char_byte_length(0x75), 1);
        assert_eq!(char_byte_length(0x80), 1);
        assert_eq!(char_byte_length(0xBF), 1);
        assert_eq!(char_byte_length(0xC2), 2);
        assert_eq!(char_byte_length(0xDF), 2);
        assert_eq!(char_byte_length(0xE0), 3);
        assert_eq!(char_byte_length(0xEF), 3);
        assert_eq!(char_byte_length(0xF0), 4);
        assert_eq!(char_byte_length(0xF7), 4);
        assert_eq!(char_byte_length(0xF8), 1);
        assert_eq!(char_byte_length(0xFF), 1);
    }

    #[test]
    fn test_extended_chars_splits_mixed_text() {
        let text = "a\u{00A0}한😀".as_bytes();
        let chars: Vec<&[u8]> = ExtendedChars::new(text).collect();
        assert_eq!(
            chars,
            vec![
                b"a".as_slice(),
                [0xC2, 0xA0].as_slice(),
                "한".as_bytes(),
                "😀".as_bytes(),
            ]
        );
    }

    #[test]
    fn test_extended_chars_truncated_tail() {
        let chars: Vec<&[u8]> = ExtendedChars::new(&[b'x', 0xEA, 0xB0]).collect();
        assert_eq!(chars, vec![b"x".as_slice(), [0xEA, 0xB0].as_slice()]);
    }
}
