//! Hangul codepoint remapping
//!
//! The client font has no Hangul glyphs. Korean translations are shipped with
//! every Hangul character shifted into a CJK range where a patched font
//! draws Hangul shapes. The shift works on the UTF-8 bytes of a character
//! read as one big-endian integer, and the result is re-encoded with the
//! same number of bytes.

use std::path::Path;

use super::ProgressCallback;
use crate::error::Result;
use crate::utils::{ExtendedChars, write_atomic};

/// Which way to remap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemapDirection {
    /// Hangul to the client's CJK stand-ins
    ToClient,
    /// Client CJK stand-ins back to Hangul
    FromClient,
}

impl RemapDirection {
    fn rules(self) -> &'static [RemapRule] {
        match self {
            Self::ToClient => TO_CLIENT,
            Self::FromClient => FROM_CLIENT,
        }
    }
}

/// Inclusive range of encoded values and the offset applied inside it
struct RemapRule {
    low: u32,
    high: u32,
    offset: i32,
}

const fn rule(low: u32, high: u32, offset: i32) -> RemapRule {
    RemapRule { low, high, offset }
}

// First match wins; the three syllable blocks with their own offset must
// come before the general syllable range.
const TO_CLIENT: &[RemapRule] = &[
    rule(0xE18480, 0xE187BF, 0x43400),  // Hangul Jamo
    rule(0xE384B1, 0xE384BF, 0x237D0),  // Compatibility Jamo
    rule(0xE38581, 0xE3868F, 0x23710),  // Compatibility Jamo
    rule(0xEAB880, 0xEABFBF, -0x33800),
    rule(0xEBB880, 0xEBBFBF, -0x33800),
    rule(0xECB880, 0xECBFBF, -0x33800),
    rule(0xEAB080, 0xED9EAC, -0x3F800), // Syllables
];

const FROM_CLIENT: &[RemapRule] = &[
    rule(0xE5B880, 0xE5BBBF, -0x43400),
    rule(0xE5BC81, 0xE5BC8F, -0x237D0),
    rule(0xE5BC91, 0xE5BD9F, -0x23710),
    rule(0xE78080, 0xE787BF, 0x33800),
    rule(0xE88080, 0xE887BF, 0x33800),
    rule(0xE98080, 0xE987BF, 0x33800),
    rule(0xE6B880, 0xE9A6AC, 0x3F800),
];

/// Shift Hangul into the client's CJK range
#[must_use]
pub fn to_client(data: &[u8]) -> Vec<u8> {
    remap(data, RemapDirection::ToClient)
}

/// Shift the client's CJK stand-ins back to Hangul
#[must_use]
pub fn from_client(data: &[u8]) -> Vec<u8> {
    remap(data, RemapDirection::FromClient)
}

/// Remap every character of `data`; characters outside all ranges pass through
#[must_use]
pub fn remap(data: &[u8], direction: RemapDirection) -> Vec<u8> {
    let rules = direction.rules();
    let mut out = Vec::with_capacity(data.len());

    for ch in ExtendedChars::new(data) {
        match remap_char(ch, rules) {
            Some(shifted) => out.extend_from_slice(&shifted[4 - ch.len()..]),
            None => out.extend_from_slice(ch),
        }
    }
    out
}

/// Shifted big-endian bytes of one character, if a rule applies
fn remap_char(ch: &[u8], rules: &[RemapRule]) -> Option<[u8; 4]> {
    if ch.len() != 3 {
        return None;
    }
    let value = ch.iter().fold(0u32, |acc, &b| (acc << 8) | u32::from(b));
    let rule = rules.iter().find(|r| (r.low..=r.high).contains(&value))?;
    let shifted = value.checked_add_signed(rule.offset)?;
    Some(shifted.to_be_bytes())
}

/// Remap a whole file
///
/// # Errors
/// Returns an error if reading or writing fails.
pub fn remap_file<P: AsRef<Path>>(source: P, dest: P, direction: RemapDirection) -> Result<()> {
    remap_file_with_progress(source, dest, direction, &|_| {})
}

/// Remap a whole file with progress callback
///
/// # Errors
/// Returns an error if reading or writing fails.
pub fn remap_file_with_progress<P: AsRef<Path>>(
    source: P,
    dest: P,
    direction: RemapDirection,
    progress: ProgressCallback,
) -> Result<()> {
    tracing::info!(
        "Remapping {:?} ({:?}) → {:?}",
        source.as_ref(),
        direction,
        dest.as_ref()
    );

    progress("Reading source...");
    let data = std::fs::read(&source)?;

    progress("Remapping characters...");
    let remapped = remap(&data, direction);

    progress("Writing output...");
    write_atomic(&dest, &remapped)?;

    tracing::info!("Remap complete: {} bytes", remapped.len());
    Ok(())
}
