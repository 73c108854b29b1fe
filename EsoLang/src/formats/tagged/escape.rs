//! Placeholder escaping for single-line text

/// Written in place of a line feed inside a text
pub const LF_TOKEN: &[u8] = b"-=LF=-";
/// Written in place of a carriage return inside a text
pub const CR_TOKEN: &[u8] = b"-=CR=-";
/// Non-breaking space placeholder produced by older tooling
pub const NBSP_TOKEN: &[u8] = b"-=NB=-";
/// UTF-8 non-breaking space
pub const NBSP: &[u8] = b"\xC2\xA0";

const UNESCAPES: [(&[u8], &[u8]); 3] = [(LF_TOKEN, b"\n"), (CR_TOKEN, b"\r"), (NBSP_TOKEN, NBSP)];

/// Make a text safe for a single tagged line
///
/// Only LF and CR are replaced. NBSP and backslash escape sequences pass
/// through byte for byte.
#[must_use]
pub fn escape_text(text: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len());
    for &byte in text {
        match byte {
            b'\n' => out.extend_from_slice(LF_TOKEN),
            b'\r' => out.extend_from_slice(CR_TOKEN),
            _ => out.push(byte),
        }
    }
    out
}

/// Reverse [`escape_text`]
///
/// Also restores the legacy `-=NB=-` placeholder to a real NBSP. A text that
/// itself contains one of the tokens does not survive the round trip.
#[must_use]
pub fn unescape_text(text: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len());
    let mut rest = text;

    'scan: while let Some((&byte, tail)) = rest.split_first() {
        if byte == b'-' {
            for (token, replacement) in UNESCAPES {
                if rest.starts_with(token) {
                    out.extend_from_slice(replacement);
                    rest = &rest[token.len()..];
                    continue 'scan;
                }
            }
        }
        out.push(byte);
        rest = tail;
    }
    out
}
