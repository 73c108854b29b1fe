//! Utility functions

pub mod chars;
pub mod path;

pub use chars::{ExtendedChars, char_byte_length};
pub use path::write_atomic;
