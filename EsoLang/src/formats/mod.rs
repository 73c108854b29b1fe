//! File format handlers for ESO localization files
//!
//! - `lang` - the binary container shipped with the client
//! - `tagged` - the `{{key:}}text` line format used for editing

pub mod lang;
pub mod tagged;

// Re-export main document types
pub use lang::{EntryKey, LangEntry, LangFile, read_lang, write_lang};
pub use tagged::{TaggedKey, TaggedMap, read_tagged, write_tagged_file};
