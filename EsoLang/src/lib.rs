//! # esolang
//!
//! A pure-Rust library for working with Elder Scrolls Online localization files.
//!
//! ## Supported Formats
//!
//! - **Lang containers** - The client's binary `.lang` string tables
//! - **Tagged text** - `{{sectionId-sectionIndex-stringIndex:}}text` lines for editing
//! - **Hangul remapping** - Korean text shifted into the client font's CJK range
//!
//! ## Quick Start
//!
//! ### Exporting and Repacking a Lang File
//!
//! ```no_run
//! use esolang::formats::lang::{LangFile, read_lang, write_lang};
//! use esolang::formats::tagged::{read_tagged, write_tagged_file};
//!
//! let lang = read_lang("en.lang")?;
//! write_tagged_file("en.lang.txt", &lang.to_tagged(false))?;
//!
//! // ... edit en.lang.txt ...
//!
//! let edited = read_tagged("en.lang.txt")?;
//! write_lang("en_new.lang", &LangFile::from_tagged(lang.num_sections, &edited))?;
//! # Ok::<(), esolang::Error>(())
//! ```
//!
//! ### Using the Prelude
//!
//! ```
//! use esolang::prelude::*;
//!
//! let key: EntryKey = "18173141-0-2944".parse()?;
//! assert_eq!(key.section_id, 18173141);
//! # Ok::<(), esolang::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` - Enables the `esolang` command-line binary

pub mod converter;
pub mod error;
pub mod formats;
pub mod reconcile;
pub mod utils;

// Re-exports for convenience
pub use error::{Error, Result};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::formats::lang::{
        EntryKey, LangEntry, LangFile, SubsetMergeResult, encode_lang, parse_lang_bytes,
        read_lang, write_lang,
    };
    pub use crate::formats::tagged::{
        TaggedKey, TaggedMap, parse_tagged_bytes, read_tagged, write_tagged, write_tagged_file,
    };

    pub use crate::converter::{RemapDirection, from_client, to_client};
    pub use crate::reconcile::{
        Outcome, Reconciliation, SourceDiff, VerifyRecord, diff_sources, reconcile,
        write_verify_log,
    };
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;
