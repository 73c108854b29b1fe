//! Subcommand enum definitions for CLI

use clap::{Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::converter::RemapDirection;

/// Lang container commands
#[derive(Subcommand)]
pub enum LangCommands {
    /// Export a lang file to tagged text
    Export {
        /// Source .lang file
        source: PathBuf,

        /// Output tagged text file
        #[arg(short, long)]
        output: PathBuf,

        /// Only export entries that look translated
        #[arg(long)]
        translated_only: bool,
    },

    /// Pack tagged text into a lang file
    Pack {
        /// Source tagged text file
        source: PathBuf,

        /// Output .lang file
        #[arg(short, long)]
        output: PathBuf,

        /// Take the section count from an existing lang file
        #[arg(long, conflicts_with = "sections", required_unless_present = "sections")]
        template: Option<PathBuf>,

        /// Section count to write into the header
        #[arg(long)]
        sections: Option<u32>,
    },

    /// Replace texts of a lang file with those from a smaller tagged file
    Merge {
        /// Full .lang file
        source: PathBuf,

        /// Tagged text with the entries to replace
        subset: PathBuf,

        /// Output .lang file
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Show entry and string counts of lang file(s)
    Stats {
        /// .lang file(s)
        #[arg(required = true)]
        sources: Vec<PathBuf>,
    },

    /// Decode and re-encode a lang file, sharing duplicate strings
    Rebuild {
        /// Source .lang file
        source: PathBuf,

        /// Output .lang file
        #[arg(short, long)]
        output: PathBuf,
    },
}

/// Tagged text commands
#[derive(Subcommand)]
pub enum TaggedCommands {
    /// Tag plain text lines with keys from an identifier file
    AddIndex {
        /// Plain text, one entry per line
        text: PathBuf,

        /// Keys, one per line, in the same order
        ids: PathBuf,

        /// Output tagged text file
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Remove key tags, leaving one text per line
    StripIndex {
        /// Tagged text file
        source: PathBuf,

        /// Output plain text file
        #[arg(short, long)]
        output: PathBuf,
    },
}

/// Direction of a Hangul remap
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum RemapArg {
    /// Hangul to the client font's range
    ToClient,
    /// Client font's range back to Hangul
    FromClient,
}

impl From<RemapArg> for RemapDirection {
    fn from(arg: RemapArg) -> Self {
        match arg {
            RemapArg::ToClient => Self::ToClient,
            RemapArg::FromClient => Self::FromClient,
        }
    }
}
