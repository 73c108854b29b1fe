pub mod definitions;
mod execute;
pub mod lang;
pub mod reconcile;
pub mod remap;
pub mod tagged;

use clap::Subcommand;
use std::path::PathBuf;

pub use definitions::{LangCommands, RemapArg, TaggedCommands};

#[derive(Subcommand)]
pub enum Commands {
    /// Lang container operations
    Lang {
        #[command(subcommand)]
        command: LangCommands,
    },

    /// Tagged text operations
    Tagged {
        #[command(subcommand)]
        command: TaggedCommands,
    },

    /// Carry a translation over to a new source version
    Reconcile {
        /// Existing translation (tagged text)
        translated: PathBuf,

        /// Source text the translation was made from
        previous: PathBuf,

        /// New source text
        current: PathBuf,

        /// Merged output
        #[arg(short, long)]
        output: PathBuf,

        /// Changed entries for review
        #[arg(long)]
        verify: PathBuf,

        /// Also write keys removed from the source
        #[arg(long)]
        deleted: Option<PathBuf>,
    },

    /// Lay a translation over source text without a previous version
    Overlay {
        /// Translation (tagged text)
        translated: PathBuf,

        /// Untranslated source text
        untranslated: PathBuf,

        /// Merged output
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Compare two source versions
    Diff {
        /// Previous source text
        previous: PathBuf,

        /// Current source text
        current: PathBuf,

        /// Directory for the report files
        #[arg(short, long)]
        dir: PathBuf,
    },

    /// Remap Hangul to or from the client font's range
    Remap {
        /// Direction
        #[arg(value_enum)]
        direction: RemapArg,

        /// Input file
        source: PathBuf,

        /// Output file
        #[arg(short, long)]
        output: PathBuf,
    },
}
