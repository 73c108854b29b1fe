//! Translation reconciliation across source updates
//!
//! When the game ships new English text, an existing translation has to be
//! carried over to the new version without keeping translations of
//! sentences that have since been rewritten.
//!
//! # Reconciling a Translation
//!
//! ```no_run
//! use esolang::formats::tagged::{read_tagged, write_tagged_file};
//! use esolang::reconcile::reconcile;
//!
//! let translated = read_tagged("fr.lang.txt")?;
//! let previous = read_tagged("en_prev.lang.txt")?;
//! let current = read_tagged("en_cur.lang.txt")?;
//!
//! let result = reconcile(&translated, &previous, &current);
//! println!("{}", result.counts);
//! for record in &result.verify {
//!     println!("review {} (similarity {:.2})", record.key, record.ratio);
//! }
//! write_tagged_file("fr_new.lang.txt", &result.merged)?;
//! # Ok::<(), esolang::Error>(())
//! ```
//!
//! # Comparing Source Versions
//!
//! ```no_run
//! use esolang::formats::tagged::read_tagged;
//! use esolang::reconcile::{diff_sources, write_diff_report};
//!
//! let diff = diff_sources(&read_tagged("en_prev.lang.txt")?, &read_tagged("en_cur.lang.txt")?);
//! println!("{diff}");
//! write_diff_report("diff/", &diff)?;
//! # Ok::<(), esolang::Error>(())
//! ```

mod diff;
mod merge;
mod similarity;
mod types;

pub use diff::{diff_sources, write_diff_report};
pub use merge::{classify, overlay_translations, reconcile, write_verify_log};
pub use similarity::{
    SIMILARITY_THRESHOLD, clean_text, is_close_match, looks_translated, normalize, ratio,
};
pub use types::{
    DiffEntry, DiffKind, Outcome, OutcomeCounts, OverlayResult, Reconciliation, SourceDiff,
    VerifyRecord,
};
