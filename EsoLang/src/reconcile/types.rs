//! Core types for reconciliation and source diffs

use std::fmt;

use crate::formats::tagged::{TaggedKey, TaggedMap};

/// What happened to one key during reconciliation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// New in the current source; the source text is used
    Added,
    /// Source unchanged in substance; the existing translation is kept
    StableTranslated,
    /// Source unchanged in substance but there is no real translation
    StableFallback,
    /// Source changed; the new source text is used and the key needs review
    Changed,
    /// Gone from the current source
    Deleted,
}

impl Outcome {
    /// Short label used in summaries and reports
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Added => "added",
            Self::StableTranslated => "kept translation",
            Self::StableFallback => "kept source",
            Self::Changed => "changed",
            Self::Deleted => "deleted",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A changed entry that a translator should look at
#[derive(Debug, Clone, PartialEq)]
pub struct VerifyRecord {
    pub key: TaggedKey,
    /// Existing translation, if there was one
    pub translated: Option<Vec<u8>>,
    pub previous: Vec<u8>,
    pub current: Vec<u8>,
    /// Similarity of the cleaned previous and current source texts
    pub ratio: f64,
}

/// Number of keys per outcome
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutcomeCounts {
    pub added: usize,
    pub stable_translated: usize,
    pub stable_fallback: usize,
    pub changed: usize,
    pub deleted: usize,
}

impl OutcomeCounts {
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Added => self.added += 1,
            Outcome::StableTranslated => self.stable_translated += 1,
            Outcome::StableFallback => self.stable_fallback += 1,
            Outcome::Changed => self.changed += 1,
            Outcome::Deleted => self.deleted += 1,
        }
    }

    /// Keys present in the merged output
    #[must_use]
    pub fn merged(&self) -> usize {
        self.added + self.stable_translated + self.stable_fallback + self.changed
    }
}

impl fmt::Display for OutcomeCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} added, {} kept translation, {} kept source, {} changed, {} deleted",
            self.added, self.stable_translated, self.stable_fallback, self.changed, self.deleted
        )
    }
}

/// Result of a three-way reconciliation
#[derive(Debug, Clone, Default)]
pub struct Reconciliation {
    /// One entry per key of the current source, in its order
    pub merged: TaggedMap,
    /// Outcome of every key, merged keys first, then deleted keys
    pub outcomes: Vec<(TaggedKey, Outcome)>,
    /// Changed entries needing review
    pub verify: Vec<VerifyRecord>,
    /// Keys only in the previous source, with their previous text
    pub deleted: Vec<(TaggedKey, Vec<u8>)>,
    pub counts: OutcomeCounts,
}

impl Reconciliation {
    /// Check if anything needs a translator's attention
    #[must_use]
    pub fn needs_review(&self) -> bool {
        !self.verify.is_empty()
    }

    /// Outcome recorded for a key
    #[must_use]
    pub fn outcome_of(&self, key: &TaggedKey) -> Option<Outcome> {
        self.outcomes
            .iter()
            .find(|(k, _)| k == key)
            .map(|&(_, outcome)| outcome)
    }
}

/// Result of an overlay merge
#[derive(Debug, Clone, Default)]
pub struct OverlayResult {
    /// One entry per key of the untranslated input, in its order
    pub merged: TaggedMap,
    /// Entries where the translation was used
    pub translated: usize,
    /// Entries where the untranslated text was kept
    pub untranslated: usize,
}

/// Classification of a key between two source versions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiffKind {
    /// Identical text
    Matched,
    /// Different but similar text
    CloseMatch,
    /// Dissimilar text
    Changed,
    /// Only in the current version
    Added,
    /// Only in the previous version
    Deleted,
}

impl DiffKind {
    /// All kinds, in report order
    pub const ALL: [Self; 5] = [
        Self::Matched,
        Self::CloseMatch,
        Self::Changed,
        Self::Added,
        Self::Deleted,
    ];

    /// Label used in report headers and file names
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Matched => "matched",
            Self::CloseMatch => "closeMatch",
            Self::Changed => "changed",
            Self::Added => "added",
            Self::Deleted => "deleted",
        }
    }
}

impl fmt::Display for DiffKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One key in a source diff
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffEntry {
    pub key: TaggedKey,
    /// Text in the previous version (absent for added keys)
    pub previous: Option<Vec<u8>>,
    /// Text in the current version (absent for deleted keys)
    pub current: Option<Vec<u8>>,
}

/// Previous vs current source, bucketed by [`DiffKind`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceDiff {
    pub matched: Vec<DiffEntry>,
    pub close_match: Vec<DiffEntry>,
    pub changed: Vec<DiffEntry>,
    pub added: Vec<DiffEntry>,
    pub deleted: Vec<DiffEntry>,
}

impl SourceDiff {
    /// Entries of one bucket
    #[must_use]
    pub fn bucket(&self, kind: DiffKind) -> &[DiffEntry] {
        match kind {
            DiffKind::Matched => &self.matched,
            DiffKind::CloseMatch => &self.close_match,
            DiffKind::Changed => &self.changed,
            DiffKind::Added => &self.added,
            DiffKind::Deleted => &self.deleted,
        }
    }

    pub(crate) fn bucket_mut(&mut self, kind: DiffKind) -> &mut Vec<DiffEntry> {
        match kind {
            DiffKind::Matched => &mut self.matched,
            DiffKind::CloseMatch => &mut self.close_match,
            DiffKind::Changed => &mut self.changed,
            DiffKind::Added => &mut self.added,
            DiffKind::Deleted => &mut self.deleted,
        }
    }

    /// Check if the two versions carry the same texts
    #[must_use]
    pub fn is_identical(&self) -> bool {
        self.close_match.is_empty()
            && self.changed.is_empty()
            && self.added.is_empty()
            && self.deleted.is_empty()
    }
}

impl fmt::Display for SourceDiff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = DiffKind::ALL
            .iter()
            .map(|&kind| format!("{} {}", self.bucket(kind).len(), kind))
            .collect();
        f.write_str(&parts.join(", "))
    }
}
