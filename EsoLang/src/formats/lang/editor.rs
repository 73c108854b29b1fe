//! Lang container editing operations
//!
//! Provides functions for working on a decoded [`LangFile`]:
//! - Key lookup
//! - Conversion to and from tagged text
//! - Merging a smaller subset file over a full container

use std::collections::{HashMap, HashSet};

use super::{EntryKey, LangEntry, LangFile};
use crate::formats::tagged::{TaggedKey, TaggedMap};
use crate::reconcile::looks_translated;

/// Result of merging a subset over a container
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubsetMergeResult {
    /// Entries whose text was replaced with a different one
    pub replaced: usize,
    /// Entries found in the subset whose text was already identical
    pub unchanged: usize,
    /// Subset keys with no matching entry in the container
    pub not_found: Vec<TaggedKey>,
}

impl SubsetMergeResult {
    /// Total subset entries that matched a container entry
    #[must_use]
    pub fn matched(&self) -> usize {
        self.replaced + self.unchanged
    }
}

// ============================================================================
// LangFile editing methods
// ============================================================================

impl LangFile {
    /// Get an entry by key
    ///
    /// If the key occurs more than once, the first entry is returned.
    #[must_use]
    pub fn get(&self, key: &EntryKey) -> Option<&LangEntry> {
        self.entries.iter().find(|e| e.key == *key)
    }

    /// Get a mutable reference to an entry by key
    pub fn get_mut(&mut self, key: &EntryKey) -> Option<&mut LangEntry> {
        self.entries.iter_mut().find(|e| e.key == *key)
    }

    /// Number of distinct texts, i.e. strings an encoded file will hold
    #[must_use]
    pub fn unique_strings(&self) -> usize {
        self.entries
            .iter()
            .map(|e| e.text.as_slice())
            .collect::<HashSet<_>>()
            .len()
    }

    /// Convert entries to a tagged map, in container order
    ///
    /// With `translated_only`, entries that are not valid UTF-8 or don't look
    /// translated are left out.
    #[must_use]
    pub fn to_tagged(&self, translated_only: bool) -> TaggedMap {
        let mut map = TaggedMap::with_capacity(self.entries.len());
        for entry in &self.entries {
            if translated_only
                && (std::str::from_utf8(&entry.text).is_err() || !looks_translated(&entry.text))
            {
                continue;
            }
            map.insert(TaggedKey::Index(entry.key), entry.text.clone());
        }
        map
    }

    /// Build a container from a tagged map
    ///
    /// Symbolic keys have no place in a lang file and are skipped.
    #[must_use]
    pub fn from_tagged(num_sections: u32, map: &TaggedMap) -> Self {
        let mut lang = Self::new(num_sections);
        lang.entries.reserve(map.len());

        for (key, text) in map {
            match key {
                TaggedKey::Index(key) => lang.entries.push(LangEntry::new(*key, text.clone())),
                TaggedKey::Symbol(name) => {
                    tracing::warn!("Skipping symbolic key {} (not a lang key)", name);
                }
            }
        }
        lang
    }

    /// Replace the text of every entry whose key appears in `subset`
    ///
    /// Entry order and keys are untouched; only texts change. Repeated keys
    /// in the container are all updated.
    pub fn merge_subset(&mut self, subset: &TaggedMap) -> SubsetMergeResult {
        let mut result = SubsetMergeResult::default();

        let mut positions: HashMap<EntryKey, Vec<usize>> = HashMap::new();
        for (i, entry) in self.entries.iter().enumerate() {
            positions.entry(entry.key).or_default().push(i);
        }

        for (key, text) in subset {
            let Some(indexes) = key.as_index().and_then(|k| positions.get(k)) else {
                result.not_found.push(key.clone());
                continue;
            };

            for &i in indexes {
                let entry = &mut self.entries[i];
                if entry.text == *text {
                    result.unchanged += 1;
                } else {
                    entry.text.clone_from(text);
                    result.replaced += 1;
                }
            }
        }

        tracing::debug!(
            "Subset merge: {} replaced, {} unchanged, {} not found",
            result.replaced,
            result.unchanged,
            result.not_found.len()
        );
        result
    }
}
