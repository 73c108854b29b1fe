//! Comparison of two source versions
//!
//! Shows what a game update did to the English text before any translation
//! work starts.

use std::path::{Path, PathBuf};

use super::similarity::{decode, is_close_match};
use super::types::{DiffEntry, DiffKind, SourceDiff};
use crate::error::Result;
use crate::formats::tagged::{TaggedKey, TaggedMap, format_line};
use crate::utils::write_atomic;

/// Bucket every key of two source versions
///
/// Keys of `current` come first, in its order, followed by keys only in
/// `previous`. Similarity is judged on the raw texts.
#[must_use]
pub fn diff_sources(previous: &TaggedMap, current: &TaggedMap) -> SourceDiff {
    let mut diff = SourceDiff::default();

    for (key, current_text) in current {
        let Some(previous_text) = previous.get(key) else {
            diff.added.push(DiffEntry {
                key: key.clone(),
                previous: None,
                current: Some(current_text.clone()),
            });
            continue;
        };

        let kind = if previous_text == current_text {
            DiffKind::Matched
        } else if is_close_match(&decode(previous_text), &decode(current_text)) {
            DiffKind::CloseMatch
        } else {
            DiffKind::Changed
        };
        diff.bucket_mut(kind).push(DiffEntry {
            key: key.clone(),
            previous: Some(previous_text.clone()),
            current: Some(current_text.clone()),
        });
    }

    for (key, previous_text) in previous {
        if !current.contains_key(key) {
            diff.deleted.push(DiffEntry {
                key: key.clone(),
                previous: Some(previous_text.clone()),
                current: None,
            });
        }
    }

    tracing::info!("Source diff: {}", diff);
    diff
}

/// Write one report file per bucket into `dir`
///
/// Each file starts with an `N: indexes <description>` line followed by
/// tagged lines. Close matches get two files, one per version; changed
/// entries list both versions under labelled keys.
///
/// # Errors
/// Returns an error if the directory or a file cannot be written.
pub fn write_diff_report<P: AsRef<Path>>(dir: P, diff: &SourceDiff) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    std::fs::create_dir_all(dir)?;

    let mut written = Vec::new();
    let mut write = |name: &str, count: usize, description: &str, body: Vec<u8>| -> Result<()> {
        let mut data = format!("{count}: indexes {description}\n").into_bytes();
        data.extend_from_slice(&body);
        let path = dir.join(name);
        write_atomic(&path, &data)?;
        written.push(path);
        Ok(())
    };

    let current_lines = |entries: &[DiffEntry]| {
        lines(entries.iter().map(|e| (&e.key, e.current.as_deref().unwrap_or_default())))
    };
    let previous_lines = |entries: &[DiffEntry]| {
        lines(entries.iter().map(|e| (&e.key, e.previous.as_deref().unwrap_or_default())))
    };

    write("matchedIndexes.txt", diff.matched.len(), "matched", current_lines(&diff.matched))?;
    write(
        "closeMatchPreviousIndexes.txt",
        diff.close_match.len(),
        "were a close match",
        previous_lines(&diff.close_match),
    )?;
    write(
        "closeMatchCurrentIndexes.txt",
        diff.close_match.len(),
        "were a close match",
        current_lines(&diff.close_match),
    )?;
    write("changedIndexes.txt", diff.changed.len(), "changed", changed_lines(&diff.changed))?;
    write("deletedIndexes.txt", diff.deleted.len(), "deleted", previous_lines(&diff.deleted))?;
    write("addedIndexes.txt", diff.added.len(), "added", current_lines(&diff.added))?;

    tracing::debug!("Wrote {} report files to {}", written.len(), dir.display());
    Ok(written)
}

fn lines<'a>(entries: impl Iterator<Item = (&'a TaggedKey, &'a [u8])>) -> Vec<u8> {
    let mut out = Vec::new();
    for (key, text) in entries {
        out.extend_from_slice(&format_line(key, text));
        out.push(b'\n');
    }
    out
}

/// Both versions of each changed entry, then a blank line
fn changed_lines(entries: &[DiffEntry]) -> Vec<u8> {
    let mut out = Vec::new();
    for entry in entries {
        for (label, text) in [("current", &entry.current), ("previous", &entry.previous)] {
            let key = TaggedKey::Symbol(format!("{}:{}", entry.key, label));
            out.extend_from_slice(&format_line(&key, text.as_deref().unwrap_or_default()));
            out.push(b'\n');
        }
        out.push(b'\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn map(pairs: &[(&str, &str)]) -> TaggedMap {
        pairs
            .iter()
            .map(|(k, v)| (TaggedKey::parse(k), v.as_bytes().to_vec()))
            .collect()
    }

    fn keys(entries: &[DiffEntry]) -> Vec<String> {
        entries.iter().map(|e| e.key.to_string()).collect()
    }

    #[test]
    fn test_diff_buckets() {
        let previous = map(&[
            ("1-0-1", "Open the door"),
            ("1-0-2", "Open the door"),
            ("1-0-3", "Open the door"),
            ("1-0-4", "Gone"),
        ]);
        let current = map(&[
            ("1-0-5", "Brand new"),
            ("1-0-3", "Close every window"),
            ("1-0-2", "Open the gate"),
            ("1-0-1", "Open the door"),
        ]);

        let diff = diff_sources(&previous, &current);

        assert_eq!(keys(&diff.matched), vec!["1-0-1"]);
        assert_eq!(keys(&diff.close_match), vec!["1-0-2"]);
        assert_eq!(keys(&diff.changed), vec!["1-0-3"]);
        assert_eq!(keys(&diff.added), vec!["1-0-5"]);
        assert_eq!(keys(&diff.deleted), vec!["1-0-4"]);
        assert!(!diff.is_identical());
        assert_eq!(
            diff.to_string(),
            "1 matched, 1 closeMatch, 1 changed, 1 added, 1 deleted"
        );
        assert!(diff_sources(&previous, &previous).is_identical());
    }

    #[test]
    fn test_write_diff_report() {
        let dir = tempfile::tempdir().unwrap();
        let previous = map(&[("1-0-1", "Open the door"), ("1-0-2", "Old")]);
        let current = map(&[("1-0-1", "Close every window"), ("1-0-3", "New")]);

        let diff = diff_sources(&previous, &current);
        let files = write_diff_report(dir.path(), &diff).unwrap();
        assert_eq!(files.len(), 6);

        let read = |name: &str| std::fs::read_to_string(dir.path().join(name)).unwrap();
        assert_eq!(read("matchedIndexes.txt"), "0: indexes matched\n");
        assert_eq!(read("addedIndexes.txt"), "1: indexes added\n{{1-0-3:}}New\n");
        assert_eq!(read("deletedIndexes.txt"), "1: indexes deleted\n{{1-0-2:}}Old\n");
        assert_eq!(
            read("changedIndexes.txt"),
            "1: indexes changed\n\
             {{1-0-1:current:}}Close every window\n\
             {{1-0-1:previous:}}Open the door\n\
             \n"
        );
    }
}
