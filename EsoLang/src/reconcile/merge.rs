//! Three-way translation reconciliation
//!
//! Carries an existing translation forward from the previous source version
//! to the current one. A translation survives only while its source text is
//! substantially unchanged; everything else falls back to the current source
//! text, and changed entries are listed for review.

use std::io::{BufWriter, Write};

use super::similarity::{clean_text, decode, is_close_match, looks_translated, ratio};
use super::types::{Outcome, OutcomeCounts, OverlayResult, Reconciliation, VerifyRecord};
use crate::error::Result;
use crate::formats::tagged::{TaggedMap, escape_text};

/// Decide what happens to one key
///
/// `current` is `None` for keys that no longer exist in the current source.
#[must_use]
pub fn classify(
    translated: Option<&[u8]>,
    previous: Option<&[u8]>,
    current: Option<&[u8]>,
) -> Outcome {
    assess(translated, previous, current).0
}

/// Outcome plus the previous/current similarity when it was computed
fn assess(
    translated: Option<&[u8]>,
    previous: Option<&[u8]>,
    current: Option<&[u8]>,
) -> (Outcome, Option<f64>) {
    let Some(current) = current else {
        return (Outcome::Deleted, None);
    };
    let Some(previous) = previous else {
        return (Outcome::Added, None);
    };

    let previous = clean_text(&decode(previous));
    let current = clean_text(&decode(current));

    if !is_close_match(&previous, &current) {
        return (Outcome::Changed, Some(ratio(&previous, &current)));
    }

    let keeps_translation = translated.is_some_and(|raw| {
        let cleaned = clean_text(&decode(raw));
        let fallback = cleaned == previous || cleaned == current;
        !fallback && looks_translated(raw)
    });

    if keeps_translation {
        (Outcome::StableTranslated, None)
    } else {
        (Outcome::StableFallback, None)
    }
}

/// Reconcile a translation against two versions of its source
///
/// The merged map has exactly the keys of `current`, in its order. Keys only
/// in `previous` are reported as deleted and left out.
#[must_use]
pub fn reconcile(
    translated: &TaggedMap,
    previous: &TaggedMap,
    current: &TaggedMap,
) -> Reconciliation {
    let mut result = Reconciliation::default();
    let mut counts = OutcomeCounts::default();

    for (key, current_text) in current {
        let translated_text = translated.get(key);
        let previous_text = previous.get(key);
        let (outcome, similarity) = assess(
            translated_text.map(Vec::as_slice),
            previous_text.map(Vec::as_slice),
            Some(current_text.as_slice()),
        );

        let text = match (outcome, translated_text) {
            (Outcome::StableTranslated, Some(text)) => text,
            _ => current_text,
        };
        result.merged.insert(key.clone(), text.clone());

        if let (Outcome::Changed, Some(previous_text)) = (outcome, previous_text) {
            tracing::debug!("Source of {} changed, needs review", key);
            result.verify.push(VerifyRecord {
                key: key.clone(),
                translated: translated_text.cloned(),
                previous: previous_text.clone(),
                current: current_text.clone(),
                ratio: similarity.unwrap_or(0.0),
            });
        }

        counts.record(outcome);
        result.outcomes.push((key.clone(), outcome));
    }

    for (key, previous_text) in previous {
        if current.contains_key(key) {
            continue;
        }
        counts.record(Outcome::Deleted);
        result.outcomes.push((key.clone(), Outcome::Deleted));
        result.deleted.push((key.clone(), previous_text.clone()));
    }

    tracing::info!("Reconciled {} keys: {}", current.len(), counts);
    result.counts = counts;
    result
}

/// Write changed entries for review
///
/// Each record is a comment line with the key and similarity, the three
/// texts on labelled lines, and a blank line. The labelled lines are not
/// valid tagged lines, so the log can't be mistaken for a translation file.
///
/// # Errors
/// Returns an error if writing fails.
pub fn write_verify_log<W: Write>(writer: W, records: &[VerifyRecord]) -> Result<()> {
    let mut writer = BufWriter::new(writer);
    for record in records {
        writeln!(writer, "# {} similarity {:.2}", record.key, record.ratio)?;

        let translated = record.translated.as_deref().unwrap_or_default();
        for (label, text) in [
            ("translated", translated),
            ("previous", record.previous.as_slice()),
            ("current", record.current.as_slice()),
        ] {
            write!(writer, "{{{{{}:{}:}}}}", record.key, label)?;
            writer.write_all(&escape_text(text))?;
            writer.write_all(b"\n")?;
        }
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(())
}

/// Two-way merge for when there is no previous source version
///
/// For every key of `untranslated`, the translation is used if one exists
/// and looks translated; otherwise the untranslated text is kept.
#[must_use]
pub fn overlay_translations(translated: &TaggedMap, untranslated: &TaggedMap) -> OverlayResult {
    let mut result = OverlayResult::default();

    for (key, source) in untranslated {
        match translated.get(key) {
            Some(text) if looks_translated(text) => {
                result.merged.insert(key.clone(), text.clone());
                result.translated += 1;
            }
            _ => {
                result.merged.insert(key.clone(), source.clone());
                result.untranslated += 1;
            }
        }
    }

    tracing::info!(
        "Overlay: {} translated, {} untranslated",
        result.translated,
        result.untranslated
    );
    result
}
