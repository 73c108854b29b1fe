//! CLI commands for reconciliation, overlay and source diffs

use std::path::Path;
use std::time::Instant;

use anyhow::Context;

use crate::cli::progress::{DISK, GEAR, LOOKING_GLASS, print_done, print_step};
use crate::formats::tagged::{TaggedMap, read_tagged, write_tagged_file};
use crate::reconcile::{diff_sources, overlay_translations, write_diff_report, write_verify_log};
use crate::utils::write_atomic;

fn read(path: &Path) -> anyhow::Result<TaggedMap> {
    read_tagged(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Reconcile a translation with a new source version
pub fn reconcile(
    translated: &Path,
    previous: &Path,
    current: &Path,
    output: &Path,
    verify: &Path,
    deleted: Option<&Path>,
) -> anyhow::Result<()> {
    let started = Instant::now();

    print_step(1, 3, LOOKING_GLASS, "Reading tagged text...");
    let translated = read(translated)?;
    let previous = read(previous)?;
    let current = read(current)?;

    print_step(2, 3, GEAR, "Reconciling entries...");
    let result = crate::reconcile::reconcile(&translated, &previous, &current);

    print_step(3, 3, DISK, "Writing output...");
    write_tagged_file(output, &result.merged)?;

    let mut log = Vec::new();
    write_verify_log(&mut log, &result.verify)?;
    write_atomic(verify, &log)?;

    if let Some(deleted) = deleted {
        let map: TaggedMap = result.deleted.iter().cloned().collect();
        write_tagged_file(deleted, &map)?;
    }

    println!("{}", result.counts);
    if result.needs_review() {
        println!(
            "{} entries need review, see {}",
            result.verify.len(),
            verify.display()
        );
    }
    print_done(started.elapsed());
    Ok(())
}

/// Lay a translation over untranslated text
pub fn overlay(translated: &Path, untranslated: &Path, output: &Path) -> anyhow::Result<()> {
    let translated = read(translated)?;
    let untranslated = read(untranslated)?;

    let result = overlay_translations(&translated, &untranslated);
    write_tagged_file(output, &result.merged)?;

    println!(
        "{} translated, {} untranslated, written to {}",
        result.translated,
        result.untranslated,
        output.display()
    );
    Ok(())
}

/// Compare two source versions
pub fn diff(previous: &Path, current: &Path, dir: &Path) -> anyhow::Result<()> {
    let previous = read(previous)?;
    let current = read(current)?;

    let diff = diff_sources(&previous, &current);
    let files = write_diff_report(dir, &diff)?;

    println!("{diff}");
    println!("{} report files written to {}", files.len(), dir.display());
    Ok(())
}
