//! CLI commands for lang container operations

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Context;

use crate::cli::progress::{DISK, GEAR, LINK, LOOKING_GLASS, print_done, print_step, print_warning};
use crate::formats::lang::{LangFile, read_lang, write_lang};
use crate::formats::tagged::{read_tagged, write_tagged_file};

/// Export a lang file to tagged text
pub fn export(source: &Path, output: &Path, translated_only: bool) -> anyhow::Result<()> {
    let started = Instant::now();

    print_step(1, 3, LOOKING_GLASS, "Reading lang file...");
    let lang = read_lang(source).with_context(|| format!("Failed to read {}", source.display()))?;

    print_step(2, 3, GEAR, "Converting entries...");
    let map = lang.to_tagged(translated_only);

    print_step(3, 3, DISK, "Writing tagged text...");
    write_tagged_file(output, &map)?;

    println!("Exported {} of {} entries to {}", map.len(), lang.len(), output.display());
    print_done(started.elapsed());
    Ok(())
}

/// Pack tagged text into a lang file
pub fn pack(
    source: &Path,
    output: &Path,
    template: Option<&Path>,
    sections: Option<u32>,
) -> anyhow::Result<()> {
    let started = Instant::now();

    let num_sections = match (template, sections) {
        (Some(template), _) => {
            read_lang(template)
                .with_context(|| format!("Failed to read template {}", template.display()))?
                .num_sections
        }
        (None, Some(sections)) => sections,
        (None, None) => anyhow::bail!("Either --template or --sections is required"),
    };

    print_step(1, 3, LOOKING_GLASS, "Reading tagged text...");
    let map = read_tagged(source).with_context(|| format!("Failed to read {}", source.display()))?;

    print_step(2, 3, GEAR, "Building entries...");
    let lang = LangFile::from_tagged(num_sections, &map);
    let skipped = map.len() - lang.len();
    if skipped > 0 {
        print_warning(&format!("{skipped} symbolic keys skipped"));
    }

    print_step(3, 3, DISK, "Writing lang file...");
    write_lang(output, &lang)?;

    println!(
        "Packed {} entries ({} unique strings) to {}",
        lang.len(),
        lang.unique_strings(),
        output.display()
    );
    print_done(started.elapsed());
    Ok(())
}

/// Replace texts of a lang file with those of a smaller tagged file
pub fn merge(source: &Path, subset: &Path, output: &Path) -> anyhow::Result<()> {
    let started = Instant::now();

    print_step(1, 3, LOOKING_GLASS, "Reading files...");
    let mut lang =
        read_lang(source).with_context(|| format!("Failed to read {}", source.display()))?;
    let subset_map =
        read_tagged(subset).with_context(|| format!("Failed to read {}", subset.display()))?;

    print_step(2, 3, LINK, "Merging entries...");
    let result = lang.merge_subset(&subset_map);

    print_step(3, 3, DISK, "Writing lang file...");
    write_lang(output, &lang)?;

    println!(
        "{} replaced, {} unchanged, {} not found",
        result.replaced,
        result.unchanged,
        result.not_found.len()
    );
    for key in result.not_found.iter().take(10) {
        println!("  not found: {key}");
    }
    if result.not_found.len() > 10 {
        println!("  ... and {} more", result.not_found.len() - 10);
    }
    print_done(started.elapsed());
    Ok(())
}

/// Show counts for lang files
pub fn stats(sources: &[PathBuf]) -> anyhow::Result<()> {
    for source in sources {
        let lang =
            read_lang(source).with_context(|| format!("Failed to read {}", source.display()))?;
        println!("{}", source.display());
        println!("  Sections: {}", lang.num_sections);
        println!("  Entries: {}", lang.len());
        println!("  Unique strings: {}", lang.unique_strings());
    }
    Ok(())
}

/// Decode and re-encode a lang file
pub fn rebuild(source: &Path, output: &Path) -> anyhow::Result<()> {
    let started = Instant::now();

    print_step(1, 2, LOOKING_GLASS, "Reading lang file...");
    let lang = read_lang(source).with_context(|| format!("Failed to read {}", source.display()))?;

    print_step(2, 2, DISK, "Writing lang file...");
    write_lang(output, &lang)?;

    let before = std::fs::metadata(source)?.len();
    let after = std::fs::metadata(output)?.len();
    println!("Rebuilt {} entries: {before} -> {after} bytes", lang.len());
    print_done(started.elapsed());
    Ok(())
}
