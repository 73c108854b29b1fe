//! CLI commands for tagged text operations

use std::path::Path;

use anyhow::Context;

use crate::utils::write_atomic;

/// Tag plain text lines with keys
pub fn add_index(text: &Path, ids: &Path, output: &Path) -> anyhow::Result<()> {
    let text_data =
        std::fs::read(text).with_context(|| format!("Failed to read {}", text.display()))?;
    let id_data = std::fs::read(ids).with_context(|| format!("Failed to read {}", ids.display()))?;

    let tagged = crate::formats::tagged::add_index(&text_data, &id_data)?;
    write_atomic(output, &tagged)?;

    println!("Tagged text written to {}", output.display());
    Ok(())
}

/// Remove key tags from a tagged file
pub fn strip_index(source: &Path, output: &Path) -> anyhow::Result<()> {
    let data =
        std::fs::read(source).with_context(|| format!("Failed to read {}", source.display()))?;

    let texts = crate::formats::tagged::strip_index(&data);
    let mut out = Vec::with_capacity(data.len());
    for text in &texts {
        out.extend_from_slice(text);
        out.push(b'\n');
    }
    write_atomic(output, &out)?;

    println!("{} lines written to {}", texts.len(), output.display());
    Ok(())
}
