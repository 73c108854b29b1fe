//! CLI command for Hangul remapping

use std::path::Path;

use crate::converter::{RemapDirection, remap_file_with_progress};

pub fn execute(source: &Path, output: &Path, direction: RemapDirection) -> anyhow::Result<()> {
    println!("Remapping {} -> {}", source.display(), output.display());
    remap_file_with_progress(source, output, direction, &|msg| println!("  {msg}"))?;
    Ok(())
}
