//! Command execution implementations

use super::definitions::{LangCommands, TaggedCommands};
use super::{Commands, lang, reconcile, remap, tagged};

impl Commands {
    /// Execute the selected command.
    ///
    /// # Errors
    /// Returns an error if the underlying command fails.
    pub fn execute(&self) -> anyhow::Result<()> {
        match self {
            Commands::Lang { command } => command.execute(),
            Commands::Tagged { command } => command.execute(),
            Commands::Reconcile {
                translated,
                previous,
                current,
                output,
                verify,
                deleted,
            } => reconcile::reconcile(
                translated,
                previous,
                current,
                output,
                verify,
                deleted.as_deref(),
            ),
            Commands::Overlay {
                translated,
                untranslated,
                output,
            } => reconcile::overlay(translated, untranslated, output),
            Commands::Diff {
                previous,
                current,
                dir,
            } => reconcile::diff(previous, current, dir),
            Commands::Remap {
                direction,
                source,
                output,
            } => remap::execute(source, output, (*direction).into()),
        }
    }
}

impl LangCommands {
    /// Execute the selected lang command.
    ///
    /// # Errors
    /// Returns an error if the underlying lang operation fails.
    pub fn execute(&self) -> anyhow::Result<()> {
        match self {
            LangCommands::Export {
                source,
                output,
                translated_only,
            } => lang::export(source, output, *translated_only),
            LangCommands::Pack {
                source,
                output,
                template,
                sections,
            } => lang::pack(source, output, template.as_deref(), *sections),
            LangCommands::Merge {
                source,
                subset,
                output,
            } => lang::merge(source, subset, output),
            LangCommands::Stats { sources } => lang::stats(sources),
            LangCommands::Rebuild { source, output } => lang::rebuild(source, output),
        }
    }
}

impl TaggedCommands {
    /// Execute the selected tagged text command.
    ///
    /// # Errors
    /// Returns an error if the underlying operation fails.
    pub fn execute(&self) -> anyhow::Result<()> {
        match self {
            TaggedCommands::AddIndex { text, ids, output } => tagged::add_index(text, ids, output),
            TaggedCommands::StripIndex { source, output } => tagged::strip_index(source, output),
        }
    }
}
