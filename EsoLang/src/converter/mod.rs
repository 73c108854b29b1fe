//! Text conversion utilities
//!
//! - Hangul ↔ client CJK range remapping for Korean translations

pub mod hangul;

/// Progress callback type for conversion operations.
/// The callback receives a message describing the current step.
pub type ProgressCallback<'a> = &'a dyn Fn(&str);

pub use hangul::{
    RemapDirection, from_client, remap, remap_file, remap_file_with_progress, to_client,
};
