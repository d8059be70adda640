/*
 * concat.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Concat command implementation
 */

//! Join mapped files into one file with a combined map.
//!
//! Source paths are copied as each input's map records them, so inputs
//! should share a directory with the output.

use std::path::PathBuf;

use anyhow::{Context, Result};
use mapped_source::{EditableMappedSource, SaveOptions};
use tracing::debug;

/// Arguments for the concat command
#[derive(Debug)]
pub struct ConcatArgs {
    /// Text files to join, in order
    pub files: Vec<PathBuf>,
    /// Output text file
    pub output: PathBuf,
    pub options: SaveOptions,
}

/// Execute the concat command
pub fn execute(args: ConcatArgs) -> Result<()> {
    let mut combined = EditableMappedSource::default();

    for file in &args.files {
        let part = super::load_editable(file, None)?;
        // A part without a final newline would run into the next one
        if !combined.is_empty() && !combined.text().ends_with('\n') {
            combined.append("\n")?;
        }
        combined
            .append(&part)
            .with_context(|| format!("Failed to append {}", file.display()))?;
        debug!(file = %file.display(), points = part.points().len(), "Appended part");
    }

    super::save(&combined, &args.output, &args.options)
}
