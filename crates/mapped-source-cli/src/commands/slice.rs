/*
 * slice.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Slice command implementation
 */

//! Save a byte range of a mapped file as a file of its own.

use std::path::PathBuf;

use anyhow::{Context, Result};

/// Arguments for the slice command
#[derive(Debug)]
pub struct SliceArgs {
    /// Text file to read
    pub file: PathBuf,
    /// First byte of the slice
    pub start: usize,
    /// End of the slice (exclusive)
    pub end: usize,
    /// Output text file
    pub output: PathBuf,
    /// sourceRoot to write, None to keep the input map's
    pub source_root: Option<String>,
    pub compact: bool,
}

/// Execute the slice command
pub fn execute(args: SliceArgs) -> Result<()> {
    let source = super::load(&args.file, None)?;
    let editable = super::editable(&source)?;
    let slice = editable
        .substring(args.start, args.end)
        .with_context(|| {
            format!(
                "Cannot slice {}..{} of {}",
                args.start,
                args.end,
                args.file.display()
            )
        })?;
    let options = super::derived_save_options(&source, args.source_root, args.compact);
    super::save(&slice, &args.output, &options)
}
