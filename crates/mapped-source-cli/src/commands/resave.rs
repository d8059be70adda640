/*
 * resave.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Resave command implementation
 */

//! Load a mapped file and write it back out, normalizing its map.

use std::path::PathBuf;

use anyhow::Result;

/// Arguments for the resave command
#[derive(Debug)]
pub struct ResaveArgs {
    /// Text file to read
    pub file: PathBuf,
    /// Explicit map file
    pub map: Option<PathBuf>,
    /// Output text file
    pub output: PathBuf,
    /// sourceRoot to write, None to keep the input map's
    pub source_root: Option<String>,
    pub compact: bool,
}

/// Execute the resave command
pub fn execute(args: ResaveArgs) -> Result<()> {
    let source = super::load(&args.file, args.map.as_deref())?;
    let editable = super::editable(&source)?;
    let options = super::derived_save_options(&source, args.source_root, args.compact);
    super::save(&editable, &args.output, &options)
}
