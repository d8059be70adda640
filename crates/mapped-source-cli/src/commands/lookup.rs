/*
 * lookup.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Lookup command implementation
 */

//! Map a byte offset in a generated file back to its original location.

use std::path::PathBuf;

use anyhow::{Context, Result};
use mapped_source::{MappedSource, OriginalLocation};

/// Arguments for the lookup command
#[derive(Debug)]
pub struct LookupArgs {
    /// Text file to read
    pub file: PathBuf,
    /// Byte offset into the text
    pub offset: usize,
    /// Explicit map file
    pub map: Option<PathBuf>,
}

/// Execute the lookup command
pub fn execute(args: LookupArgs) -> Result<()> {
    let source = super::load(&args.file, args.map.as_deref())?;
    let location = lookup(&source, args.offset)?;
    println!("{}", serde_json::to_string_pretty(&location)?);
    Ok(())
}

fn lookup(source: &MappedSource, offset: usize) -> Result<OriginalLocation> {
    source.from_offset(offset).with_context(|| {
        format!(
            "Offset {} is not a position in {} ({} bytes)",
            offset,
            source.filename().display(),
            source.code().len()
        )
    })
}
