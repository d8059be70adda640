/*
 * info.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Info command implementation
 */

//! Print a summary of a mapped file as JSON.

use std::path::PathBuf;

use anyhow::Result;
use mapped_source::{EditableMappedSource, LineMap, MappedSource};
use serde_json::{Value, json};

/// Arguments for the info command
#[derive(Debug)]
pub struct InfoArgs {
    /// Text file to read
    pub file: PathBuf,
    /// Explicit map file
    pub map: Option<PathBuf>,
}

/// Execute the info command
pub fn execute(args: InfoArgs) -> Result<()> {
    let source = super::load(&args.file, args.map.as_deref())?;
    let editable = super::editable(&source)?;

    let report = summary(&source, &editable);
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn summary(source: &MappedSource, editable: &EditableMappedSource) -> Value {
    json!({
        "file": source.filename().display().to_string(),
        "length": editable.len(),
        "lines": LineMap::new(editable.text()).line_count(),
        "sources": source.source_map().map(|map| map.sources()),
        "points": editable.points(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::write_hello;
    use tempfile::TempDir;

    #[test]
    fn test_summary() {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = write_hello(temp.path(), "hello.txt");

        let source = MappedSource::from_file(&path, None).unwrap();
        let editable = source.create_editable().unwrap();
        let report = summary(&source, &editable);

        assert_eq!(report["length"], 48);
        assert_eq!(report["lines"], 3);
        assert_eq!(report["sources"], json!(["original.txt"]));
        assert_eq!(
            report["points"][0],
            json!({
                "offset": 6,
                "source": "original.txt",
                "name": "world start",
                "originalLine": 11,
                "originalColumn": 16
            })
        );
    }

    #[test]
    fn test_missing_file() {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let err = execute(InfoArgs {
            file: temp.path().join("missing.txt"),
            map: None,
        })
        .unwrap_err();
        assert!(err.to_string().starts_with("Failed to load"));
    }
}
