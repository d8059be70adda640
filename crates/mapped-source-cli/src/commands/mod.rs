//! Command implementations for the mapped-source CLI
//!
//! Each command module handles the CLI interface and delegates to the
//! mapped-source library for the actual work.

pub mod concat;
pub mod info;
pub mod lookup;
pub mod resave;
pub mod slice;

use std::path::Path;

use anyhow::{Context, Result};
use mapped_source::{EditableMappedSource, MappedSource, SaveOptions};

/// Save options from the `--source-root` and `--compact` flags
pub fn save_options(source_root: Option<String>, compact: bool) -> SaveOptions {
    SaveOptions {
        source_root: source_root.unwrap_or_default(),
        pretty: !compact,
    }
}

/// Save options for output derived from `source`.
///
/// Without `--source-root` the input map's own root is written back, since
/// the sources in the map are relative to it.
pub(crate) fn derived_save_options(
    source: &MappedSource,
    source_root: Option<String>,
    compact: bool,
) -> SaveOptions {
    let source_root = source_root.or_else(|| {
        source
            .source_map()
            .and_then(|map| map.source_root())
            .map(str::to_string)
    });
    save_options(source_root, compact)
}

pub(crate) fn load(file: &Path, map: Option<&Path>) -> Result<MappedSource> {
    let source = MappedSource::from_file(file, map);
    source.with_context(|| format!("Failed to load {}", file.display()))
}

pub(crate) fn editable(source: &MappedSource) -> Result<EditableMappedSource> {
    source
        .create_editable()
        .with_context(|| format!("Failed to read the mappings of {}", source.filename().display()))
}

pub(crate) fn load_editable(file: &Path, map: Option<&Path>) -> Result<EditableMappedSource> {
    editable(&load(file, map)?)
}

pub(crate) fn save(
    editable: &EditableMappedSource,
    output: &Path,
    options: &SaveOptions,
) -> Result<()> {
    editable
        .save_with_options(output, options)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    tracing::info!(
        "Wrote {} ({} bytes, {} points)",
        output.display(),
        editable.len(),
        editable.points().len()
    );
    Ok(())
}

#[cfg(test)]
pub(crate) mod test_support {
    use mapped_source::{EditableMappedSource, MappedPoint, MappedSource};
    use std::path::{Path, PathBuf};

    /// Save the "Hello World!" buffer as `name` in `dir`
    pub fn write_hello(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        EditableMappedSource::new(
            "Hello World!\n",
            vec![
                MappedPoint::at(6)
                    .with_name("world start")
                    .with_original("original.txt", 11, 16),
                MappedPoint::at(11)
                    .with_name("world end")
                    .with_original("original.txt", 11, 21),
            ],
        )
        .unwrap()
        .save(&path)
        .unwrap();
        path
    }

    /// Save the "Hello World!" buffer as `name` in `dir` with a `sourceRoot`
    pub fn write_hello_with_root(dir: &Path, name: &str, source_root: &str) -> PathBuf {
        let path = write_hello(dir, name);
        let options = mapped_source::SaveOptions {
            source_root: source_root.to_string(),
            pretty: true,
        };
        MappedSource::from_file(&path, None)
            .unwrap()
            .create_editable()
            .unwrap()
            .save_with_options(&path, &options)
            .unwrap();
        path
    }
}
