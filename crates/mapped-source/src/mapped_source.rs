//! Read-only pairing of a text file with its parsed source map

use crate::codec::SourceMap;
use crate::editable::EditableMappedSource;
use crate::error::{Error, Result};
use crate::line_map::LineMap;
use crate::types::{OriginalLocation, Position};
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::{Path, PathBuf};

/// Matches a `//# sourceMappingURL=` comment, on its own line or after code,
/// capturing the URL
static SOURCE_MAPPING_URL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)//# sourceMappingURL=(.*)$").unwrap());

/// A loaded text file and its source map
///
/// This is the origin an [`EditableMappedSource`] is derived from with
/// [`MappedSource::create_editable`]; it is never modified itself.
#[derive(Debug, Clone)]
pub struct MappedSource {
    filename: PathBuf,
    code: String,
    source_map: Option<SourceMap>,
}

impl MappedSource {
    pub fn new(
        filename: impl Into<PathBuf>,
        code: impl Into<String>,
        source_map: Option<SourceMap>,
    ) -> Self {
        MappedSource {
            filename: filename.into(),
            code: code.into(),
            source_map,
        }
    }

    /// Load a text file and its `.map`.
    ///
    /// Without an explicit `map_file`, the last `sourceMappingURL` comment
    /// in the text names it, relative to the text file's directory. A text
    /// with no such comment loads without a map.
    pub fn from_file(path: impl AsRef<Path>, map_file: Option<&Path>) -> Result<Self> {
        let path = path.as_ref();
        let code = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;

        let map_file = match map_file {
            Some(map_file) => Some(map_file.to_path_buf()),
            None => mapping_url(&code).map(|url| {
                path.parent()
                    .unwrap_or_else(|| Path::new(""))
                    .join(url)
            }),
        };

        let source_map = map_file.as_deref().map(SourceMap::from_path).transpose()?;
        tracing::debug!(
            file = %path.display(),
            map_file = ?map_file,
            "Loaded mapped source"
        );

        Ok(Self::new(path, code, source_map))
    }

    pub fn filename(&self) -> &Path {
        &self.filename
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn source_map(&self) -> Option<&SourceMap> {
        self.source_map.as_ref()
    }

    /// Build an editable buffer with one point per mapping in the map
    pub fn create_editable(&self) -> Result<EditableMappedSource> {
        match &self.source_map {
            Some(map) => EditableMappedSource::from_mappings(self.code.clone(), map),
            None => Ok(EditableMappedSource::from_text(self.code.clone())),
        }
    }

    /// Where the text at `offset` came from.
    ///
    /// See [`MappedSource::original_position_for`]; None if `offset` is not a
    /// position in the text.
    pub fn from_offset(&self, offset: usize) -> Option<OriginalLocation> {
        let position = LineMap::new(&self.code).from_offset(offset)?;
        Some(self.original_position_for(position))
    }

    /// Map a position in this file to its original location.
    ///
    /// When the map has an original for it, the source is resolved against
    /// this file's directory. Otherwise the position is in this file itself.
    pub fn original_position_for(&self, position: Position) -> OriginalLocation {
        let mapped = self
            .source_map
            .as_ref()
            .and_then(|map| map.original_position_for(position));

        match mapped {
            Some(mut location) => {
                location.source = self
                    .filename
                    .parent()
                    .unwrap_or_else(|| Path::new(""))
                    .join(&location.source)
                    .to_string_lossy()
                    .into_owned();
                location
            }
            None => OriginalLocation {
                source: self.filename.to_string_lossy().into_owned(),
                line: position.line,
                column: position.column,
                name: None,
            },
        }
    }
}

/// URL from the last `sourceMappingURL` comment in `code`
pub fn mapping_url(code: &str) -> Option<&str> {
    SOURCE_MAPPING_URL
        .captures_iter(code)
        .last()
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim_end())
        .filter(|url| !url.is_empty())
}
