//! Parsing source map JSON into a queryable form

use super::{MapDocument, MappingReader};
use crate::error::{Error, Result};
use crate::types::{Mapping, OriginalLocation, Position};
use std::path::Path;

/// A parsed source map
///
/// The `mappings` field is decoded by [`sourcemap`]. Source ids are kept as
/// written: [`MappingReader::mappings`] yields them unchanged, so a load and
/// save under the same `sourceRoot` writes the same map, while
/// [`SourceMap::sources`] and [`SourceMap::original_position_for`] resolve
/// them against `sourceRoot`.
#[derive(Debug, Clone)]
pub struct SourceMap {
    file: Option<String>,
    source_root: Option<String>,
    raw_sources: Vec<Option<String>>,
    /// `raw_sources` joined onto a non-empty `source_root`
    sources: Vec<Option<String>>,
    sources_content: Option<Vec<Option<String>>>,
    names: Vec<String>,
    decoded: sourcemap::SourceMap,
}

impl SourceMap {
    /// Parse a source map from its JSON text
    pub fn from_json(json: &str) -> Result<Self> {
        let document: MapDocument = serde_json::from_str(json)?;
        if document.version != 3 {
            return Err(Error::UnsupportedVersion(document.version));
        }
        let decoded = sourcemap::SourceMap::from_slice(json.as_bytes())?;

        let root = document.source_root.as_deref();
        let sources = document
            .sources
            .iter()
            .map(|source| source.as_deref().map(|s| resolve_source(root, s)))
            .collect();

        Ok(SourceMap {
            file: document.file,
            source_root: document.source_root,
            raw_sources: document.sources,
            sources,
            sources_content: document.sources_content,
            names: document.names,
            decoded,
        })
    }

    /// Read and parse a `.map` file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let map = Self::from_json(&json)?;
        tracing::debug!(
            map_file = %path.display(),
            segments = map.segment_count(),
            "Loaded source map"
        );
        Ok(map)
    }

    pub fn file(&self) -> Option<&str> {
        self.file.as_deref()
    }

    pub fn source_root(&self) -> Option<&str> {
        self.source_root.as_deref()
    }

    /// Sources, resolved against `sourceRoot`
    pub fn sources(&self) -> &[Option<String>] {
        &self.sources
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Embedded content for a (resolved) source, if the map carries it
    pub fn source_content(&self, source: &str) -> Option<&str> {
        let index = self
            .sources
            .iter()
            .position(|s| s.as_deref() == Some(source))?;
        self.sources_content.as_ref()?.get(index)?.as_deref()
    }

    /// Number of segments in `mappings`
    pub fn segment_count(&self) -> usize {
        self.decoded.tokens().count()
    }

    /// Find where a generated position came from.
    ///
    /// Uses the closest segment at or before `generated` on the same line.
    /// Returns None if there is no such segment or it has no original source.
    pub fn original_position_for(&self, generated: Position) -> Option<OriginalLocation> {
        let line = u32::try_from(generated.line.checked_sub(1)?).ok()?;
        let column = u32::try_from(generated.column).ok()?;

        let token = self.decoded.lookup_token(line, column)?;
        if token.get_dst_line() != line {
            return None;
        }
        let index = self.source_index(&token)?;

        Some(OriginalLocation {
            source: self.sources[index].clone()?,
            line: token.get_src_line() as usize + 1,
            column: token.get_src_col() as usize,
            name: token.get_name().map(str::to_string),
        })
    }

    /// Index into the sources, None for a generated-only segment
    fn source_index(&self, token: &sourcemap::Token<'_>) -> Option<usize> {
        let index = usize::try_from(token.get_src_id()).ok()?;
        (index < self.raw_sources.len()).then_some(index)
    }

    fn mapping_for(&self, token: &sourcemap::Token<'_>) -> Mapping {
        let generated = Position::new(
            token.get_dst_line() as usize + 1,
            token.get_dst_col() as usize,
        );
        match self.source_index(token) {
            Some(index) => Mapping {
                generated,
                source: self.raw_sources[index].clone(),
                original: Some(Position::new(
                    token.get_src_line() as usize + 1,
                    token.get_src_col() as usize,
                )),
                name: token.get_name().map(str::to_string),
            },
            None => Mapping {
                generated,
                source: None,
                original: None,
                name: None,
            },
        }
    }
}

impl MappingReader for SourceMap {
    fn mappings(&self) -> impl Iterator<Item = Mapping> + '_ {
        let mut mappings: Vec<Mapping> = self
            .decoded
            .tokens()
            .map(|token| self.mapping_for(&token))
            .collect();
        // Stable, so segments sharing a column keep their order in the file
        mappings.sort_by_key(|m| m.generated);
        mappings.into_iter()
    }
}

fn resolve_source(root: Option<&str>, source: &str) -> String {
    match root {
        Some(root) if !root.is_empty() => {
            if root.ends_with('/') {
                format!("{}{}", root, source)
            } else {
                format!("{}/{}", root, source)
            }
        }
        _ => source.to_string(),
    }
}
