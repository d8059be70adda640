//! Building source map JSON from mappings

use super::{MapDocument, MappingWriter};
use crate::error::Result;
use crate::types::Mapping;

/// Collects mappings and serializes them as a revision 3 source map
///
/// Mappings are encoded in generated order; sources and names are interned
/// in the order they first appear there.
#[derive(Debug, Clone, Default)]
pub struct SourceMapGenerator {
    file: Option<String>,
    source_root: Option<String>,
    mappings: Vec<Mapping>,
}

impl SourceMapGenerator {
    pub fn new(file: impl Into<String>, source_root: impl Into<String>) -> Self {
        SourceMapGenerator {
            file: Some(file.into()),
            source_root: Some(source_root.into()),
            mappings: Vec::new(),
        }
    }

    /// Run the mappings through the `sourcemap` encoder
    fn encode(&self) -> Result<MapDocument> {
        let mut mappings: Vec<&Mapping> = self.mappings.iter().collect();
        mappings.sort_by_key(|m| m.generated);

        let mut builder = sourcemap::SourceMapBuilder::new(None);
        for mapping in mappings {
            let line = (mapping.generated.line - 1) as u32;
            let column = mapping.generated.column as u32;
            match (mapping.source.as_deref(), mapping.original) {
                (Some(source), Some(original)) if original.line > 0 => {
                    builder.add(
                        line,
                        column,
                        (original.line - 1) as u32,
                        original.column as u32,
                        Some(source),
                        mapping.name.as_deref(),
                        false,
                    );
                }
                _ => {
                    builder.add(line, column, u32::MAX, u32::MAX, None, None, false);
                }
            }
        }

        let mut buf: Vec<u8> = Vec::new();
        builder.into_sourcemap().to_writer(&mut buf)?;
        Ok(serde_json::from_slice(&buf)?)
    }

    /// Serialize to JSON, pretty-printed with two-space indentation if `pretty`
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let encoded = self.encode()?;
        let document = MapDocument {
            version: 3,
            file: self.file.clone(),
            source_root: self.source_root.clone(),
            sources: encoded.sources,
            sources_content: None,
            names: encoded.names,
            mappings: encoded.mappings,
        };

        let json = if pretty {
            serde_json::to_string_pretty(&document)?
        } else {
            serde_json::to_string(&document)?
        };
        Ok(json)
    }
}

impl MappingWriter for SourceMapGenerator {
    /// Record one mapping.
    ///
    /// A mapping without both a source and an original position is written
    /// as a generated-only segment, and its name is dropped.
    fn add_mapping(&mut self, mapping: Mapping) {
        if mapping.generated.line == 0 {
            return;
        }
        self.mappings.push(mapping);
    }
}
