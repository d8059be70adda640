//! Source map (revision 3) codec
//!
//! The editable buffer only needs two things from a source map: a way to
//! enumerate its mappings ([`MappingReader`]) and a way to record new ones
//! ([`MappingWriter`]). [`SourceMap`] and [`SourceMapGenerator`] implement
//! those on top of the `sourcemap` crate, which owns the VLQ `mappings`
//! encoding.

pub mod decode;
pub mod encode;

pub use decode::SourceMap;
pub use encode::SourceMapGenerator;

use crate::types::Mapping;
use serde::{Deserialize, Serialize};

/// Enumerates the mappings of a parsed source map
pub trait MappingReader {
    /// All mappings in non-decreasing generated position
    fn mappings(&self) -> impl Iterator<Item = Mapping> + '_;
}

/// Accumulates mappings for a new source map
pub trait MappingWriter {
    fn add_mapping(&mut self, mapping: Mapping);
}

/// Top-level fields of a map document, with keys in the order they are written
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct MapDocument {
    pub version: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_root: Option<String>,
    #[serde(default)]
    pub sources: Vec<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sources_content: Option<Vec<Option<String>>>,
    #[serde(default)]
    pub names: Vec<String>,
    pub mappings: String,
}
