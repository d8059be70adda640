//! Core types for mapped sources

use serde::{Deserialize, Serialize};

/// A line/column position in a text (line 1-based, column 0-based)
///
/// Columns are counted in UTF-16 code units, which is what the JSON source
/// map format uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Line number (1-based)
    pub line: usize,
    /// Column number (0-based)
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Position { line, column }
    }
}

/// A single mapping anchor tying a buffer offset to an original location
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MappedPoint {
    /// Byte offset into the owning buffer's text
    pub offset: usize,
    /// Original file this point refers to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Name of the mapped location
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Original line number (1-based)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_line: Option<usize>,
    /// Original column number (0-based)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_column: Option<usize>,
}

impl MappedPoint {
    /// A point with no original-source information
    pub fn at(offset: usize) -> Self {
        MappedPoint {
            offset,
            ..Default::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_original(mut self, source: impl Into<String>, line: usize, column: usize) -> Self {
        self.source = Some(source.into());
        self.original_line = Some(line);
        self.original_column = Some(column);
        self
    }

    /// The original position, if both line and column are known
    pub fn original(&self) -> Option<Position> {
        match (self.original_line, self.original_column) {
            (Some(line), Some(column)) => Some(Position { line, column }),
            _ => None,
        }
    }
}

/// One mapping as exchanged with a source map reader or writer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mapping {
    /// Position in the generated text
    pub generated: Position,
    pub source: Option<String>,
    /// Position in the original source
    pub original: Option<Position>,
    pub name: Option<String>,
}

/// Result of mapping a generated position back to where it came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OriginalLocation {
    pub source: String,
    pub line: usize,
    pub column: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}
