//! Error types for mapped-source

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// A splice or substring range does not fit the current text.
    ///
    /// Raised before any mutation, so the buffer is left untouched.
    #[error("offset {offset} + length {length} does not fit text of length {text_len}")]
    InvalidRange {
        offset: usize,
        length: usize,
        text_len: usize,
    },

    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid source map JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported source map version {0} (expected 3)")]
    UnsupportedVersion(u32),

    /// The `mappings` field could not be decoded or encoded
    #[error("invalid mappings: {0}")]
    InvalidMappings(#[from] sourcemap::Error),

    /// A mapping refers to a generated position that does not exist in the text.
    #[error("generated position {line}:{column} is outside of the text")]
    PositionOutOfRange { line: usize, column: usize },

    /// A point offset past the end of the text or inside a character
    #[error("mapped point at offset {offset} is not a position in text of length {text_len}")]
    PointOutOfRange { offset: usize, text_len: usize },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_range_message() {
        let err = Error::InvalidRange {
            offset: 10,
            length: 5,
            text_len: 12,
        };
        assert_eq!(err.to_string(), "offset 10 + length 5 does not fit text of length 12");
    }

    #[test]
    fn test_io_error_keeps_path_and_source() {
        let err = Error::io(
            "missing.js",
            std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        );
        assert!(err.to_string().contains("missing.js"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
