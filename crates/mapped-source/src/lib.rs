//! Editable text with source mapping
//!
//! This crate keeps a text buffer together with an ordered set of mapping
//! points that tie offsets in the text back to locations in original
//! sources. Edits (insert, delete, replace, substring, inserting another
//! mapped buffer) keep every point consistent with the new text, and the
//! result can be saved as a text file plus a standard `.map` file.
//!
//! # Overview
//!
//! The core types are:
//! - [`EditableMappedSource`]: The editable buffer and its points
//! - [`MappedPoint`]: One anchor from a buffer offset to an original location
//! - [`MappedSource`]: A loaded text file and its parsed source map
//! - [`SourceMap`] / [`SourceMapGenerator`]: Source map JSON reader and writer
//! - [`LineMap`]: Offset to line/column conversion
//!
//! # Example
//!
//! ```rust
//! use mapped_source::{EditableMappedSource, MappedPoint};
//!
//! let mut host = EditableMappedSource::new(
//!     "Hello World!",
//!     vec![MappedPoint::at(6).with_name("world start")],
//! )
//! .unwrap();
//! let there = EditableMappedSource::new(
//!     "there ",
//!     vec![MappedPoint::at(0).with_name("there start")],
//! )
//! .unwrap();
//!
//! host.insert(6, &there).unwrap();
//!
//! assert_eq!(host.text(), "Hello there World!");
//! assert_eq!(host.offsets(), vec![6, 12]);
//! ```

pub mod codec;
pub mod editable;
pub mod error;
pub mod line_map;
pub mod mapped_source;
pub mod points;
pub mod save;
pub mod types;

// Re-export main types
pub use codec::{MappingReader, MappingWriter, SourceMap, SourceMapGenerator};
pub use editable::{EditableMappedSource, Replacement};
pub use error::{Error, Result};
pub use line_map::LineMap;
pub use mapped_source::{MappedSource, mapping_url};
pub use points::PointList;
pub use save::{SaveOptions, map_path_for};
pub use types::{MappedPoint, Mapping, OriginalLocation, Position};
