//! Editable text with mapping points that follow every edit

use crate::codec::{MappingReader, MappingWriter};
use crate::error::{Error, Result};
use crate::line_map::LineMap;
use crate::points::PointList;
use crate::types::{MappedPoint, Mapping};

/// A text buffer plus the mapping points that tie its offsets back to
/// original sources
///
/// Every edit keeps the points consistent with the new text:
/// - points before the edited range are untouched
/// - points inside the replaced range are dropped
/// - points after it shift by the change in length
/// - points carried by an inserted [`EditableMappedSource`] are copied in
///
/// # Example
///
/// ```rust
/// use mapped_source::{EditableMappedSource, MappedPoint};
///
/// let mut ems = EditableMappedSource::new(
///     "Hello World!",
///     vec![MappedPoint::at(6), MappedPoint::at(11)],
/// )
/// .unwrap();
/// ems.insert(0, "!!!!!").unwrap();
///
/// assert_eq!(ems.text(), "!!!!!Hello World!");
/// assert_eq!(ems.offsets(), vec![11, 16]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditableMappedSource {
    text: String,
    points: PointList,
}

/// What to put in place of a spliced range
#[derive(Debug, Clone, Copy)]
pub enum Replacement<'a> {
    Text(&'a str),
    /// Text together with its own points, which are merged into the host
    Mapped(&'a EditableMappedSource),
}

impl Replacement<'_> {
    fn text(&self) -> &str {
        match self {
            Replacement::Text(text) => *text,
            Replacement::Mapped(source) => source.text.as_str(),
        }
    }
}

impl<'a> From<&'a str> for Replacement<'a> {
    fn from(text: &'a str) -> Self {
        Replacement::Text(text)
    }
}

impl<'a> From<&'a String> for Replacement<'a> {
    fn from(text: &'a String) -> Self {
        Replacement::Text(text)
    }
}

impl<'a> From<&'a EditableMappedSource> for Replacement<'a> {
    fn from(source: &'a EditableMappedSource) -> Self {
        Replacement::Mapped(source)
    }
}

impl EditableMappedSource {
    /// Create a buffer from text and points in any order
    ///
    /// Points are stably sorted by offset, so points sharing an offset keep
    /// their given order. Every offset must be a character boundary of
    /// `text` (the end of the text included); otherwise this fails with
    /// [`Error::PointOutOfRange`].
    pub fn new(text: impl Into<String>, points: Vec<MappedPoint>) -> Result<Self> {
        let text = text.into();
        if let Some(point) = points.iter().find(|p| !text.is_char_boundary(p.offset)) {
            return Err(Error::PointOutOfRange {
                offset: point.offset,
                text_len: text.len(),
            });
        }
        Ok(Self::from_parts(text, points))
    }

    /// Create a buffer with no points
    pub fn from_text(text: impl Into<String>) -> Self {
        Self::from_parts(text.into(), Vec::new())
    }

    /// Points must already be valid offsets into `text`
    pub(crate) fn from_parts(text: String, points: Vec<MappedPoint>) -> Self {
        EditableMappedSource {
            text,
            points: PointList::from_unsorted(points),
        }
    }

    /// Create a buffer from text and the mappings a source map reader yields
    /// for it, converting each generated position to an offset
    pub fn from_mappings(text: impl Into<String>, reader: &impl MappingReader) -> Result<Self> {
        let text = text.into();
        let line_map = LineMap::new(&text);

        let points = reader
            .mappings()
            .map(|mapping| {
                let generated = mapping.generated;
                let offset = line_map
                    .to_offset(generated)
                    .ok_or(Error::PositionOutOfRange {
                        line: generated.line,
                        column: generated.column,
                    })?;
                Ok(MappedPoint {
                    offset,
                    source: mapping.source,
                    name: mapping.name,
                    original_line: mapping.original.map(|p| p.line),
                    original_column: mapping.original.map(|p| p.column),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self::from_parts(text, points))
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length of the text in bytes
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The points in non-decreasing offset order
    pub fn points(&self) -> &[MappedPoint] {
        self.points.as_slice()
    }

    /// Offsets of all points, in order
    pub fn offsets(&self) -> Vec<usize> {
        self.points.iter().map(|p| p.offset).collect()
    }

    pub fn into_parts(self) -> (String, Vec<MappedPoint>) {
        (self.text, self.points.into_vec())
    }

    /// Replace `length` bytes at `offset` with `replacement`.
    ///
    /// Points inside `[offset, offset + length)` are dropped and points after
    /// it shift by the change in length. If the replacement is another
    /// [`EditableMappedSource`], its points are rebased by `offset` and
    /// inserted as one contiguous block, positioned by the first of them.
    ///
    /// Fails with [`Error::InvalidRange`] without touching the buffer if the
    /// range runs past the end of the text or splits a character.
    pub fn splice<'a>(
        &mut self,
        offset: usize,
        length: usize,
        replacement: impl Into<Replacement<'a>>,
    ) -> Result<()> {
        let replacement = replacement.into();
        let end = self.check_range(offset, length)?;

        let inserted = replacement.text();
        self.text.replace_range(offset..end, inserted);

        let dropped = self.points.remove_range(offset, end);
        // Points at or past `offset` now all started at or past `end`
        let delta = inserted.len() as isize - length as isize;
        self.points.shift_from(offset, delta);

        if let Replacement::Mapped(source) = replacement {
            self.points.insert_block(source.points.iter().map(|p| MappedPoint {
                offset: p.offset + offset,
                ..p.clone()
            }));
        }

        tracing::trace!(
            offset,
            length,
            inserted = inserted.len(),
            dropped,
            "Spliced mapped source"
        );
        Ok(())
    }

    /// Insert text or another mapped source at `offset`
    pub fn insert<'a>(&mut self, offset: usize, part: impl Into<Replacement<'a>>) -> Result<()> {
        self.splice(offset, 0, part)
    }

    /// Delete `length` bytes at `offset`
    pub fn delete(&mut self, offset: usize, length: usize) -> Result<()> {
        self.splice(offset, length, "")
    }

    /// Append text or another mapped source at the end
    pub fn append<'a>(&mut self, part: impl Into<Replacement<'a>>) -> Result<()> {
        self.splice(self.text.len(), 0, part)
    }

    /// Copy out `[start, end)` as a new, independent buffer.
    ///
    /// Points with `start <= offset <= end` are kept, rebased to the new
    /// text. The end is inclusive so that a point marking the end of the
    /// extracted range survives.
    pub fn substring(&self, start: usize, end: usize) -> Result<EditableMappedSource> {
        let length = end.checked_sub(start).ok_or(Error::InvalidRange {
            offset: start,
            length: 0,
            text_len: self.text.len(),
        })?;
        self.check_range(start, length)?;

        let range = self.points.range_inclusive(start, end);
        Ok(EditableMappedSource {
            text: self.text[start..end].to_string(),
            points: PointList::from_unsorted(self.points.rebased(range, start)),
        })
    }

    /// Hand every point to a source map writer, converting offsets to
    /// generated positions
    pub fn write_mappings(&self, writer: &mut impl MappingWriter) -> Result<()> {
        let line_map = LineMap::new(&self.text);
        for point in &self.points {
            let generated = line_map
                .from_offset(point.offset)
                .ok_or(Error::PointOutOfRange {
                    offset: point.offset,
                    text_len: self.text.len(),
                })?;
            writer.add_mapping(Mapping {
                generated,
                source: point.source.clone(),
                original: point.original(),
                name: point.name.clone(),
            });
        }
        Ok(())
    }

    /// Validate `[offset, offset + length)` and return its end
    fn check_range(&self, offset: usize, length: usize) -> Result<usize> {
        let invalid = || Error::InvalidRange {
            offset,
            length,
            text_len: self.text.len(),
        };
        let end = offset.checked_add(length).ok_or_else(invalid)?;
        if end > self.text.len()
            || !self.text.is_char_boundary(offset)
            || !self.text.is_char_boundary(end)
        {
            return Err(invalid());
        }
        Ok(end)
    }
}

impl From<String> for EditableMappedSource {
    fn from(text: String) -> Self {
        Self::from_text(text)
    }
}

impl From<&str> for EditableMappedSource {
    fn from(text: &str) -> Self {
        Self::from_text(text)
    }
}
