//! Conversion between byte offsets and line/column positions

use crate::types::Position;

/// Line index over a fixed text
///
/// Scans the text once to record where each line starts, so that
/// offset-to-position lookups are a binary search plus a scan of one line.
/// Lines are 1-based; columns are 0-based UTF-16 code units.
#[derive(Debug, Clone)]
pub struct LineMap<'a> {
    text: &'a str,
    /// Byte offset of the first character of each line
    line_starts: Vec<usize>,
}

impl<'a> LineMap<'a> {
    /// Build the line index for `text`
    ///
    /// # Example
    ///
    /// ```
    /// use mapped_source::{LineMap, Position};
    ///
    /// let map = LineMap::new("hello\nworld");
    /// assert_eq!(map.from_offset(6), Some(Position::new(2, 0)));
    /// assert_eq!(map.to_offset(Position::new(2, 0)), Some(6));
    /// ```
    pub fn new(text: &'a str) -> Self {
        let line_starts = std::iter::once(0)
            .chain(
                text.bytes()
                    .enumerate()
                    .filter_map(|(idx, b)| (b == b'\n').then_some(idx + 1)),
            )
            .collect();
        LineMap { text, line_starts }
    }

    /// Number of lines; a text ending in a newline has an empty last line
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Convert a byte offset to a position.
    ///
    /// Returns None past the end of the text or inside a multi-byte character.
    /// An offset on a newline belongs to the line it terminates.
    pub fn from_offset(&self, offset: usize) -> Option<Position> {
        if !self.text.is_char_boundary(offset) {
            return None;
        }

        let row = self.line_starts.partition_point(|&start| start <= offset) - 1;
        let line_start = self.line_starts[row];
        let column = self.text[line_start..offset].encode_utf16().count();

        Some(Position {
            line: row + 1,
            column,
        })
    }

    /// Convert a position back to a byte offset.
    ///
    /// Returns None for a line that does not exist, or a column beyond the end
    /// of its line (the position of the terminating newline is still valid).
    pub fn to_offset(&self, position: Position) -> Option<usize> {
        let row = position.line.checked_sub(1)?;
        let line_start = *self.line_starts.get(row)?;
        let line_end = match self.line_starts.get(row + 1) {
            Some(next) => next - 1,
            None => self.text.len(),
        };

        let mut units = 0;
        for (idx, ch) in self.text[line_start..line_end].char_indices() {
            if units == position.column {
                return Some(line_start + idx);
            }
            units += ch.len_utf16();
            if units > position.column {
                // Column points into the middle of a surrogate pair
                return None;
            }
        }

        (units == position.column).then_some(line_end)
    }
}
