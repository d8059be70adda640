//! Offset-ordered list of mapping points

use crate::types::MappedPoint;
use std::ops::Range;

/// Mapping points kept in non-decreasing offset order
///
/// Offsets need not be unique. Lookups use binary search; equal offsets keep
/// the order in which they were inserted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PointList {
    points: Vec<MappedPoint>,
}

impl PointList {
    pub fn new() -> Self {
        PointList { points: Vec::new() }
    }

    /// Build a list from points in any order.
    ///
    /// The sort is stable, so points sharing an offset stay in their given order.
    pub fn from_unsorted(mut points: Vec<MappedPoint>) -> Self {
        points.sort_by_key(|p| p.offset);
        PointList { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn as_slice(&self) -> &[MappedPoint] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MappedPoint> {
        self.points.iter()
    }

    /// Index of the first point whose offset is >= `offset`
    pub fn lower_bound(&self, offset: usize) -> usize {
        self.points.partition_point(|p| p.offset < offset)
    }

    /// Index of the first point whose offset is > `offset`
    pub fn upper_bound(&self, offset: usize) -> usize {
        self.points.partition_point(|p| p.offset <= offset)
    }

    /// Indices of the points with `start <= offset < end`
    pub fn range(&self, start: usize, end: usize) -> Range<usize> {
        self.lower_bound(start)..self.lower_bound(end)
    }

    /// Indices of the points with `start <= offset <= end`
    pub fn range_inclusive(&self, start: usize, end: usize) -> Range<usize> {
        self.lower_bound(start)..self.upper_bound(end)
    }

    /// Remove the points with `start <= offset < end`, returning how many went
    pub fn remove_range(&mut self, start: usize, end: usize) -> usize {
        let range = self.range(start, end);
        let removed = range.len();
        self.points.drain(range);
        removed
    }

    /// Move every point at or after `from` by `delta` bytes.
    ///
    /// Callers guarantee that no shifted point ends up before `from + delta`
    /// nor below zero, which keeps the list ordered.
    pub fn shift_from(&mut self, from: usize, delta: isize) {
        if delta == 0 {
            return;
        }
        let start = self.lower_bound(from);
        for point in &mut self.points[start..] {
            point.offset = point.offset.wrapping_add_signed(delta);
        }
    }

    /// Insert a block of points as one contiguous run.
    ///
    /// The whole block is placed at the lower bound of its first point's
    /// offset; the points are not interleaved individually with the host.
    pub fn insert_block(&mut self, block: impl IntoIterator<Item = MappedPoint>) {
        let mut block = block.into_iter().peekable();
        let Some(first) = block.peek() else {
            return;
        };
        let at = self.lower_bound(first.offset);
        self.points.splice(at..at, block);
    }

    /// Copies of the points in `range`, with `base` subtracted from each offset
    pub fn rebased(&self, range: Range<usize>, base: usize) -> Vec<MappedPoint> {
        self.points[range]
            .iter()
            .map(|p| MappedPoint {
                offset: p.offset - base,
                ..p.clone()
            })
            .collect()
    }

    pub fn into_vec(self) -> Vec<MappedPoint> {
        self.points
    }
}

impl From<Vec<MappedPoint>> for PointList {
    fn from(points: Vec<MappedPoint>) -> Self {
        PointList::from_unsorted(points)
    }
}

impl<'a> IntoIterator for &'a PointList {
    type Item = &'a MappedPoint;
    type IntoIter = std::slice::Iter<'a, MappedPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offsets(list: &PointList) -> Vec<usize> {
        list.iter().map(|p| p.offset).collect()
    }

    fn list(offsets: &[usize]) -> PointList {
        PointList::from_unsorted(offsets.iter().map(|&o| MappedPoint::at(o)).collect())
    }

    #[test]
    fn test_from_unsorted_is_stable() {
        let list = PointList::from_unsorted(vec![
            MappedPoint::at(5).with_name("b"),
            MappedPoint::at(1),
            MappedPoint::at(5).with_name("c"),
        ]);
        assert_eq!(offsets(&list), vec![1, 5, 5]);
        assert_eq!(list.as_slice()[1].name.as_deref(), Some("b"));
        assert_eq!(list.as_slice()[2].name.as_deref(), Some("c"));
    }

    #[test]
    fn test_bounds_with_duplicates() {
        let list = list(&[2, 4, 4, 4, 9]);
        assert_eq!(list.lower_bound(4), 1);
        assert_eq!(list.upper_bound(4), 4);
        assert_eq!(list.lower_bound(0), 0);
        assert_eq!(list.lower_bound(10), 5);
        assert_eq!(list.upper_bound(9), 5);
    }

    #[test]
    fn test_range_inclusive_keeps_end() {
        let list = list(&[1, 6, 11, 12]);
        assert_eq!(list.range(6, 11), 1..2);
        assert_eq!(list.range_inclusive(6, 11), 1..3);
    }

    #[test]
    fn test_remove_range() {
        let mut list = list(&[1, 3, 5, 7]);
        assert_eq!(list.remove_range(3, 7), 2);
        assert_eq!(offsets(&list), vec![1, 7]);

        assert_eq!(list.remove_range(2, 2), 0);
        assert_eq!(offsets(&list), vec![1, 7]);
    }

    #[test]
    fn test_shift_from() {
        let mut list = list(&[1, 3, 5]);
        list.shift_from(3, 10);
        assert_eq!(offsets(&list), vec![1, 13, 15]);

        list.shift_from(13, -4);
        assert_eq!(offsets(&list), vec![1, 9, 11]);
    }

    #[test]
    fn test_insert_block_before_equal_offsets() {
        let mut list = list(&[2, 6, 6]);
        list.insert_block(vec![
            MappedPoint::at(6).with_name("new"),
            MappedPoint::at(6).with_name("newer"),
        ]);
        assert_eq!(offsets(&list), vec![2, 6, 6, 6, 6]);
        assert_eq!(list.as_slice()[1].name.as_deref(), Some("new"));
        assert_eq!(list.as_slice()[2].name.as_deref(), Some("newer"));
        assert_eq!(list.as_slice()[3].name, None);
    }

    #[test]
    fn test_insert_empty_block() {
        let mut list = list(&[2]);
        list.insert_block(Vec::new());
        assert_eq!(offsets(&list), vec![2]);
    }

    #[test]
    fn test_rebased_copies() {
        let list = list(&[4, 6, 9]);
        let rebased = list.rebased(list.range_inclusive(4, 6), 4);
        assert_eq!(
            rebased.iter().map(|p| p.offset).collect::<Vec<_>>(),
            vec![0, 2]
        );
        assert_eq!(offsets(&list), vec![4, 6, 9]);
    }
}
