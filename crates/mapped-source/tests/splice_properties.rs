/*
 * splice_properties.rs
 *
 * Property tests for splicing: length, shift, drop, sortedness and block
 * merge laws over generated buffers and edits.
 *
 * Copyright (c) 2025 Posit, PBC
 */

use mapped_source::{EditableMappedSource, MappedPoint};
use proptest::prelude::*;

// =============================================================================
// Generators
// =============================================================================

/// ASCII text, so every byte offset is a character boundary
fn gen_text(max: usize) -> impl Strategy<Value = String> {
    let letter = prop_oneof![4 => prop::char::range('a', 'z'), 1 => Just('\n')];
    prop::collection::vec(letter, 0..max).prop_map(|chars| chars.into_iter().collect())
}

/// A buffer whose points are named `{prefix}{i}` in offset order
fn gen_buffer(prefix: &'static str, max: usize) -> impl Strategy<Value = EditableMappedSource> {
    gen_text(max).prop_flat_map(move |text| {
        let len = text.len();
        prop::collection::vec(0..=len, 0..8).prop_map(move |mut offsets| {
            offsets.sort_unstable();
            let points = offsets
                .into_iter()
                .enumerate()
                .map(|(i, offset)| {
                    MappedPoint::at(offset).with_name(format!("{}{}", prefix, i))
                })
                .collect();
            EditableMappedSource::new(text.clone(), points).expect("offsets are in range")
        })
    })
}

/// An edit: selectors for offset and length, plus what to put there
#[derive(Debug, Clone)]
enum Edit {
    Text(usize, usize, String),
    Mapped(usize, usize, EditableMappedSource),
}

fn gen_edit() -> impl Strategy<Value = Edit> {
    prop_oneof![
        (0usize..1000, 0usize..1000, gen_text(6)).prop_map(|(o, l, t)| Edit::Text(o, l, t)),
        (0usize..1000, 0usize..1000, gen_buffer("in", 6))
            .prop_map(|(o, l, b)| Edit::Mapped(o, l, b)),
    ]
}

// =============================================================================
// Helpers
// =============================================================================

/// Pick a valid `(offset, length)` in a text of `len` bytes
fn pick_range(len: usize, offset_selector: usize, length_selector: usize) -> (usize, usize) {
    let offset = offset_selector % (len + 1);
    let length = length_selector % (len - offset + 1);
    (offset, length)
}

fn labels(buffer: &EditableMappedSource) -> Vec<(usize, String)> {
    buffer
        .points()
        .iter()
        .map(|p| (p.offset, p.name.clone().unwrap_or_default()))
        .collect()
}

fn assert_well_formed(buffer: &EditableMappedSource) {
    let offsets = buffer.offsets();
    assert!(
        offsets.windows(2).all(|w| w[0] <= w[1]),
        "points out of order: {:?}",
        offsets
    );
    assert!(
        offsets.iter().all(|&o| o <= buffer.len()),
        "point past end of {} bytes: {:?}",
        buffer.len(),
        offsets
    );
}

/// Expected points after replacing `[offset, offset + length)` with
/// `inserted_len` bytes carrying `block` (already rebased)
fn expected_after_splice(
    before: &[(usize, String)],
    offset: usize,
    length: usize,
    inserted_len: usize,
    block: Vec<(usize, String)>,
) -> Vec<(usize, String)> {
    let end = offset + length;
    let head = before.iter().filter(|(o, _)| *o < offset).cloned();
    let tail = before
        .iter()
        .filter(|(o, _)| *o >= end)
        .map(|(o, name)| (o + inserted_len - length, name.clone()));
    head.chain(block).chain(tail).collect()
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn proptest_text_splice_laws(
        buffer in gen_buffer("h", 40),
        offset_selector in 0usize..1000,
        length_selector in 0usize..1000,
        inserted in gen_text(10),
    ) {
        let (offset, length) = pick_range(buffer.len(), offset_selector, length_selector);
        let before = labels(&buffer);
        let mut edited = buffer.clone();
        edited.splice(offset, length, &inserted).unwrap();

        // Length law
        prop_assert_eq!(edited.len(), buffer.len() - length + inserted.len());
        let text = buffer.text();
        prop_assert_eq!(
            edited.text(),
            format!("{}{}{}", &text[..offset], inserted, &text[offset + length..])
        );

        // Shift and drop laws
        let expected = expected_after_splice(&before, offset, length, inserted.len(), Vec::new());
        prop_assert_eq!(labels(&edited), expected);
        assert_well_formed(&edited);
    }

    #[test]
    fn proptest_mapped_splice_merges_one_block(
        buffer in gen_buffer("h", 40),
        offset_selector in 0usize..1000,
        length_selector in 0usize..1000,
        block in gen_buffer("in", 10),
    ) {
        let (offset, length) = pick_range(buffer.len(), offset_selector, length_selector);
        let before = labels(&buffer);
        let mut edited = buffer.clone();
        edited.splice(offset, length, &block).unwrap();

        // Merge count law: every contributed point arrives, rebased by `offset`
        let rebased: Vec<(usize, String)> = labels(&block)
            .into_iter()
            .map(|(o, name)| (o + offset, name))
            .collect();
        let kept = expected_after_splice(&before, offset, length, block.len(), Vec::new()).len();
        prop_assert_eq!(edited.points().len(), kept + block.points().len());

        // ... as one contiguous run between the host's head and tail
        let expected = expected_after_splice(&before, offset, length, block.len(), rebased);
        prop_assert_eq!(labels(&edited), expected);
        assert_well_formed(&edited);
    }

    #[test]
    fn proptest_substring_keeps_inclusive_range(
        buffer in gen_buffer("h", 40),
        start_selector in 0usize..1000,
        length_selector in 0usize..1000,
    ) {
        let (start, length) = pick_range(buffer.len(), start_selector, length_selector);
        let end = start + length;
        let slice = buffer.substring(start, end).unwrap();

        prop_assert_eq!(slice.text(), &buffer.text()[start..end]);
        let expected: Vec<(usize, String)> = labels(&buffer)
            .into_iter()
            .filter(|(o, _)| start <= *o && *o <= end)
            .map(|(o, name)| (o - start, name))
            .collect();
        prop_assert_eq!(labels(&slice), expected);
        assert_well_formed(&slice);
    }

    #[test]
    fn proptest_edit_sequences_stay_sorted(
        buffer in gen_buffer("h", 30),
        edits in prop::collection::vec(gen_edit(), 1..12),
    ) {
        let mut current = buffer;
        for edit in edits {
            let before_len = current.len();
            let (offset, length, inserted_len) = match edit {
                Edit::Text(o, l, text) => {
                    let (offset, length) = pick_range(before_len, o, l);
                    current.splice(offset, length, &text).unwrap();
                    (offset, length, text.len())
                }
                Edit::Mapped(o, l, block) => {
                    let (offset, length) = pick_range(before_len, o, l);
                    current.splice(offset, length, &block).unwrap();
                    (offset, length, block.len())
                }
            };
            prop_assert!(offset + length <= before_len);
            prop_assert_eq!(current.len(), before_len - length + inserted_len);
            assert_well_formed(&current);
        }
    }
}
