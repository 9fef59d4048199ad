//! Locating DDS textures inside a container file.

use std::ops::Range;

use super::header::SIGNATURE;

/// Every offset where the DDS magic occurs, in ascending order.
///
/// Matches may overlap: the search resumes one byte after each hit.
pub fn find_signatures(data: &[u8]) -> Vec<usize> {
    let mut offsets = Vec::new();
    let mut from = 0;
    while let Some(found) = find_from(data, from) {
        offsets.push(found);
        from = found + 1;
    }
    offsets
}

/// Byte ranges of the textures starting at `offsets`.
///
/// Each texture runs up to the next offset; the last one to end of file.
pub fn split_ranges(offsets: &[usize], total_len: usize) -> Vec<Range<usize>> {
    offsets
        .iter()
        .enumerate()
        .map(|(i, &start)| {
            let end = offsets.get(i + 1).copied().unwrap_or(total_len);
            start..end
        })
        .collect()
}

/// Size of the slot a texture occupies in the container.
///
/// The slot ends at the next DDS magic found at least four bytes past
/// `offset`, or at end of file.
pub fn embedded_len(data: &[u8], offset: usize) -> usize {
    match find_from(data, offset + SIGNATURE.len()) {
        Some(next) => next - offset,
        None => data.len().saturating_sub(offset),
    }
}

fn find_from(data: &[u8], from: usize) -> Option<usize> {
    data.get(from..)?
        .windows(SIGNATURE.len())
        .position(|w| w == SIGNATURE)
        .map(|pos| from + pos)
}
