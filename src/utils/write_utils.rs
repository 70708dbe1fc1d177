//! Serialization utilities
//!
//! Helpers for laying out directory data: word alignment and entry
//! ordering.

use crate::exif::ifd::IFDEntry;
use std::collections::HashSet;

/// Round a length up to the next 2-byte (TIFF word) boundary
///
/// TIFF requires out-of-line values to begin on a word boundary, so every
/// value in a directory's data block is padded to even length.
pub fn align_to_2_bytes(len: usize) -> usize {
    len + calculate_padding(len)
}

/// Calculate padding required to align to a 2-byte boundary
pub fn calculate_padding(data_len: usize) -> usize {
    data_len % 2
}

/// Get a list of IFD entries sorted by tag number with duplicates removed
///
/// The TIFF specification requires tags to be sorted by ID and ensures
/// each tag appears only once. If multiple entries have the same tag ID,
/// only the last occurrence is kept.
pub fn get_unique_sorted_entries(entries: &[IFDEntry]) -> Vec<IFDEntry> {
    // Stable sort keeps duplicates in their original relative order
    let mut sorted_entries = entries.to_vec();
    sorted_entries.sort_by_key(|entry| entry.tag);

    let mut unique_entries = Vec::with_capacity(sorted_entries.len());
    let mut seen_tags = HashSet::new();

    // Process in reverse to keep the last occurrence of each tag
    for entry in sorted_entries.into_iter().rev() {
        if seen_tags.insert(entry.tag) {
            unique_entries.push(entry);
        }
    }

    unique_entries.reverse();
    unique_entries
}
