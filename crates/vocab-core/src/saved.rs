//! Saved words list operations.
//!
//! Both functions take the caller's list by reference and hand back a new
//! one, so a failed call leaves nothing half-modified.

use std::collections::BTreeSet;

use vocab_types::{DictionaryEntry, Word};

use crate::error::DictionaryError;

/// Append `word` as a new saved entry
pub fn save(entries: &[DictionaryEntry], word: Word) -> Vec<DictionaryEntry> {
    let mut next = Vec::with_capacity(entries.len() + 1);
    next.extend_from_slice(entries);
    next.push(word.into());
    next
}

/// Remove the entries at `indices`.
///
/// Any offset past the end rejects the whole request with
/// [`DictionaryError::IndexOutOfRange`] for the smallest such offset.
pub fn delete_at(
    entries: &[DictionaryEntry],
    indices: &BTreeSet<usize>,
) -> Result<Vec<DictionaryEntry>, DictionaryError> {
    if let Some(&index) = indices.range(entries.len()..).next() {
        return Err(DictionaryError::IndexOutOfRange {
            index,
            len: entries.len(),
        });
    }

    Ok(entries
        .iter()
        .enumerate()
        .filter(|(i, _)| !indices.contains(i))
        .map(|(_, entry)| entry.clone())
        .collect())
}
