use crate::catalog::Record;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Per-record searchable text blobs over contributor names, keyed by
/// issue number.
///
/// Built once per loaded dataset; [`SearchIndex::filter`] runs per
/// keystroke and touches nothing mutable, so overlapping UI events are
/// safe by construction.
#[derive(Clone, Serialize, Debug)]
pub struct SearchIndex {
    entries: BTreeMap<u32, String>,
}

/// Lowercase, then keep only ASCII lowercase letters and spaces.
///
/// Deliberately aggressive: digits, hyphens, apostrophes and accented
/// letters are all stripped. This mirrors the established behavior of
/// the page; widening it changes search recall and is a product call.
fn normalize(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || *c == ' ')
        .collect()
}

/// Index the four contributor-role fields of each record.
pub fn build_search_index(records: &[Record]) -> SearchIndex {
    let entries = records
        .iter()
        .map(|record| (record.number, normalize(&record.contributor_fields().join(" "))))
        .collect();
    SearchIndex { entries }
}

impl SearchIndex {
    /// Ids whose indexed text contains `query` as a substring.
    ///
    /// The query goes through the same normalization as the index; an
    /// empty query matches every record.
    pub fn filter(&self, query: &str) -> BTreeSet<u32> {
        let needle = normalize(query);
        self.entries
            .iter()
            .filter(|(_, blob)| blob.contains(&needle))
            .map(|(number, _)| *number)
            .collect()
    }

    pub fn ids(&self) -> impl Iterator<Item = u32> + '_ {
        self.entries.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
