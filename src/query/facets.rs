use crate::catalog::Record;
use std::collections::{BTreeMap, BTreeSet};

/// Deduplicated set of contributor names across all four role fields.
///
/// Names are kept as written, case-sensitively; case folding belongs to
/// the search index, not to the suggestion labels. The set is
/// order-independent by construction.
pub fn derive_author_facet(records: &[Record]) -> BTreeSet<String> {
    let mut facet = BTreeSet::new();
    for record in records {
        for name in record.contributors() {
            facet.insert(name.to_owned());
        }
    }
    facet
}

/// Count of records per release year.
///
/// Keys are exactly the distinct years of the input; values sum to the
/// input length.
pub fn derive_year_buckets(records: &[Record]) -> BTreeMap<i32, usize> {
    let mut buckets = BTreeMap::new();
    for record in records {
        *buckets.entry(record.year()).or_insert(0) += 1;
    }
    buckets
}

/// Year buckets whose key set comes from `domain` while counts come from
/// `records`.
///
/// Years present in the domain but not in `records` appear with count 0,
/// so a truncated view still spans the full catalog's timeline.
pub fn year_buckets_with_domain(domain: &[Record], records: &[Record]) -> BTreeMap<i32, usize> {
    let mut buckets: BTreeMap<i32, usize> = domain.iter().map(|r| (r.year(), 0)).collect();
    for record in records {
        *buckets.entry(record.year()).or_insert(0) += 1;
    }
    buckets
}
