use super::{
    build_search_index, derive_author_facet, sorted_by_number, top_n, year_buckets_with_domain,
    SearchIndex,
};
use crate::catalog::{Catalog, Record};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Session-scoped derivations over a loaded catalog.
///
/// Built once after load. Records are sorted by issue number and
/// optionally truncated; the author facet and the search index cover the
/// truncated set (suggestions match what is on screen), while the year
/// buckets keep the full catalog's year range so truncated-away years
/// show up with count 0. Rebuilding the view is the only way to change
/// the limit.
#[derive(Clone, Serialize, Debug)]
pub struct CatalogView {
    records: Vec<Record>,
    author_facet: BTreeSet<String>,
    year_buckets: BTreeMap<i32, usize>,
    search_index: SearchIndex,
}

impl CatalogView {
    pub fn build(catalog: &Catalog, limit: Option<usize>) -> CatalogView {
        let sorted = sorted_by_number(catalog.records());
        let shown = match limit {
            Some(n) => top_n(&sorted, n),
            None => &sorted[..],
        };
        CatalogView {
            author_facet: derive_author_facet(shown),
            year_buckets: year_buckets_with_domain(catalog.records(), shown),
            search_index: build_search_index(shown),
            records: shown.to_vec(),
        }
    }

    /// Records to display, sorted by number, at most `limit` of them.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Contributor names for the search suggestion list.
    pub fn author_facet(&self) -> &BTreeSet<String> {
        &self.author_facet
    }

    /// Record count per release year, zero-count years included.
    pub fn year_buckets(&self) -> &BTreeMap<i32, usize> {
        &self.year_buckets
    }

    pub fn search_index(&self) -> &SearchIndex {
        &self.search_index
    }

    /// Issue numbers matching `query`, recomputed per keystroke.
    pub fn filter(&self, query: &str) -> BTreeSet<u32> {
        self.search_index.filter(query)
    }
}
