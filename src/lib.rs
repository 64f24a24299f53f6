//! Data core for a comic-series catalog page.
//!
//! Loads a tab-separated catalog resource into an immutable sequence of
//! records and derives the views a renderer needs: ordering by issue
//! number, top-N truncation, an author suggestion facet, per-year counts
//! and substring search over contributor names. Rendering is someone
//! else's job; nothing in here touches a presentation context.

pub mod catalog;
pub mod query;

// Re-export commonly used types for convenience
pub use catalog::{load_catalog, Catalog, LoadError, Problem as LoadCatalogProblem, Record};
pub use query::{
    build_search_index, derive_author_facet, derive_year_buckets, sorted_by_number, top_n,
    year_buckets_with_domain, CatalogView, SearchIndex,
};
