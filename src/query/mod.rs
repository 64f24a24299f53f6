mod facets;
mod order;
mod search;
mod view;

pub use facets::{derive_author_facet, derive_year_buckets, year_buckets_with_domain};
pub use order::{sorted_by_number, top_n};
pub use search::{build_search_index, SearchIndex};
pub use view::CatalogView;
