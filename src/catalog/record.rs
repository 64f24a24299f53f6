use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// One catalog entry, one issue of the series.
///
/// The four contributor-role fields are kept verbatim as the
/// comma-separated lists found in the resource; splitting and
/// deduplication happen in the query layer.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct Record {
    pub number: u32,
    pub title: String,
    pub synopsis: String,
    pub release_date: NaiveDate,
    pub cover_image_url: String,
    pub detail_page_url: String,
    pub subject: String,
    pub script: String,
    pub art: String,
    pub cover: String,
}

impl Record {
    /// The four contributor-role fields, in a fixed order.
    pub fn contributor_fields(&self) -> [&str; 4] {
        [&self.subject, &self.script, &self.art, &self.cover]
    }

    /// Trimmed names split out of all four role fields.
    ///
    /// Duplicates are preserved; deduplication belongs to the facet.
    pub fn contributors(&self) -> impl Iterator<Item = &str> + '_ {
        self.contributor_fields()
            .into_iter()
            .flat_map(|field| field.split(','))
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }

    pub fn year(&self) -> i32 {
        self.release_date.year()
    }
}
